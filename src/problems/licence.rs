//! UK driving-licence number formatter.
//!
//! Encodes a driver's personal details into the 16-character licence
//! number:
//!
//! - 1-5: first five characters of the surname, padded with `9`s
//! - 6: decade digit of the year of birth
//! - 7-8: month of birth, plus 50 for female drivers (51-62)
//! - 9-10: day of birth
//! - 11: year digit of the year of birth
//! - 12-13: initials of forename and middle name, `9` if no middle name
//! - 14: always `9`
//! - 15-16: check digits, always `AA`

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LicenceError {
    #[error("record must have 5 fields [forename, middle name, surname, date of birth, sex], got {0}")]
    MalformedRecord(usize),

    #[error("record is missing the {0}")]
    MissingName(&'static str),

    #[error("cannot parse date of birth '{0}', expected day-month-year like 01-Jan-2000")]
    InvalidDate(String),

    #[error("'{0}' is not an English month name")]
    InvalidMonth(String),

    #[error("day {0} is out of range")]
    InvalidDay(u32),

    #[error("sex marker '{0}' must be M or F")]
    InvalidSex(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOfBirth {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl DateOfBirth {
    /// Parses `day-month-year` with the month written out in English,
    /// either in full or as its first three letters.
    pub fn parse(raw: &str) -> Result<Self, LicenceError> {
        let parts: Vec<&str> = raw.split('-').collect();
        if parts.len() != 3 {
            return Err(LicenceError::InvalidDate(raw.to_string()));
        }

        let day: u32 = parts[0]
            .parse()
            .map_err(|_| LicenceError::InvalidDate(raw.to_string()))?;
        let month = month_number(parts[1])
            .ok_or_else(|| LicenceError::InvalidMonth(parts[1].to_string()))?;
        let year: u32 = parts[2]
            .parse()
            .map_err(|_| LicenceError::InvalidDate(raw.to_string()))?;

        if !(1..=31).contains(&day) {
            return Err(LicenceError::InvalidDay(day));
        }
        if !(1000..=9999).contains(&year) {
            return Err(LicenceError::InvalidDate(raw.to_string()));
        }

        Ok(DateOfBirth { day, month, year })
    }
}

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|&month| lower == month[..3] || lower == month)
        .map(|index| index as u32 + 1)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub forename: String,
    pub middle_name: Option<String>,
    pub surname: String,
    pub date_of_birth: DateOfBirth,
    pub sex: Sex,
}

impl Driver {
    /// Builds a driver from the 5-element record format
    /// `[forename, middle name, surname, date of birth, sex]`.
    /// An empty middle-name field means the driver has none.
    pub fn from_record(record: &[&str]) -> Result<Self, LicenceError> {
        if record.len() != 5 {
            return Err(LicenceError::MalformedRecord(record.len()));
        }

        let forename = record[0].trim();
        if forename.is_empty() {
            return Err(LicenceError::MissingName("forename"));
        }
        let surname = record[2].trim();
        if surname.is_empty() {
            return Err(LicenceError::MissingName("surname"));
        }

        let middle_name = match record[1].trim() {
            "" => None,
            middle => Some(middle.to_string()),
        };

        let date_of_birth = DateOfBirth::parse(record[3].trim())?;

        let sex = match record[4].trim() {
            "M" | "m" => Sex::Male,
            "F" | "f" => Sex::Female,
            other => return Err(LicenceError::InvalidSex(other.to_string())),
        };

        Ok(Driver {
            forename: forename.to_string(),
            middle_name,
            surname: surname.to_string(),
            date_of_birth,
            sex,
        })
    }

    /// Assembles the 16-character licence number.
    pub fn licence_number(&self) -> String {
        let dob = self.date_of_birth;

        let month_code = match self.sex {
            Sex::Male => dob.month,
            Sex::Female => dob.month + 50,
        };

        let surname: String = self.surname.chars().take(5).collect();

        let mut initials = String::new();
        initials.extend(self.forename.chars().take(1));
        match &self.middle_name {
            Some(middle) => initials.extend(middle.chars().take(1)),
            None => initials.push('9'),
        }

        format!(
            "{surname:9<5}{decade}{month_code:02}{day:02}{year_digit}{initials}9AA",
            decade = (dob.year / 10) % 10,
            day = dob.day,
            year_digit = dob.year % 10,
        )
        .to_uppercase()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_record() {
        let driver = Driver::from_record(&["John", "James", "Smith", "01-Jan-2000", "M"]).unwrap();
        assert_eq!(driver.licence_number(), "SMITH001010JJ9AA");
    }

    #[test]
    fn test_female_month_offset() {
        let driver = Driver::from_record(&["Jane", "", "Doe", "15-Sep-1987", "F"]).unwrap();
        assert_eq!(driver.licence_number(), "DOE99859157J99AA");
    }

    #[test]
    fn test_full_month_name_parses_like_short_one() {
        let short = Driver::from_record(&["Jane", "", "Doe", "15-Sep-1987", "F"]).unwrap();
        let full = Driver::from_record(&["Jane", "", "Doe", "15-September-1987", "F"]).unwrap();
        assert_eq!(short.licence_number(), full.licence_number());
    }

    #[test]
    fn test_short_surname_padded_with_nines() {
        let driver = Driver::from_record(&["Amy", "", "Ng", "09-Feb-1994", "F"]).unwrap();
        let number = driver.licence_number();
        assert!(number.starts_with("NG999"));
        assert_eq!(number.len(), 16);
    }

    #[test]
    fn test_long_surname_truncated_to_five() {
        let driver =
            Driver::from_record(&["Anna", "Beth", "Featherstone", "30-Nov-1975", "F"]).unwrap();
        assert!(driver.licence_number().starts_with("FEATH"));
    }

    #[test]
    fn test_missing_middle_name_pads_initials() {
        let driver = Driver::from_record(&["John", "", "Smith", "01-Jan-2000", "M"]).unwrap();
        assert_eq!(driver.licence_number(), "SMITH001010J99AA");
    }

    #[test]
    fn test_result_is_uppercase() {
        let driver = Driver::from_record(&["john", "james", "smith", "01-jan-2000", "m"]).unwrap();
        assert_eq!(driver.licence_number(), "SMITH001010JJ9AA");
    }

    #[test]
    fn test_malformed_record_length() {
        assert_eq!(
            Driver::from_record(&["John", "Smith"]),
            Err(LicenceError::MalformedRecord(2))
        );
    }

    #[test]
    fn test_missing_names() {
        assert_eq!(
            Driver::from_record(&["", "James", "Smith", "01-Jan-2000", "M"]),
            Err(LicenceError::MissingName("forename"))
        );
        assert_eq!(
            Driver::from_record(&["John", "James", "", "01-Jan-2000", "M"]),
            Err(LicenceError::MissingName("surname"))
        );
    }

    #[test]
    fn test_invalid_dates() {
        assert!(matches!(
            Driver::from_record(&["John", "", "Smith", "01-Jan", "M"]),
            Err(LicenceError::InvalidDate(_))
        ));
        assert!(matches!(
            Driver::from_record(&["John", "", "Smith", "01-Smarch-2000", "M"]),
            Err(LicenceError::InvalidMonth(_))
        ));
        assert_eq!(
            Driver::from_record(&["John", "", "Smith", "32-Jan-2000", "M"]),
            Err(LicenceError::InvalidDay(32))
        );
    }

    #[test]
    fn test_invalid_sex_marker() {
        assert_eq!(
            Driver::from_record(&["John", "", "Smith", "01-Jan-2000", "X"]),
            Err(LicenceError::InvalidSex("X".to_string()))
        );
    }

    #[test]
    fn test_month_number_table() {
        assert_eq!(month_number("Jan"), Some(1));
        assert_eq!(month_number("DECEMBER"), Some(12));
        assert_eq!(month_number("sep"), Some(9));
        assert_eq!(month_number("Sept"), None);
        assert_eq!(month_number(""), None);
    }

    #[test]
    fn test_driver_deserializes_from_json() {
        let raw = r#"{
            "forename": "John",
            "middle_name": "James",
            "surname": "Smith",
            "date_of_birth": { "day": 1, "month": 1, "year": 2000 },
            "sex": "Male"
        }"#;
        let driver: Driver = serde_json::from_str(raw).unwrap();
        assert_eq!(driver.licence_number(), "SMITH001010JJ9AA");
    }
}
