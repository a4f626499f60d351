use colored::Colorize;

use dsa_playground::problems::{brackets, licence::Driver, reverser};
use dsa_playground::{CollectionError, LinkedList, Queue, Stack};

fn heading(title: &str) {
    println!("\n{}", title.cyan().bold());
}

fn demo_stack() -> Result<(), CollectionError> {
    heading("Bounded stack");

    let mut stack = Stack::bounded(3);
    stack.push(1)?;
    stack.push(2)?;
    stack.push(3)?;
    println!("pushed 1, 2, 3 into a capacity-3 stack (size {})", stack.len());

    match stack.push(4) {
        Ok(()) => println!("{}", "push(4) unexpectedly succeeded".red()),
        Err(err) => println!("push(4): {}", err.to_string().yellow()),
    }

    while let Some(top) = stack.pop() {
        println!("pop -> {}", top.to_string().green());
    }
    Ok(())
}

fn demo_queue() -> Result<(), CollectionError> {
    heading("Bounded queue");

    let mut queue = Queue::bounded(2);
    queue.enqueue("A")?;
    queue.enqueue("B")?;
    println!("enqueued A, B (size {})", queue.len());
    if let Some(front) = queue.dequeue() {
        println!("dequeue -> {} (size {})", front.green(), queue.len());
    }
    Ok(())
}

fn demo_linked_list() {
    heading("Linked list");

    let mut attacks = LinkedList::new();
    attacks.push_back(("slash", 10));
    attacks.push_back(("pierce", 25));
    attacks.push_front(("opening jab", 5));

    let total: u32 = attacks.iter().map(|(_, damage)| damage).sum();
    for (name, damage) in attacks.iter() {
        println!("{name} deals {damage}");
    }
    println!("total damage: {}", total.to_string().green());
}

fn demo_brackets() {
    heading("Balanced brackets");

    for input in ["([{}])", "([)]", "", "fn main() { let x = [1, 2]; }"] {
        let verdict = if brackets::is_balanced(input) {
            "balanced".green()
        } else {
            "not balanced".red()
        };
        println!("{input:?} is {verdict}");
    }
}

fn demo_reverser() {
    heading("String reverser");

    let input = "Magomed";
    println!("{input:?} reversed is {:?}", reverser::reverse(input));
}

fn demo_licence() {
    heading("Driving licence numbers");

    let raw = r#"["John", "James", "Smith", "01-Jan-2000", "M"]"#;
    let record: Vec<String> = serde_json::from_str(raw).expect("valid record literal");
    let fields: Vec<&str> = record.iter().map(String::as_str).collect();

    match Driver::from_record(&fields) {
        Ok(driver) => println!("{raw} -> {}", driver.licence_number().green()),
        Err(err) => println!("{raw} -> {}", err.to_string().red()),
    }

    // a record the formatter refuses
    match Driver::from_record(&["Jane", "", "Doe", "15-Smarch-1987", "F"]) {
        Ok(driver) => println!("{}", driver.licence_number()),
        Err(err) => println!("rejected record: {}", err.to_string().yellow()),
    }
}

fn main() -> Result<(), CollectionError> {
    demo_stack()?;
    demo_queue()?;
    demo_linked_list();
    demo_brackets();
    demo_reverser();
    demo_licence();
    Ok(())
}
