//! Interactive terminal shell over a [`RecordStore`].
//!
//! All input validation happens here: numbers are reprompted until they
//! parse, text fields must be non-empty. The store itself only ever sees
//! already-validated values.

use rollbook::{Error, Fields, Record, RecordStore};
use std::io::{self, BufRead, Write};

/// Default record file, created in the working directory on first append.
const STORE_FILE: &str = "students.dat";

fn main() {
    let _ = env_logger::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let store = RecordStore::new(STORE_FILE);

    loop {
        print_menu();
        let choice = match read_trimmed(&mut input, "Enter your choice: ") {
            Some(line) => line,
            None => break,
        };

        match choice.trim().parse::<u32>() {
            Ok(1) => {
                add_record(&mut input, &store);
            }
            Ok(2) => view_all(&store),
            Ok(3) => {
                search(&mut input, &store);
            }
            Ok(4) => {
                update(&mut input, &store);
            }
            Ok(5) => {
                println!("\nGoodbye!");
                break;
            }
            _ => println!("\nInvalid choice. Please select an option between 1 and 5."),
        }
    }
}

fn print_menu() {
    println!();
    println!("===================================");
    println!("      STUDENT RECORD MANAGER");
    println!("===================================");
    println!("1. Add New Student Record");
    println!("2. View All Student Records");
    println!("3. Search Student by Roll Number");
    println!("4. Update Student Record");
    println!("5. Exit");
}

fn add_record(input: &mut impl BufRead, store: &RecordStore) -> Option<()> {
    println!("\n--- Add New Student ---");
    let key = read_parsed(input, "Enter Roll Number: ", "Invalid input. Please enter a number.")?;
    let name = read_field(input, "Enter Name: ")?;
    let major = read_field(input, "Enter Major: ")?;
    let gpa = read_parsed(input, "Enter GPA: ", "Invalid input. Please enter a valid GPA.")?;

    match store.append(&Record::new(key, &name, &major, gpa)) {
        Ok(()) => println!("Student record added successfully!"),
        Err(err) => report(&err),
    }
    Some(())
}

fn view_all(store: &RecordStore) {
    let scan = match store.scan() {
        Ok(scan) => scan,
        Err(err) => return report(&err),
    };

    println!("\n--- All Student Records ---");
    println!("{:<15} {:<30} {:<20} {}", "Roll No", "Name", "Major", "GPA");
    println!("------------------------------------------------------------------");

    let mut count = 0;
    for record in scan {
        let record = match record {
            Ok(record) => record,
            Err(err) => return report(&err),
        };
        println!(
            "{:<15} {:<30} {:<20} {:.2}",
            record.key(),
            record.name(),
            record.major(),
            record.gpa()
        );
        count += 1;
    }

    if count == 0 {
        println!("No records yet.");
    }
}

fn search(input: &mut impl BufRead, store: &RecordStore) -> Option<()> {
    println!("\n--- Search Student ---");
    let key = read_parsed(
        input,
        "Enter Roll Number to search: ",
        "Invalid input. Please enter a number.",
    )?;

    match store.find(key) {
        Ok(Some(record)) => {
            println!("\n--- Student Found ---");
            println!("Roll No: {}", record.key());
            println!("Name:    {}", record.name());
            println!("Major:   {}", record.major());
            println!("GPA:     {:.2}", record.gpa());
        }
        Ok(None) => println!("\nStudent with Roll Number {} not found.", key),
        Err(err) => report(&err),
    }
    Some(())
}

fn update(input: &mut impl BufRead, store: &RecordStore) -> Option<()> {
    println!("\n--- Update Student Record ---");
    let key = read_parsed(
        input,
        "Enter Roll Number of student to update: ",
        "Invalid input. Please enter a number.",
    )?;

    let current = match store.find(key) {
        Ok(Some(record)) => record,
        Ok(None) => {
            println!("\nStudent with Roll Number {} not found.", key);
            return Some(());
        }
        Err(err) => {
            report(&err);
            return Some(());
        }
    };

    println!("\nRecord found for Roll No {}. Enter NEW details:", key);
    let name = read_field(input, &format!("Enter NEW Name ({}): ", current.name()))?;
    let major = read_field(input, &format!("Enter NEW Major ({}): ", current.major()))?;
    let gpa = read_parsed(
        input,
        &format!("Enter NEW GPA ({:.2}): ", current.gpa()),
        "Invalid GPA input.",
    )?;

    match store.update(key, &Fields::new(&name, &major, gpa)) {
        Ok(Some(_)) => println!("\nStudent record updated successfully!"),
        Ok(None) => println!("\nStudent with Roll Number {} not found.", key),
        Err(err) => report(&err),
    }
    Some(())
}

/// Prompt and read one line with the newline stripped. `None` means stdin
/// is closed.
fn read_trimmed(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut line = String::new();
    if input.read_line(&mut line).ok()? == 0 {
        return None;
    }
    Some(line.trim_end_matches(|c| c == '\r' || c == '\n').to_string())
}

/// Reprompt until the line parses as `T`.
fn read_parsed<T: std::str::FromStr>(
    input: &mut impl BufRead,
    prompt: &str,
    complaint: &str,
) -> Option<T> {
    loop {
        let line = read_trimmed(input, prompt)?;
        match line.trim().parse() {
            Ok(value) => return Some(value),
            Err(_) => println!("{}", complaint),
        }
    }
}

/// Reprompt until the line is non-empty.
fn read_field(input: &mut impl BufRead, prompt: &str) -> Option<String> {
    loop {
        let line = read_trimmed(input, prompt)?;
        if !line.trim().is_empty() {
            return Some(line);
        }
        println!("A value is required.");
    }
}

fn report(err: &Error) {
    eprintln!("error: {}", err);
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        eprintln!("  caused by: {}", cause);
        source = cause.source();
    }
}
