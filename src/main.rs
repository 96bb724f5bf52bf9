use clap::Parser;
use course_registrar::utils::{logger, validation::Validate};
use course_registrar::{shell, CliConfig, JsonFileStore, Roster, Student};

const MENU: &str = "\
---- Course Registration Program ----
  Select from the following menu:
    1. Register a Student for a Course.
    2. Show current data.
    3. Save data to a file.
    4. Exit the program.
-----------------------------------------";

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting course-registrar CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let store = JsonFileStore::new(&config.data_file);

    // Load failure leaves us with an empty roster, never a partial one.
    let mut roster: Roster<Student> = match store.load() {
        Ok(roster) => {
            tracing::info!("📁 Loaded {} records from {}", roster.len(), config.data_file);
            roster
        }
        Err(e) => {
            shell::output_error(&e);
            Roster::new()
        }
    };

    loop {
        shell::output_menu(MENU);
        let choice = shell::prompt("Enter your menu choice number: ")?;

        match choice.trim() {
            "1" => register_student(&mut roster)?,
            "2" => show_roster(&roster),
            "3" => save_roster(&store, &roster),
            "4" => break,
            _ => println!("Please only choose option 1, 2, 3, or 4"),
        }
    }

    println!("Program Ended");
    Ok(())
}

fn register_student(roster: &mut Roster<Student>) -> anyhow::Result<()> {
    let first_name = shell::prompt("Enter the student's first name: ")?;
    let last_name = shell::prompt("Enter the student's last name: ")?;
    let course_name = shell::prompt("Please enter the name of the course: ")?;

    match Student::new(&first_name, &last_name, &course_name) {
        Ok(student) => {
            println!();
            println!(
                "You have registered {} {} for {}.",
                student.first_name(),
                student.last_name(),
                student.course_name()
            );
            roster.add(student);
        }
        Err(e) => shell::output_error(&e),
    }
    Ok(())
}

fn show_roster(roster: &Roster<Student>) {
    shell::output_separator();
    for student in roster {
        println!(
            "Student {} {} is enrolled in {}",
            student.first_name(),
            student.last_name(),
            student.course_name()
        );
    }
    shell::output_separator();
}

fn save_roster(store: &JsonFileStore, roster: &Roster<Student>) {
    match store.save(roster) {
        Ok(()) => {
            println!("✅ Saved {} records to {}", roster.len(), store.path().display());
            show_roster(roster);
        }
        Err(e) => shell::output_error(&e),
    }
}
