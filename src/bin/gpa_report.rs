use clap::Parser;
use course_registrar::utils::logger;
use course_registrar::utils::validation::{validate_path, Validate};
use course_registrar::{shell, GradedStudent, JsonFileStore, Result, Roster};

const MENU: &str = "\
---- Student GPAs ------------------------------
  Select from the following menu:
    1. Show current student data.
    2. Enter new student data.
    3. Save data to a file.
    4. Exit the program.
--------------------------------------------------";

#[derive(Debug, Clone, Parser)]
#[command(name = "gpa_report")]
#[command(about = "Student GPA tracker with letter grade reporting")]
struct Args {
    /// Path to the student GPA JSON file
    #[arg(short, long, default_value = "MyLabData.json")]
    data_file: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Validate for Args {
    fn validate(&self) -> Result<()> {
        validate_path("data_file", &self.data_file)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);
    tracing::info!("Starting gpa_report CLI");

    if let Err(e) = args.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let store = JsonFileStore::new(&args.data_file);

    let mut roster: Roster<GradedStudent> = match store.load() {
        Ok(roster) => {
            tracing::info!("📁 Loaded {} records from {}", roster.len(), args.data_file);
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
            "1" => show_grades(&roster),
            "2" => enter_student(&mut roster)?,
            "3" => save_roster(&store, &roster),
            "4" => break,
            _ => println!("Please, choose only 1, 2, 3, or 4"),
        }
    }

    println!("Program Ended");
    Ok(())
}

fn show_grades(roster: &Roster<GradedStudent>) {
    println!();
    shell::output_separator();
    for student in roster {
        println!("{}", student.grade_summary());
    }
    shell::output_separator();
}

fn enter_student(roster: &mut Roster<GradedStudent>) -> anyhow::Result<()> {
    let first_name = shell::prompt("Enter the student's first name: ")?;
    let last_name = shell::prompt("Enter the student's last name: ")?;
    let gpa_text = shell::prompt("Enter the student's GPA: ")?;

    match GradedStudent::from_input(&first_name, &last_name, &gpa_text) {
        Ok(student) => {
            println!();
            println!("Added {} with a {:.2} GPA.", student, student.gpa());
            roster.add(student);
        }
        Err(e) => shell::output_error(&e),
    }
    Ok(())
}

fn save_roster(store: &JsonFileStore, roster: &Roster<GradedStudent>) {
    match store.save(roster) {
        Ok(()) => println!("✅ Saved {} records to {}", roster.len(), store.path().display()),
        Err(e) => shell::output_error(&e),
    }
}
