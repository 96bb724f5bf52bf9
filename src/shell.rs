//! Presentation helpers for the console menu: prompting, line input, and
//! error display. All state lives in the caller; these are plain functions.

use crate::utils::error::RegistrarError;
use std::io::{self, Write};

/// Prints a prompt and reads one trimmed line from stdin.
pub fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn output_menu(menu: &str) {
    println!();
    println!("{}", menu);
    println!();
}

/// Shows a user-facing message plus the lower-level diagnostic. Errors stop
/// here; the menu loop continues and the user must re-invoke the action.
pub fn output_error(error: &RegistrarError) {
    tracing::error!("{}", error);
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("-- Technical Error Message --");
    eprintln!("{}", error);
}

pub fn output_separator() {
    println!("{}", "-".repeat(50));
}
