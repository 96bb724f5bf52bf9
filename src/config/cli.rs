use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "course-registrar")]
#[command(about = "Course registration program with JSON file persistence")]
pub struct CliConfig {
    /// Path to the enrollment JSON file
    #[arg(short, long, default_value = "Enrollments.json")]
    pub data_file: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_file", &self.data_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_file() {
        let config = CliConfig::parse_from(["course-registrar"]);
        assert_eq!(config.data_file, "Enrollments.json");
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }
}
