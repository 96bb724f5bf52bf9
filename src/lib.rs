pub mod config;
pub mod domain;
pub mod shell;
pub mod store;
pub mod utils;

pub use config::CliConfig;
pub use domain::model::{GradedStudent, LetterGrade, Person, Student};
pub use domain::roster::Roster;
pub use store::json_file::JsonFileStore;
pub use utils::error::{RegistrarError, Result};
