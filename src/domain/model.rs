use crate::domain::ports::Persist;
use crate::utils::error::Result;
use crate::utils::validation::{parse_gpa, validate_alpha_field, validate_gpa_range};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A person with validated name fields.
///
/// Names are stored with their original casing and title-cased on read, so a
/// round-trip through the file keeps whatever the user typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    first_name: String,
    last_name: String,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str) -> Result<Self> {
        validate_alpha_field("first name", first_name)?;
        validate_alpha_field("last name", last_name)?;
        Ok(Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        })
    }

    pub fn first_name(&self) -> String {
        title_case(&self.first_name)
    }

    pub fn last_name(&self) -> String {
        title_case(&self.last_name)
    }

    pub fn raw_first_name(&self) -> &str {
        &self.first_name
    }

    pub fn raw_last_name(&self) -> &str {
        &self.last_name
    }

    /// Replaces the first name. On failure the stored value is unchanged.
    pub fn set_first_name(&mut self, value: &str) -> Result<()> {
        validate_alpha_field("first name", value)?;
        self.first_name = value.to_string();
        Ok(())
    }

    pub fn set_last_name(&mut self, value: &str) -> Result<()> {
        validate_alpha_field("last name", value)?;
        self.last_name = value.to_string();
        Ok(())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first_name(), self.last_name())
    }
}

/// A student enrolled in a course. Course names are free text (alphanumeric
/// course codes like "Math101" are expected), title-cased on read only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Student {
    person: Person,
    course_name: String,
}

impl Student {
    pub fn new(first_name: &str, last_name: &str, course_name: &str) -> Result<Self> {
        Ok(Self {
            person: Person::new(first_name, last_name)?,
            course_name: course_name.to_string(),
        })
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn first_name(&self) -> String {
        self.person.first_name()
    }

    pub fn last_name(&self) -> String {
        self.person.last_name()
    }

    pub fn course_name(&self) -> String {
        title_case(&self.course_name)
    }

    pub fn raw_course_name(&self) -> &str {
        &self.course_name
    }

    pub fn set_course_name(&mut self, value: &str) {
        self.course_name = value.to_string();
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.person, self.course_name())
    }
}

/// A student with a grade point average instead of a course enrollment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradedStudent {
    person: Person,
    gpa: f64,
}

impl GradedStudent {
    pub fn new(first_name: &str, last_name: &str, gpa: f64) -> Result<Self> {
        validate_gpa_range("GPA", gpa)?;
        Ok(Self {
            person: Person::new(first_name, last_name)?,
            gpa,
        })
    }

    /// Builds a record from raw console input, parsing the GPA from text.
    pub fn from_input(first_name: &str, last_name: &str, gpa_text: &str) -> Result<Self> {
        let person = Person::new(first_name, last_name)?;
        let gpa = parse_gpa("GPA", gpa_text)?;
        Ok(Self { person, gpa })
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn first_name(&self) -> String {
        self.person.first_name()
    }

    pub fn last_name(&self) -> String {
        self.person.last_name()
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    pub fn letter_grade(&self) -> LetterGrade {
        LetterGrade::from_gpa(self.gpa)
    }

    /// One report line per student, e.g. " Jeff Jones earned a B with a 3.50 GPA".
    pub fn grade_summary(&self) -> String {
        match self.letter_grade() {
            LetterGrade::NotPassing => format!(
                " {}'s {:.2} GPA was not a passing grade",
                self.person, self.gpa
            ),
            grade => format!(
                " {} earned {} {} with a {:.2} GPA",
                self.person,
                grade.article(),
                grade,
                self.gpa
            ),
        }
    }
}

impl fmt::Display for GradedStudent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.person)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    NotPassing,
}

impl LetterGrade {
    pub fn from_gpa(gpa: f64) -> Self {
        if gpa >= 4.0 {
            LetterGrade::A
        } else if gpa >= 3.0 {
            LetterGrade::B
        } else if gpa >= 2.0 {
            LetterGrade::C
        } else if gpa >= 1.0 {
            LetterGrade::D
        } else {
            LetterGrade::NotPassing
        }
    }

    fn article(&self) -> &'static str {
        match self {
            LetterGrade::A => "an",
            _ => "a",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::NotPassing => "not passing",
        };
        f.write_str(letter)
    }
}

/// Title case: a letter is uppercased when it does not follow another letter,
/// lowercased otherwise. "math101" becomes "Math101", "McDonald" "Mcdonald".
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

/// Wire form of [`Student`]. Key names and casing are fixed by the file format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StudentEntry {
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "CourseName")]
    pub course_name: String,
}

impl Persist for Student {
    type Wire = StudentEntry;

    fn to_wire(&self) -> StudentEntry {
        StudentEntry {
            first_name: self.person.raw_first_name().to_string(),
            last_name: self.person.raw_last_name().to_string(),
            course_name: self.course_name.clone(),
        }
    }

    fn from_wire(wire: StudentEntry) -> Result<Self> {
        Student::new(&wire.first_name, &wire.last_name, &wire.course_name)
    }
}

/// Wire form of [`GradedStudent`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradedStudentEntry {
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "GPA")]
    pub gpa: f64,
}

impl Persist for GradedStudent {
    type Wire = GradedStudentEntry;

    fn to_wire(&self) -> GradedStudentEntry {
        GradedStudentEntry {
            first_name: self.person.raw_first_name().to_string(),
            last_name: self.person.raw_last_name().to_string(),
            gpa: self.gpa,
        }
    }

    fn from_wire(wire: GradedStudentEntry) -> Result<Self> {
        GradedStudent::new(&wire.first_name, &wire.last_name, wire.gpa)
    }
}
