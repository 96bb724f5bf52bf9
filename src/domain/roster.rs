/// In-memory record collection: insertion order preserved, duplicates allowed.
///
/// Owned by the shell and passed by reference; rebuilt wholesale on load and
/// written wholesale on save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster<R> {
    records: Vec<R>,
}

impl<R> Roster<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn add(&mut self, record: R) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }
}

impl<R> From<Vec<R>> for Roster<R> {
    fn from(records: Vec<R>) -> Self {
        Self { records }
    }
}

impl<'a, R> IntoIterator for &'a Roster<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Student;

    #[test]
    fn test_roster_preserves_insertion_order_and_duplicates() {
        let mut roster = Roster::new();
        let jeff = Student::new("jeff", "jones", "math101").unwrap();
        roster.add(jeff.clone());
        roster.add(Student::new("ann", "lee", "bio200").unwrap());
        roster.add(jeff.clone());

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.records()[0], jeff);
        assert_eq!(roster.records()[2], jeff);
    }
}
