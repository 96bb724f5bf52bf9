use course_registrar::{GradedStudent, JsonFileStore, RegistrarError, Roster, Student};
use tempfile::TempDir;

fn sample_roster() -> Roster<Student> {
    let mut roster = Roster::new();
    roster.add(Student::new("jeff", "jones", "math101").unwrap());
    roster.add(Student::new("Ann", "Lee", "Bio200").unwrap());
    // duplicates are allowed
    roster.add(Student::new("jeff", "jones", "math101").unwrap());
    roster
}

#[test]
fn test_roundtrip_preserves_records_and_order() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("Enrollments.json"));

    let roster = sample_roster();
    store.save(&roster).unwrap();

    let loaded: Roster<Student> = store.load().unwrap();
    assert_eq!(loaded, roster);
}

#[test]
fn test_save_writes_raw_values_not_title_cased() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Enrollments.json");
    let store = JsonFileStore::new(&path);

    let mut roster = Roster::new();
    roster.add(Student::new("jeff", "jones", "math101").unwrap());
    store.save(&roster).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[0]["FirstName"], "jeff");
    assert_eq!(parsed[0]["LastName"], "jones");
    assert_eq!(parsed[0]["CourseName"], "math101");
}

#[test]
fn test_empty_roster_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("Enrollments.json"));

    store.save(&Roster::<Student>::new()).unwrap();

    let loaded: Roster<Student> = store.load().unwrap();
    assert!(loaded.is_empty());
}

#[test]
fn test_missing_file_is_file_access_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("nope.json"));

    let result: Result<Roster<Student>, _> = store.load();
    assert!(matches!(result.unwrap_err(), RegistrarError::FileAccess(_)));
}

#[test]
fn test_invalid_json_is_format_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Enrollments.json");
    std::fs::write(&path, "not json at all").unwrap();

    let store = JsonFileStore::new(&path);
    let result: Result<Roster<Student>, _> = store.load();
    assert!(matches!(result.unwrap_err(), RegistrarError::Format(_)));
}

#[test]
fn test_missing_key_is_format_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Enrollments.json");
    std::fs::write(
        &path,
        r#"[{"FirstName": "jeff", "LastName": "jones"}]"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    let result: Result<Roster<Student>, _> = store.load();
    assert!(matches!(result.unwrap_err(), RegistrarError::Format(_)));
}

#[test]
fn test_unknown_key_is_format_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Enrollments.json");
    std::fs::write(
        &path,
        r#"[{"FirstName": "jeff", "LastName": "jones", "CourseName": "math101", "Extra": 1}]"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    let result: Result<Roster<Student>, _> = store.load();
    assert!(matches!(result.unwrap_err(), RegistrarError::Format(_)));
}

#[test]
fn test_invalid_record_reports_index_and_field() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Enrollments.json");
    std::fs::write(
        &path,
        r#"[
            {"FirstName": "jeff", "LastName": "jones", "CourseName": "math101"},
            {"FirstName": "b4d", "LastName": "name", "CourseName": "bio200"}
        ]"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    let err = store.load::<Student>().unwrap_err();
    match err {
        RegistrarError::RecordValidation { index, source } => {
            assert_eq!(index, 1);
            assert!(matches!(
                *source,
                RegistrarError::Validation { ref field, .. } if field == "first name"
            ));
        }
        other => panic!("expected RecordValidation, got {:?}", other),
    }
}

#[test]
fn test_save_overwrites_previous_contents() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Enrollments.json");
    let store = JsonFileStore::new(&path);

    store.save(&sample_roster()).unwrap();

    let mut smaller = Roster::new();
    smaller.add(Student::new("ann", "lee", "bio200").unwrap());
    store.save(&smaller).unwrap();

    let loaded: Roster<Student> = store.load().unwrap();
    assert_eq!(loaded, smaller);
}

#[test]
fn test_gpa_variant_roundtrip() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("MyLabData.json"));

    let mut roster = Roster::new();
    roster.add(GradedStudent::new("jeff", "jones", 3.5).unwrap());
    roster.add(GradedStudent::new("ann", "lee", 0.5).unwrap());
    store.save(&roster).unwrap();

    let loaded: Roster<GradedStudent> = store.load().unwrap();
    assert_eq!(loaded, roster);
}

#[test]
fn test_gpa_variant_rejects_negative_gpa_in_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("MyLabData.json");
    std::fs::write(
        &path,
        r#"[{"FirstName": "jeff", "LastName": "jones", "GPA": -1.0}]"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    let err = store.load::<GradedStudent>().unwrap_err();
    assert!(matches!(
        err,
        RegistrarError::RecordValidation { index: 0, .. }
    ));
}

#[test]
fn test_gpa_variant_rejects_string_gpa_in_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("MyLabData.json");
    std::fs::write(
        &path,
        r#"[{"FirstName": "jeff", "LastName": "jones", "GPA": "3.5"}]"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    let err = store.load::<GradedStudent>().unwrap_err();
    assert!(matches!(err, RegistrarError::Format(_)));
}
