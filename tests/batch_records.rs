use std::{fs, path::PathBuf};

use notas::{
    NotasError, StudentRecord, StudentStatus, batch_calculate_grades, class_statistics_for,
    load_records,
};
use uuid::Uuid;

fn temp_file(contents: &str) -> (PathBuf, PathBuf) {
    let root = std::env::temp_dir().join(format!("notas-batch-{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create temp root");
    let file = root.join("grades.json");
    fs::write(&file, contents).expect("write records");
    (root, file)
}

#[test]
fn loads_and_evaluates_a_class() {
    let (root, file) = temp_file(
        r#"[
            {"student_id": "ana", "np1": 8.5, "np2": 7.0, "ava": 9.0, "pim": 8.0},
            {"student_id": "bruno", "np1": 3.0, "np2": 4.0, "ava": null},
            {"student_id": "carla", "np1": 6.0},
            {"student_id": "davi", "np1": 11.0, "np2": 5.0, "pim": 6.0}
        ]"#,
    );

    let records = load_records(&file).expect("load records");
    assert_eq!(records.len(), 4);
    assert_eq!(records[2], StudentRecord::builder().student_id("carla").np1(6.0).build());

    let results = batch_calculate_grades(&records);
    let ids: Vec<&str> = results.iter().map(|r| r.student_id.as_str()).collect();
    assert_eq!(ids, ["ana", "bruno", "carla", "davi"]);

    assert_eq!(results[0].final_grade, Some(16.25));
    assert_eq!(results[0].status, StudentStatus::Aprovado);
    assert_eq!(results[1].final_grade, Some(3.5));
    assert_eq!(results[1].status, StudentStatus::Reprovado);
    assert_eq!(results[2].final_grade, None);
    assert_eq!(results[2].status, StudentStatus::EmAndamento);
    assert_eq!(results[3].final_grade, Some(5.5));
    assert_eq!(results[3].status, StudentStatus::Recuperacao);

    // ana's 16.25 is outside the aggregator's range and carla has no grade.
    let stats = class_statistics_for(&results);
    assert_eq!(stats.total_students, 2);
    assert_eq!(stats.average, 4.5);
    assert_eq!(stats.highest, 5.5);
    assert_eq!(stats.lowest, 3.5);
    assert_eq!(stats.approved_count, 0);

    let _ = fs::remove_dir_all(root);
}

#[test]
fn results_serialize_with_status_labels() {
    let results = batch_calculate_grades(&[StudentRecord::builder()
        .student_id("eva")
        .np1(5.0)
        .np2(5.0)
        .build()]);
    let value = serde_json::to_value(&results).expect("serialize results");
    assert_eq!(value[0]["status"], "recuperacao");
    assert_eq!(value[0]["final_grade"], 5.0);
    assert!(value[0]["ava"].is_null());
}

#[test]
fn missing_file_is_a_read_error() {
    let path = std::env::temp_dir().join(format!("notas-missing-{}.json", Uuid::new_v4()));
    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, NotasError::ReadRecords { .. }));
    assert!(err.to_string().contains("notas-missing-"));
}

#[test]
fn malformed_json_is_a_decode_error() {
    let (root, file) = temp_file(r#"{"student_id": "not-an-array"}"#);
    let err = load_records(&file).unwrap_err();
    assert!(matches!(err, NotasError::DecodeRecords { .. }));
    let _ = fs::remove_dir_all(root);
}

#[test]
fn empty_class_has_no_data() {
    let stats = class_statistics_for(&batch_calculate_grades(&[]));
    assert!(!stats.has_data());
    assert_eq!(stats.highest, -1.0);
    assert_eq!(stats.lowest, 11.0);
}
