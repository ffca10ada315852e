use classroom_core::{Classroom, RosterService};
use serde_json::json;

#[test]
fn classroom_snapshot_serializes_in_insertion_order() {
    let mut service = RosterService::in_memory();
    service.create_classroom("Math").unwrap();
    service.enroll_student("S2", "Math").unwrap();
    service.enroll_student("S1", "Math").unwrap();
    service.schedule_assignment("Math", "HW1").unwrap();

    let snapshot = service.get_classroom("Math").unwrap();
    let value = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(
        value,
        json!({
            "name": "Math",
            "students": ["S2", "S1"],
            "assignments": ["HW1"],
        })
    );
}

#[test]
fn classroom_snapshot_deserializes_from_json() {
    let raw = r#"{"name":"Physics","students":["S2"],"assignments":["Lab1","Lab1"]}"#;
    let classroom: Classroom = serde_json::from_str(raw).unwrap();

    assert_eq!(classroom.name(), "Physics");
    assert!(classroom.has_student("S2"));
    assert_eq!(classroom.assignments(), ["Lab1", "Lab1"]);
}

#[test]
fn snapshot_is_detached_from_live_roster() {
    let mut service = RosterService::in_memory();
    service.create_classroom("Math").unwrap();
    let snapshot = service.get_classroom("Math").unwrap();

    service.enroll_student("S1", "Math").unwrap();

    assert!(snapshot.students().is_empty());
    assert_eq!(service.list_students("Math").unwrap(), vec!["S1"]);
}
