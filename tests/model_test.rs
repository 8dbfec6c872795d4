use flowscope::model::{Classification, Flow, Task, TaskStatus};
use serde_json::json;

#[test]
fn test_task_wire_format() {
    let task: Task = serde_json::from_value(json!({
        "taskId": "T-001",
        "createTime": "2024-03-01 09:12:00",
        "startTime": 0,
        "endTime": null,
        "status": 3
    }))
    .expect("task should decode");

    assert_eq!(task.task_id, "T-001");
    assert_eq!(task.create_time.as_deref(), Some("2024-03-01 09:12:00"));
    assert_eq!(task.start_time, None);
    assert_eq!(task.end_time, None);
    assert_eq!(task.status, TaskStatus::AwaitingDetection);
    assert!(task.status.is_in_progress());
    assert!(!task.status.is_terminal());
}

#[test]
fn test_terminal_statuses() {
    assert!(TaskStatus::DetectionComplete.is_terminal());
    assert!(TaskStatus::Error.is_terminal());
    assert!(!TaskStatus::NotStarted.is_terminal());
    assert!(!TaskStatus::Unknown(7).is_terminal());
}

#[test]
fn test_unknown_status_is_kept() {
    let task: Task = serde_json::from_value(json!({ "taskId": "T-9", "status": 7 })).unwrap();
    assert_eq!(task.status, TaskStatus::Unknown(7));
    assert_eq!(serde_json::to_value(&task).unwrap()["status"], json!(7));
}

#[test]
fn test_flow_wire_format() {
    let flow: Flow = serde_json::from_value(json!({
        "flowId": "F1",
        "taskID": "T-001",
        "srcIP": "10.0.0.1",
        "dstIP": "10.0.0.2",
        "srcPort": 5000,
        "dstPort": 443,
        "whiteProb": 0.3,
        "blackProb": 0.9,
        "classification": 1
    }))
    .expect("flow should decode");

    assert!(flow.is_anomalous());
    assert_eq!(flow.dst_port, 443);
    assert_eq!(flow.issuer, "");
    // Probabilities are reported independently.
    assert!((flow.white_prob + flow.black_prob - 1.2).abs() < 1e-9);

    let normal: Flow = serde_json::from_value(json!({ "flowId": "F2", "taskID": "T-001", "classification": 0 })).unwrap();
    assert_eq!(normal.classification, Classification::Normal);
}

#[test]
fn test_undefined_codes_are_kept_raw() {
    let flows: Vec<Flow> = serde_json::from_value(json!([
        { "flowId": "F1", "taskID": "T-001", "classification": 2 },
        { "flowId": "F2", "taskID": "T-001", "classification": 300 },
        { "flowId": "F3", "taskID": "T-001", "classification": -1 }
    ]))
    .expect("undefined verdicts must not fail the whole page");

    assert_eq!(flows[0].classification, Classification::Unknown(2));
    assert_eq!(flows[1].classification, Classification::Unknown(300));
    assert_eq!(flows[2].classification, Classification::Unknown(-1));
    assert!(flows.iter().all(|f| !f.is_anomalous()));
    assert_eq!(serde_json::to_value(&flows[1]).unwrap()["classification"], json!(300));

    let task: Task = serde_json::from_value(json!({ "taskId": "T-9", "status": 70000 })).unwrap();
    assert_eq!(task.status, TaskStatus::Unknown(70000));
}
