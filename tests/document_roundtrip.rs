use anyhow::Result;
use process_domain_modeling::fixtures;
use process_domain_modeling::{
    ItemId, Process, ProcessShapeType, ProcessType, TaskFlags, VersionInfo,
};

#[test]
fn fixture_document_survives_a_json_round_trip() -> Result<()> {
    let mut process = fixtures::default_process(1);
    process.requested_version_info = Some(VersionInfo {
        artifact_id: Some(ItemId(1)),
        version_id: Some(3),
        is_head_or_saved_draft_version: true,
        ..VersionInfo::default()
    });

    let json = serde_json::to_string(&process)?;
    let back: Process = serde_json::from_str(&json)?;
    assert_eq!(back, process);
    Ok(())
}

#[test]
fn shape_discriminators_serialize_as_integers() -> Result<()> {
    let process = fixtures::default_process(1);
    let value = serde_json::to_value(&process)?;

    let shape_types: Vec<i64> = value["shapes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["shapeType"].as_i64().unwrap())
        .collect();
    // Start, UserTask, SystemTask, End
    assert_eq!(shape_types, vec![1, 2, 4, 3]);
    Ok(())
}

#[test]
fn task_flags_default_false_and_are_serialized() -> Result<()> {
    let process = fixtures::default_process(1);
    let value = serde_json::to_value(&process)?;

    let user_task = &value["shapes"][1];
    assert_eq!(user_task["flags"]["hasComments"], serde_json::json!(false));
    assert_eq!(user_task["flags"]["hasTraces"], serde_json::json!(false));

    // Start/end shapes carry no flag pair at all
    assert!(value["shapes"][0].get("flags").is_none());
    Ok(())
}

#[test]
fn empty_document_deserializes_with_defaults() -> Result<()> {
    let process: Process = serde_json::from_str(r#"{ "id": 0 }"#)?;
    assert_eq!(process, Process::default());
    assert_eq!(process.process_type(), ProcessType::None);
    Ok(())
}

#[test]
fn every_fixture_link_resolves_within_the_document() {
    let process = fixtures::default_process(1);
    for link in process.all_links() {
        assert!(process.shape(link.source_id).is_some());
        assert!(process.shape(link.destination_id).is_some());
    }
}

#[test]
fn fixture_factories_cover_all_interactive_variants() {
    let cases = [
        (fixtures::start_shape(1), ProcessShapeType::Start, None),
        (fixtures::end_shape(2), ProcessShapeType::End, None),
        (
            fixtures::user_task_shape(3),
            ProcessShapeType::UserTask,
            Some(TaskFlags::default()),
        ),
        (
            fixtures::system_task_shape(4),
            ProcessShapeType::SystemTask,
            Some(TaskFlags::default()),
        ),
        (
            fixtures::user_decision_shape(5),
            ProcessShapeType::UserDecision,
            None,
        ),
        (
            fixtures::system_decision_shape(6),
            ProcessShapeType::SystemDecision,
            None,
        ),
    ];
    for (shape, expected_type, expected_flags) in cases {
        assert_eq!(shape.shape_type, expected_type);
        assert_eq!(shape.flags, expected_flags);
    }
}
