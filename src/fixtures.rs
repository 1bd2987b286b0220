//! Test-data factories for diagram tests.
//!
//! Each factory returns a fully constructed in-memory shape with the
//! property values the diagram layer expects (client type, label, position,
//! size). They perform no validation and have no failure modes; they exist
//! to seed unit tests for shape and document handling.

use crate::core::{
    PredefinedType, Process, ProcessLink, ProcessShape, ProcessShapeType, ProcessType,
    PropertyValueInfo,
};
use crate::core::property_names;
use crate::types::ItemId;
use serde_json::json;

const FIXTURE_WIDTH: f64 = 120.0;
const FIXTURE_HEIGHT: f64 = 75.0;

fn shape(id: i64, name: &str, shape_type: ProcessShapeType) -> ProcessShape {
    let mut shape = ProcessShape::new(ItemId(id), name, shape_type);
    for (property, value) in [
        (property_names::CLIENT_TYPE, json!(i32::from(shape_type))),
        (property_names::LABEL, json!(name)),
        (property_names::X, json!(0.0)),
        (property_names::Y, json!(0.0)),
        (property_names::WIDTH, json!(FIXTURE_WIDTH)),
        (property_names::HEIGHT, json!(FIXTURE_HEIGHT)),
    ] {
        shape.set_property(PropertyValueInfo::new(
            property,
            PredefinedType::NONE,
            0,
            value,
        ));
    }
    shape
}

pub fn start_shape(id: i64) -> ProcessShape {
    shape(id, "Start", ProcessShapeType::Start)
}

pub fn end_shape(id: i64) -> ProcessShape {
    shape(id, "End", ProcessShapeType::End)
}

pub fn user_task_shape(id: i64) -> ProcessShape {
    let mut task = shape(id, "User Task", ProcessShapeType::UserTask);
    task.set_property(PropertyValueInfo::new(
        property_names::PERSONA,
        PredefinedType::NONE,
        0,
        json!("User"),
    ));
    task
}

pub fn system_task_shape(id: i64) -> ProcessShape {
    let mut task = shape(id, "System Task", ProcessShapeType::SystemTask);
    task.set_property(PropertyValueInfo::new(
        property_names::PERSONA,
        PredefinedType::NONE,
        0,
        json!("System"),
    ));
    task
}

pub fn user_decision_shape(id: i64) -> ProcessShape {
    shape(id, "User Decision", ProcessShapeType::UserDecision)
}

pub fn system_decision_shape(id: i64) -> ProcessShape {
    shape(id, "System Decision", ProcessShapeType::SystemDecision)
}

/// A minimal valid document: start -> user task -> system task -> end.
pub fn default_process(id: i64) -> Process {
    let mut process = Process::new(ItemId(id), "Default Process", ProcessType::BusinessProcess);
    process.shapes = vec![
        start_shape(10),
        user_task_shape(20),
        system_task_shape(25),
        end_shape(30),
    ];
    process.links = vec![
        ProcessLink::new(ItemId(10), ItemId(20), 0.0),
        ProcessLink::new(ItemId(20), ItemId(25), 0.0),
        ProcessLink::new(ItemId(25), ItemId(30), 0.0),
    ];
    process
}
