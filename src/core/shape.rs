use crate::core::enums::ProcessShapeType;
use crate::core::property::PropertyValueInfo;
use crate::types::{ItemId, ProjectId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Base predefined item-type tag.
///
/// The server defines the full set; the model carries the raw tag so values
/// it does not know about still round-trip.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PredefinedType(pub i32);

impl PredefinedType {
    pub const NONE: Self = Self(0);
    pub const PROCESS: Self = Self(4114);
    pub const PROCESS_SHAPE: Self = Self(8228);
    pub const TEXTUAL_REQUIREMENT: Self = Self(4101);
}

/// Comment/trace indicators a task shape carries for its badge row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFlags {
    #[serde(default)]
    pub has_comments: bool,
    #[serde(default)]
    pub has_traces: bool,
}

/// A node in the process graph.
///
/// The shape variants (start, end, user/system task, decisions) are one
/// record discriminated by [`ProcessShapeType`]; only task shapes carry
/// [`TaskFlags`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessShape {
    pub id: ItemId,
    pub name: String,
    pub project_id: ProjectId,
    pub type_prefix: String,
    pub parent_id: ItemId,
    pub base_item_type_predefined: PredefinedType,
    pub shape_type: ProcessShapeType,
    #[serde(default)]
    pub property_values: BTreeMap<String, PropertyValueInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<TaskFlags>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_artifact: Option<ArtifactReference>,
}

impl ProcessShape {
    pub fn new(id: ItemId, name: impl Into<String>, shape_type: ProcessShapeType) -> Self {
        Self {
            id,
            name: name.into(),
            project_id: ProjectId::default(),
            type_prefix: String::new(),
            parent_id: ItemId::default(),
            base_item_type_predefined: PredefinedType::PROCESS_SHAPE,
            shape_type,
            property_values: BTreeMap::new(),
            // Task shapes always serialize their flag pair, defaulted to false
            flags: shape_type.is_task().then(TaskFlags::default),
            associated_artifact: None,
        }
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValueInfo> {
        self.property_values.get(name)
    }

    pub fn set_property(&mut self, property: PropertyValueInfo) {
        self.property_values
            .insert(property.property_name.clone(), property);
    }
}

/// Reference to an external artifact embedded in a shape.
/// Owned by the embedding shape, never shared between shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactReference {
    pub id: ItemId,
    pub project_id: ProjectId,
    pub name: String,
    pub type_prefix: String,
    pub project_name: String,
    pub base_item_type_predefined: PredefinedType,
    #[serde(default)]
    pub version: Option<i32>,
    #[serde(default)]
    pub link: Option<String>,
}
