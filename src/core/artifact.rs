use crate::core::enums::ArtifactUpdateType;
use crate::core::property::PropertyValueInfo;
use crate::core::shape::PredefinedType;
use crate::types::{ItemId, ItemIndicatorFlags, ProjectId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An external content item associated with or generated from a shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub project_id: ProjectId,
    #[serde(default)]
    pub type_prefix: String,
    #[serde(default)]
    pub predefined_type: PredefinedType,
    #[serde(default)]
    pub system_properties: Vec<PropertyValueInfo>,
    #[serde(default)]
    pub custom_properties: Vec<PropertyValueInfo>,
    #[serde(default)]
    pub indicators: ItemIndicatorFlags,
}

/// A user story generated from a process task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStory {
    #[serde(flatten)]
    pub artifact: Artifact,
    /// The task shape this story was generated from.
    pub process_task_id: ItemId,
    #[serde(default)]
    pub is_new: bool,
}

/// A partial update to an artifact, applied server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactUpdate {
    #[serde(rename = "type")]
    pub update_type: ArtifactUpdateType,
    pub item_id: ItemId,
    #[serde(default)]
    pub value: Value,
}
