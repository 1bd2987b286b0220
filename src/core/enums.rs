use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classifies a process's actor topology.
///
/// Wire values are stable integers and must survive a serialization round
/// trip unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ProcessType {
    #[default]
    None = 0,
    BusinessProcess = 1,
    UserToSystemProcess = 2,
    SystemToSystemProcess = 3,
}

impl From<ProcessType> for i32 {
    fn from(value: ProcessType) -> i32 {
        value as i32
    }
}

impl TryFrom<i32> for ProcessType {
    type Error = ModelError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ProcessType::None),
            1 => Ok(ProcessType::BusinessProcess),
            2 => Ok(ProcessType::UserToSystemProcess),
            3 => Ok(ProcessType::SystemToSystemProcess),
            _ => Err(ModelError::UnknownEnumValue {
                enum_name: "ProcessType",
                value,
            }),
        }
    }
}

/// Discriminates the shape variant for the diagram's rendering and editing
/// logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ProcessShapeType {
    #[default]
    None = 0,
    Start = 1,
    UserTask = 2,
    End = 3,
    SystemTask = 4,
    PreconditionSystemTask = 5,
    UserDecision = 6,
    SystemDecision = 7,
}

impl ProcessShapeType {
    /// Task shapes carry the comment/trace flag pair; other shapes do not.
    pub fn is_task(self) -> bool {
        matches!(
            self,
            ProcessShapeType::UserTask
                | ProcessShapeType::SystemTask
                | ProcessShapeType::PreconditionSystemTask
        )
    }

    pub fn is_decision(self) -> bool {
        matches!(
            self,
            ProcessShapeType::UserDecision | ProcessShapeType::SystemDecision
        )
    }
}

impl fmt::Display for ProcessShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProcessShapeType::None => "none",
            ProcessShapeType::Start => "start",
            ProcessShapeType::UserTask => "user-task",
            ProcessShapeType::End => "end",
            ProcessShapeType::SystemTask => "system-task",
            ProcessShapeType::PreconditionSystemTask => "precondition-system-task",
            ProcessShapeType::UserDecision => "user-decision",
            ProcessShapeType::SystemDecision => "system-decision",
        };
        write!(f, "{name}")
    }
}

impl From<ProcessShapeType> for i32 {
    fn from(value: ProcessShapeType) -> i32 {
        value as i32
    }
}

impl TryFrom<i32> for ProcessShapeType {
    type Error = ModelError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ProcessShapeType::None),
            1 => Ok(ProcessShapeType::Start),
            2 => Ok(ProcessShapeType::UserTask),
            3 => Ok(ProcessShapeType::End),
            4 => Ok(ProcessShapeType::SystemTask),
            5 => Ok(ProcessShapeType::PreconditionSystemTask),
            6 => Ok(ProcessShapeType::UserDecision),
            7 => Ok(ProcessShapeType::SystemDecision),
            _ => Err(ModelError::UnknownEnumValue {
                enum_name: "ProcessShapeType",
                value,
            }),
        }
    }
}

/// Declares how a property's value must be interpreted and edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum PropertyType {
    PlainText = 0,
    RichText = 1,
    Number = 2,
    Date = 3,
    Choice = 4,
    User = 5,
}

impl From<PropertyType> for i32 {
    fn from(value: PropertyType) -> i32 {
        value as i32
    }
}

impl TryFrom<i32> for PropertyType {
    type Error = ModelError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PropertyType::PlainText),
            1 => Ok(PropertyType::RichText),
            2 => Ok(PropertyType::Number),
            3 => Ok(PropertyType::Date),
            4 => Ok(PropertyType::Choice),
            5 => Ok(PropertyType::User),
            _ => Err(ModelError::UnknownEnumValue {
                enum_name: "PropertyType",
                value,
            }),
        }
    }
}

/// Declares the wire/display encoding of a property value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum PropertyValueFormat {
    #[default]
    Text = 0,
    Html = 1,
    Date = 2,
    DateTimeUtc = 3,
}

impl From<PropertyValueFormat> for i32 {
    fn from(value: PropertyValueFormat) -> i32 {
        value as i32
    }
}

impl TryFrom<i32> for PropertyValueFormat {
    type Error = ModelError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(PropertyValueFormat::Text),
            1 => Ok(PropertyValueFormat::Html),
            2 => Ok(PropertyValueFormat::Date),
            3 => Ok(PropertyValueFormat::DateTimeUtc),
            _ => Err(ModelError::UnknownEnumValue {
                enum_name: "PropertyValueFormat",
                value,
            }),
        }
    }
}

/// Discriminates the kind of partial update applied to an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum ArtifactUpdateType {
    SubArtifact = 0,
    LinkLabel = 1,
}

impl From<ArtifactUpdateType> for i32 {
    fn from(value: ArtifactUpdateType) -> i32 {
        value as i32
    }
}

impl TryFrom<i32> for ArtifactUpdateType {
    type Error = ModelError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ArtifactUpdateType::SubArtifact),
            1 => Ok(ArtifactUpdateType::LinkLabel),
            _ => Err(ModelError::UnknownEnumValue {
                enum_name: "ArtifactUpdateType",
                value,
            }),
        }
    }
}
