//! Data-transfer model of a business-process diagram document.
//!
//! A [`core::Process`] owns its shapes and links; shapes and links reference
//! each other only by numeric id. Everything here is the durable wire model
//! plus structural validation over it; rendering, layout and editing
//! interaction live in downstream crates.

pub mod core;
pub mod error;
pub mod fixtures;
pub mod types;

pub use crate::core::{
    Artifact, ArtifactReference, ArtifactUpdate, ArtifactUpdateType, FlowSet, PredefinedType,
    Process, ProcessFlow, ProcessGraph, ProcessLink, ProcessShape, ProcessShapeType, ProcessType,
    PropertyType, PropertyValue, PropertyValueFormat, PropertyValueInfo, TaskFlags, UserReference,
    UserStory, VersionInfo,
};
pub use crate::error::ModelError;
pub use crate::types::{ItemId, ItemIndicatorFlags, ProjectId};
