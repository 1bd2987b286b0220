mod artifact;
mod enums;
mod flow;
mod graph;
mod link;
mod process;
mod property;
mod shape;
mod validate;

pub use artifact::{Artifact, ArtifactUpdate, UserStory};
pub use enums::{ArtifactUpdateType, ProcessShapeType, ProcessType, PropertyType, PropertyValueFormat};
pub use flow::{FlowSet, ProcessFlow};
pub use graph::ProcessGraph;
pub use link::ProcessLink;
pub use process::{Process, VersionInfo};
pub use property::{property_names, PropertyValue, PropertyValueInfo, UserReference};
pub use shape::{ArtifactReference, PredefinedType, ProcessShape, TaskFlags};
