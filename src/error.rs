use crate::types::ItemId;
use thiserror::Error;

/// Errors raised by structural validation and value decoding.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("duplicate shape id {0} in process")]
    DuplicateShapeId(ItemId),

    #[error("link endpoint {endpoint} does not resolve to a shape in this process")]
    DanglingLinkEndpoint { endpoint: ItemId },

    #[error("flow {flow} boundary shape {shape} is not in the flow's shape mapping")]
    FlowBoundaryOutsideFlow { flow: usize, shape: ItemId },

    #[error("flow {flow} has parent {parent}, but a parent must precede its children")]
    FlowParentOrder { flow: usize, parent: usize },

    #[error("value {value} is not a known {enum_name} discriminant")]
    UnknownEnumValue { enum_name: &'static str, value: i32 },

    #[error("property '{name}' holds {found}, expected {expected}")]
    PropertyValueType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("cannot parse '{value}' as a {format} property value")]
    PropertyValueFormat { value: String, format: &'static str },
}

pub type Result<T> = std::result::Result<T, ModelError>;
