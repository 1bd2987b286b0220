mod flags;
mod ids;

pub use flags::ItemIndicatorFlags;
pub use ids::{ItemId, ProjectId};
