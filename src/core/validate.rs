use crate::core::process::Process;
use crate::error::ModelError;
use crate::types::ItemId;
use std::collections::HashSet;
use tracing::{debug, warn};

impl Process {
    /// Check the document's referential integrity: shape ids are unique
    /// within the process and every link endpoint resolves to a shape of
    /// this process. Returns the first violation found.
    pub fn validate(&self) -> Result<(), ModelError> {
        debug!(
            process = %self.id,
            shapes = self.shapes.len(),
            links = self.links.len(),
            "validating process document"
        );

        let mut ids: HashSet<ItemId> = HashSet::with_capacity(self.shapes.len());
        for shape in &self.shapes {
            if !ids.insert(shape.id) {
                warn!(process = %self.id, shape = %shape.id, "duplicate shape id");
                return Err(ModelError::DuplicateShapeId(shape.id));
            }
        }

        for link in self.all_links() {
            for endpoint in [link.source_id, link.destination_id] {
                if !ids.contains(&endpoint) {
                    warn!(process = %self.id, endpoint = %endpoint, "dangling link endpoint");
                    return Err(ModelError::DanglingLinkEndpoint { endpoint });
                }
            }
        }

        Ok(())
    }
}
