use crate::core::enums::ProcessType;
use crate::core::link::ProcessLink;
use crate::core::property::{property_names, PropertyValueInfo};
use crate::core::shape::{PredefinedType, ProcessShape};
use crate::types::{ItemId, ProjectId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A business-process diagram document.
///
/// The process owns its shapes and links; shapes and links reference each
/// other only by id. Shape and link order is the server's persisted order
/// and is preserved on round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub type_prefix: String,
    #[serde(default)]
    pub project_id: ProjectId,
    #[serde(default)]
    pub item_type_id: i32,
    #[serde(default)]
    pub base_item_type_predefined: PredefinedType,
    #[serde(default)]
    pub shapes: Vec<ProcessShape>,
    #[serde(default)]
    pub links: Vec<ProcessLink>,
    /// Links from decision shapes to the destination of each branch,
    /// kept apart from the plain flow links.
    #[serde(default)]
    pub decision_branch_destination_links: Vec<ProcessLink>,
    #[serde(default)]
    pub property_values: BTreeMap<String, PropertyValueInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_version_info: Option<VersionInfo>,
}

impl Process {
    pub fn new(id: ItemId, name: impl Into<String>, process_type: ProcessType) -> Self {
        let mut process = Self {
            id,
            name: name.into(),
            ..Self::default()
        };
        process.property_values.insert(
            property_names::CLIENT_TYPE.to_owned(),
            PropertyValueInfo::new(
                property_names::CLIENT_TYPE,
                PredefinedType::NONE,
                0,
                serde_json::json!(i32::from(process_type)),
            ),
        );
        process
    }

    /// The process's actor topology, read from its `clientType` property.
    /// Missing or malformed values fall back to [`ProcessType::None`].
    pub fn process_type(&self) -> ProcessType {
        self.property_values
            .get(property_names::CLIENT_TYPE)
            .and_then(|p| p.value.as_i64())
            .and_then(|raw| i32::try_from(raw).ok())
            .and_then(|raw| ProcessType::try_from(raw).ok())
            .unwrap_or(ProcessType::None)
    }

    pub fn shape(&self, id: ItemId) -> Option<&ProcessShape> {
        self.shapes.iter().find(|s| s.id == id)
    }

    pub fn shape_mut(&mut self, id: ItemId) -> Option<&mut ProcessShape> {
        self.shapes.iter_mut().find(|s| s.id == id)
    }

    /// All links of the document, flow links first, then the
    /// decision-branch-destination links.
    pub fn all_links(&self) -> impl Iterator<Item = &ProcessLink> {
        self.links
            .iter()
            .chain(self.decision_branch_destination_links.iter())
    }

    /// Outgoing links of a shape in branch order.
    pub fn outgoing_links(&self, source: ItemId) -> Vec<&ProcessLink> {
        let mut out: Vec<&ProcessLink> =
            self.links.iter().filter(|l| l.source_id == source).collect();
        out.sort_by(|a, b| a.orderindex.total_cmp(&b.orderindex));
        out
    }
}

/// Versioning state of the document as reported by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    #[serde(default)]
    pub artifact_id: Option<ItemId>,
    #[serde(default)]
    pub version_id: Option<i32>,
    #[serde(default)]
    pub revision_id: Option<i32>,
    #[serde(default)]
    pub utc_locked_date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub lock_owner_display_name: Option<String>,
    #[serde(default)]
    pub is_head_or_saved_draft_version: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_process_is_empty() {
        let process = Process::default();
        assert_eq!(process.id, ItemId(0));
        assert!(process.shapes.is_empty());
        assert!(process.links.is_empty());
        assert!(process.decision_branch_destination_links.is_empty());
        assert!(process.property_values.is_empty());
        assert!(process.requested_version_info.is_none());
        assert_eq!(process.process_type(), ProcessType::None);
    }

    #[test]
    fn process_type_reads_client_type_property() {
        let process = Process::new(ItemId(1), "Checkout", ProcessType::UserToSystemProcess);
        assert_eq!(process.process_type(), ProcessType::UserToSystemProcess);
    }

    #[test]
    fn process_type_falls_back_on_malformed_client_type() {
        for malformed in [
            serde_json::json!("business"),
            serde_json::json!(-1),
            serde_json::json!(99),
            // Doesn't fit in i32; must not be truncated into a valid value
            serde_json::json!(4_294_967_298i64),
        ] {
            let mut process = Process::default();
            process.property_values.insert(
                property_names::CLIENT_TYPE.to_owned(),
                PropertyValueInfo::new(
                    property_names::CLIENT_TYPE,
                    PredefinedType::NONE,
                    0,
                    malformed,
                ),
            );
            assert_eq!(process.process_type(), ProcessType::None);
        }
    }

    #[test]
    fn outgoing_links_sorted_by_orderindex() {
        let mut process = Process::default();
        process.links = vec![
            ProcessLink::new(ItemId(1), ItemId(3), 2.0),
            ProcessLink::new(ItemId(1), ItemId(2), 1.0),
            ProcessLink::new(ItemId(1), ItemId(4), 1.5),
        ];
        let out = process.outgoing_links(ItemId(1));
        let destinations: Vec<ItemId> = out.iter().map(|l| l.destination_id).collect();
        assert_eq!(destinations, vec![ItemId(2), ItemId(4), ItemId(3)]);
    }
}
