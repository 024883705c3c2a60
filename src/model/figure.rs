use serde::{Deserialize, Serialize};

/// A notable inhabitant originating from a settlement. The marker
/// aggregator reports a per-settlement count of these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Figure {
    pub id: u64,
    pub name: String,
    /// Origin settlement.
    pub origin: u64,
}
