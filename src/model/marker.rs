use serde::Serialize;

use super::settlement::SettlementKind;

/// Read-only map-rendering projection of a settlement. Derived on demand by
/// `overlay::markers`, never stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Marker {
    pub id: u64,
    pub name: String,
    pub kind: SettlementKind,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub map_id: Option<u64>,
    /// Number of figures whose origin is this settlement.
    pub figure_count: u64,
    /// Already-persisted region associations — never recomputed here.
    pub region_ids: Vec<u64>,
}
