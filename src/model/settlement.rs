use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SettlementKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum SettlementKind {
    Village,
    City,
    Metropolis,
    Custom(String),
}

string_enum_open!(SettlementKind, "settlement kind", {
    Village => "village",
    City => "city",
    Metropolis => "metropolis",
});

// ---------------------------------------------------------------------------
// Settlement
// ---------------------------------------------------------------------------

/// A point-located record on a map.
///
/// Position, when present, is in the owning map's pixel space. No bound is
/// enforced against the map's width/height — an out-of-range position is
/// valid input that simply falls in no region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settlement {
    pub id: u64,
    pub name: String,
    pub kind: SettlementKind,
    pub map_id: Option<u64>,
    pub x: Option<f64>,
    pub y: Option<f64>,

    /// Region associations, set-semantics (no duplicates). Inline during
    /// normal operation, normalized at flush time — extracted via
    /// `Atlas::collect_region_links()`.
    #[serde(skip)]
    pub region_ids: Vec<u64>,
}

impl Settlement {
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some((x, y)),
            _ => None,
        }
    }
}

/// One normalized settlement↔region association row, produced at flush time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionLink {
    pub settlement_id: u64,
    pub region_id: u64,
}
