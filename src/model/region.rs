use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RegionCategory
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum RegionCategory {
    Arctic,
    Coastal,
    Desert,
    Forest,
    Grassland,
    Hills,
    Mountain,
    Swamp,
    Underground,
    Urban,
    Maritime,
}

string_enum!(RegionCategory {
    Arctic => "arctic",
    Coastal => "coastal",
    Desert => "desert",
    Forest => "forest",
    Grassland => "grassland",
    Hills => "hills",
    Mountain => "mountain",
    Swamp => "swamp",
    Underground => "underground",
    Urban => "urban",
    Maritime => "maritime",
});

impl RegionCategory {
    #[cfg(test)]
    pub(crate) const ALL: [RegionCategory; 11] = [
        RegionCategory::Arctic,
        RegionCategory::Coastal,
        RegionCategory::Desert,
        RegionCategory::Forest,
        RegionCategory::Grassland,
        RegionCategory::Hills,
        RegionCategory::Mountain,
        RegionCategory::Swamp,
        RegionCategory::Underground,
        RegionCategory::Urban,
        RegionCategory::Maritime,
    ];
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A named polygonal area drawn over a map's pixel space.
///
/// The polygon set is kept as raw JSON exactly as the drawing editor sent
/// it: a list of polygons, each a list of `[x, y]` pixel pairs. Keeping the
/// raw value means arbitrary payloads round-trip byte-for-byte (polygon and
/// vertex order preserved) and malformed fragments stay representable —
/// validation happens at membership-test time, where bad polygons simply
/// never match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    pub id: u64,
    pub name: String,
    pub category: RegionCategory,
    /// Suggested display color (hex).
    #[serde(default = "default_color")]
    pub color: String,
    /// Owning map. A region without a map is never an auto-assignment
    /// candidate.
    pub map_id: Option<u64>,
    #[serde(default = "default_polygons")]
    pub polygons: serde_json::Value,
}

pub(crate) fn default_color() -> String {
    "#88cc66".to_string()
}

pub(crate) fn default_polygons() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}
