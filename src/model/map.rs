use serde::{Deserialize, Serialize};

/// A raster world map. The image bytes live in an external blob store;
/// only an opaque reference and the cached pixel dimensions are recorded
/// here. All region polygons and settlement positions on this map are
/// expressed in pixels of this image, origin top-left, y downward.
///
/// Dimensions are derived once when the image is stored and cached via
/// `Atlas::set_map_dimensions`; they are not re-derived if the image
/// reference later changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorldMap {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Creation time, unix seconds.
    pub created_at: i64,
}
