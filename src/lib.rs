pub mod db;
pub mod flush;
pub mod geom;
pub mod id;
pub mod model;
pub mod overlay;

pub use id::IdGenerator;
pub use model::{
    Atlas, Figure, Marker, Region, RegionCategory, RegionLink, Settlement, SettlementKind,
    WorldMap,
};
pub use overlay::{assign_regions_on_create, markers};
