#[macro_use]
mod macros;

pub mod atlas;
pub mod figure;
pub mod map;
pub mod marker;
pub mod region;
pub mod settlement;

pub use atlas::Atlas;
pub use figure::Figure;
pub use map::WorldMap;
pub use marker::Marker;
pub use region::{Region, RegionCategory};
pub use settlement::{RegionLink, Settlement, SettlementKind};
