pub mod load;
pub mod migrate;

pub use load::load_atlas;
pub use migrate::migrate;
