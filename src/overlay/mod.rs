pub mod assign;
pub mod markers;

pub use assign::assign_regions_on_create;
pub use markers::markers;
