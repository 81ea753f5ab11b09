pub mod surface;
pub mod target;
