pub mod geo;
pub mod time;

pub use geo::*;
pub use time::*;
