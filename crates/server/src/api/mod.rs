mod bus;
mod routing;
mod stat;
mod stop;

pub use bus::*;
pub use routing::*;
pub use stat::*;
pub use stop::*;
