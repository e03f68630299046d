mod bus;
mod itinerary;
mod stop;

pub use bus::*;
pub use itinerary::*;
pub use stop::*;
