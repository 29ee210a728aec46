pub mod aircraft;
pub mod airlines;
pub mod flights;

pub use aircraft::Entity as AircraftEntity;
pub use airlines::Entity as Airlines;
pub use flights::Entity as Flights;
