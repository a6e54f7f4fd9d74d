//! Application Layer
//!
//! One use case per listing page.

pub mod messages;
pub mod products;
pub mod sessions;
pub mod workouts;

pub use messages::ListMessagesUseCase;
pub use products::{ListProductsUseCase, ProductListing};
pub use sessions::ListUpcomingSessionsUseCase;
pub use workouts::ListWorkoutsUseCase;
