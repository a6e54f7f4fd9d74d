//! Domain Layer

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entities::{Message, Person, Product, Workout, WorkoutSession};
pub use repository::CatalogRepository;
