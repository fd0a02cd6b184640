//! Actor domain entities.

pub mod model;

pub use model::{Actor, ActorWithMovies, NewActor, UpdateActor};
