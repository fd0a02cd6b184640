//! Movie domain entities.

pub mod model;
pub mod sort;

pub use model::{Movie, MovieWithActors, NewMovie, UpdateMovie};
pub use sort::MovieSort;
