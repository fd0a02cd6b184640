//! Repository implementations for all Kinoteka entities.

pub mod actor;
pub mod movie;
pub mod user;

pub use actor::ActorRepository;
pub use movie::MovieRepository;
pub use user::UserRepository;
