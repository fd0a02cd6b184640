//! Actor catalog services.

pub mod service;

pub use service::ActorService;
