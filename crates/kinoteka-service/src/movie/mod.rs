//! Movie catalog services.

pub mod service;

pub use service::MovieService;
