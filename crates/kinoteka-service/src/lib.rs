//! # kinoteka-service
//!
//! Business logic service layer for Kinoteka. Each service orchestrates
//! repositories to implement application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod actor;
pub mod context;
pub mod movie;

pub use actor::ActorService;
pub use context::RequestContext;
pub use movie::MovieService;
