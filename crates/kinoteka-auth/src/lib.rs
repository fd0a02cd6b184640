//! # kinoteka-auth
//!
//! Authentication and authorization core for Kinoteka.
//!
//! ## Modules
//!
//! - `jwt` — bearer token creation and validation
//! - `password` — salted SHA-256 credential hashing
//! - `service` — sign-up, sign-in, and admin flag lookup flows
//!
//! Token verification is purely local cryptographic computation; only
//! the sign-up/sign-in flows and the admin lookup touch the store.

pub mod jwt;
pub mod password;
pub mod service;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use service::AuthService;
