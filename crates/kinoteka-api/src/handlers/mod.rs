//! Route handlers organized by domain.

pub mod actors;
pub mod auth;
pub mod health;
pub mod movies;
