//! # pokedex-core
//!
//! Core crate for the Pokedex catalog client. Contains the configuration
//! schema and loader, the unified error system, and the shared result alias.
//!
//! This crate has **no** internal dependencies on other Pokedex crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
