//! # pokedex-entity
//!
//! Domain entity models for the Pokedex catalog. `pokemon` holds the values
//! the application works with: the persisted list row and the transient
//! detail view. `api` holds the JSON payloads exactly as the remote catalog
//! sends them.
//!
//! Database rows additionally derive `sqlx::FromRow`.

pub mod api;
pub mod pokemon;

pub use pokemon::{PokemonDetail, PokemonSummary};
