//! # pokedex-database
//!
//! SQLite connection management, schema migrations, and the local catalog
//! store backing the paginated list.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::PokemonRepository;
