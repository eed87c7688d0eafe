//! Repository implementations for the local catalog store.

pub mod pokemon;

pub use pokemon::PokemonRepository;
