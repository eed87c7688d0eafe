//! # pokedex-client
//!
//! Stateless transport for the remote catalog: paged list requests and
//! single-entry detail requests, decoded into the wire types of
//! `pokedex-entity`.

pub mod http;

pub use http::PokeApiClient;
