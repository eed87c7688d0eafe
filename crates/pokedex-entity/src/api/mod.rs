//! JSON payloads of the remote catalog API.
//!
//! Field names follow the server's snake_case schema, so the structs derive
//! `Deserialize` without renames except where the server uses hyphens.

pub mod detail;
pub mod list;

pub use detail::{
    AbilitySlot, NamedResource, OfficialArtwork, OtherSprites, PokemonDetailResponse, Sprites,
    StatSlot, TypeSlot,
};
pub use list::{PokemonListItem, PokemonListResponse};
