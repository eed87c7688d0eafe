//! Pokemon domain entities.

pub mod detail;
pub mod summary;

pub use detail::PokemonDetail;
pub use summary::{PokemonSummary, resource_id};
