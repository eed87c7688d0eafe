//! Mapping from the detail payload to the domain model.

use indexmap::IndexMap;

use pokedex_entity::PokemonDetail;
use pokedex_entity::api::PokemonDetailResponse;

/// Sprite URL used when the payload carries no image at all.
pub fn fallback_image_url(id: &str) -> String {
    format!("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png")
}

/// Build a [`PokemonDetail`] from a detail payload fetched for `id`.
///
/// Image precedence: official artwork, then the default front sprite, then
/// the fallback sprite URL for `id`.
pub fn map_detail(response: PokemonDetailResponse, id: &str) -> PokemonDetail {
    let image_url = response
        .sprites
        .official_artwork_front()
        .map(str::to_owned)
        .or_else(|| response.sprites.front_default.clone())
        .unwrap_or_else(|| fallback_image_url(id));

    // Duplicate stat names keep their first slot but take the last value.
    let mut stats = IndexMap::with_capacity(response.stats.len());
    for slot in response.stats {
        stats.insert(slot.stat.name, slot.base_stat);
    }

    PokemonDetail {
        id: response.id,
        name: response.name,
        height: response.height,
        weight: response.weight,
        types: response.types.into_iter().map(|t| t.kind.name).collect(),
        stats,
        abilities: response
            .abilities
            .into_iter()
            .map(|a| a.ability.name)
            .collect(),
        image_url,
    }
}
