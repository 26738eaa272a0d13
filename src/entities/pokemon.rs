// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// Fully detailed record for one Pokémon, decoded straight off the wire.
///
/// The field set mirrors what the detail endpoint serves, snake_case on the
/// wire and in Rust, so the derive needs no renaming except for the
/// `official-artwork` sprite key. Fields beyond `id`, `name` and `sprites`
/// are passthrough data the app displays but never interprets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pokemon {
    pub abilities: Vec<Ability>,
    pub base_experience: i64,
    pub forms: Vec<NamedResource>,
    pub game_indices: Vec<GameIndex>,
    pub height: i64,
    pub id: i64,
    pub is_default: bool,
    pub location_area_encounters: String,
    pub moves: Vec<Move>,
    pub name: String,
    pub order: i64,
    pub species: NamedResource,
    pub sprites: Sprites,
    pub stats: Vec<Stat>,
    pub types: Vec<TypeSlot>,
    pub weight: i64,
}

impl Pokemon {
    /// URL of the official artwork sprite, when the API provides one.
    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites
            .other
            .as_ref()
            .map(|other| other.official_artwork.front_default.as_str())
    }
}

/// A `{name, url}` pointer to another API resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ability {
    pub ability: NamedResource,
    pub is_hidden: bool,
    pub slot: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameIndex {
    pub game_index: i64,
    pub version: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Move {
    #[serde(rename = "move")]
    pub move_: NamedResource,
    pub version_group_details: Vec<VersionGroupDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionGroupDetail {
    pub level_learned_at: i64,
    pub move_learn_method: NamedResource,
    pub version_group: NamedResource,
}

/// Sprite container. The API serves many more keys at this level; only the
/// `other` group is decoded, and it is absent for some resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sprites {
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OtherSprites {
    pub dream_world: DreamWorld,
    pub home: Home,
    #[serde(rename = "official-artwork")]
    pub official_artwork: OfficialArtwork,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DreamWorld {
    pub front_default: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Home {
    pub front_default: String,
    pub front_shiny: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OfficialArtwork {
    pub front_default: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stat {
    pub base_stat: i64,
    pub effort: i64,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeSlot {
    pub slot: i64,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}
