// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// Response body of the index endpoint (`GET {base}?limit=N`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonList {
    pub results: Vec<PokemonEntry>,
}

/// A name plus a pointer to the detail resource of one Pokémon.
///
/// Entries only live for the duration of a single catalog fetch; the detail
/// record fetched through `url` is what the rest of the app works with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PokemonEntry {
    pub name: String,
    pub url: String,
}
