// SPDX-License-Identifier: GPL-3.0-only

use log::error;

use crate::api::{Catalog, FetchError};
use crate::entities::pokemon::Pokemon;
use crate::utils::{capitalize_string, pick_random, scale_numbers};

/// Identifies the status of the catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStatus {
    Loading,
    Loaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    List,
    Grid,
}

/// Holds everything the presentation layer knows: the fetched catalog, the
/// navigation path and the current view mode. All mutation goes through
/// [`update`]; render functions only ever borrow the state.
#[derive(Debug)]
pub struct AppState {
    pub status: PageStatus,
    pub view_mode: ViewMode,
    /// The displayed catalog, replaced wholesale on every fetch.
    pub pokemon: Vec<Pokemon>,
    /// Names of index entries dropped during the last fetch.
    pub failed: Vec<String>,
    /// Navigation stack of catalog ids; the last entry is the open detail view.
    pub path: Vec<i64>,
    /// Columns used by the grid view.
    pub per_row: usize,
}

impl AppState {
    pub fn new() -> AppState {
        AppState {
            status: PageStatus::Loaded,
            view_mode: ViewMode::List,
            pokemon: Vec::new(),
            failed: Vec::new(),
            path: Vec::new(),
            per_row: 3,
        }
    }

    /// The Pokémon whose detail view is on top of the navigation stack.
    pub fn current(&self) -> Option<&Pokemon> {
        let id = self.path.last()?;
        self.pokemon.iter().find(|pokemon| pokemon.id == *id)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub enum Message {
    FetchStarted,
    CatalogLoaded(Catalog),
    FetchFailed(FetchError),
    /// Open the detail view of the given catalog id.
    Select(i64),
    /// Push a detail view for a uniformly random entry.
    SetRandom,
    /// Replace the whole navigation path with one random entry.
    ReplaceCurrent,
    GoBack,
    ToggleView,
}

/// Applies one state transition. This is the only place `AppState` mutates.
pub fn update(state: &mut AppState, message: Message) {
    match message {
        Message::FetchStarted => {
            state.status = PageStatus::Loading;
        }
        Message::CatalogLoaded(catalog) => {
            state.pokemon = catalog.pokemon;
            state.failed = catalog.failed;
            state.status = PageStatus::Loaded;
        }
        Message::FetchFailed(err) => {
            // The collection stays whatever it was; no dialog, just a log line.
            error!("catalog fetch failed: {err}");
            state.status = PageStatus::Loaded;
        }
        Message::Select(id) => {
            if state.pokemon.iter().any(|pokemon| pokemon.id == id) {
                state.path.push(id);
            }
        }
        Message::SetRandom => {
            if let Some(pokemon) = pick_random(&state.pokemon) {
                state.path.push(pokemon.id);
            }
        }
        Message::ReplaceCurrent => {
            if let Some(pokemon) = pick_random(&state.pokemon) {
                state.path = vec![pokemon.id];
            }
        }
        Message::GoBack => {
            state.path.clear();
        }
        Message::ToggleView => {
            state.view_mode = match state.view_mode {
                ViewMode::List => ViewMode::Grid,
                ViewMode::Grid => ViewMode::List,
            };
        }
    }
}

/// Renders the catalog in whatever view mode the state holds.
pub fn render(state: &AppState) -> String {
    match state.view_mode {
        ViewMode::List => render_list(state),
        ViewMode::Grid => render_grid(state),
    }
}

/// One line per Pokémon, id-ordered as fetched.
pub fn render_list(state: &AppState) -> String {
    if state.status == PageStatus::Loading {
        return String::from("Loading...");
    }

    let mut lines = Vec::with_capacity(state.pokemon.len());
    for pokemon in &state.pokemon {
        lines.push(format!(
            "#{:03} {}",
            pokemon.id,
            capitalize_string(&pokemon.name)
        ));
    }

    lines.join("\n")
}

/// The same catalog laid out in `state.per_row` columns.
pub fn render_grid(state: &AppState) -> String {
    if state.status == PageStatus::Loading {
        return String::from("Loading...");
    }

    let mut lines = Vec::new();
    for row in state.pokemon.chunks(state.per_row.max(1)) {
        let cells: Vec<String> = row
            .iter()
            .map(|pokemon| {
                format!("#{:03} {:<12}", pokemon.id, capitalize_string(&pokemon.name))
            })
            .collect();
        lines.push(cells.join(" "));
    }

    lines.join("\n")
}

/// Detail card for the Pokémon on top of the navigation stack.
pub fn render_detail(state: &AppState) -> String {
    let Some(pokemon) = state.current() else {
        return String::from("Nothing selected.");
    };

    let types: Vec<String> = pokemon
        .types
        .iter()
        .map(|slot| capitalize_string(&slot.type_.name))
        .collect();
    let abilities: Vec<String> = pokemon
        .abilities
        .iter()
        .map(|ability| {
            if ability.is_hidden {
                format!("{} (hidden)", capitalize_string(&ability.ability.name))
            } else {
                capitalize_string(&ability.ability.name)
            }
        })
        .collect();

    let mut lines = vec![
        format!("#{:03} {}", pokemon.id, capitalize_string(&pokemon.name)),
        format!("Types: {}", types.join(", ")),
        format!("Abilities: {}", abilities.join(", ")),
        format!(
            "Height: {} m  Weight: {} kg",
            scale_numbers(pokemon.height),
            scale_numbers(pokemon.weight)
        ),
    ];

    for stat in &pokemon.stats {
        lines.push(format!(
            "  {:<12} {}",
            capitalize_string(&stat.stat.name),
            stat.base_stat
        ));
    }

    if let Some(artwork) = pokemon.artwork_url() {
        lines.push(format!("Artwork: {artwork}"));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::pokemon::tests::sample;

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        update(&mut state, Message::FetchStarted);
        update(
            &mut state,
            Message::CatalogLoaded(Catalog {
                pokemon: vec![
                    sample(1, "bulbasaur"),
                    sample(2, "ivysaur"),
                    sample(3, "venusaur"),
                ],
                failed: Vec::new(),
            }),
        );
        state
    }

    #[test]
    fn load_replaces_collection_wholesale() {
        let mut state = loaded_state();
        assert_eq!(state.status, PageStatus::Loaded);
        assert_eq!(state.pokemon.len(), 3);

        update(
            &mut state,
            Message::CatalogLoaded(Catalog {
                pokemon: vec![sample(151, "mew")],
                failed: vec!["missingno".to_string()],
            }),
        );

        assert_eq!(state.pokemon.len(), 1);
        assert_eq!(state.pokemon[0].id, 151);
        assert_eq!(state.failed.len(), 1);
    }

    #[test]
    fn failed_fetch_leaves_collection_unchanged() {
        let mut state = loaded_state();
        update(&mut state, Message::FetchStarted);
        update(
            &mut state,
            Message::FetchFailed(FetchError::IndexUnreachable("down".into())),
        );

        assert_eq!(state.status, PageStatus::Loaded);
        assert_eq!(state.pokemon.len(), 3);
    }

    #[test]
    fn failed_first_fetch_keeps_collection_empty() {
        let mut state = AppState::new();
        update(&mut state, Message::FetchStarted);
        update(
            &mut state,
            Message::FetchFailed(FetchError::InvalidIndex("bad body".into())),
        );

        assert!(state.pokemon.is_empty());
        assert!(render_list(&state).is_empty());
    }

    #[test]
    fn select_only_pushes_known_ids() {
        let mut state = loaded_state();

        update(&mut state, Message::Select(2));
        assert_eq!(state.path, vec![2]);

        update(&mut state, Message::Select(999));
        assert_eq!(state.path, vec![2]);
        assert_eq!(state.current().unwrap().name, "ivysaur");
    }

    #[test]
    fn set_random_pushes_and_replace_resets_the_path() {
        let mut state = loaded_state();

        update(&mut state, Message::SetRandom);
        update(&mut state, Message::SetRandom);
        assert_eq!(state.path.len(), 2);

        update(&mut state, Message::ReplaceCurrent);
        assert_eq!(state.path.len(), 1);

        update(&mut state, Message::GoBack);
        assert!(state.path.is_empty());
        assert!(state.current().is_none());
    }

    #[test]
    fn random_selection_on_empty_catalog_is_a_noop() {
        let mut state = AppState::new();

        update(&mut state, Message::SetRandom);
        update(&mut state, Message::ReplaceCurrent);

        assert!(state.path.is_empty());
    }

    #[test]
    fn toggle_flips_view_mode() {
        let mut state = AppState::new();
        assert_eq!(state.view_mode, ViewMode::List);

        update(&mut state, Message::ToggleView);
        assert_eq!(state.view_mode, ViewMode::Grid);

        update(&mut state, Message::ToggleView);
        assert_eq!(state.view_mode, ViewMode::List);
    }

    #[test]
    fn list_and_grid_show_every_entry() {
        let state = loaded_state();

        let list = render_list(&state);
        assert_eq!(list.lines().count(), 3);
        assert!(list.contains("#001 Bulbasaur"));

        let grid = render_grid(&state);
        assert_eq!(grid.lines().count(), 1);
        assert!(grid.contains("Venusaur"));
    }

    #[test]
    fn render_follows_view_mode_and_loading_status() {
        let mut state = loaded_state();
        assert_eq!(render(&state), render_list(&state));

        update(&mut state, Message::ToggleView);
        assert_eq!(render(&state), render_grid(&state));

        update(&mut state, Message::FetchStarted);
        assert_eq!(render(&state), "Loading...");
    }

    #[test]
    fn detail_renders_the_selected_pokemon() {
        let mut state = loaded_state();
        update(&mut state, Message::Select(1));

        let detail = render_detail(&state);
        assert!(detail.contains("#001 Bulbasaur"));
        assert!(detail.contains("Grass, Poison"));
        assert!(detail.contains("Chlorophyll (hidden)"));
        assert!(detail.contains("Height: 0.7 m  Weight: 6.9 kg"));
        assert!(detail.contains("official-artwork/1.png"));
    }
}
