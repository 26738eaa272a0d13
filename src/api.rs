// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use anywho::{Error, anywho};
use futures::StreamExt;
use futures::future::{AbortHandle, Abortable, Aborted};
use log::{info, warn};
use tokio::sync::Semaphore;

use crate::config::Config;
use crate::entities::pokemon::Pokemon;
use crate::entities::pokemon_list::{PokemonEntry, PokemonList};

/// Errors that abort a whole catalog fetch.
///
/// Failures on individual detail requests are deliberately absent: those
/// drop the affected item, get logged, and the fetch still succeeds.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport failure or non-2xx status on the index request.
    #[error("index endpoint unreachable: {0}")]
    IndexUnreachable(String),
    /// The index response body did not match the expected schema.
    #[error("invalid index response: {0}")]
    InvalidIndex(String),
    /// The fetch was aborted through its `AbortHandle`.
    #[error("catalog fetch cancelled")]
    Cancelled,
}

/// Result of one catalog fetch: the items sorted ascending by id, plus the
/// names of index entries whose detail request was dropped.
#[derive(Debug, Default)]
pub struct Catalog {
    pub pokemon: Vec<Pokemon>,
    pub failed: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct CatalogApi {
    client: reqwest::Client,
    config: Config,
}

impl CatalogApi {
    pub fn new(config: Config) -> Result<CatalogApi, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(CatalogApi { client, config })
    }

    /// Fetches the index and the details of every listed Pokémon, returning
    /// them sorted ascending by id.
    ///
    /// Detail requests run through a bounded worker pool and are joined as a
    /// barrier: every request settles before the catalog is assembled. A
    /// single failing detail request does not fail the fetch; its entry name
    /// lands in [`Catalog::failed`] instead.
    pub async fn fetch_all_pokemon(&self) -> Result<Catalog, FetchError> {
        let entries = self.fetch_index().await?;
        info!("index returned {} entries", entries.len());

        let width = self.config.max_concurrent_requests;
        let semaphore = Arc::new(Semaphore::new(width));

        let results = futures::stream::iter(entries)
            .map(|entry| {
                let client = self.client.clone();
                let sem = Arc::clone(&semaphore);
                async move {
                    let _permit = sem.acquire().await.unwrap();
                    let detail = Self::fetch_pokemon(&client, &entry.url).await;
                    (entry.name, detail)
                }
            })
            .buffer_unordered(width)
            .collect::<Vec<(String, Result<Pokemon, Error>)>>()
            .await;

        let mut catalog = Catalog::default();
        for (name, result) in results {
            match result {
                Ok(pokemon) => catalog.pokemon.push(pokemon),
                Err(err) => {
                    warn!("dropping {name}: {err}");
                    catalog.failed.push(name);
                }
            }
        }

        // Stable sort: duplicate ids from a malformed index are kept as-is.
        catalog.pokemon.sort_by_key(|pokemon| pokemon.id);

        info!(
            "catalog assembled: {} items, {} dropped",
            catalog.pokemon.len(),
            catalog.failed.len()
        );
        Ok(catalog)
    }

    /// Same as [`fetch_all_pokemon`](Self::fetch_all_pokemon), but paired
    /// with a handle that cancels the whole operation; an aborted fetch
    /// resolves to [`FetchError::Cancelled`].
    pub fn fetch_all_abortable(
        &self,
    ) -> (
        impl Future<Output = Result<Catalog, FetchError>>,
        AbortHandle,
    ) {
        let (handle, registration) = AbortHandle::new_pair();
        let fetch = Abortable::new(self.fetch_all_pokemon(), registration);

        let fetch = async move {
            match fetch.await {
                Ok(result) => result,
                Err(Aborted) => Err(FetchError::Cancelled),
            }
        };

        (fetch, handle)
    }

    async fn fetch_index(&self) -> Result<Vec<PokemonEntry>, FetchError> {
        let url = format!("{}?limit={}", self.config.base_url, self.config.limit);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| FetchError::IndexUnreachable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::IndexUnreachable(format!(
                "status {status} from {url}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|err| FetchError::IndexUnreachable(err.to_string()))?;

        let list: PokemonList = serde_json::from_str(&body)
            .map_err(|err| FetchError::InvalidIndex(err.to_string()))?;

        Ok(list.results)
    }

    /// Retrieves and decodes a single detail record.
    async fn fetch_pokemon(client: &reqwest::Client, url: &str) -> Result<Pokemon, Error> {
        let response = client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(anywho!("status {status} from {url}"));
        }

        Ok(response.json::<Pokemon>().await?)
    }
}
