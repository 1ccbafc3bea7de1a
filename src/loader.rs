use anyhow::Context as _;
use maud::Markup;
use serde::de::DeserializeOwned;
use url::Url;

use crate::fetcher::Fetcher;

// Fallback copy shown in place of a feed that could not be loaded.
pub const BLOG_FALLBACK: &str =
    "LinkedIn posts are being loaded. Please refresh the page if this persists.";
pub const PROJECTS_FALLBACK: &str =
    "Projects are being loaded. Please refresh the page if this persists.";

/// What ends up in a feed container: either every item, rendered in source
/// order, or a single fallback message. Nothing in between.
pub enum ContainerContent {
    Items(Vec<Markup>),
    Fallback(&'static str),
}

impl ContainerContent {
    pub fn item_count(&self) -> usize {
        match self {
            ContainerContent::Items(items) => items.len(),
            ContainerContent::Fallback(_) => 0,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ContainerContent::Fallback(_))
    }
}

/// Fetches one feed and renders its items through `render`. Any failure along
/// the way (network, status, timeout, parse) resolves to the fallback message;
/// the error never leaves the loader.
pub async fn load_list<T>(
    fetcher: &Fetcher,
    url: Url,
    render: fn(&T) -> Markup,
    fallback: &'static str,
) -> ContainerContent
where
    T: DeserializeOwned,
{
    match fetch_items::<T>(fetcher, url.clone()).await {
        Ok(items) => {
            tracing::info!(count = items.len(), %url, "feed loaded");
            ContainerContent::Items(items.iter().map(render).collect())
        }
        Err(err) => {
            tracing::error!(%url, "feed unavailable: {err:#}");
            ContainerContent::Fallback(fallback)
        }
    }
}

async fn fetch_items<T>(fetcher: &Fetcher, url: Url) -> anyhow::Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let bytes = fetcher.get_bytes(url).await?;
    serde_json::from_slice(&bytes).context("parse feed json")
}
