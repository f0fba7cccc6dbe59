//! Fetching and parsing the content documents.
//!
//! The four documents are requested concurrently. A document that cannot be
//! fetched or parsed is logged and left out; the load as a whole never fails
//! and the page renders whatever arrived.

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::model::{ProjectsDoc, SeoDoc, ServicesDoc, SiteContent};
use crate::core::config::DataPaths;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("request for {path} failed: {reason}")]
    Network { path: String, reason: String },
    #[error("{path} answered with HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("{path} is not a valid document: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where document bodies come from.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn fetch_text(&self, path: &str) -> Result<String, ContentError>;
}

/// Default source: `fetch` relative to the page on the web, files under a
/// base directory natively.
#[derive(Debug, Clone, Default)]
pub struct FetchSource {
    base: String,
}

impl FetchSource {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        if self.base.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", self.base.trim_end_matches('/'), path)
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl DataSource for FetchSource {
    async fn fetch_text(&self, path: &str) -> Result<String, ContentError> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::Response;

        let url = self.url(path);
        let network = |reason: String| ContentError::Network {
            path: url.clone(),
            reason,
        };

        let window = web_sys::window().ok_or_else(|| network("window unavailable".into()))?;
        let response: Response = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(|err| network(format!("{err:?}")))?
            .dyn_into()
            .map_err(|_| network("unexpected fetch result".into()))?;

        if !response.ok() {
            return Err(ContentError::Status {
                path: url.clone(),
                status: response.status(),
            });
        }

        let body = response.text().map_err(|err| network(format!("{err:?}")))?;
        JsFuture::from(body)
            .await
            .map_err(|err| network(format!("{err:?}")))?
            .as_string()
            .ok_or_else(|| network("response body is not text".into()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DataSource for FetchSource {
    async fn fetch_text(&self, path: &str) -> Result<String, ContentError> {
        let url = self.url(path);
        std::fs::read_to_string(&url).map_err(|err| ContentError::Network {
            path: url,
            reason: err.to_string(),
        })
    }
}

/// Fetch and parse one document.
pub async fn load_document<T: DeserializeOwned>(
    source: &impl DataSource,
    path: &str,
) -> Result<T, ContentError> {
    let body = source.fetch_text(path).await?;
    serde_json::from_str(&body).map_err(|source| ContentError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Everything the page renders from; each document is `None` when it failed.
#[derive(Debug, Clone, Default)]
pub struct SiteData {
    pub content: Option<SiteContent>,
    pub services: Option<ServicesDoc>,
    pub projects: Option<ProjectsDoc>,
    pub seo: Option<SeoDoc>,
}

impl SiteData {
    pub async fn load(source: &impl DataSource, paths: &DataPaths) -> Self {
        debug!(?paths, "loading site content");
        let (content, services, projects, seo) = futures::join!(
            load_document::<SiteContent>(source, &paths.content),
            load_document::<ServicesDoc>(source, &paths.services),
            load_document::<ProjectsDoc>(source, &paths.projects),
            load_document::<SeoDoc>(source, &paths.seo),
        );

        let data = Self {
            content: keep(content),
            services: keep(services),
            projects: keep(projects),
            seo: keep(seo),
        };
        info!(loaded = data.loaded_count(), of = 4, "site content loaded");
        data
    }

    pub fn loaded_count(&self) -> usize {
        [
            self.content.is_some(),
            self.services.is_some(),
            self.projects.is_some(),
            self.seo.is_some(),
        ]
        .into_iter()
        .filter(|loaded| *loaded)
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded_count() == 0
    }
}

fn keep<T>(result: Result<T, ContentError>) -> Option<T> {
    result.map_err(|err| warn!(%err, "content document unavailable")).ok()
}
