//! Content documents: typed model, loading and per-section view models.

pub mod loader;
pub mod localized;
pub mod model;
pub mod view;

pub use loader::{ContentError, DataSource, FetchSource, SiteData};
pub use localized::{localize, Localized};
