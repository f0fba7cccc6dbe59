//! Site-wide tunables, provided to the component tree through context.

/// Relative locations of the content documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub content: String,
    pub services: String,
    pub projects: String,
    pub seo: String,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            content: "data/content.json".into(),
            services: "data/services.json".into(),
            projects: "data/projects.json".into(),
            seo: "data/seo.json".into(),
        }
    }
}

/// Intersection settings for one kind of scroll-triggered effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub data: DataPaths,
    /// Client-storage key holding the last chosen language code.
    pub storage_key: String,
    /// SEO page entry rendered by the home page.
    pub seo_page: String,
    /// Vertical offset (px) past which the header gets its shadow.
    pub header_scroll_threshold: f64,
    pub counter_duration_ms: f64,
    /// Interval between counter frames.
    pub counter_frame_ms: u32,
    pub max_projects: usize,
    pub max_service_features: usize,
    pub reveal_observer: ObserverOptions,
    pub counter_observer: ObserverOptions,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data: DataPaths::default(),
            storage_key: "neoncolor-lang".into(),
            seo_page: "home".into(),
            header_scroll_threshold: 50.0,
            counter_duration_ms: 2000.0,
            counter_frame_ms: 16,
            max_projects: 6,
            max_service_features: 3,
            reveal_observer: ObserverOptions {
                threshold: 0.1,
                root_margin: "0px 0px -50px 0px",
            },
            counter_observer: ObserverOptions {
                threshold: 0.5,
                root_margin: "0px",
            },
        }
    }
}
