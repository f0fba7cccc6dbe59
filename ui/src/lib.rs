//! Shared UI crate for the Neon Color site. Content model, language handling
//! and every page section live here; the `web` crate only launches [`app::App`].

pub mod app;
pub mod content;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Shared building blocks
    mod anchor;
    mod reveal;
    pub use anchor::AnchorLink;
    pub use reveal::Reveal;

    // Page sections, top to bottom
    pub mod header;
    mod hero;
    mod services;
    mod projects;
    mod about;
    mod stats;
    mod contact;
    mod footer;
    mod seo;
    pub use about::About;
    pub use contact::Contact;
    pub use footer::{FloatingButtons, Footer};
    pub use header::Header;
    pub use hero::Hero;
    pub use projects::Projects;
    pub use seo::Seo;
    pub use services::Services;
    pub use stats::Stats;
}
