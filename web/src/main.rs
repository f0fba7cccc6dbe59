use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::app::App as Site;
use ui::core::config::SiteConfig;

const FAVICON: Asset = asset!("/assets/favicon.svg");

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus::logger::init(level) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        Site { config: SiteConfig::default() }
    }
}
