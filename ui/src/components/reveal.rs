use dioxus::prelude::*;

use crate::core::config::SiteConfig;
use crate::core::platform;

/// Block that fades in (`animate-in`) the first time it scrolls into view.
#[component]
pub fn Reveal(#[props(default, into)] class: String, children: Element) -> Element {
    let options = use_context::<SiteConfig>().reveal_observer;
    let mut revealed = use_signal(|| false);
    let state = if revealed() { "animate-in" } else { "" };

    rsx! {
        div {
            class: "{class} animate-on-scroll {state}",
            onmounted: move |evt: MountedEvent| {
                platform::observe_once(&evt.data(), options, move || revealed.set(true));
            },
            {children}
        }
    }
}
