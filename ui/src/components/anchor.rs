use dioxus::prelude::*;

use crate::app::use_app;
use crate::core::behavior::anchor_target;
use crate::core::platform;

/// Link that scrolls smoothly to a same-page section and closes the mobile
/// menu. Other hrefs behave like plain links.
#[component]
pub fn AnchorLink(
    #[props(into)] href: String,
    #[props(default, into)] class: String,
    #[props(default, into)] id: String,
    children: Element,
) -> Element {
    let ctx = use_app();
    let target = href.clone();
    let id = (!id.is_empty()).then_some(id);

    rsx! {
        a {
            id,
            class: "{class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                ctx.close_menu();
                if let Some(section) = anchor_target(&target) {
                    if platform::smooth_scroll_to(section) {
                        evt.prevent_default();
                    }
                }
            },
            {children}
        }
    }
}
