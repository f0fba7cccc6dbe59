use dioxus::prelude::*;

use crate::app::use_app;
use crate::components::{
    About, Contact, FloatingButtons, Footer, Header, Hero, Projects, Seo, Services, Stats,
};

/// The whole single-page site.
#[component]
pub fn Home() -> Element {
    let ctx = use_app();
    let ready = ctx.ready;
    let class = if ready() { "site site-ready" } else { "site" };

    rsx! {
        Seo {}
        // Clicks that reach the page root land outside the nav and its toggle.
        div { class: "{class}", onclick: move |_| ctx.close_menu(),
            Header {}
            main {
                Hero {}
                Services {}
                Projects {}
                About {}
                Stats {}
                Contact {}
            }
            Footer {}
            FloatingButtons {}
        }
    }
}
