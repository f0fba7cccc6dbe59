use dioxus::prelude::*;
use futures::StreamExt;

use crate::app::use_app;
use crate::content::view::stats_view;
use crate::core::config::SiteConfig;
use crate::core::counter::{CounterAnimation, CounterTarget};
use crate::core::{platform, timing};

#[component]
pub fn Stats() -> Element {
    let ctx = use_app();
    let lang = ctx.lang();
    let stats = stats_view(ctx.site.read().content.as_ref(), lang);

    if stats.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "stats",
            div { class: "container stats-grid",
                for stat in stats {
                    div { key: "{stat.id}", class: "stat-item",
                        StatCounter { id: stat.id, value: stat.value }
                        p { id: "{stat.id}-label", class: "stat-label", "{stat.label}" }
                    }
                }
            }
        }
    }
}

/// Number that counts up from zero once it is half visible.
#[component]
fn StatCounter(id: &'static str, value: String) -> Element {
    let ctx = use_app();
    let config = use_context::<SiteConfig>();
    let duration_ms = config.counter_duration_ms;
    let frame_ms = config.counter_frame_ms;
    let options = config.counter_observer;

    let mut shown = use_signal(|| value.clone());
    let language = ctx.language;

    let animator = use_coroutine(move |mut rx: UnboundedReceiver<CounterTarget>| async move {
        while let Some(target) = rx.next().await {
            let animation = CounterAnimation::new(target, duration_ms);
            let started = timing::now_ms();
            loop {
                let elapsed = timing::now_ms() - started;
                shown.set(animation.frame(elapsed, language.peek().current()));
                if animation.is_finished(elapsed) {
                    break;
                }
                timing::sleep_ms(frame_ms).await;
            }
        }
    });

    rsx! {
        span {
            id,
            class: "stat-number",
            onmounted: move |evt: MountedEvent| {
                // Text without digits stays as written.
                if let Some(target) = CounterTarget::parse(&value) {
                    platform::observe_once(&evt.data(), options, move || animator.send(target));
                }
            },
            "{shown}"
        }
    }
}
