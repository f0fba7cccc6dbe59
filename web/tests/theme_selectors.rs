#![cfg(test)]
/*!
Theme selector lint for the web build.

Ensures the class names emitted by the shared `ui` components still have rules in
`ui/assets/theme/main.css`. A substring presence check is enough to catch a
refactor that renames a class on one side only.

If you intentionally rename or remove a selector, update the component markup
and REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / language
    ":root",
    "--font-family-current",
    "body {",
    "body.rtl",
    "body.ltr",
    ".site.site-ready",
    ".container {",
    ".section-title",
    // Buttons
    ".btn-primary",
    ".btn-outline",
    // Header & navigation
    ".header {",
    ".header.header-scrolled",
    ".nav-link",
    ".nav.active",
    ".lang-switcher",
    ".mobile-menu-btn",
    ".mobile-menu-btn.active",
    // Hero
    ".hero-badge",
    ".hero-title-accent",
    ".hero-trust",
    ".trust-number",
    // Services
    ".services-grid",
    ".service-card",
    ".service-features",
    // Projects
    ".projects-filter",
    ".filter-btn",
    ".filter-btn.active",
    ".projects-grid",
    ".project-card",
    ".project-overlay",
    // Stats
    ".stats-grid",
    ".stat-number",
    // Contact form
    ".contact-form",
    ".form-input",
    ".form-input.error",
    ".error-message",
    // Footer & floating buttons
    ".footer {",
    ".footer-grid",
    ".social-links",
    ".floating-buttons",
    ".float-whatsapp",
    ".float-call",
    // Scroll reveal
    ".animate-on-scroll",
    ".animate-on-scroll.animate-in",
    // Mobile breakpoint
    "@media (max-width: 768px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn mobile_nav_mirrors_for_rtl() {
    // The off-canvas menu slides in from the reading-start edge.
    assert!(
        THEME_CSS.contains("body.rtl .nav {") && THEME_CSS.contains("body.rtl .nav.active"),
        "rtl overrides for the mobile navigation drawer are missing"
    );
}
