//! Cached selectors for the markup rules. Selector::parse is moderately
//! expensive, so each one is built once and reused across runs.

use scraper::Selector;
use std::sync::OnceLock;

static IMG_SELECTOR: OnceLock<Selector> = OnceLock::new();
static INLINE_STYLE_SELECTOR: OnceLock<Selector> = OnceLock::new();
static STYLESHEET_LINK_SELECTOR: OnceLock<Selector> = OnceLock::new();
static PRELOAD_HINT_SELECTOR: OnceLock<Selector> = OnceLock::new();

pub(crate) fn img_selector() -> &'static Selector {
    IMG_SELECTOR.get_or_init(|| Selector::parse("img").unwrap())
}

pub(crate) fn inline_style_selector() -> &'static Selector {
    INLINE_STYLE_SELECTOR.get_or_init(|| Selector::parse("[style]").unwrap())
}

pub(crate) fn stylesheet_link_selector() -> &'static Selector {
    STYLESHEET_LINK_SELECTOR.get_or_init(|| Selector::parse("link[rel=\"stylesheet\"]").unwrap())
}

pub(crate) fn preload_hint_selector() -> &'static Selector {
    PRELOAD_HINT_SELECTOR.get_or_init(|| {
        Selector::parse("link[rel=\"preload\"][as=\"style\"], link[rel=\"preload\"][as=\"image\"]")
            .unwrap()
    })
}
