pub mod accordion;

/// Entry point called by the page's bootstrap script once the DOM is parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::logging::log!("Lexpage app initialized");

    if let Err(e) = accordion::init() {
        leptos::logging::error!("Accordion initialization failed: {}", e);
    }
}
