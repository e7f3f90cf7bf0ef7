//! JavaScript entry points.
//!
//! The module start hook applies the default Phosphor classes and begins
//! listening straight away, so including the script is enough for most
//! pages. `configure` swaps in custom names afterwards.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::config::FillConfig;
use crate::dom::sync_document;
use crate::listen::Subscriptions;
use crate::theme::matches_media;

thread_local! {
    static ACTIVE: RefCell<Option<Subscriptions>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // The host page may already have installed a logger.
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        log::debug!("theme-fill: console logger not installed: {err}");
    }
    if let Err(err) = activate(FillConfig::default()) {
        log::warn!("theme-fill: {err}");
    }
}

/// Replace the active class names with a JSON config and resynchronize.
///
/// # Errors
///
/// Rejects invalid config; the previous listeners stay active in that case.
#[wasm_bindgen]
pub fn configure(raw: &str) -> Result<(), JsValue> {
    let config = FillConfig::from_json(raw).map_err(to_js_error)?;
    activate(config).map_err(to_js_error)
}

/// Apply the fill rule for `is_dark` using the active class names.
#[wasm_bindgen(js_name = synchronize)]
pub fn synchronize_js(is_dark: bool) {
    let config = active_config();
    sync_document(&config, is_dark);
}

#[wasm_bindgen(js_name = detectDarkPreference)]
pub fn detect_dark_preference_js() -> bool {
    matches_media(&active_config().dark_query)
}

/// Remove the active listeners. Icon classes are left as they are.
#[wasm_bindgen]
pub fn stop() {
    if ACTIVE.with(|active| active.borrow_mut().take()).is_some() {
        log::info!("theme-fill: stopped");
    }
}

fn activate(config: FillConfig) -> Result<(), crate::listen::InstallError> {
    sync_document(&config, matches_media(&config.dark_query));
    let subscriptions = Subscriptions::install(config)?;
    // Dropping the previous subscriptions detaches their listeners.
    let previous = ACTIVE.with(|active| active.borrow_mut().replace(subscriptions));
    drop(previous);
    Ok(())
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn active_config() -> FillConfig {
    ACTIVE.with(|active| {
        active
            .borrow()
            .as_ref()
            .map_or_else(FillConfig::default, |subs| subs.config().clone())
    })
}
