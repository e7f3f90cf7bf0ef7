//! Theme-change and content-swap listeners.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two independent reactions feed the same synchronization pass: the media
//! query's `change` event carries the new preference, while the swap event
//! re-reads it. Neither depends on the other having run.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, MediaQueryList, MediaQueryListEvent, Window};

use crate::config::FillConfig;
use crate::consts::THEME_CHANGE_EVENT;
use crate::dom::sync_document;
use crate::theme::matches_media;

#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("no global window")]
    NoWindow,
    #[error("failed to listen for {event}: {message}")]
    Listener { event: String, message: String },
}

/// Registered listeners. Dropping this removes them.
pub struct Subscriptions {
    config: Rc<FillConfig>,
    window: Window,
    media: Option<MediaQueryList>,
    on_theme_change: Closure<dyn FnMut(MediaQueryListEvent)>,
    on_swap: Closure<dyn FnMut(Event)>,
}

impl Subscriptions {
    /// Register both reactions for `config`.
    ///
    /// A missing or failing `matchMedia` leaves only the swap listener in
    /// place; the page then stays on the light rule.
    ///
    /// # Errors
    ///
    /// Fails when there is no window or the swap listener is rejected.
    pub fn install(config: FillConfig) -> Result<Self, InstallError> {
        let window = web_sys::window().ok_or(InstallError::NoWindow)?;
        let config = Rc::new(config);

        let theme_config = Rc::clone(&config);
        let on_theme_change = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            sync_document(&theme_config, event.matches());
        }) as Box<dyn FnMut(MediaQueryListEvent)>);

        let swap_config = Rc::clone(&config);
        let on_swap = Closure::wrap(Box::new(move |_event: Event| {
            sync_document(&swap_config, matches_media(&swap_config.dark_query));
        }) as Box<dyn FnMut(Event)>);

        window
            .add_event_listener_with_callback(&config.swap_event, on_swap.as_ref().unchecked_ref())
            .map_err(|err| InstallError::Listener {
                event: config.swap_event.clone(),
                message: format!("{err:?}"),
            })?;

        let media = match window.match_media(&config.dark_query) {
            Ok(Some(list)) => attach_theme_listener(list, &on_theme_change),
            Ok(None) => None,
            Err(err) => {
                log::debug!("theme-fill: matchMedia unavailable: {err:?}");
                None
            }
        };

        log::info!(
            "theme-fill: listening for {} (theme changes: {})",
            config.swap_event,
            media.is_some()
        );
        Ok(Self {
            config,
            window,
            media,
            on_theme_change,
            on_swap,
        })
    }

    #[must_use]
    pub fn config(&self) -> &FillConfig {
        &self.config
    }
}

fn attach_theme_listener(
    list: MediaQueryList,
    callback: &Closure<dyn FnMut(MediaQueryListEvent)>,
) -> Option<MediaQueryList> {
    match list.add_event_listener_with_callback(THEME_CHANGE_EVENT, callback.as_ref().unchecked_ref()) {
        Ok(()) => Some(list),
        Err(err) => {
            log::warn!("theme-fill: failed to listen for theme changes: {err:?}");
            None
        }
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        if let Some(media) = &self.media {
            if let Err(err) = media.remove_event_listener_with_callback(
                THEME_CHANGE_EVENT,
                self.on_theme_change.as_ref().unchecked_ref(),
            ) {
                log::warn!("theme-fill: failed to remove theme listener: {err:?}");
            }
        }
        if let Err(err) = self.window.remove_event_listener_with_callback(
            &self.config.swap_event,
            self.on_swap.as_ref().unchecked_ref(),
        ) {
            log::warn!("theme-fill: failed to remove swap listener: {err:?}");
        }
    }
}
