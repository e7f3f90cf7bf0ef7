//! `web-sys` document host.

use web_sys::{Document, Element};

use crate::config::FillConfig;
use crate::host::IconHost;
use crate::sync::synchronize;

/// The live page document.
pub struct DomHost {
    document: Document,
}

impl DomHost {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the current window, if there is one.
    #[must_use]
    pub fn current() -> Option<Self> {
        web_sys::window().and_then(|w| w.document()).map(Self::new)
    }
}

impl IconHost for DomHost {
    type Icon = Element;

    fn icons_with_class(&self, class: &str) -> Vec<Element> {
        // Snapshot the live collection before any class is touched.
        let collection = self.document.get_elements_by_class_name(class);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn add_class(&mut self, icon: &Element, class: &str) {
        if let Err(err) = icon.class_list().add_1(class) {
            log::warn!("theme-fill: failed to add class {class:?}: {err:?}");
        }
    }

    fn remove_class(&mut self, icon: &Element, class: &str) {
        if let Err(err) = icon.class_list().remove_1(class) {
            log::warn!("theme-fill: failed to remove class {class:?}: {err:?}");
        }
    }
}

/// Run a synchronization pass over the current page.
pub fn sync_document(config: &FillConfig, is_dark: bool) {
    let Some(mut host) = DomHost::current() else {
        log::warn!("theme-fill: no document to synchronize");
        return;
    };
    synchronize(&mut host, config, is_dark);
}
