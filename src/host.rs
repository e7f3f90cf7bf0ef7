//! Access to the icons of a document.

/// Read/write access to the class markers of a document's elements.
///
/// The document is owned by the host; the synchronizer only borrows it for
/// the duration of a pass. Implementations log mutation failures instead of
/// returning them.
pub trait IconHost {
    /// Handle to a single element.
    type Icon;

    /// Elements currently carrying `class`, in document order.
    fn icons_with_class(&self, class: &str) -> Vec<Self::Icon>;

    /// Add `class` to `icon`. No-op if already present.
    fn add_class(&mut self, icon: &Self::Icon, class: &str);

    /// Remove `class` from `icon`. No-op if absent.
    fn remove_class(&mut self, icon: &Self::Icon, class: &str);
}
