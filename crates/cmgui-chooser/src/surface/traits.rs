use std::fmt::Debug;

use crate::layout::EntryPath;

/// Capabilities a host menu system provides to a chooser.
///
/// The chooser computes a [`crate::layout::MenuLayout`] and then asks the
/// surface to build it bottom-up: entries and placeholders first, then each
/// group from its already built children, finally the root. Handles are
/// owned by the surface; destroying a group or root destroys its subtree.
///
/// Activation is reported the other way round: the host's event loop calls
/// [`crate::chooser::Chooser::activate`] with the path of the activated entry.
pub trait MenuSurface<I> {
    type Handle: Clone + Debug;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build a selectable entry carrying `identity`.
    fn build_entry(&mut self, label: &str, identity: &I) -> Result<Self::Handle, Self::Error>;

    /// Build the disabled entry shown for an empty item list.
    fn build_placeholder(&mut self, label: &str) -> Result<Self::Handle, Self::Error>;

    /// Build a cascading submenu holding `children`.
    fn build_group(
        &mut self,
        label: &str,
        children: &[Self::Handle],
    ) -> Result<Self::Handle, Self::Error>;

    /// Build the top-level menu holding `children`.
    fn build_root(&mut self, children: &[Self::Handle]) -> Result<Self::Handle, Self::Error>;

    /// Show which entry is current, `None` when nothing is selectable.
    fn show_selection(
        &mut self,
        _root: &Self::Handle,
        _path: Option<&EntryPath>,
        _label: Option<&str>,
    ) {
    }

    /// Destroy a previously built node and everything below it.
    fn destroy(&mut self, handle: Self::Handle);
}
