//! The chooser: one current item out of a named set, with change notification.
//!
//! Key invariant: after every operation that runs an update check, the last
//! notified identity equals the current identity, whether or not a listener
//! is registered. A listener attached later therefore never fires for an
//! older transition.
//!
//! Programmatic selection ([`Chooser::set_current`], [`Chooser::rebuild`])
//! treats the requested identity as already delivered, so only a fallback to
//! a different identity notifies. Interactive selection ([`Chooser::pick`],
//! [`Chooser::activate`]) always notifies, even when re-picking the current
//! entry.

mod types;

pub use types::{Listener, SelectionOutcome};

use std::fmt::{self, Debug};

use tracing::{debug, info, warn};

use crate::config::MenuConfig;
use crate::errors::ChooserError;
use crate::items::{self, ChooserItem};
use crate::layout::{EntryPath, MenuLayout};
use crate::surface::materialize::materialize;
use crate::surface::{DetachedSurface, MenuSurface};

pub struct Chooser<I, S = DetachedSurface>
where
    S: MenuSurface<I>,
{
    items: Vec<ChooserItem<I>>,
    layout: MenuLayout<I>,
    current: Option<I>,
    last_notified: Option<I>,
    force_next_update: bool,
    listener: Option<Listener<I>>,
    notification_count: u64,
    config: MenuConfig,
    surface: S,
    root: S::Handle,
}

impl<I> Chooser<I, DetachedSurface>
where
    I: Clone + PartialEq + Debug,
{
    /// Chooser with no visual surface and the default menu config.
    pub fn detached(items: Vec<ChooserItem<I>>, initial: Option<I>) -> Self {
        let config = MenuConfig::default();
        let layout = MenuLayout::build(&items, initial.as_ref(), &config);
        Self::assemble(items, layout, config, DetachedSurface, ())
    }
}

impl<I, S> Chooser<I, S>
where
    I: Clone + PartialEq + Debug,
    S: MenuSurface<I>,
{
    /// Build a chooser and its menu on `surface`.
    ///
    /// `initial` is preselected when present; otherwise the first item (or
    /// nothing, for an empty list) is adopted silently. Construction never
    /// notifies.
    ///
    /// # Errors
    ///
    /// Returns `ChooserError::SurfaceFailed` if the surface cannot build the
    /// menu. Nothing is left on the surface in that case.
    pub fn new(
        items: Vec<ChooserItem<I>>,
        initial: Option<I>,
        config: MenuConfig,
        mut surface: S,
    ) -> Result<Self, ChooserError> {
        let layout = MenuLayout::build(&items, initial.as_ref(), &config);
        let root = materialize(&mut surface, &layout)?;
        Ok(Self::assemble(items, layout, config, surface, root))
    }

    /// Like [`Chooser::new`], from parallel identity and label sequences.
    ///
    /// # Errors
    ///
    /// Returns `ChooserError::InvalidArgument` if the sequences differ in
    /// length, or `ChooserError::SurfaceFailed` as for [`Chooser::new`].
    pub fn from_parts(
        identities: Vec<I>,
        labels: Vec<String>,
        initial: Option<I>,
        config: MenuConfig,
        surface: S,
    ) -> Result<Self, ChooserError> {
        let items = items::items_from_parts(identities, labels)?;
        Self::new(items, initial, config, surface)
    }

    fn assemble(
        items: Vec<ChooserItem<I>>,
        layout: MenuLayout<I>,
        config: MenuConfig,
        surface: S,
        root: S::Handle,
    ) -> Self {
        let current = layout
            .selected_index()
            .map(|index| items[index].identity.clone());

        let mut chooser = Self {
            items,
            layout,
            last_notified: current.clone(),
            current,
            force_next_update: false,
            listener: None,
            notification_count: 0,
            config,
            surface,
            root,
        };
        chooser.show_selection(chooser.layout.selected_index());

        debug!(
            event = "core.chooser.created",
            item_count = chooser.items.len(),
            group_count = chooser.layout.group_count(),
            current = ?chooser.current
        );
        chooser
    }

    /// Replace every item and the selection.
    ///
    /// The new menu is built completely before anything is swapped in. An
    /// honored `identity` does not notify; a fallback to another identity
    /// does.
    ///
    /// # Errors
    ///
    /// Returns `ChooserError::SurfaceFailed` if the new menu cannot be built.
    /// The chooser and its previous menu are then left untouched and nothing
    /// is notified.
    pub fn rebuild(
        &mut self,
        new_items: Vec<ChooserItem<I>>,
        identity: Option<I>,
    ) -> Result<SelectionOutcome<I>, ChooserError> {
        debug!(
            event = "core.chooser.rebuild_started",
            item_count = new_items.len(),
            requested = ?identity
        );

        let layout = MenuLayout::build(&new_items, identity.as_ref(), &self.config);
        let root = match materialize(&mut self.surface, &layout) {
            Ok(root) => root,
            Err(e) => {
                warn!(event = "core.chooser.rebuild_failed", error = %e);
                return Err(e);
            }
        };

        let old_root = std::mem::replace(&mut self.root, root);
        self.surface.destroy(old_root);
        self.items = new_items;
        self.layout = layout;

        self.last_notified = identity.clone();
        self.current = self
            .layout
            .selected_index()
            .map(|index| self.items[index].identity.clone());
        let outcome = if self.current == identity {
            SelectionOutcome::Honored
        } else {
            SelectionOutcome::Coerced {
                requested: identity,
            }
        };

        self.show_selection(self.layout.selected_index());
        let notified = self.update();

        info!(
            event = "core.chooser.rebuild_completed",
            item_count = self.items.len(),
            group_count = self.layout.group_count(),
            coerced = outcome.is_coerced(),
            notified = notified
        );
        Ok(outcome)
    }

    /// Register the listener, replacing any previous one. Never notifies.
    pub fn set_listener<F>(&mut self, listener: F)
    where
        F: FnMut(Option<&I>) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// The current identity, `None` only when there is nothing to choose.
    pub fn current(&self) -> Option<&I> {
        self.current.as_ref()
    }

    /// Make `identity` current.
    ///
    /// If `identity` is not on the menu the first entry is selected instead,
    /// just as a menu shows its first entry when asked for something it does
    /// not hold. Only such a fallback notifies.
    pub fn set_current(&mut self, identity: I) -> SelectionOutcome<I> {
        self.last_notified = Some(identity.clone());
        self.current = Some(identity.clone());

        let (index, outcome) = match items::rposition(&self.items, &identity) {
            Some(index) => (Some(index), SelectionOutcome::Honored),
            None => {
                self.current = self.items.first().map(|item| item.identity.clone());
                debug!(
                    event = "core.chooser.selection_coerced",
                    requested = ?identity,
                    current = ?self.current
                );
                (
                    (!self.items.is_empty()).then_some(0),
                    SelectionOutcome::Coerced {
                        requested: Some(identity),
                    },
                )
            }
        };

        self.show_selection(index);
        self.update();
        outcome
    }

    /// Interactive pick of `identity`; always notifies.
    ///
    /// # Errors
    ///
    /// Returns `ChooserError::UnknownEntry` if no item carries `identity`.
    pub fn pick(&mut self, identity: &I) -> Result<(), ChooserError> {
        let index =
            items::rposition(&self.items, identity).ok_or_else(|| ChooserError::UnknownEntry {
                entry: format!("{identity:?}"),
            })?;
        self.pick_index(index);
        Ok(())
    }

    /// Interactive pick of the entry at `path`; always notifies.
    ///
    /// This is what a host event loop calls when the user activates an entry.
    ///
    /// # Errors
    ///
    /// Returns `ChooserError::UnknownEntry` if `path` does not name an entry.
    pub fn activate(&mut self, path: &EntryPath) -> Result<(), ChooserError> {
        let index = self
            .layout
            .resolve(path)
            .ok_or_else(|| ChooserError::UnknownEntry {
                entry: format!("path {path}"),
            })?;
        self.pick_index(index);
        Ok(())
    }

    fn pick_index(&mut self, index: usize) {
        self.current = Some(self.items[index].identity.clone());
        self.force_next_update = true;
        debug!(event = "core.chooser.entry_picked", current = ?self.current);
        self.show_selection(Some(index));
        self.update();
    }

    /// Notify the listener if the selection changed or an update is forced.
    fn update(&mut self) -> bool {
        if !self.force_next_update && self.current == self.last_notified {
            return false;
        }

        // State settles before the listener runs
        self.last_notified = self.current.clone();
        self.force_next_update = false;
        self.notification_count += 1;

        debug!(
            event = "core.chooser.selection_notified",
            current = ?self.current,
            has_listener = self.listener.is_some()
        );
        if let Some(listener) = self.listener.as_mut() {
            listener(self.current.as_ref());
        }
        true
    }

    fn show_selection(&mut self, index: Option<usize>) {
        let path = index.and_then(|index| self.layout.entry_path(index));
        let label = index.map(|index| self.items[index].label.as_str());
        self.surface.show_selection(&self.root, path, label);
    }

    pub fn items(&self) -> &[ChooserItem<I>] {
        &self.items
    }

    pub fn layout(&self) -> &MenuLayout<I> {
        &self.layout
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Root of the menu currently built on the surface.
    pub fn root(&self) -> &S::Handle {
        &self.root
    }

    /// Number of update checks that fired, with or without a listener.
    pub fn notification_count(&self) -> u64 {
        self.notification_count
    }

    /// Tear down the menu and hand the surface back to its owner.
    pub fn destroy(mut self) -> S {
        self.surface.destroy(self.root);
        debug!(event = "core.chooser.destroyed", item_count = self.items.len());
        self.surface
    }
}

impl<I, S> Debug for Chooser<I, S>
where
    I: Debug,
    S: MenuSurface<I> + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chooser")
            .field("items", &self.items)
            .field("current", &self.current)
            .field("last_notified", &self.last_notified)
            .field("force_next_update", &self.force_next_update)
            .field("has_listener", &self.listener.is_some())
            .field("surface", &self.surface)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
