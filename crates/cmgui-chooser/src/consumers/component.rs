use tracing::debug;

use crate::chooser::{Chooser, SelectionOutcome};
use crate::config::MenuConfig;
use crate::errors::ChooserError;
use crate::items::ChooserItem;
use crate::surface::{DetachedSurface, MenuSurface};

/// Chooses one component of a field by number.
///
/// Identities are zero-based component numbers; labels are the component
/// names.
pub struct ComponentChooser<S = DetachedSurface>
where
    S: MenuSurface<usize>,
{
    chooser: Chooser<usize, S>,
}

impl<S: MenuSurface<usize>> ComponentChooser<S> {
    /// # Errors
    ///
    /// Returns `ChooserError::SurfaceFailed` if the menu cannot be built.
    pub fn new<N: AsRef<str>>(
        names: &[N],
        component: usize,
        config: MenuConfig,
        surface: S,
    ) -> Result<Self, ChooserError> {
        let chooser = Chooser::new(component_items(names), Some(component), config, surface)?;
        Ok(Self { chooser })
    }

    /// Switch to another field's component names.
    ///
    /// The current component number is kept while it is still in range,
    /// otherwise the first component is chosen and the listener told.
    ///
    /// # Errors
    ///
    /// Returns `ChooserError::SurfaceFailed` if the new menu cannot be built;
    /// the previous field stays in place.
    pub fn update_field<N: AsRef<str>>(
        &mut self,
        names: &[N],
    ) -> Result<SelectionOutcome<usize>, ChooserError> {
        let component = self.chooser.current().copied();
        debug!(
            event = "core.consumer.component_field_updated",
            component_count = names.len(),
            component = ?component
        );
        self.chooser.rebuild(component_items(names), component)
    }

    /// The chosen component number, `None` for a field without components.
    pub fn component(&self) -> Option<usize> {
        self.chooser.current().copied()
    }

    pub fn set_component(&mut self, component: usize) -> SelectionOutcome<usize> {
        self.chooser.set_current(component)
    }

    pub fn set_listener<F>(&mut self, listener: F)
    where
        F: FnMut(Option<&usize>) + 'static,
    {
        self.chooser.set_listener(listener);
    }

    pub fn chooser(&self) -> &Chooser<usize, S> {
        &self.chooser
    }

    pub fn chooser_mut(&mut self) -> &mut Chooser<usize, S> {
        &mut self.chooser
    }
}

fn component_items<N: AsRef<str>>(names: &[N]) -> Vec<ChooserItem<usize>> {
    names
        .iter()
        .enumerate()
        .map(|(number, name)| ChooserItem::new(number, name.as_ref()))
        .collect()
}
