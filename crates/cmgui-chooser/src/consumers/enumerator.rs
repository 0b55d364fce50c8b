use tracing::debug;

use crate::chooser::{Chooser, SelectionOutcome};
use crate::config::MenuConfig;
use crate::errors::ChooserError;
use crate::items::ChooserItem;
use crate::surface::{DetachedSurface, MenuSurface};

/// Chooses one value out of a set of valid enumerator strings.
///
/// Each string is both the identity and the label of its entry.
pub struct EnumeratorChooser<S = DetachedSurface>
where
    S: MenuSurface<String>,
{
    chooser: Chooser<String, S>,
}

impl<S: MenuSurface<String>> EnumeratorChooser<S> {
    /// # Errors
    ///
    /// Returns `ChooserError::SurfaceFailed` if the menu cannot be built.
    pub fn new<V: AsRef<str>>(
        valid_values: &[V],
        value: Option<&str>,
        config: MenuConfig,
        surface: S,
    ) -> Result<Self, ChooserError> {
        let chooser = Chooser::new(
            enumerator_items(valid_values),
            value.map(str::to_string),
            config,
            surface,
        )?;
        Ok(Self { chooser })
    }

    /// Replace the set of valid values, keeping the current one if it is
    /// still among them.
    ///
    /// # Errors
    ///
    /// Returns `ChooserError::SurfaceFailed` if the new menu cannot be built.
    pub fn set_valid_values<V: AsRef<str>>(
        &mut self,
        valid_values: &[V],
    ) -> Result<SelectionOutcome<String>, ChooserError> {
        let value = self.chooser.current().cloned();
        debug!(
            event = "core.consumer.enumerator_values_updated",
            value_count = valid_values.len(),
            value = ?value
        );
        self.chooser.rebuild(enumerator_items(valid_values), value)
    }

    pub fn value(&self) -> Option<&str> {
        self.chooser.current().map(String::as_str)
    }

    pub fn set_value(&mut self, value: &str) -> SelectionOutcome<String> {
        self.chooser.set_current(value.to_string())
    }

    pub fn set_listener<F>(&mut self, listener: F)
    where
        F: FnMut(Option<&String>) + 'static,
    {
        self.chooser.set_listener(listener);
    }

    pub fn chooser(&self) -> &Chooser<String, S> {
        &self.chooser
    }

    pub fn chooser_mut(&mut self) -> &mut Chooser<String, S> {
        &mut self.chooser
    }
}

fn enumerator_items<V: AsRef<str>>(values: &[V]) -> Vec<ChooserItem<String>> {
    values
        .iter()
        .map(|value| ChooserItem::new(value.as_ref().to_string(), value.as_ref()))
        .collect()
}
