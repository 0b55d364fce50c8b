use super::events::ChooserEvent;
use super::types::ChooserCommand;

/// Trait for dispatching chooser commands.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received.
/// - **Events**: On success, dispatch returns the events describing what
///   changed, in order. `ChooserEvent::SelectionChanged` appears exactly when
///   the chooser notified its listener.
/// - **Errors**: A failed dispatch changes nothing and emits nothing.
pub trait Store<I> {
    type Error;
    fn dispatch(&mut self, cmd: ChooserCommand<I>) -> Result<Vec<ChooserEvent<I>>, Self::Error>;
}
