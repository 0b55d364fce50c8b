use std::fmt::Debug;

use tracing::{debug, warn};

use crate::chooser::{Chooser, SelectionOutcome};
use crate::errors::ChooserError;
use crate::state::events::ChooserEvent;
use crate::state::store::Store;
use crate::state::types::ChooserCommand;
use crate::surface::MenuSurface;

impl<I, S> Store<I> for Chooser<I, S>
where
    I: Clone + PartialEq + Debug,
    S: MenuSurface<I>,
{
    type Error = ChooserError;

    fn dispatch(&mut self, cmd: ChooserCommand<I>) -> Result<Vec<ChooserEvent<I>>, ChooserError> {
        let command = cmd.name();
        debug!(event = "core.state.dispatch_started", command = command);

        let notified_before = self.notification_count();
        let result = match cmd {
            ChooserCommand::Rebuild { items, identity } => {
                let item_count = items.len();
                self.rebuild(items, identity).map(|outcome| {
                    let mut events = vec![ChooserEvent::Rebuilt { item_count }];
                    events.extend(self.coercion_event(outcome));
                    events
                })
            }
            ChooserCommand::SetCurrent { identity } => {
                let outcome = self.set_current(identity);
                Ok(self.coercion_event(outcome).into_iter().collect())
            }
            ChooserCommand::Pick { identity } => self.pick(&identity).map(|()| Vec::new()),
            ChooserCommand::Activate { path } => self.activate(&path).map(|()| Vec::new()),
        };

        match result {
            Ok(mut events) => {
                if self.notification_count() > notified_before {
                    events.push(ChooserEvent::SelectionChanged {
                        identity: self.current().cloned(),
                    });
                }
                debug!(
                    event = "core.state.dispatch_completed",
                    command = command,
                    event_count = events.len()
                );
                Ok(events)
            }
            Err(e) => {
                warn!(
                    event = "core.state.dispatch_failed",
                    command = command,
                    error = %e
                );
                Err(e)
            }
        }
    }
}

impl<I, S> Chooser<I, S>
where
    I: Clone + PartialEq + Debug,
    S: MenuSurface<I>,
{
    fn coercion_event(&self, outcome: SelectionOutcome<I>) -> Option<ChooserEvent<I>> {
        match outcome {
            SelectionOutcome::Honored => None,
            SelectionOutcome::Coerced { requested } => Some(ChooserEvent::SelectionCoerced {
                requested,
                actual: self.current().cloned(),
            }),
        }
    }
}
