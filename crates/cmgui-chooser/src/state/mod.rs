//! Command/event interface over a chooser.
//!
//! Hosts that prefer message passing over direct method calls dispatch
//! [`ChooserCommand`]s and react to the returned [`ChooserEvent`]s.

mod dispatch;
pub mod events;
pub mod store;
pub mod types;

pub use events::ChooserEvent;
pub use store::Store;
pub use types::ChooserCommand;
