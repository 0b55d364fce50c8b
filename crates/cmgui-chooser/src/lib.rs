//! cmgui-chooser: generic choosers for cmgui dialogs
//!
//! A chooser holds one current item out of a named set, tells a single
//! listener when that selection changes, and presents the set as a menu
//! that cascades into groups once it grows past a fan-out threshold.
//!
//! # Main Entry Points
//!
//! - [`chooser`] - The selection state machine and its notification rules
//! - [`layout`] - Grouped menu layout computed as plain data
//! - [`surface`] - Host menu systems a layout is built on
//! - [`state`] - Command/event dispatch over a chooser
//! - [`consumers`] - Component and enumerator choosers
//! - [`config`] - Configuration management

pub mod chooser;
pub mod config;
pub mod consumers;
pub mod errors;
pub mod events;
pub mod items;
pub mod layout;
pub mod logging;
pub mod state;
pub mod surface;

// Re-export commonly used types at crate root for convenience
pub use chooser::{Chooser, Listener, SelectionOutcome};
pub use config::{ChooserConfig, MenuConfig};
pub use consumers::{ComponentChooser, EnumeratorChooser};
pub use errors::{ChooserError, CmguiError, ConfigError};
pub use items::ChooserItem;
pub use layout::{EntryPath, MenuLayout, MenuNode};
pub use state::{ChooserCommand, ChooserEvent, Store};
pub use surface::{DetachedSurface, MenuSurface, TextHandle, TextSurface, TextSurfaceError};

// Re-export logging initialization
pub use logging::init_logging;
