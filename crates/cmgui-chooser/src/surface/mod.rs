//! Host menu systems a chooser materializes its layout into.

mod detached;
pub(crate) mod materialize;
mod text;
mod traits;

pub use detached::DetachedSurface;
pub use text::{TextHandle, TextSurface, TextSurfaceError};
pub use traits::MenuSurface;
