//! Ready-made choosers for common application fields.

mod component;
mod enumerator;

pub use component::ComponentChooser;
pub use enumerator::EnumeratorChooser;
