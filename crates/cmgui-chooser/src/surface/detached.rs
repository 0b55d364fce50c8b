use std::convert::Infallible;

use crate::surface::MenuSurface;

/// Surface for choosers that are driven purely through their API.
///
/// Builds nothing and never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetachedSurface;

impl<I> MenuSurface<I> for DetachedSurface {
    type Handle = ();
    type Error = Infallible;

    fn build_entry(&mut self, _label: &str, _identity: &I) -> Result<(), Infallible> {
        Ok(())
    }

    fn build_placeholder(&mut self, _label: &str) -> Result<(), Infallible> {
        Ok(())
    }

    fn build_group(&mut self, _label: &str, _children: &[()]) -> Result<(), Infallible> {
        Ok(())
    }

    fn build_root(&mut self, _children: &[()]) -> Result<(), Infallible> {
        Ok(())
    }

    fn destroy(&mut self, _handle: ()) {}
}
