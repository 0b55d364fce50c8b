use tracing::warn;

use crate::errors::ChooserError;
use crate::layout::{MenuLayout, MenuNode};
use crate::surface::MenuSurface;

/// Build `layout` on `surface` and return the new root.
///
/// All or nothing: if any node fails, every node built by this call is
/// destroyed before the error is returned. Nothing built earlier is touched.
pub(crate) fn materialize<I, S: MenuSurface<I>>(
    surface: &mut S,
    layout: &MenuLayout<I>,
) -> Result<S::Handle, ChooserError> {
    let children = build_nodes(surface, layout.nodes())?;
    match surface.build_root(&children) {
        Ok(root) => Ok(root),
        Err(e) => {
            destroy_all(surface, children);
            Err(surface_failed("root".to_string(), e))
        }
    }
}

fn build_nodes<I, S: MenuSurface<I>>(
    surface: &mut S,
    nodes: &[MenuNode<I>],
) -> Result<Vec<S::Handle>, ChooserError> {
    let mut built = Vec::with_capacity(nodes.len());
    for node in nodes {
        match build_node(surface, node) {
            Ok(handle) => built.push(handle),
            Err(e) => {
                destroy_all(surface, built);
                return Err(e);
            }
        }
    }
    Ok(built)
}

fn build_node<I, S: MenuSurface<I>>(
    surface: &mut S,
    node: &MenuNode<I>,
) -> Result<S::Handle, ChooserError> {
    match node {
        MenuNode::Entry { label, identity } => surface
            .build_entry(label, identity)
            .map_err(|e| surface_failed(format!("entry '{label}'"), e)),
        MenuNode::Placeholder { label } => surface
            .build_placeholder(label)
            .map_err(|e| surface_failed(format!("placeholder '{label}'"), e)),
        MenuNode::Group { label, children } => {
            let built = build_nodes(surface, children)?;
            match surface.build_group(label, &built) {
                Ok(group) => Ok(group),
                Err(e) => {
                    destroy_all(surface, built);
                    Err(surface_failed(format!("group '{label}'"), e))
                }
            }
        }
    }
}

fn destroy_all<I, S: MenuSurface<I>>(surface: &mut S, handles: Vec<S::Handle>) {
    for handle in handles {
        surface.destroy(handle);
    }
}

fn surface_failed<E>(node: String, source: E) -> ChooserError
where
    E: std::error::Error + Send + Sync + 'static,
{
    warn!(event = "core.surface.build_failed", node = %node, error = %source);
    ChooserError::SurfaceFailed {
        node,
        source: Box::new(source),
    }
}
