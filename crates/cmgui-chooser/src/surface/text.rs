use std::fmt::Write as _;

use crate::layout::EntryPath;
use crate::surface::MenuSurface;

#[derive(Debug, thiserror::Error)]
pub enum TextSurfaceError {
    #[error("Text surface node limit of {limit} reached")]
    NodeLimit { limit: usize },
}

/// Handle of a node built on a [`TextSurface`].
///
/// Slots are reused once destroyed; the generation keeps a stale handle from
/// reaching the slot's next occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextHandle {
    index: usize,
    generation: u32,
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    node: Option<TextNode>,
}

#[derive(Debug)]
enum TextNode {
    Entry {
        label: String,
    },
    Placeholder {
        label: String,
    },
    Group {
        label: String,
        children: Vec<TextHandle>,
    },
    Root {
        children: Vec<TextHandle>,
        selected: Option<EntryPath>,
        current_label: Option<String>,
    },
}

/// In-memory menu surface rendering to an indented outline.
///
/// ```text
/// current: Beta
///   - Alpha
///   * Beta
///   - Gamma
/// ```
///
/// Groups are marked `+`, the current entry `*` and the empty-list
/// placeholder `x`. An optional node limit makes builds fail once that many
/// nodes are alive.
#[derive(Debug, Default)]
pub struct TextSurface {
    slots: Vec<Slot>,
    vacant: Vec<usize>,
    live: usize,
    node_limit: Option<usize>,
}

impl TextSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface that refuses to hold more than `limit` live nodes.
    pub fn with_node_limit(limit: usize) -> Self {
        Self {
            node_limit: Some(limit),
            ..Self::default()
        }
    }

    /// Number of nodes built and not yet destroyed.
    pub fn live_nodes(&self) -> usize {
        self.live
    }

    /// Number of node slots allocated, live or vacant.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Destroy `handle` and its subtree.
    pub fn destroy(&mut self, handle: TextHandle) {
        let Some(slot) = self
            .slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
        else {
            return;
        };
        let Some(node) = slot.node.take() else {
            return;
        };
        slot.generation = slot.generation.wrapping_add(1);
        self.vacant.push(handle.index);
        self.live -= 1;

        match node {
            TextNode::Group { children, .. } | TextNode::Root { children, .. } => {
                for child in children {
                    self.destroy(child);
                }
            }
            TextNode::Entry { .. } | TextNode::Placeholder { .. } => {}
        }
    }

    /// Render the menu below `root` as an outline.
    pub fn render(&self, root: &TextHandle) -> String {
        let mut out = String::new();
        let Some(TextNode::Root {
            children,
            selected,
            current_label,
        }) = self.node(*root)
        else {
            return out;
        };

        let _ = writeln!(
            out,
            "current: {}",
            current_label.as_deref().unwrap_or("<none>")
        );
        self.render_children(
            children,
            &EntryPath::default(),
            selected.as_ref(),
            1,
            &mut out,
        );
        out
    }

    fn render_children(
        &self,
        children: &[TextHandle],
        parent: &EntryPath,
        selected: Option<&EntryPath>,
        depth: usize,
        out: &mut String,
    ) {
        let indent = "  ".repeat(depth);
        for (position, child) in children.iter().enumerate() {
            let path = parent.child(position);
            match self.node(*child) {
                Some(TextNode::Entry { label }) => {
                    let marker = if selected == Some(&path) { '*' } else { '-' };
                    let _ = writeln!(out, "{indent}{marker} {label}");
                }
                Some(TextNode::Placeholder { label }) => {
                    let _ = writeln!(out, "{indent}x {label}");
                }
                Some(TextNode::Group { label, children }) => {
                    let _ = writeln!(out, "{indent}+ {label}");
                    self.render_children(children, &path, selected, depth + 1, out);
                }
                Some(TextNode::Root { .. }) | None => {}
            }
        }
    }

    fn node(&self, handle: TextHandle) -> Option<&TextNode> {
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    fn alloc(&mut self, node: TextNode) -> Result<TextHandle, TextSurfaceError> {
        if let Some(limit) = self.node_limit
            && self.live >= limit
        {
            return Err(TextSurfaceError::NodeLimit { limit });
        }
        self.live += 1;

        let index = match self.vacant.pop() {
            Some(index) => index,
            None => {
                self.slots.push(Slot::default());
                self.slots.len() - 1
            }
        };
        let slot = &mut self.slots[index];
        slot.node = Some(node);
        Ok(TextHandle {
            index,
            generation: slot.generation,
        })
    }
}

impl<I> MenuSurface<I> for TextSurface {
    type Handle = TextHandle;
    type Error = TextSurfaceError;

    fn build_entry(&mut self, label: &str, _identity: &I) -> Result<TextHandle, TextSurfaceError> {
        self.alloc(TextNode::Entry {
            label: label.to_string(),
        })
    }

    fn build_placeholder(&mut self, label: &str) -> Result<TextHandle, TextSurfaceError> {
        self.alloc(TextNode::Placeholder {
            label: label.to_string(),
        })
    }

    fn build_group(
        &mut self,
        label: &str,
        children: &[TextHandle],
    ) -> Result<TextHandle, TextSurfaceError> {
        self.alloc(TextNode::Group {
            label: label.to_string(),
            children: children.to_vec(),
        })
    }

    fn build_root(&mut self, children: &[TextHandle]) -> Result<TextHandle, TextSurfaceError> {
        self.alloc(TextNode::Root {
            children: children.to_vec(),
            selected: None,
            current_label: None,
        })
    }

    fn show_selection(
        &mut self,
        root: &TextHandle,
        path: Option<&EntryPath>,
        label: Option<&str>,
    ) {
        if let Some(Slot {
            generation,
            node:
                Some(TextNode::Root {
                    selected,
                    current_label,
                    ..
                }),
        }) = self.slots.get_mut(root.index)
            && *generation == root.generation
        {
            *selected = path.cloned();
            *current_label = label.map(str::to_string);
        }
    }

    fn destroy(&mut self, handle: TextHandle) {
        TextSurface::destroy(self, handle);
    }
}
