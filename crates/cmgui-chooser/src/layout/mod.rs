//! Menu layout: splits an item list into a balanced tree of submenus.
//!
//! The layout is plain data. Materializing it into a visual menu is the
//! job of [`crate::surface`], so a failure there never leaves a half-built
//! layout behind.
//!
//! Lists longer than the fan-out threshold `F` are grouped. The capacity of
//! each top-level group is the smallest power of `F` (at least `F`) such that
//! `F` groups of that capacity hold every item; the number of groups is then
//! the smallest count (at least two) that holds every item. Items are dealt
//! out front-loaded, so earlier groups get the extra item when the division
//! is uneven. Groups still longer than `F` are split the same way.

mod path;

pub use path::EntryPath;

use serde::Serialize;

use crate::config::{MIN_FAN_OUT, MenuConfig};
use crate::items::ChooserItem;

/// One node of a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuNode<I> {
    /// A selectable entry for one item.
    Entry { label: String, identity: I },
    /// A cascading submenu.
    Group {
        label: String,
        children: Vec<MenuNode<I>>,
    },
    /// Disabled entry shown when there is nothing to choose.
    Placeholder { label: String },
}

impl<I> MenuNode<I> {
    pub fn label(&self) -> &str {
        match self {
            MenuNode::Entry { label, .. }
            | MenuNode::Group { label, .. }
            | MenuNode::Placeholder { label } => label,
        }
    }
}

/// Sizes of the top-level groups for `item_count` items.
///
/// Empty when the items fit in one flat level.
pub fn group_sizes(item_count: usize, fan_out: usize) -> Vec<usize> {
    let fan_out = fan_out.max(MIN_FAN_OUT);
    if item_count <= fan_out {
        return Vec::new();
    }

    let mut capacity = fan_out;
    while capacity.saturating_mul(fan_out) < item_count {
        capacity = capacity.saturating_mul(fan_out);
    }
    let group_count = item_count.div_ceil(capacity).max(2);

    let mut remaining = item_count;
    (0..group_count)
        .map(|done| {
            let size = remaining.div_ceil(group_count - done);
            remaining -= size;
            size
        })
        .collect()
}

/// Submenu label built from its first and last member labels.
pub fn group_label(first: &str, last: &str, config: &MenuConfig) -> String {
    let prefix_chars = config.label_prefix_chars();
    let mut label: String = first.chars().take(prefix_chars).collect();
    label.push_str(config.group_separator());
    label.extend(last.chars().take(prefix_chars));
    label
}

/// A computed menu for one item list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout<I> {
    nodes: Vec<MenuNode<I>>,
    /// Path of every entry, indexed like the item list.
    entry_paths: Vec<EntryPath>,
    /// Item index of the selected entry; `None` only for an empty list.
    selected: Option<usize>,
    /// Whether the selection is the requested identity rather than a fallback.
    matched: bool,
}

impl<I: Clone + PartialEq> MenuLayout<I> {
    /// Lay out `items`, preselecting `requested` when present.
    ///
    /// When nothing matches `requested`, the first entry is selected instead.
    pub fn build(items: &[ChooserItem<I>], requested: Option<&I>, config: &MenuConfig) -> Self {
        let mut builder = LayoutBuilder {
            config,
            requested,
            entry_paths: Vec::with_capacity(items.len()),
            selected: None,
        };

        let nodes = if items.is_empty() {
            vec![MenuNode::Placeholder {
                label: config.empty_label().to_string(),
            }]
        } else {
            builder.build_level(items, 0, &EntryPath::default())
        };

        let matched = builder.selected.is_some();
        let selected = builder.selected.or((!items.is_empty()).then_some(0));

        Self {
            nodes,
            entry_paths: builder.entry_paths,
            selected,
            matched,
        }
    }
}

impl<I> MenuLayout<I> {
    /// Top-level nodes of the menu.
    pub fn nodes(&self) -> &[MenuNode<I>] {
        &self.nodes
    }

    /// Item index of the selected entry.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_path(&self) -> Option<&EntryPath> {
        self.selected.and_then(|index| self.entry_paths.get(index))
    }

    /// True when the requested identity was found among the items.
    pub fn matched_request(&self) -> bool {
        self.matched
    }

    /// Path of the entry for the item at `index`.
    pub fn entry_path(&self, index: usize) -> Option<&EntryPath> {
        self.entry_paths.get(index)
    }

    /// Item index of the entry at `path`, if `path` names an entry.
    pub fn resolve(&self, path: &EntryPath) -> Option<usize> {
        self.entry_paths.iter().position(|candidate| candidate == path)
    }

    /// Number of selectable entries.
    pub fn entry_count(&self) -> usize {
        self.entry_paths.len()
    }

    /// Number of submenus at every depth.
    pub fn group_count(&self) -> usize {
        fn count<I>(nodes: &[MenuNode<I>]) -> usize {
            nodes
                .iter()
                .map(|node| match node {
                    MenuNode::Group { children, .. } => 1 + count(children),
                    _ => 0,
                })
                .sum()
        }
        count(&self.nodes)
    }

    /// Depth of the deepest submenu; zero for a flat menu.
    pub fn depth(&self) -> usize {
        self.entry_paths
            .iter()
            .map(|path| path.depth().saturating_sub(1))
            .max()
            .unwrap_or(0)
    }

    /// Identities of all entries in menu order.
    pub fn flatten(&self) -> Vec<&I> {
        fn walk<'a, I>(nodes: &'a [MenuNode<I>], out: &mut Vec<&'a I>) {
            for node in nodes {
                match node {
                    MenuNode::Entry { identity, .. } => out.push(identity),
                    MenuNode::Group { children, .. } => walk(children, out),
                    MenuNode::Placeholder { .. } => {}
                }
            }
        }

        let mut out = Vec::with_capacity(self.entry_paths.len());
        walk(&self.nodes, &mut out);
        out
    }
}

struct LayoutBuilder<'a, I> {
    config: &'a MenuConfig,
    requested: Option<&'a I>,
    entry_paths: Vec<EntryPath>,
    selected: Option<usize>,
}

impl<I: Clone + PartialEq> LayoutBuilder<'_, I> {
    /// Build one menu level for `items`, the first of which is item `offset`.
    fn build_level(
        &mut self,
        items: &[ChooserItem<I>],
        offset: usize,
        parent: &EntryPath,
    ) -> Vec<MenuNode<I>> {
        let sizes = group_sizes(items.len(), self.config.fan_out());
        if sizes.is_empty() {
            return items
                .iter()
                .enumerate()
                .map(|(position, item)| self.entry(item, offset + position, parent.child(position)))
                .collect();
        }

        let mut start = 0;
        sizes
            .into_iter()
            .enumerate()
            .map(|(position, size)| {
                let members = &items[start..start + size];
                let label = group_label(
                    &members[0].label,
                    &members[size - 1].label,
                    self.config,
                );
                let children = self.build_level(members, offset + start, &parent.child(position));
                start += size;
                MenuNode::Group { label, children }
            })
            .collect()
    }

    fn entry(&mut self, item: &ChooserItem<I>, index: usize, path: EntryPath) -> MenuNode<I> {
        // Last match wins
        if self.requested == Some(&item.identity) {
            self.selected = Some(index);
        }
        self.entry_paths.push(path);
        MenuNode::Entry {
            label: item.label.clone(),
            identity: item.identity.clone(),
        }
    }
}
