//! Item list input: one item per line.
//!
//! `ID<TAB>LABEL` gives an explicit identity; a line without a tab is used
//! as both identity and label. Blank lines are skipped.

use std::fs;
use std::io::{self, Read};

use tracing::debug;

use cmgui_chooser::ChooserItem;

pub(crate) fn parse_items(text: &str) -> Vec<ChooserItem<String>> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once('\t') {
            Some((identity, label)) => ChooserItem::new(identity.to_string(), label),
            None => ChooserItem::new(line.to_string(), line),
        })
        .collect()
}

/// Read items from `path`, or from stdin when `path` is absent or `-`.
pub(crate) fn read_items(path: Option<&str>) -> io::Result<Vec<ChooserItem<String>>> {
    let text = match path {
        None | Some("-") => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
        Some(path) => fs::read_to_string(path)
            .map_err(|e| io::Error::new(e.kind(), format!("cannot read '{path}': {e}")))?,
    };

    let items = parse_items(&text);
    debug!(
        event = "cli.input.items_read",
        source = path.unwrap_or("-"),
        item_count = items.len()
    );
    Ok(items)
}
