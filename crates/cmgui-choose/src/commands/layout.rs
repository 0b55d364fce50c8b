use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use cmgui_chooser::{Chooser, MenuNode, TextSurface};

use super::helpers::{log_command_failure, resolve_menu_config};
use super::input::read_items;

#[derive(Serialize)]
struct LayoutReport<'a> {
    current: Option<&'a String>,
    matched: bool,
    selected_path: Option<String>,
    item_count: usize,
    group_count: usize,
    depth: usize,
    nodes: &'a [MenuNode<String>],
}

pub(crate) fn handle_layout_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let file = matches.get_one::<String>("file").map(String::as_str);
    let current = matches.get_one::<String>("current").cloned();

    info!(
        event = "cli.layout_started",
        json_output = json_output,
        source = file.unwrap_or("-")
    );

    let menu = resolve_menu_config(matches)?;
    let items = read_items(file)?;

    let chooser = match Chooser::new(items, current, menu, TextSurface::new()) {
        Ok(chooser) => chooser,
        Err(e) => {
            eprintln!("Failed to build menu: {}", e);
            log_command_failure("cli.layout_failed", &e);
            return Err(e.into());
        }
    };

    let layout = chooser.layout();
    if json_output {
        let report = LayoutReport {
            current: chooser.current(),
            matched: layout.matched_request(),
            selected_path: layout.selected_path().map(ToString::to_string),
            item_count: layout.entry_count(),
            group_count: layout.group_count(),
            depth: layout.depth(),
            nodes: layout.nodes(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", chooser.surface().render(chooser.root()));
    }

    info!(
        event = "cli.layout_completed",
        item_count = layout.entry_count(),
        group_count = layout.group_count()
    );
    Ok(())
}
