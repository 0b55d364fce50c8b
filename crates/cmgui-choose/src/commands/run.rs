use std::fmt;
use std::str::FromStr;

use clap::ArgMatches;
use serde::Serialize;
use tracing::info;

use cmgui_chooser::{Chooser, ChooserCommand, ChooserEvent, DetachedSurface, EntryPath, Store};

use super::helpers::{log_command_failure, resolve_menu_config};
use super::input::read_items;

/// One scripted operation, as given with `--op`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Operation {
    Set(String),
    Pick(String),
    Activate(EntryPath),
    Rebuild(String),
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s
            .split_once('=')
            .ok_or_else(|| format!("Invalid operation '{s}': expected KIND=VALUE"))?;
        match kind {
            "set" => Ok(Operation::Set(value.to_string())),
            "pick" => Ok(Operation::Pick(value.to_string())),
            "activate" => value
                .parse()
                .map(Operation::Activate)
                .map_err(|e| format!("Invalid operation '{s}': {e}")),
            "rebuild" => Ok(Operation::Rebuild(value.to_string())),
            _ => Err(format!(
                "Invalid operation '{s}': kind must be set, pick, activate or rebuild"
            )),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Set(identity) => write!(f, "set={identity}"),
            Operation::Pick(identity) => write!(f, "pick={identity}"),
            Operation::Activate(path) => write!(f, "activate={path}"),
            Operation::Rebuild(file) => write!(f, "rebuild={file}"),
        }
    }
}

#[derive(Serialize)]
struct Step {
    op: String,
    events: Vec<ChooserEvent<String>>,
}

#[derive(Serialize)]
struct RunReport {
    steps: Vec<Step>,
    current: Option<String>,
    notifications: u64,
}

pub(crate) fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let file = matches.get_one::<String>("file").map(String::as_str);
    let initial = matches.get_one::<String>("initial").cloned();

    // Reject a malformed script before touching any input
    let operations = matches
        .get_many::<String>("op")
        .into_iter()
        .flatten()
        .map(|op| op.parse::<Operation>())
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        event = "cli.run_started",
        json_output = json_output,
        op_count = operations.len()
    );

    let menu = resolve_menu_config(matches)?;
    let items = read_items(file)?;
    let mut chooser = Chooser::new(items, initial, menu, DetachedSurface)?;

    let mut steps = Vec::with_capacity(operations.len());
    for operation in operations {
        let command = to_command(&operation, &chooser)?;
        let step_events = match chooser.dispatch(command) {
            Ok(step_events) => step_events,
            Err(e) => {
                eprintln!("Failed to apply '{}': {}", operation, e);
                log_command_failure("cli.run_failed", &e);
                return Err(e.into());
            }
        };

        if !json_output {
            for event in &step_events {
                println!("{}: {}", operation, describe(event));
            }
        }
        steps.push(Step {
            op: operation.to_string(),
            events: step_events,
        });
    }

    let current = chooser.current().cloned();
    if json_output {
        let report = RunReport {
            steps,
            current,
            notifications: chooser.notification_count(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("current: {}", display_identity(current.as_ref()));
    }

    info!(
        event = "cli.run_completed",
        notifications = chooser.notification_count()
    );
    Ok(())
}

fn to_command(
    operation: &Operation,
    chooser: &Chooser<String, DetachedSurface>,
) -> Result<ChooserCommand<String>, Box<dyn std::error::Error>> {
    Ok(match operation {
        Operation::Set(identity) => ChooserCommand::SetCurrent {
            identity: identity.clone(),
        },
        Operation::Pick(identity) => ChooserCommand::Pick {
            identity: identity.clone(),
        },
        Operation::Activate(path) => ChooserCommand::Activate { path: path.clone() },
        Operation::Rebuild(file) => ChooserCommand::Rebuild {
            items: read_items(Some(file))?,
            identity: chooser.current().cloned(),
        },
    })
}

fn describe(event: &ChooserEvent<String>) -> String {
    match event {
        ChooserEvent::Rebuilt { item_count } => format!("rebuilt with {item_count} items"),
        ChooserEvent::SelectionCoerced { requested, actual } => format!(
            "coerced {} to {}",
            display_identity(requested.as_ref()),
            display_identity(actual.as_ref())
        ),
        ChooserEvent::SelectionChanged { identity } => {
            format!("changed to {}", display_identity(identity.as_ref()))
        }
    }
}

fn display_identity(identity: Option<&String>) -> &str {
    identity.map_or("<none>", String::as_str)
}
