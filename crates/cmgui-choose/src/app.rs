use clap::{Arg, ArgAction, Command, value_parser};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("cmgui-choose")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lay out and drive cmgui chooser menus")
        .long_about("cmgui-choose reads a list of items (one per line, `ID<TAB>LABEL` or a bare label) and shows how a chooser presents them: long lists cascade into grouped submenus labelled by their first and last members. The run command replays selection operations and reports every notification the chooser would send.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("layout")
                .about("Print the grouped menu for a list of items")
                .arg(
                    Arg::new("file")
                        .help("Item file, '-' or omitted for stdin")
                        .index(1)
                )
                .arg(
                    Arg::new("current")
                        .long("current")
                        .short('c')
                        .help("Identity to preselect (falls back to the first item)")
                )
                .arg(
                    Arg::new("fan-out")
                        .long("fan-out")
                        .short('f')
                        .help("Entries shown flat per menu level (overrides config)")
                        .value_parser(value_parser!(usize))
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("run")
                .about("Replay selection operations and report notifications")
                .arg(
                    Arg::new("file")
                        .help("Item file, '-' or omitted for stdin")
                        .index(1)
                )
                .arg(
                    Arg::new("initial")
                        .long("initial")
                        .short('i')
                        .help("Identity selected when the chooser is created")
                )
                .arg(
                    Arg::new("op")
                        .long("op")
                        .short('o')
                        .help("Operation: set=ID, pick=ID, activate=I.J.K or rebuild=FILE (repeatable)")
                        .action(ArgAction::Append)
                        .required(true)
                )
                .arg(
                    Arg::new("fan-out")
                        .long("fan-out")
                        .short('f')
                        .help("Entries shown flat per menu level (overrides config)")
                        .value_parser(value_parser!(usize))
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .value_parser(value_parser!(Shell))
                        .index(1)
                )
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "cmgui-choose");
        app.debug_assert();
    }

    #[test]
    fn test_cli_layout_command() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "cmgui-choose",
                "layout",
                "items.txt",
                "--current",
                "7",
                "--fan-out",
                "8",
            ])
            .unwrap();
        let layout_matches = matches.subcommand_matches("layout").unwrap();
        assert_eq!(layout_matches.get_one::<String>("file").unwrap(), "items.txt");
        assert_eq!(layout_matches.get_one::<String>("current").unwrap(), "7");
        assert_eq!(*layout_matches.get_one::<usize>("fan-out").unwrap(), 8);
        assert!(!layout_matches.get_flag("json"));
    }

    #[test]
    fn test_cli_layout_rejects_non_numeric_fan_out() {
        let result =
            build_cli().try_get_matches_from(vec!["cmgui-choose", "layout", "--fan-out", "many"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_run_collects_ops_in_order() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "cmgui-choose",
                "run",
                "--op",
                "set=2",
                "-o",
                "pick=3",
                "--op",
                "activate=1.0",
            ])
            .unwrap();
        let run_matches = matches.subcommand_matches("run").unwrap();
        let ops: Vec<&String> = run_matches.get_many::<String>("op").unwrap().collect();
        assert_eq!(ops, vec!["set=2", "pick=3", "activate=1.0"]);
        assert!(run_matches.get_one::<String>("file").is_none());
    }

    #[test]
    fn test_cli_run_requires_op() {
        let result = build_cli().try_get_matches_from(vec!["cmgui-choose", "run", "items.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_verbose_is_global() {
        let matches = build_cli()
            .try_get_matches_from(vec!["cmgui-choose", "layout", "-v"])
            .unwrap();
        assert!(matches.get_flag("verbose"));
    }

    #[test]
    fn test_cli_completions_command() {
        let matches = build_cli()
            .try_get_matches_from(vec!["cmgui-choose", "completions", "bash"])
            .unwrap();
        let completions_matches = matches.subcommand_matches("completions").unwrap();
        assert_eq!(
            *completions_matches.get_one::<Shell>("shell").unwrap(),
            Shell::Bash
        );
    }
}
