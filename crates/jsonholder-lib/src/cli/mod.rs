use std::path::PathBuf;

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Re-serialize the input as compact JSON.
    Compact(Input),
    /// Re-serialize the input as indented JSON.
    Pretty(Input),
    /// Only report whether the input parses.
    Check(Input),
}

/// Where to read the JSON document from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

fn input_arg() -> clap::Arg {
    clap::Arg::new("file")
        .value_name("FILE")
        .value_parser(clap::value_parser!(PathBuf))
        .help("JSON file to read; reads stdin when omitted or '-'")
}

/// Creates the root clap Command with a global `--verbose` flag and the
/// `compact`, `pretty` and `check` subcommands.
pub fn create_root_command() -> clap::Command {
    clap::Command::new("jsonholder")
        .about("Re-serialize and validate JSON documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .help("Enable verbose output"),
        )
        .subcommand(
            clap::Command::new("compact")
                .about("Print the input as compact JSON")
                .arg(input_arg()),
        )
        .subcommand(
            clap::Command::new("pretty")
                .about("Print the input as indented JSON")
                .arg(input_arg()),
        )
        .subcommand(
            clap::Command::new("check")
                .about("Check that the input is valid JSON")
                .arg(input_arg()),
        )
}

/// Returns whether verbose mode is active based on parsed matches.
pub fn is_verbose(matches: &clap::ArgMatches) -> bool {
    matches.get_flag("verbose")
}

/// Maps parsed matches to the requested action, if a known subcommand was given.
pub fn action(matches: &clap::ArgMatches) -> Option<Action> {
    let (name, sub) = matches.subcommand()?;
    let input = match sub.get_one::<PathBuf>("file") {
        Some(path) if path.as_os_str() != "-" => Input::File(path.clone()),
        _ => Input::Stdin,
    };
    match name {
        "compact" => Some(Action::Compact(input)),
        "pretty" => Some(Action::Pretty(input)),
        "check" => Some(Action::Check(input)),
        _ => None,
    }
}
