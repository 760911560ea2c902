use anyhow::{bail, Context};
use serde_json::Value;

use jsonholder_lib::cli::{self, create_root_command, is_verbose, Action, Input};
use jsonholder_lib::errors::{handle_command_error, handle_fatal, JsonHolderError};
use jsonholder_lib::{logger, output, HolderConfig, SerializationAdapter};

/// Result of a successful command.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// Text to print on stdout.
    Document(String),
    /// The input parsed.
    Valid,
}

fn main() {
    let matches = create_root_command().get_matches();

    let config = HolderConfig::try_from_env().unwrap_or_else(|e| {
        logger::init(false);
        handle_fatal(e)
    });
    logger::init(config.debug || is_verbose(&matches));

    let adapter = SerializationAdapter::from_config(&config);

    let Some(action) = cli::action(&matches) else {
        handle_fatal(JsonHolderError::Config("unknown subcommand".into()))
    };
    tracing::debug!(?action, indent = config.indent, "Executing command");

    match run(&adapter, &action) {
        Ok(Outcome::Document(text)) => output::document(&text),
        Ok(Outcome::Valid) => output::success("valid JSON"),
        Err(e) => {
            match e.downcast_ref::<JsonHolderError>() {
                Some(err) => handle_command_error(err),
                None => output::error(&format!("{:#}", e)),
            }
            std::process::exit(1);
        }
    }
}

fn run(adapter: &SerializationAdapter, action: &Action) -> anyhow::Result<Outcome> {
    let input = match action {
        Action::Compact(input) | Action::Pretty(input) | Action::Check(input) => input,
    };

    let text = read_input(input)?;
    if text.trim().is_empty() {
        bail!("input is empty");
    }
    let value: Value = adapter
        .deserialize(Some(&text))
        .with_context(|| format!("failed to parse {}", describe(input)))?;

    Ok(match action {
        Action::Compact(_) => Outcome::Document(adapter.serialize(&value)),
        Action::Pretty(_) => Outcome::Document(adapter.serialize_pretty(Some(&value))),
        Action::Check(_) => Outcome::Valid,
    })
}

fn read_input(input: &Input) -> anyhow::Result<String> {
    let text = match input {
        Input::Stdin => std::io::read_to_string(std::io::stdin()).map_err(JsonHolderError::from),
        Input::File(path) => std::fs::read_to_string(path).map_err(JsonHolderError::from),
    };
    text.with_context(|| format!("failed to read {}", describe(input)))
}

fn describe(input: &Input) -> String {
    match input {
        Input::Stdin => "stdin".to_string(),
        Input::File(path) => path.display().to_string(),
    }
}
