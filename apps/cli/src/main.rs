mod input;
mod report;

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use runval_log::{Config, Format};
use runval_validator::ValidationRules;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Validate values against runval rule strings.
#[derive(Parser)]
#[command(
    name = "runval",
    version,
    about = "Validate values against runval rule strings",
    subcommand_negates_reqs = true
)]
struct Cli {
    /// Rule string, e.g. "required && between:1,$Max"
    #[arg(long, env = "RUNVAL_RULES", required = true)]
    rules: Option<String>,

    /// Value to validate: a JSON literal, or plain text
    #[arg(long, required = true, allow_hyphen_values = true)]
    value: Option<String>,

    /// Context object: inline JSON object or path to a JSON file
    #[arg(long)]
    context: Option<String>,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    #[command(flatten)]
    logging: LogArgs,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args)]
struct LogArgs {
    /// Log filter directives
    #[arg(long, global = true, env = "RUNVAL_LOG")]
    log_level: Option<String>,

    /// Log format (pretty, compact or json)
    #[arg(long, global = true, env = "RUNVAL_LOG_FORMAT")]
    log_format: Option<Format>,
}

#[derive(Subcommand)]
enum Command {
    /// List every rule name and whether it takes arguments
    Rules,
}

/// Exit status for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Valid,
    Invalid,
    Unparsable,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Valid => Self::SUCCESS,
            Outcome::Invalid => Self::from(1),
            Outcome::Unparsable => Self::from(2),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.logging) {
        eprintln!("error: {e}");
        return ExitCode::from(2);
    }

    match run(cli) {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_logging(args: &LogArgs) -> runval_log::LogResult<()> {
    let mut config = Config::from_env();
    if let Some(level) = &args.log_level {
        config.level.clone_from(level);
    }
    if let Some(format) = args.log_format {
        config.format = format;
    }
    runval_log::init_with(config)
}

fn run(cli: Cli) -> anyhow::Result<Outcome> {
    if let Some(Command::Rules) = cli.command {
        report::rules(cli.output)?;
        return Ok(Outcome::Valid);
    }

    let (Some(rules), Some(value)) = (cli.rules, cli.value) else {
        anyhow::bail!("--rules and --value are required");
    };

    let value = input::parse_value(&value)?;
    let context = cli.context.as_deref().map(input::load_context).transpose()?;

    let rules = ValidationRules::parse(&rules);
    if rules.is_empty() {
        anyhow::bail!("no rules found");
    }
    tracing::debug!(groups = rules.len(), valid = rules.is_valid(), "rules loaded");

    let errors = rules.validate(
        &value,
        context.as_ref().map(|c| c as &dyn runval_expression::FieldLookup),
    );
    report::errors(cli.output, &errors)?;

    Ok(if !rules.is_valid() {
        Outcome::Unparsable
    } else if errors.is_empty() {
        Outcome::Valid
    } else {
        Outcome::Invalid
    })
}
