use std::path::Path;

use clap::{Args, Parser, Subcommand};
use schema_check_core::{FlagSet, FlagSetError, FlagSpec};

mod validator;

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "schema-check")]
#[command(about = "Validate config files against JSON Schemas")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a config file against a JSON Schema.
    Validate(ValidateArgs),
    /// Show version and build metadata.
    Version,
}

// Both flags are optional to clap: presence and non-emptiness are enforced
// by the flag guard so a missing flag and an empty one get distinct errors.
#[derive(Debug, Args)]
struct ValidateArgs {
    /// Schema file to validate against.
    #[arg(short, long)]
    schema: Option<String>,
    /// Config file to be validated.
    #[arg(short, long)]
    config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Validate(args) => run_validate(args),
        Command::Version => run_version(),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let flags = declare_flags(&args).map_err(|err| err.to_string())?;

    schema_check_core::dispatch(&flags, "schema", "config", |request| {
        validator::validate_files(
            Path::new(&request.schema_path),
            Path::new(&request.config_path),
        )
    })
    .map_err(|err| err.to_string())?;

    println!("Config conforms to schema.");
    Ok(())
}

fn run_version() -> Result<(), String> {
    println!("Version: {PACKAGE_VERSION}");
    println!(
        "Git commit hash: {}",
        option_env!("GIT_COMMIT").unwrap_or("unknown")
    );
    println!("OS: {}", std::env::consts::OS);
    println!("Arch: {}", std::env::consts::ARCH);
    Ok(())
}

fn declare_flags(args: &ValidateArgs) -> Result<FlagSet, FlagSetError> {
    let mut flags = FlagSet::new();
    flags.declare(guarded_flag("schema", args.schema.as_deref()))?;
    flags.declare(guarded_flag("config", args.config.as_deref()))?;
    Ok(flags)
}

fn guarded_flag(name: &str, value: Option<&str>) -> FlagSpec {
    match value {
        Some(value) => FlagSpec::new(name).required().supplied(value),
        None => FlagSpec::new(name).required(),
    }
}
