//! Command-line front end for the decimal math operators
//!
//! Lists, describes and evaluates the registered operators. Pass `null` as
//! an argument to supply the absence state.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use decimal_math_operators::metadata::DEFAULT_LOCALE;
use decimal_math_operators::{OperatorRegistry, RegistryConfig, format_decimal, parse_decimal};
use std::process;

#[derive(Parser)]
#[command(name = "decimal-math")]
#[command(about = "Evaluate decimal math operators with null propagation")]
#[command(version)]
struct Cli {
    /// JSON registry configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,
    /// Enable extended operators (overrides the configuration file)
    #[arg(short, long, global = true)]
    extended: bool,
    /// Log registry activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered operators
    List {
        /// Print metadata as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Show metadata for one operator
    Describe {
        /// Operator name
        name: String,
        /// Locale for descriptions (defaults to the configured locale)
        #[arg(short, long)]
        locale: Option<String>,
    },
    /// Evaluate an operator
    Eval {
        /// Operator name
        name: String,
        /// Decimal arguments; `null` is the absence state
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => RegistryConfig::from_file(path)
            .with_context(|| format!("loading configuration from '{path}'"))?,
        None => RegistryConfig::default(),
    };
    if cli.extended {
        config.include_extended = true;
    }

    let registry = OperatorRegistry::with_config(&config)?;

    match cli.command {
        Commands::List { json } => handle_list(&registry, json),
        Commands::Describe { name, locale } => handle_describe(&registry, &name, locale.as_deref()),
        Commands::Eval { name, args } => handle_eval(&registry, &name, &args),
    }
}

fn handle_list(registry: &OperatorRegistry, json: bool) -> Result<()> {
    if json {
        let metadata: Vec<_> = registry.metadata().collect();
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        return Ok(());
    }

    let locale = &registry.config().default_locale;
    println!("{}", registry.top_level_folder());
    for metadata in registry.metadata() {
        let folder = metadata.folder.resolve(locale, DEFAULT_LOCALE).unwrap_or("");
        let arguments: Vec<&str> = metadata
            .arguments
            .iter()
            .map(|arg| arg.name.resolve(locale, DEFAULT_LOCALE).unwrap_or("?"))
            .collect();
        println!("  {folder}/{}({})", metadata.name, arguments.join(", "));
    }
    Ok(())
}

fn handle_describe(registry: &OperatorRegistry, name: &str, locale: Option<&str>) -> Result<()> {
    let Some(operator) = registry.get(name) else {
        bail!("unknown operator '{name}'");
    };
    let locale = locale.unwrap_or(&registry.config().default_locale);
    let metadata = operator.metadata();

    println!("Name: {}", metadata.name);
    println!(
        "Folder: {}/{}",
        registry.top_level_folder(),
        metadata.folder.resolve(locale, DEFAULT_LOCALE).unwrap_or("")
    );
    println!(
        "Description: {}",
        metadata.description.resolve(locale, DEFAULT_LOCALE).unwrap_or("")
    );
    for (index, argument) in metadata.arguments.iter().enumerate() {
        println!(
            "Argument {}: {}",
            index + 1,
            argument.name.resolve(locale, DEFAULT_LOCALE).unwrap_or("?")
        );
    }
    if metadata.extended {
        println!("Catalog: extended");
    }
    Ok(())
}

fn handle_eval(registry: &OperatorRegistry, name: &str, args: &[String]) -> Result<()> {
    let values = args
        .iter()
        .map(|arg| parse_decimal(arg))
        .collect::<Result<Vec<_>, _>>()?;

    let result = registry
        .invoke(name, &values)
        .with_context(|| format!("evaluating '{name}'"))?;
    println!("{}", format_decimal(result.as_ref()));
    Ok(())
}
