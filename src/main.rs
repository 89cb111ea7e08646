use clap::Parser;
use recipe_finder::adapters::{build_catalog_source, load_catalog};
use recipe_finder::app::repl::{run_command, run_session};
use recipe_finder::config::Command;
use recipe_finder::domain::ports::{ConfigProvider, Notifier};
use recipe_finder::utils::error::ErrorSeverity;
use recipe_finder::utils::{logger, validation::Validate};
use recipe_finder::{
    CliConfig, ConsoleNotifier, RecipeError, RecipeFinder, SimulatedRecognizer, TomlConfig,
    TracingNotifier,
};
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Load the TOML config when one is given
    let toml = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let verbose = cli.verbose || toml.as_ref().map(|t| t.verbose()).unwrap_or(false);
    let provider: &dyn ConfigProvider = match &toml {
        Some(config) => config,
        None => &cli,
    };
    logger::init_logger(provider.log_format(), verbose);

    tracing::info!("🚀 Starting recipe-finder");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let validation = match &toml {
        Some(config) => config.validate(),
        None => cli.validate(),
    };
    if let Err(e) = validation {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli.command, provider).await {
        tracing::error!(
            "❌ recipe-finder failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(command: &Command, provider: &dyn ConfigProvider) -> Result<(), RecipeError> {
    let source = build_catalog_source(provider.catalog_source())?;
    let catalog = load_catalog(source.as_ref()).await?;

    let recognizer = SimulatedRecognizer::new(
        provider.recognizer_delay(),
        provider.placeholder_ingredients(),
    );
    // json mode: notifications go to the log
    let notifier: Box<dyn Notifier> = match provider.log_format() {
        "json" => Box::new(TracingNotifier),
        _ => Box::new(ConsoleNotifier),
    };
    let finder = RecipeFinder::new(catalog, recognizer, notifier);
    let mut stdout = std::io::stdout();

    match command {
        Command::Interactive => {
            run_session(&finder, BufReader::new(tokio::io::stdin()), &mut stdout).await
        }
        other => run_command(&finder, other.clone(), &mut stdout).await,
    }
}
