//! CLI entrypoint for tokinfo
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tokinfo_application::{EnhancePromptInput, EnhancePromptUseCase};
use tokinfo_infrastructure::{
    ApiKey, ConfigLoader, FileConfig, GeminiClient, GeminiLlmGateway, JsonGuidelineStore,
    emit_output, resolve_input,
};
use tokinfo_presentation::{Cli, InteractiveAnswerSource, ProgressReporter};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the enhanced prompt
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(cli.log_level()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = load_config(&cli)?;
    debug!("Effective configuration: {:?}", config);

    // === Credentials ===
    // Checked before any file is touched
    let api_key = ApiKey::from_env(&config.gemini.api_key_env)
        .context("Gemini credentials are required")?;

    // === Input ===
    let raw = cli.prompt.as_deref().unwrap_or_default();
    let prompt = resolve_input(raw)
        .inspect_err(|e| debug!("Run ended with a {:?} error", e.kind()))
        .context("Failed to read the prompt")?;

    info!(
        "Starting tokinfo (model: {}, guidelines: {})",
        config.gemini.model,
        config.guidelines.path.display()
    );

    // === Dependency Injection ===
    let client = Arc::new(
        GeminiClient::new(api_key, &config.gemini.base_url, &config.gemini.model)
            .context("Failed to initialize the Gemini client")?,
    );
    let gateway = Arc::new(GeminiLlmGateway::new(client));
    let guidelines = Arc::new(JsonGuidelineStore::new(&config.guidelines.path));
    let answers = Arc::new(InteractiveAnswerSource::new());

    let mut use_case = EnhancePromptUseCase::new(gateway, guidelines, answers);
    if cli.show_progress() {
        use_case = use_case.with_progress(Arc::new(ProgressReporter::new()));
    }

    let output = use_case
        .execute(EnhancePromptInput::new(prompt))
        .await
        .inspect_err(|e| debug!("Run ended with a {:?} error", e.kind()))
        .context("Prompt enhancement failed")?;

    info!(
        "Applied technique '{}' with {} answer(s)",
        output.technique.name,
        output.answers.len()
    );

    emit_output(output.enhanced.as_str(), cli.output.as_deref())
        .inspect_err(|e| debug!("Run ended with a {:?} error", e.kind()))
        .context("Failed to emit the enhanced prompt")?;

    Ok(())
}

/// Load, override and validate the configuration
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    config.apply_overrides(cli.model.as_deref(), cli.guidelines.as_deref());

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
