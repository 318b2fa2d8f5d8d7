//! CLI entrypoint for AI Council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use council_application::{DebateParams, RunDebateInput, RunDebateUseCase};
use council_domain::DebateMode;
use council_infrastructure::{ConfigLoader, Severity, bootstrap};
use council_presentation::{Cli, ConsoleFormatter, CouncilRepl, OutputFormat, ProgressReporter};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting AI Council");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // Report configuration issues up front
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => eprintln!("Warning: {}", issue.message),
            Severity::Error => eprintln!("Error: {}", issue.message),
        }
    }

    if cli.show_config {
        for line in ConfigLoader::config_sources() {
            println!("{}", line);
        }
        println!();
        println!("Effective configuration:");
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    if issues.iter().any(|i| i.severity == Severity::Error) {
        bail!("Configuration is invalid; fix the errors above and retry");
    }

    // === Dependency Injection ===
    // Build the registry and routing gateway from the merged configuration
    let (registry, gateway) = bootstrap(&config);
    let use_case = RunDebateUseCase::new(registry, Arc::new(gateway));

    if cli.list_models {
        println!("Registered models:");
        for model in use_case.registry().all() {
            let status = if model.is_configured() {
                "ready"
            } else {
                "not configured"
            };
            let domains: Vec<&str> = model.domains().iter().map(|d| d.as_str()).collect();
            println!(
                "  {:<24} {:<8} {:<16} {}",
                model.id(),
                model.backend_kind().as_str(),
                status,
                domains.join(", ")
            );
        }
        return Ok(());
    }

    if cli.recommend {
        let question = match cli.question {
            Some(ref q) => q,
            None => bail!("--recommend needs a question to classify"),
        };
        let recommendation = use_case.recommend_models(question);
        println!("Domain: {}", recommendation.domain);
        println!("Recommended models:");
        for model in &recommendation.models {
            println!("  - {} ({})", model.id(), model.display_name());
        }
        return Ok(());
    }

    // Debate mode and parameters: CLI flags override file config. Passing
    // --rounds explicitly forces fixed mode even when the config defaults to
    // consensus seeking.
    let consensus = cli.consensus || (config.debate.consensus && cli.rounds.is_none());
    let mode = if consensus {
        DebateMode::ConsensusSeeking {
            max_rounds: cli.max_rounds.unwrap_or(config.debate.max_rounds),
        }
    } else {
        DebateMode::FixedRounds(cli.rounds.unwrap_or(config.debate.rounds))
    };

    let params = DebateParams::default()
        .with_similarity_threshold(
            cli.similarity_threshold
                .unwrap_or(config.debate.similarity_threshold),
        )
        .with_min_agreement_ratio(cli.min_agreement.unwrap_or(config.debate.min_agreement_ratio))
        .with_per_call_timeout(Duration::from_secs(
            cli.timeout.unwrap_or(config.debate.timeout_secs),
        ));

    let synthesizer = cli.synthesizer.clone().or(config.debate.synthesizer.clone());

    // Interactive mode
    if cli.interactive {
        let repl = CouncilRepl::new(use_case, mode, params)
            .with_models(cli.model.clone())
            .with_synthesizer(synthesizer)
            .with_output(cli.output)
            .with_progress(!cli.quiet);

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --interactive for the REPL."),
    };

    // Print header
    if !cli.quiet {
        println!();
        println!("+============================================================+");
        println!("|                  AI Council - Debate                       |");
        println!("+============================================================+");
        println!();
        println!("Question: {}", question);
        println!("Mode:     {}", mode);
        println!();
    }

    // Build input
    let mut input = RunDebateInput::new(question, mode).with_params(params);

    if !cli.model.is_empty() {
        input = input.with_models(cli.model.clone());
    }

    if let Some(synthesizer) = synthesizer {
        input = input.with_synthesizer(synthesizer);
    }

    // Execute with or without progress reporting
    let result = if cli.quiet {
        use_case.execute(input).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    };

    // Output results
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&result),
        OutputFormat::Answer => ConsoleFormatter::format_answer_only(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };

    println!("{}", output);

    Ok(())
}
