use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;
use std::time::Duration;

use coach_core::{
    AnalysisRequest, CredentialSource, EnvCredentials, ModelRegistry, StaticCredentials,
};
use coach_feedback::FeedbackService;
use coach_gemini::GeminiClient;
use coach_server::ServerConfig;

mod logging;
mod render;

#[derive(Parser)]
#[command(name = "coach")]
#[command(about = "Direct, structured feedback on your prompts, powered by Gemini", long_about = None)]
struct Cli {
    /// Gemini API key. When omitted, GEMINI_API_KEY is read on every analysis.
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Upper bound in seconds on one provider call
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API
    Serve {
        /// Listen address (default 127.0.0.1:3000)
        #[arg(long, env = "COACH_ADDR")]
        addr: Option<String>,
    },
    /// Analyze one prompt and print the feedback
    Analyze {
        /// The prompt to evaluate
        prompt: String,

        /// Model id (see `coach models`)
        #[arg(short, long)]
        model: Option<String>,
    },
    /// List the available models
    Models,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_filter = match cli.command {
        Command::Serve { .. } => "info",
        _ => "warn",
    };
    logging::init(default_filter).map_err(|e| anyhow!(e))?;

    match cli.command {
        Command::Serve { addr } => {
            let (service, server_config) = build_service(cli.api_key, cli.timeout_secs)?;
            let addr = addr.unwrap_or(server_config.addr);
            tracing::info!(%addr, timeout = ?service.timeout(), "starting prompt coach");
            coach_server::run_serve(Some(&addr), service)
                .await
                .map_err(|e| anyhow!(e))?;
        }
        Command::Analyze { prompt, model } => {
            let (service, _) = build_service(cli.api_key, cli.timeout_secs)?;
            let mut request = AnalysisRequest::new(prompt);
            request.model = model;

            println!("{} Analyzing...", "🤖".blue());
            match service.analyze(&request).await {
                Ok(feedback) => print!("{}", render::render_feedback(&feedback)),
                Err(e) => {
                    eprintln!("{} {}", "❌".red(), e.message.red());
                    std::process::exit(1);
                }
            }
        }
        Command::Models => {
            // Listing needs no provider, so no Gemini config is read.
            print!("{}", render::render_models(&ModelRegistry::builtin()));
        }
    }

    Ok(())
}

/// Provider, credentials and timeouts for the commands that call Gemini.
fn build_service(
    api_key: Option<String>,
    timeout_secs: Option<u64>,
) -> Result<(Arc<FeedbackService>, ServerConfig)> {
    let mut server_config = ServerConfig::from_env()?;
    if let Some(secs) = timeout_secs {
        if secs == 0 {
            return Err(anyhow!("--timeout-secs must be a positive whole number"));
        }
        server_config.analyze_timeout = Duration::from_secs(secs);
    }

    let credentials: Arc<dyn CredentialSource> = match api_key {
        Some(key) => Arc::new(StaticCredentials::new(Some(key))),
        None => Arc::new(EnvCredentials::default()),
    };

    let provider = Arc::new(GeminiClient::from_env()?);
    let service = Arc::new(
        FeedbackService::new(provider, credentials).with_timeout(server_config.analyze_timeout),
    );
    Ok((service, server_config))
}
