use anyhow::anyhow;
use clap::Parser;
use dotenvy::dotenv;
use genai_cli::config::CliConfig;
use genai_cli::providers::GeminiClient;

/// Generate a text completion and print it to stdout.
#[derive(Parser, Debug)]
#[command(name = "genai-cli", version, about)]
struct Cli {
    /// Prompt to complete.
    #[arg(default_value = "hello")]
    prompt: String,

    /// Override the configured model.
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let config = CliConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow!("Configuration error: {}", e)
    })?;

    // Logs go to stderr so stdout carries only the completion text.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let model = cli
        .model
        .unwrap_or_else(|| config.models.text_model.clone());

    let client = GeminiClient::new(config.google, &model);

    match client.complete(&cli.prompt).await {
        Ok(text) => {
            println!("{}", text);
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Completion failed");
            Err(anyhow!("Completion failed: {}", e))
        }
    }
}
