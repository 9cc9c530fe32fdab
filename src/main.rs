//! # LLM Models Viewer
//!
//! Lists the models a provider exposes for a given API key, newest first.
//!
//! ## Modes
//! - Interactive form (default): pick a provider, paste a key, fetch
//! - `models` subcommand: one-shot plain text or JSON listing
//! - `completions` subcommand: shell completion scripts

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    match args.command {
        Some(Commands::Models {
            provider,
            api_key,
            query,
            json,
            endpoint,
        }) => {
            core::cli::run_models(core::cli::ModelsOptions {
                provider,
                api_key: api_key.as_deref(),
                query: query.as_deref(),
                json,
                endpoint: endpoint.as_deref(),
            })
            .await;
        }
        Some(Commands::Completions { shell }) => {
            cli::generate(
                shell,
                &mut Args::command(),
                core::app::NAME,
                &mut std::io::stdout(),
            );
        }
        None => run::launch_tui().await?,
    }

    Ok(())
}
