//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use crate::core::providers::{self, ProviderConfig};

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  llm-models-viewer                                   Launch the interactive form
  llm-models-viewer models -p openai                  List models (key from OPENAI_API_KEY)
  llm-models-viewer models -p gemini -k -             Read the API key from stdin
  llm-models-viewer models -p groq --query llama      Only models matching \"llama\"
  llm-models-viewer models -p cerebras --json         Print records as JSON
  llm-models-viewer models -p openai --endpoint URL   List from an OpenAI-compatible gateway
  llm-models-viewer completions bash                  Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Browse the models available from OpenAI, Groq, Gemini, or Cerebras",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch and print the provider's models, newest first
    Models {
        /// Provider name (OpenAI, Groq, Gemini, Cerebras; case-insensitive)
        #[arg(short = 'p', long, value_parser = providers::parse_provider)]
        provider: ProviderConfig,
        /// API key; use '-' to read it from stdin. Defaults to the provider's env var
        #[arg(short = 'k', long)]
        api_key: Option<String>,
        /// Filter models by identifier or owner
        #[arg(long)]
        query: Option<String>,
        /// Print records as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Override the listing URL (the provider's auth mode is kept)
        #[arg(long)]
        endpoint: Option<String>,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// True when no subcommand is given and the interactive form opens.
    pub fn is_interactive(&self) -> bool {
        self.command.is_none()
    }
}
