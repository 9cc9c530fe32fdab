use std::env;
use std::io::{self, Read};

use crate::core::credential::Credential;
use crate::core::providers::ProviderConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API key is required (pass --api-key or set {env})")]
    MissingApiKey { env: &'static str },
    #[error("Failed to read API key from stdin: {0}")]
    Stdin(#[from] io::Error),
}

/// Resolve the credential for the `models` command.
///
/// Order: explicit `--api-key` (`-` reads stdin), then the provider's environment variable.
/// The result is never cached or written anywhere.
pub fn resolve_credential(
    provider: &ProviderConfig,
    flag: Option<&str>,
) -> Result<Credential, ConfigError> {
    let env_name = provider.key_env.unwrap_or("the provider key variable");
    let missing = || ConfigError::MissingApiKey { env: env_name };

    let raw = match flag {
        Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(value) => value.to_string(),
        None => provider
            .key_env
            .and_then(|name| env::var(name).ok())
            .ok_or_else(missing)?,
    };

    Credential::new(&raw).map_err(|_| missing())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::providers;

    #[test]
    fn explicit_flag_wins() {
        let openai = providers::find("OpenAI").unwrap();
        let c = resolve_credential(openai, Some(" sk-flag ")).unwrap();
        assert_eq!(c.expose(), "sk-flag");
    }

    #[test]
    fn blank_flag_is_missing_and_names_env_var() {
        let groq = providers::find("Groq").unwrap();
        let err = resolve_credential(groq, Some("   ")).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { env: "GROQ_API_KEY" }));
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn reads_provider_env_var() {
        let provider = ProviderConfig {
            key_env: Some("LLM_MODELS_VIEWER_TEST_KEY"),
            ..providers::find("OpenAI").unwrap().clone()
        };
        unsafe { env::set_var("LLM_MODELS_VIEWER_TEST_KEY", "sk-from-env") };
        let c = resolve_credential(&provider, None).unwrap();
        assert_eq!(c.expose(), "sk-from-env");
        unsafe { env::remove_var("LLM_MODELS_VIEWER_TEST_KEY") };
    }

    #[test]
    fn no_flag_no_env_is_missing() {
        let provider = ProviderConfig {
            key_env: None,
            ..providers::find("Cerebras").unwrap().clone()
        };
        let err = resolve_credential(&provider, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { .. }));
    }
}
