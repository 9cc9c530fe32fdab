//! Static provider table: models-listing endpoints and how each one authenticates.

use std::borrow::Cow;

/// How the credential is attached to the listing request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthMode {
    /// `Authorization: Bearer <credential>`.
    BearerHeader,
    /// `?<name>=<credential>` on the endpoint URL.
    QueryParam { name: &'static str },
}

/// One supported provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    pub name: Cow<'static, str>,
    pub endpoint: Cow<'static, str>,
    pub auth: AuthMode,
    /// Environment variable the `models` command falls back to for the key.
    pub key_env: Option<&'static str>,
}

impl ProviderConfig {
    /// Same provider and auth, different listing URL (proxies, compatible gateways).
    pub fn with_endpoint(&self, endpoint: impl Into<Cow<'static, str>>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..self.clone()
        }
    }
}

pub static PROVIDERS: [ProviderConfig; 4] = [
    ProviderConfig {
        name: Cow::Borrowed("OpenAI"),
        endpoint: Cow::Borrowed("https://api.openai.com/v1/models"),
        auth: AuthMode::BearerHeader,
        key_env: Some("OPENAI_API_KEY"),
    },
    ProviderConfig {
        name: Cow::Borrowed("Groq"),
        endpoint: Cow::Borrowed("https://api.groq.com/openai/v1/models"),
        auth: AuthMode::BearerHeader,
        key_env: Some("GROQ_API_KEY"),
    },
    ProviderConfig {
        name: Cow::Borrowed("Gemini"),
        endpoint: Cow::Borrowed("https://generativelanguage.googleapis.com/v1/models"),
        auth: AuthMode::QueryParam { name: "key" },
        key_env: Some("GEMINI_API_KEY"),
    },
    ProviderConfig {
        name: Cow::Borrowed("Cerebras"),
        endpoint: Cow::Borrowed("https://api.cerebras.ai/v1/models"),
        auth: AuthMode::BearerHeader,
        key_env: Some("CEREBRAS_API_KEY"),
    },
];

/// Look up a provider by name (case-insensitive).
pub fn find(name: &str) -> Option<&'static ProviderConfig> {
    let name = name.trim();
    PROVIDERS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Comma-separated provider names, for help and error text.
pub fn names() -> String {
    PROVIDERS
        .iter()
        .map(|p| p.name.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

/// clap value parser for `--provider`.
pub fn parse_provider(s: &str) -> Result<ProviderConfig, String> {
    find(s)
        .cloned()
        .ok_or_else(|| format!("unknown provider '{}' (expected one of: {})", s, names()))
}
