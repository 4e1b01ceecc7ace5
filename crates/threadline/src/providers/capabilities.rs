use strum_macros::EnumString;

/// The provider variant named in configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ProviderVariant {
    #[default]
    #[strum(serialize = "openai")]
    OpenAi,
    #[strum(serialize = "openai-compatible")]
    OpenAiCompatible,
    #[strum(serialize = "ollama")]
    Ollama,
    #[strum(default)]
    Other(String),
}

/// What a provider accepts beyond the common request shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProviderCapabilities {
    /// Assistant items may carry the original `tool_calls` descriptors
    pub tool_echo: bool,
}

impl ProviderVariant {
    /// Parse a configured variant name; unknown names are kept as [`ProviderVariant::Other`]
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        name.parse()
            .unwrap_or_else(|_| ProviderVariant::Other(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        match self {
            ProviderVariant::OpenAi => "openai",
            ProviderVariant::OpenAiCompatible => "openai-compatible",
            ProviderVariant::Ollama => "ollama",
            ProviderVariant::Other(name) => name,
        }
    }

    pub fn capabilities(&self) -> ProviderCapabilities {
        match self {
            ProviderVariant::OpenAiCompatible | ProviderVariant::Ollama => {
                ProviderCapabilities { tool_echo: true }
            }
            ProviderVariant::OpenAi | ProviderVariant::Other(_) => ProviderCapabilities::default(),
        }
    }
}
