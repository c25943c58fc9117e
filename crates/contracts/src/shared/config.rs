use serde::Deserialize;

use crate::domain::a001_chat::output_file::OutputRules;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChatConfig {
    pub api: ApiConfig,
    pub outputs: OutputsConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub chat_endpoint: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputsConfig {
    pub image_extensions: Vec<String>,
    pub text_extensions: Vec<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    /// Period of the loading indicator's elapsed-seconds counter.
    pub loading_tick_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            loading_tick_ms: 1000,
        }
    }
}

impl ChatConfig {
    pub fn output_rules(&self) -> OutputRules {
        OutputRules {
            image_extensions: self.outputs.image_extensions.clone(),
            text_extensions: self.outputs.text_extensions.clone(),
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
chat_endpoint = "/api/chat"

[outputs]
image_extensions = [".png", ".jpg", ".jpeg"]
text_extensions = [".md", ".txt"]

[ui]
loading_tick_ms = 1000
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<ChatConfig> {
    let config: ChatConfig = toml::from_str(contents)?;
    if config.api.chat_endpoint.trim().is_empty() {
        anyhow::bail!("api.chat_endpoint must not be empty");
    }
    if config.ui.loading_tick_ms == 0 {
        anyhow::bail!("ui.loading_tick_ms must be positive");
    }
    // Browser timers take a signed 32-bit delay.
    if config.ui.loading_tick_ms > i32::MAX as u32 {
        anyhow::bail!("ui.loading_tick_ms must not exceed {}", i32::MAX);
    }
    Ok(config)
}

/// Load configuration
///
/// Search order:
/// 1. The override text supplied by the host page (if any)
/// 2. Falls back to embedded default config
pub fn load_config(override_toml: Option<&str>) -> anyhow::Result<ChatConfig> {
    if let Some(contents) = override_toml {
        match parse_config(contents) {
            Ok(config) => {
                log::info!("Loaded chat config from page override");
                return Ok(config);
            }
            Err(e) => {
                log::warn!("Ignoring invalid chat config override: {}", e);
            }
        }
    }

    log::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}
