use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PanelConfig {
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub submit: SubmitConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EndpointConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct SubmitConfig {
    #[serde(default)]
    pub after_success: AfterSubmit,
}

/// What the list does once a create request succeeds
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AfterSubmit {
    /// Reload the list so server-assigned serials show up
    #[default]
    Refetch,
    /// Append the submitted row locally, without a serial
    OptimisticAppend,
}

/// Configuration bundled with the build
const PANEL_CONFIG: &str = include_str!("../../panel.toml");

/// Endpoint used when the bundled configuration cannot be read
const DEFAULT_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbxRTLnxVHwxf4FuE851ALXQeSxbKXZ26ufBmy1byRNqb_4yKkJZsc7RynKKslKjft2M/exec";

pub fn parse_config(contents: &str) -> Result<PanelConfig, toml::de::Error> {
    toml::from_str(contents)
}

/// Load configuration from the bundled panel.toml
///
/// Falls back to the default endpoint and re-fetch strategy if the bundled
/// file is broken.
pub fn load_config() -> PanelConfig {
    match parse_config(PANEL_CONFIG) {
        Ok(config) => {
            log::info!("Using endpoint: {}", config.endpoint.url);
            config
        }
        Err(e) => {
            log::warn!("panel.toml is invalid, using default configuration: {}", e);
            PanelConfig::default()
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            endpoint: EndpointConfig {
                url: DEFAULT_ENDPOINT.to_string(),
            },
            submit: SubmitConfig::default(),
        }
    }
}
