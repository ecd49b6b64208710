use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use crate::models::ScoringWeights;

const ENV_PREFIX: &str = "WANDERPICK";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub store: StoreSettings,
    pub collection: CollectionSettings,
    pub scoring: ScoringSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }

/// Appwrite document database settings
///
/// Empty `endpoint` or `database_id` leaves persistence disabled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub endpoint: String,
    pub api_key: String,
    pub project_id: String,
    pub database_id: String,
}

impl StoreSettings {
    pub fn endpoint_set(&self) -> bool {
        !self.endpoint.trim().is_empty()
    }

    pub fn database_set(&self) -> bool {
        !self.database_id.trim().is_empty()
    }

    pub fn is_configured(&self) -> bool {
        self.endpoint_set() && self.database_set()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionSettings {
    #[serde(default = "default_recommendations_collection")]
    pub recommendations: String,
}

impl Default for CollectionSettings {
    fn default() -> Self {
        Self {
            recommendations: default_recommendations_collection(),
        }
    }
}

fn default_recommendations_collection() -> String { "recommendation".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_tag_overlap_weight")]
    pub tag_overlap: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_climate_weight")]
    pub climate: f64,
    #[serde(default = "default_pace_weight")]
    pub pace: f64,
    #[serde(default = "default_companions_weight")]
    pub companions: f64,
    #[serde(default = "default_food_weight")]
    pub food: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            tag_overlap: default_tag_overlap_weight(),
            budget: default_budget_weight(),
            climate: default_climate_weight(),
            pace: default_pace_weight(),
            companions: default_companions_weight(),
            food: default_food_weight(),
        }
    }
}

impl WeightsConfig {
    /// Reject weights that could push a score below zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("tag_overlap", self.tag_overlap),
            ("budget", self.budget),
            ("climate", self.climate),
            ("pace", self.pace),
            ("companions", self.companions),
            ("food", self.food),
        ];

        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Message(format!(
                    "scoring.weights.{} must be a finite, non-negative number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            tag_overlap: config.tag_overlap,
            budget: config.budget,
            climate: config.climate,
            pace: config.pace,
            companions: config.companions,
            food: config.food,
        }
    }
}

fn default_tag_overlap_weight() -> f64 { 3.0 }
fn default_budget_weight() -> f64 { 1.5 }
fn default_climate_weight() -> f64 { 1.0 }
fn default_pace_weight() -> f64 { 0.8 }
fn default_companions_weight() -> f64 { 0.5 }
fn default_food_weight() -> f64 { 0.7 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration files (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with WANDERPICK__)
    /// 4. PORT, DATABASE_URL and DATABASE_NAME
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., WANDERPICK__SERVER__PORT -> server.port
            .add_source(prefixed_environment())
            .build()?;

        let settings = PlatformEnv::from_env().apply(settings)?;

        Self::from_config(settings)
    }

    /// Deserialize a built configuration and check the scoring weights
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let settings: Settings = config.try_deserialize()?;
        settings.scoring.weights.validate()?;
        Ok(settings)
    }
}

fn prefixed_environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Plain environment variables used by hosting platforms
///
/// `PORT` sets the listener port, `DATABASE_URL` and `DATABASE_NAME` point
/// the document store at an endpoint and database.
#[derive(Debug, Clone, Default)]
pub struct PlatformEnv {
    pub port: Option<String>,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl PlatformEnv {
    pub fn from_env() -> Self {
        use std::env;

        Self {
            port: env::var("PORT").ok(),
            database_url: env::var("DATABASE_URL").ok(),
            database_name: env::var("DATABASE_NAME").ok(),
        }
    }

    /// Layer the variables that are present over `settings`
    pub fn apply(&self, settings: Config) -> Result<Config, ConfigError> {
        let mut builder = Config::builder().add_source(settings);

        if let Some(port) = &self.port {
            match port.parse::<u16>() {
                Ok(port) => builder = builder.set_override("server.port", i64::from(port))?,
                Err(e) => return Err(ConfigError::Message(format!("Invalid PORT {:?}: {}", port, e))),
            }
        }
        if let Some(url) = &self.database_url {
            builder = builder.set_override("store.endpoint", url.as_str())?;
        }
        if let Some(name) = &self.database_name {
            builder = builder.set_override("store.database_id", name.as_str())?;
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.tag_overlap, 3.0);
        assert_eq!(weights.budget, 1.5);
        assert_eq!(weights.climate, 1.0);
        assert_eq!(weights.pace, 0.8);
        assert_eq!(weights.companions, 0.5);
        assert_eq!(weights.food, 0.7);
        assert_eq!(ScoringWeights::from(&weights), ScoringWeights::default());
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_defaults_without_sources() {
        let settings: Settings = Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.collection.recommendations, "recommendation");
        assert!(!settings.store.is_configured());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings: Settings = Config::builder()
            .add_source(File::from_str(
                "[server]\nport = 9100\n\n[store]\nendpoint = \"https://db.test/v1\"\ndatabase_id = \"travel\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 9100);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert!(settings.store.is_configured());
        assert_eq!(settings.scoring.weights.tag_overlap, 3.0);
    }

    fn toml(source: &str) -> Config {
        Config::builder()
            .add_source(File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = Settings::from_config(toml("[scoring.weights]\ntag_overlap = -3.0\n"));

        match result {
            Err(ConfigError::Message(message)) => assert!(message.contains("tag_overlap")),
            other => panic!("expected weight error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_weights_rejected() {
        assert!(Settings::from_config(toml("[scoring.weights]\nfood = nan\n")).is_err());
        assert!(Settings::from_config(toml("[scoring.weights]\nbudget = inf\n")).is_err());
    }

    #[test]
    fn test_custom_weights_accepted() {
        let settings =
            Settings::from_config(toml("[scoring.weights]\nclimate = 0.0\npace = 2.5\n")).unwrap();

        assert_eq!(settings.scoring.weights.climate, 0.0);
        assert_eq!(settings.scoring.weights.pace, 2.5);
        assert_eq!(settings.scoring.weights.tag_overlap, 3.0);
    }

    #[test]
    fn test_platform_env_overrides() {
        let env = PlatformEnv {
            port: Some("9311".to_string()),
            database_url: Some("https://db.example/v1".to_string()),
            database_name: Some("travel".to_string()),
        };
        let base = toml("[server]\nport = 9100\n\n[store]\nendpoint = \"https://old.example/v1\"\n");

        let settings = Settings::from_config(env.apply(base).unwrap()).unwrap();

        assert_eq!(settings.server.port, 9311);
        assert_eq!(settings.store.endpoint, "https://db.example/v1");
        assert_eq!(settings.store.database_id, "travel");
        assert!(settings.store.is_configured());
    }

    #[test]
    fn test_platform_env_absent_keeps_file_values() {
        let base = toml("[server]\nport = 9100\n");

        let settings = Settings::from_config(PlatformEnv::default().apply(base).unwrap()).unwrap();

        assert_eq!(settings.server.port, 9100);
        assert!(!settings.store.endpoint_set());
    }

    #[test]
    fn test_invalid_port_rejected() {
        let env = PlatformEnv {
            port: Some("notaport".to_string()),
            ..Default::default()
        };

        match env.apply(toml("")) {
            Err(ConfigError::Message(message)) => assert!(message.starts_with("Invalid PORT \"notaport\"")),
            other => panic!("expected PORT error, got {:?}", other),
        }
    }

    #[test]
    fn test_store_presence_checks() {
        let store = StoreSettings {
            endpoint: "https://db.test/v1".to_string(),
            database_id: "  ".to_string(),
            ..Default::default()
        };
        assert!(store.endpoint_set());
        assert!(!store.database_set());
        assert!(!store.is_configured());
    }
}
