use config::{Config, ConfigError, File};
use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Environment {
    Development,
    Production,
}

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub supabase: SupabaseSettings,
    pub analytics: AnalyticsSettings,
    pub artifacts: ArtifactSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct SupabaseSettings {
    pub base_url: String,
    // secrecy protects secret information and prevents them to be exposed (eg: via logs)
    pub api_key: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_ms: u64,
}

#[derive(serde::Deserialize, Clone)]
pub struct AnalyticsSettings {
    pub service_account_path: PathBuf,
    pub property_id: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct ArtifactSettings {
    pub project_root: PathBuf,
}

impl Settings {
    pub fn get_supabase_base_url(&self) -> String {
        self.supabase.base_url.clone()
    }

    pub fn get_supabase_api_key(&self) -> Secret<String> {
        self.supabase.api_key.clone()
    }

    pub fn get_supabase_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.supabase.timeout_ms)
    }

    pub fn get_service_account_path(&self) -> PathBuf {
        self.analytics.service_account_path.clone()
    }

    pub fn get_property_id(&self) -> String {
        self.analytics.property_id.clone()
    }

    pub fn get_project_root(&self) -> PathBuf {
        self.artifacts.project_root.clone()
    }

    pub fn set_supabase_base_url(&mut self, new_base_url: String) {
        self.supabase.base_url = new_base_url
    }
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            unknown_env => Err(format!(
                "{} is not supported environment. Use either 'development' or 'production'.",
                unknown_env
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let root_path = std::env::current_dir().expect("Failed to determine the current directory");
    let config_directory = root_path.join("config");
    // Uses development environment by default
    let enviroment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "development".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT");
    let config_base_filepath = config_directory.join("base");
    let config_env_filepath = config_directory.join(enviroment.as_str());

    // It merges the base configuration file with the one from the specific environment (development or production)
    let settings = Config::builder()
        .add_source(File::from(config_base_filepath).required(true))
        .add_source(File::from(config_env_filepath).required(true))
        // Merge settings from environment variables with a prefix of APP and "__" separator
        // E.g APP_SUPABASE__API_KEY would set Settings.supabase.api_key
        .add_source(config::Environment::with_prefix("app").separator("__"))
        .build()?;

    tracing::info!("Application environment = {:?}", enviroment);

    // Try to convert the value from the configuration file into a Settings type
    settings.try_deserialize()
}
