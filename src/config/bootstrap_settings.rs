use std::fmt;
use std::sync::Arc;
use crate::config::errors::ApplicationError;
use crate::config::config_spec::{ConfigSpec, ConfigValueSource};
use crate::config::EnvironmentProvider;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://shopping_list.db?mode=rwc";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "8000";

/// Infrastructure settings needed before anything else can start
pub struct BootstrapSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    sources: Vec<(&'static str, ConfigValueSource)>,
}

impl BootstrapSettings {
    /// Load bootstrap settings through ConfigSpec from the given environment
    pub fn from_env_provider(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Result<Self, ApplicationError> {
        let database_url = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_URL")
            .default_value(DEFAULT_DATABASE_URL)
            .min_length(1)
            .load_setting_with_source()?;

        let server_host = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value(DEFAULT_HOST)
            .validator(ConfigSpec::validate_host_address)
            .load_setting_with_source()?;

        let port_value = ConfigSpec::new(env_provider)
            .env_override("PORT")
            .default_value(DEFAULT_PORT)
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535))
            .load_setting_with_source()?;

        let server_port = ConfigSpec::parse_port(&port_value.value, "PORT")?;

        Ok(Self {
            database_url: database_url.value,
            server_host: server_host.value,
            server_port,
            sources: vec![
                ("DATABASE_URL", database_url.source),
                ("HOST", server_host.source),
                ("PORT", port_value.source),
            ],
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Where each setting's value came from, in load order
    pub fn sources(&self) -> &[(&'static str, ConfigValueSource)] {
        &self.sources
    }

    /// Log the origin of every bootstrap setting (values are not logged)
    pub fn log_sources(&self) {
        for (setting_name, source) in &self.sources {
            tracing::info!("{} loaded from {}", setting_name, source);
        }
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}
