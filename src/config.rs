use crate::view::{ActiveView, GridLayout};
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SecurelinkConfig {
    pub api: ApiConfig,
    pub dashboard: DashboardConfig,
    pub system: SystemConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    /// IP address to bind to
    #[serde(default = "default_api_ip")]
    pub ip: String,

    /// Port to listen on
    #[serde(default = "default_api_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DashboardConfig {
    /// View shown when a session starts
    #[serde(default = "default_view")]
    pub default_view: String,

    /// Camera wall layout (1x1, 2x2, 3x3)
    #[serde(default = "default_grid_layout")]
    pub grid_layout: String,

    /// Number of activity feed entries on the overview
    #[serde(default = "default_activity_limit")]
    pub activity_limit: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SystemConfig {
    /// Event bus capacity
    #[serde(default = "default_event_bus_capacity")]
    pub event_bus_capacity: usize,

    /// Log every published event at debug level
    #[serde(default = "default_debug_events")]
    pub debug_events: bool,
}

impl SecurelinkConfig {
    /// Load configuration from default sources (file + environment variables)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_file("securelink.toml")
    }

    /// Load configuration from a specific file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().to_string_lossy();
        debug!("Loading configuration from: {}", path_str);

        let settings = Config::builder()
            // Start with default values
            .set_default("api.ip", default_api_ip())?
            .set_default("api.port", default_api_port() as i64)?
            .set_default("dashboard.default_view", default_view())?
            .set_default("dashboard.grid_layout", default_grid_layout())?
            .set_default("dashboard.activity_limit", default_activity_limit() as i64)?
            .set_default(
                "system.event_bus_capacity",
                default_event_bus_capacity() as i64,
            )?
            .set_default("system.debug_events", default_debug_events())?
            // Add configuration file (optional)
            .add_source(File::with_name(&path_str).required(false))
            // Add environment variables with SECURELINK_ prefix
            .add_source(Environment::with_prefix("SECURELINK").separator("_"))
            .build()?;

        let config: SecurelinkConfig = settings.try_deserialize()?;

        info!("Configuration loaded successfully");
        debug!("Final configuration: {:#?}", config);

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.port == 0 {
            return Err(ConfigError::Message(
                "API port must be greater than 0".to_string(),
            ));
        }

        if ActiveView::parse(&self.dashboard.default_view).is_none() {
            return Err(ConfigError::Message(format!(
                "Unknown default view: {}",
                self.dashboard.default_view
            )));
        }

        if GridLayout::parse(&self.dashboard.grid_layout).is_none() {
            return Err(ConfigError::Message(format!(
                "Unknown grid layout: {} (expected 1x1, 2x2, or 3x3)",
                self.dashboard.grid_layout
            )));
        }

        if self.dashboard.activity_limit == 0 {
            return Err(ConfigError::Message(
                "Activity feed limit must be greater than 0".to_string(),
            ));
        }

        if self.system.event_bus_capacity == 0 {
            return Err(ConfigError::Message(
                "Event bus capacity must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// The configured startup view
    pub fn initial_view(&self) -> ActiveView {
        ActiveView::parse(&self.dashboard.default_view).unwrap_or(ActiveView::Dashboard)
    }

    /// The configured camera wall layout
    pub fn initial_grid_layout(&self) -> GridLayout {
        GridLayout::parse(&self.dashboard.grid_layout).unwrap_or(GridLayout::ThreeByThree)
    }
}

impl Default for SecurelinkConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                ip: default_api_ip(),
                port: default_api_port(),
            },
            dashboard: DashboardConfig {
                default_view: default_view(),
                grid_layout: default_grid_layout(),
                activity_limit: default_activity_limit(),
            },
            system: SystemConfig {
                event_bus_capacity: default_event_bus_capacity(),
                debug_events: default_debug_events(),
            },
        }
    }
}

// Default value functions
fn default_api_ip() -> String {
    "0.0.0.0".to_string()
}
fn default_api_port() -> u16 {
    8080
}

fn default_view() -> String {
    "dashboard".to_string()
}
fn default_grid_layout() -> String {
    "3x3".to_string()
}
fn default_activity_limit() -> usize {
    3
}

fn default_event_bus_capacity() -> usize {
    100
}
fn default_debug_events() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SecurelinkConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_view(), ActiveView::Dashboard);
        assert_eq!(config.initial_grid_layout(), GridLayout::ThreeByThree);
    }

    #[test]
    fn test_config_validation() {
        let mut config = SecurelinkConfig::default();

        config.api.port = 0;
        assert!(config.validate().is_err());
        config.api.port = 8080;
        assert!(config.validate().is_ok());

        config.dashboard.grid_layout = "5x5".to_string();
        assert!(config.validate().is_err());
        config.dashboard.grid_layout = "2x2".to_string();
        assert!(config.validate().is_ok());

        config.dashboard.default_view = "everything".to_string();
        assert!(config.validate().is_err());
        config.dashboard.default_view = "incidents".to_string();
        assert!(config.validate().is_ok());

        config.system.event_bus_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            "[api]\nport = 9090\n\n[dashboard]\ngrid_layout = \"2x2\"\n"
        )
        .unwrap();

        let config = SecurelinkConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.api.port, 9090);
        assert_eq!(config.dashboard.grid_layout, "2x2");
        // Unset values keep their defaults
        assert_eq!(config.api.ip, "0.0.0.0");
        assert_eq!(config.system.event_bus_capacity, 100);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = SecurelinkConfig::load_from_file("/nonexistent/securelink.toml").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.port, 8080);
    }
}
