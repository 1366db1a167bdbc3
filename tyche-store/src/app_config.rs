use serde::Deserialize;
use std::env;
use tyche_catalog::StartingRates;
use tyche_core::BookingRules;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub log: LogConfig,
    pub business_rules: BusinessRules,
    #[serde(default)]
    pub pricing: StartingRates,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset.
    pub filter: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    #[serde(default)]
    pub enforce_date_order: bool,
    #[serde(default = "default_seed_catalog")]
    pub seed_catalog: bool,
}

fn default_seed_catalog() -> bool { true }

impl BusinessRules {
    pub fn booking_rules(&self) -> BookingRules {
        BookingRules {
            enforce_date_order: self.enforce_date_order,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Layers, lowest precedence first: built-in defaults, `<dir>/default`,
    /// `<dir>/<RUN_MODE>`, `<dir>/local`, then `TYCHE__*` environment variables.
    pub fn load_from(dir: &str) -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("log.filter", "tyche_api=debug,tower_http=debug,axum::rejection=trace")?
            .set_default("business_rules.enforce_date_order", false)?
            .set_default("business_rules.seed_catalog", true)?
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // Eg.. `TYCHE__SERVER__PORT=8080`
            .add_source(
                config::Environment::with_prefix("TYCHE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_files() {
        let config = Config::load_from("/nonexistent-tyche-config").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert!(!config.business_rules.enforce_date_order);
        assert!(config.business_rules.seed_catalog);
        assert_eq!(config.pricing, StartingRates::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = env::temp_dir().join(format!("tyche-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("default.toml"),
            "[server]\nport = 8088\n\n[business_rules]\nenforce_date_order = true\n\n[pricing]\ncar_per_day = 1500\n",
        )
        .unwrap();

        let config = Config::load_from(dir.to_str().unwrap()).unwrap();
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.business_rules.booking_rules().enforce_date_order);
        assert_eq!(config.pricing.car_per_day, 1500);
        assert_eq!(config.pricing.jet_per_hour, 5000);

        fs::remove_dir_all(&dir).unwrap();
    }
}
