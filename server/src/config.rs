use platform_db::DatabaseSettings;
use platform_obs::ObsConfig;

const DEFAULT_SERVICE_NAME: &str = "employee-service";

/// Process configuration, read from the environment once in `main` and
/// handed to every component that needs it.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub service_name: String,
    pub otlp_endpoint: Option<String>,
    pub log_filter: Option<String>,
    pub cors_allowed_origins: Vec<String>,
    pub database: DatabaseSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.into(),
            otlp_endpoint: None,
            log_filter: None,
            cors_allowed_origins: Vec::new(),
            database: DatabaseSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        let service_name = env_non_empty("SERVICE_NAME");
        let collector = env_non_empty("OTEL_EXPORTER_OTLP_ENDPOINT");
        // Span export needs both a service name and a collector.
        let otlp_endpoint = collector.filter(|_| service_name.is_some());

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect::<Vec<_>>();

        Self {
            service_name: service_name.unwrap_or_else(|| DEFAULT_SERVICE_NAME.into()),
            otlp_endpoint,
            log_filter: env_non_empty("LOG_FILTER"),
            cors_allowed_origins,
            database: DatabaseSettings::from_env(),
        }
    }

    pub fn tracing_enabled(&self) -> bool {
        self.otlp_endpoint.is_some()
    }

    pub fn obs(&self) -> ObsConfig {
        ObsConfig {
            service_name: self.service_name.clone(),
            env_filter: self.log_filter.clone(),
            otlp_endpoint: self.otlp_endpoint.clone(),
        }
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
