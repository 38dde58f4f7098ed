#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub env: Environment,
    pub log_level: String,
    pub geoapify_api_key: Option<String>,
    pub geoapify_base_url: String,
    pub geoapify_maps_base_url: String,
    pub request_timeout_secs: u64,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
}

impl AppConfig {
    /// Returns the Geoapify key when it is set and non-empty.
    ///
    /// Searches must not be attempted without a key; the client itself never
    /// validates it.
    #[must_use]
    pub fn usable_api_key(&self) -> Option<&str> {
        self.geoapify_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("database_url", &self.database_url)
            .field(
                "geoapify_api_key",
                &self.geoapify_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("geoapify_base_url", &self.geoapify_base_url)
            .field("geoapify_maps_base_url", &self.geoapify_maps_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .finish()
    }
}
