use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub database_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        // Load .env file if it exists (for local development)
        let _ = dotenvy::dotenv();

        let config = config::Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .build()?;

        Ok(Self {
            database_url: config.get("database_url")?,
            host: config
                .get("host")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: config.get::<u16>("port").unwrap_or(8080),
            database_max_connections: config
                .get::<u32>("database_max_connections")
                .unwrap_or(20),
        })
    }
}
