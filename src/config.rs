use crate::error::{Error, Result};
use crate::services::validator::{Profile, ScoreField};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub port: u16,
    pub environment: String,
    pub profile: Profile,
    pub score_field: ScoreField,
    pub db_retry_delay_secs: u64,
    pub db_connect_timeout_secs: u64,
    pub allowed_origins: Vec<String>,
    pub admin_token: Option<String>,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            database_url: env::var("DATABASE_URL").ok(),
            port: get_env_parse_or("PORT", 5000)?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            profile: get_env_parse_or("SUBMISSION_PROFILE", Profile::B)?,
            score_field: get_env_parse_or("SCORE_FIELD", ScoreField::Score)?,
            db_retry_delay_secs: get_env_parse_or("DB_RETRY_DELAY_SECS", 10)?,
            db_connect_timeout_secs: get_env_parse_or("DB_CONNECT_TIMEOUT_SECS", 30)?,
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            admin_token: env::var("ADMIN_TOKEN").ok(),
        })
    }
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
