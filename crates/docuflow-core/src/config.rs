//! Configuration module
//!
//! Env-driven configuration for the API, database, storage, and document
//! policy (allowed MIME types, maximum size, signed-URL lifetime).

use std::env;

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_SIGNED_URL_TTL_SECS: u64 = 900;
const DEFAULT_MAX_FILE_SIZE_BYTES: i64 = 20 * 1024 * 1024;
const DEFAULT_ALLOWED_MIME_TYPES: &str = "application/pdf,image/jpeg,image/png";

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub jwt_secret: String,
    pub environment: String,
    // Storage configuration
    pub bucket_name: String,
    pub s3_region: String,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, etc.)
    pub signed_url_ttl_secs: u64,
    // Document policy
    pub allowed_mime_types: Vec<String>,
    pub max_file_size_bytes: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET environment variable is required"))?;
        let bucket_name = env::var("BUCKET_NAME")
            .map_err(|_| anyhow::anyhow!("BUCKET_NAME environment variable is required"))?;

        Ok(Config {
            database_url,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
            server_port: parse_env("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            cors_origins: parse_list(&env_or("CORS_ORIGINS", "*")),
            jwt_secret,
            environment: env_or("ENVIRONMENT", "development"),
            bucket_name,
            s3_region: env_or("S3_REGION", "us-east-1"),
            s3_endpoint: env::var("S3_ENDPOINT").ok().filter(|v| !v.is_empty()),
            signed_url_ttl_secs: parse_env("SIGNED_URL_TTL_SECS", DEFAULT_SIGNED_URL_TTL_SECS)?,
            allowed_mime_types: parse_list(&env_or(
                "ALLOWED_MIME_TYPES",
                DEFAULT_ALLOWED_MIME_TYPES,
            )),
            max_file_size_bytes: parse_env("MAX_FILE_SIZE_BYTES", DEFAULT_MAX_FILE_SIZE_BYTES)?,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T, anyhow::Error>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_trims_and_drops_empty() {
        let list = parse_list("application/pdf, image/png,,image/jpeg ");
        assert_eq!(list, vec!["application/pdf", "image/png", "image/jpeg"]);
    }

    #[test]
    fn test_parse_env_default() {
        let value: u32 = parse_env("DOCUFLOW_TEST_UNSET_KEY", 42).unwrap();
        assert_eq!(value, 42);
    }
}
