//! Server configuration.

use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Secret used to sign session tokens.
    pub jwt_secret: String,
    /// Session token expiration in hours.
    pub jwt_expiration_hours: u64,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = env::var("ROLODEX_JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("ROLODEX_JWT_SECRET is required"))?;

        Ok(Self {
            host: env::var("ROLODEX_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("ROLODEX_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            jwt_secret,
            jwt_expiration_hours: env::var("ROLODEX_JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .unwrap_or(24),
            log_level: env::var("ROLODEX_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_is_required() {
        // SAFETY: Tests run serially or in isolation
        unsafe {
            env::remove_var("ROLODEX_JWT_SECRET");
        }
        assert!(Config::from_env().is_err());

        unsafe {
            env::set_var("ROLODEX_JWT_SECRET", "test-secret-long-enough-for-tests");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.jwt_expiration_hours, 24);
        assert_eq!(config.server_addr(), format!("{}:{}", config.host, config.port));
    }
}
