use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:gym_tracker.db?mode=rwc".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            cors_allowed_origins: parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default(),
            ),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if origins.iter().any(|o| o == "*") {
        Vec::new()
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_empty_allows_any() {
        assert!(parse_origins("").is_empty());
        assert!(parse_origins(" , ").is_empty());
    }

    #[test]
    fn test_parse_origins_wildcard_allows_any() {
        assert!(parse_origins("http://localhost:5173,*").is_empty());
    }

    #[test]
    fn test_parse_origins_list() {
        let origins = parse_origins("http://localhost:5173, http://localhost:3000");
        assert_eq!(
            origins,
            vec!["http://localhost:5173", "http://localhost:3000"]
        );
    }

    #[test]
    fn test_server_addr() {
        let config = Config {
            database_url: ":memory:".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_allowed_origins: Vec::new(),
        };
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
    }
}
