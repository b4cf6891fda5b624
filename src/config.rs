/// Server configuration for the dashboard backend
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP server binds to
    pub port: u16,

    /// Origins allowed by the CORS layer (the dashboard deployments)
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: 3002,
            // Deployed dashboards plus local development; no trailing slash
            allowed_origins: vec![
                "https://tradeboard.vercel.app".to_string(),
                "https://tradeboard-dashboard.vercel.app".to_string(),
                "http://localhost:3000".to_string(),
            ],
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> ServerConfig {
        let mut config = ServerConfig::default();

        if let Ok(port) = std::env::var("PORT") {
            match port.parse::<u16>() {
                Ok(value) if value > 0 => {
                    config.port = value;
                }
                Ok(_) => {
                    tracing::warn!("Invalid PORT value 0, using default: {}", config.port);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse PORT '{}': {}, using default: {}",
                        port,
                        e,
                        config.port
                    );
                }
            }
        }

        if let Ok(origins) = std::env::var("ALLOWED_ORIGINS") {
            let parsed: Vec<String> = origins
                .split(',')
                .map(|o| o.trim().trim_end_matches('/').to_string())
                .filter(|o| !o.is_empty())
                .collect();
            if !parsed.is_empty() {
                config.allowed_origins = parsed;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3002);
        assert!(config
            .allowed_origins
            .contains(&"http://localhost:3000".to_string()));
    }

    #[test]
    fn test_default_origins_include_deployed_dashboards() {
        let config = ServerConfig::default();
        let deployed: Vec<&String> = config
            .allowed_origins
            .iter()
            .filter(|o| o.starts_with("https://"))
            .collect();
        assert_eq!(deployed.len(), 2);
        assert!(deployed.iter().all(|o| !o.ends_with('/')));
    }
}
