use axum::http::{HeaderValue, Method, header};
use core_config::Environment;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// CORS for an explicit list of origins.
///
/// Methods GET, POST, PUT, DELETE, OPTIONS; JSON headers; 1 hour max age.
pub fn create_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Allows any origin. Development only.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

/// Parse a comma-separated origin list, ignoring blank entries
pub fn parse_origins(raw: &str) -> io::Result<Vec<HeaderValue>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })
}

/// Resolve the CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// When the variable is unset, development gets a permissive layer and
/// production gets none. A set but empty or invalid value is an error.
pub fn cors_from_env(environment: &Environment) -> io::Result<Option<CorsLayer>> {
    let Ok(raw) = std::env::var("CORS_ALLOWED_ORIGIN") else {
        if environment.is_production() {
            info!("CORS_ALLOWED_ORIGIN not set, CORS disabled");
            return Ok(None);
        }
        warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
        return Ok(Some(create_permissive_cors_layer()));
    };

    let origins = parse_origins(&raw)?;
    if origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    info!("CORS configured with allowed origins: {}", raw);
    Ok(Some(create_cors_layer(origins)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_splits_and_trims() {
        let origins = parse_origins("http://localhost:3000, https://shop.example.com,").unwrap();
        assert_eq!(origins.len(), 2);
        assert_eq!(origins[1], "https://shop.example.com");
    }

    #[test]
    fn test_cors_from_env_unset() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            assert!(cors_from_env(&Environment::Development).unwrap().is_some());
            assert!(cors_from_env(&Environment::Production).unwrap().is_none());
        });
    }

    #[test]
    fn test_cors_from_env_empty_is_error() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some(" , "), || {
            assert!(cors_from_env(&Environment::Production).is_err());
        });
    }

    #[test]
    fn test_cors_from_env_list() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some("https://shop.example.com"), || {
            assert!(cors_from_env(&Environment::Production).unwrap().is_some());
        });
    }
}
