use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in the main() before any fallible operations to ensure
/// colored error output. Safe to call multiple times.
///
/// Configuration:
/// - Shows file:line where errors occur
/// - Hides environment variables (less noise)
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize the global subscriber for the catalog service.
///
/// - `APP_ENV=production`: flattened JSON lines without targets, suitable for
///   log shippers.
/// - anything else: pretty multi-line output with targets.
///
/// `RUST_LOG` overrides the default filter (e.g. `catalog_api=trace,sea_orm=debug`).
/// A `tracing_error::ErrorLayer` is always installed so `color_eyre` reports carry
/// span traces.
///
/// Calling this more than once is harmless; later calls are ignored, which keeps
/// tests that share a process happy.
///
/// ```ignore
/// #[instrument(skip(db), fields(product_id = id))]
/// async fn load_product(db: &DatabaseConnection, id: i64) -> Result<Option<Model>> {
///     Entity::find_by_id(id)
///         .one(db)
///         .await
///         .wrap_err("Failed to fetch product")
/// }
/// ```
pub fn init_tracing(environment: &Environment) {
    let is_production = environment.is_production();

    // Create a filter with granular defaults
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if is_production {
            // Production: request spans and warnings, keep SQL quiet
            EnvFilter::new("info,sqlx=warn,sea_orm=warn")
        } else {
            // Development: domain and HTTP debugging, SQL statements at info
            EnvFilter::new("debug,hyper=info,sqlx=info,sea_orm=info")
        }
    });

    let result = if is_production {
        // Production: JSON format for log aggregation
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false) // Hide module paths in production
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default()) // Capture span traces on errors
            .with(filter)
            .try_init()
    } else {
        // Development: Pretty format for readability
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default()) // Capture span traces on errors
            .with(filter)
            .try_init()
    };

    // Handle initialization result
    match result {
        Ok(_) => {
            info!(
                "Tracing initialized with ErrorLayer. Environment: {:?}",
                environment
            );
        }
        Err(_) => {
            // Tracing already initialized, which is fine (common in tests)
            debug!("Tracing already initialized, skipping re-initialization");
        }
    }
}
