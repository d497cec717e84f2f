use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(
                    f,
                    "invalid log level/filter '{}': unable to build EnvFilter",
                    value
                )
            }
            TelemetryError::Subscriber(err) => write!(f, "telemetry error: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// `RUST_LOG` wins when set; otherwise the configured `PLANNER_LOG_LEVEL`
/// drives a planner-scoped filter.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => planner_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

/// A bare level such as `debug` is scoped to the planner crates, with
/// everything else held at `warn` so HTTP and runtime dependencies do not
/// drown the planner's own logs. Values that already contain directives are
/// passed through untouched.
fn planner_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    let trimmed = log_level.trim();
    let value = if trimmed.contains('=') || trimmed.contains(',') {
        trimmed.to_string()
    } else {
        format!("warn,paisa_planner={trimmed},paisa_planner_api={trimmed}")
    };

    EnvFilter::try_new(&value).map_err(|source| TelemetryError::EnvFilter { value, source })
}
