use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber for binaries and tests.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shift_time=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shift_time=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .try_init()
        .ok();
}

/// Logs DST gap/overlap resolutions with consistent format
pub fn log_dst_anomaly(kind: &str, zone: &str, requested: &str, resolved_utc: &str) {
    warn!(
        "DST_ANOMALY: {} in {} - wall time '{}' resolved to UTC '{}'",
        kind, zone, requested, resolved_utc
    );
}

/// Logs rejected conversions with consistent format
pub fn log_conversion_error(input: &str, zone: &str, reason: &str) {
    error!("CONVERSION_ERROR: '{}' in {} - {}", input, zone, reason);
}

/// Logs validation errors with consistent format
pub fn log_validation_error(field: &str, value: &str, error: &str) {
    warn!(
        "VALIDATION_ERROR: {} field '{}' invalid: {}",
        field, value, error
    );
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
