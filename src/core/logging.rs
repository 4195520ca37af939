use std::sync::{Once, OnceLock};

use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{self, Builder},
};
use tracing_subscriber::{fmt::Layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT_LOG: Once = Once::new();
static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `filter`. Output always goes to the
/// terminal; when `log_path` is given it is also written to a daily-rotated
/// file in that directory. Only the first call has any effect.
pub fn log_init(filter: String, log_path: Option<String>) {
    INIT_LOG.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into());

        let terminal_layer = Layer::new().with_writer(std::io::stdout).with_ansi(true);

        let file_layer = log_path.and_then(|log_directory| {
            let file_appender = Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix("multicast-delegate")
                .filename_suffix("log")
                .build(&log_directory);

            match file_appender {
                Ok(file_appender) => {
                    let (writer, guard) = tracing_appender::non_blocking(file_appender);
                    // keep the writer flushing for the program lifetime
                    let _ = LOG_GUARD.set(guard);
                    Some(Layer::new().with_writer(writer).with_ansi(false))
                }
                Err(err) => {
                    eprintln!("Cannot log to {}: {:?}", log_directory, err);
                    None
                }
            }
        });

        // another subscriber may already be installed, e.g. by the host
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .with(terminal_layer)
            .try_init();
    });
}

/// Default initialize tracing log.
///
/// Must also import [`crate::core::logging::log_init`] function.
///
/// ```rust
/// use multicast_delegate::{core::logging::log_init, init_log};
///
/// init_log!();
/// tracing::debug!(selector = "onEvent", "Forwarded");
/// ```
///
/// Standard `RUST_LOG` environment variable can be used to configure, e.g.:
///
/// ```bash
/// export RUST_LOG="multicast_delegate=trace"
/// ```
#[macro_export]
macro_rules! init_log {
    () => {
        log_init(format!("{}=info", env!("CARGO_CRATE_NAME")), None);
    };
    ($log_path:expr) => {
        log_init(format!("{}=info", env!("CARGO_CRATE_NAME")), $log_path);
    };
}
