use crate::config::Settings;
use std::path::Path;
use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "test_run.log";

static TEST_LOGGER: OnceLock<Option<WorkerGuard>> = OnceLock::new();

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("blog_e2e=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("blog_e2e=info"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

pub fn init_json_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("blog_e2e=info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .try_init();
}

/// Console + `logs/test_run.log` logging for test binaries.
///
/// Safe to call from every test: the first call installs the subscriber and
/// keeps the file writer's guard alive for the rest of the process.
pub fn init_test_logger(settings: &Settings) {
    install_test_logger(
        &settings.artifact_dir("logs"),
        &settings.run.log_level,
        settings.run.json_logs,
    );
}

fn install_test_logger(logs_dir: &Path, level: &str, json: bool) {
    TEST_LOGGER.get_or_init(|| {
        if json {
            init_json_logger();
            return None;
        }

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("blog_e2e={level},{level}")));

        let (file_layer, guard) = match std::fs::create_dir_all(logs_dir) {
            Ok(()) => {
                let file_appender = tracing_appender::rolling::never(logs_dir, LOG_FILE_NAME);
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                let layer = fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_ansi(false)
                    .with_writer(non_blocking);
                (Some(layer), Some(guard))
            }
            Err(_) => (None, None),
        };

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_test_writer()
                    .compact(),
            )
            .try_init();

        guard
    });
}
