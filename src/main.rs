use gridpath::{app::App, config::Config};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, util::SubscriberInitExt};

/// Subscriber writing to `gridpath.log` in the configured log directory.
/// Buffered lines are flushed when the returned guard drops.
fn file_logger(config: &Config) -> (impl tracing::Subscriber + Send + Sync + use<>, WorkerGuard) {
    let file_appender = tracing_appender::rolling::never(&config.log_dir, "gridpath.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let subscriber = tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .finish();
    (subscriber, guard)
}

fn build_app(config: Config) -> std::io::Result<App> {
    App::new(config).map_err(|e| {
        tracing::error!("Invalid grid: {}", e);
        std::io::Error::other(e)
    })
}

fn main() -> std::io::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Usage: gridpath [--rows N] [--cols N] [--seed N] [--log-dir PATH]");
            std::process::exit(2);
        }
    };

    // The terminal is owned by the UI, so logs go to a file
    let (subscriber, _guard) = file_logger(&config);
    subscriber.init();

    let mut app = build_app(config)?;

    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = app.run();
    App::restore_terminal(&mut stdout)?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_grid_is_logged_before_exit() {
        let dir = std::env::temp_dir().join(format!("gridpath-log-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let config = Config {
            start: (3, 3),
            goal: (3, 3),
            log_dir: dir.clone(),
            ..Config::default()
        };

        let (subscriber, guard) = file_logger(&config);
        let result = tracing::subscriber::with_default(subscriber, || build_app(config));
        assert!(result.is_err());
        drop(guard);

        let log = std::fs::read_to_string(dir.join("gridpath.log")).unwrap();
        assert!(log.contains("Invalid grid"), "log was {:?}", log);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
