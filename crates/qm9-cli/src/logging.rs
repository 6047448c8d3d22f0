use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// Log a stderr; los registros de `log` de las bibliotecas se capturan por el
/// puente `tracing-log` que instala `init()`.
pub fn setup_logging(verbosity: u8, quiet: bool) {
    let level_filter = if quiet {
        LevelFilter::OFF
    } else {
        match verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    };

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false).compact();

    tracing_subscriber::registry().with(level_filter).with(stderr_layer).init();
}
