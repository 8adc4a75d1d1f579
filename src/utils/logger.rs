use chrono::Utc;
use env_logger::Env;
use log::{info, SetLoggerError};
use std::io::Write;

/// Logger setup shared by the GUI binary.
pub struct AppLogger;

impl AppLogger {
    /// Installs env_logger with the `[timestamp] [LEVEL] [file:line] message`
    /// format. `RUST_LOG` wins over `default_level`.
    pub fn init(default_level: &str) -> Result<(), SetLoggerError> {
        env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{}] [{}] [{}:{}] {}",
                    Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .try_init()?;

        info!("User management logger initialized");
        Ok(())
    }
}
