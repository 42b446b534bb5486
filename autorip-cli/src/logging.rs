// autorip-cli/src/logging.rs
//
// Logging setup for the CLI. Uses the standard `log` crate with env_logger
// as the backend; RUST_LOG overrides the default "info" level.

use std::io::Write;

/// Initializes the global logger with a compact time-of-day format.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{:<5}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}
