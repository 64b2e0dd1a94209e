use std::{fs::create_dir_all, path::PathBuf};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::error::{ClientError, ClientResult};

/// Installs a process-wide `tracing` subscriber for applications that do not
/// bring their own. The filter starts from `level` and honours `RUST_LOG`.
#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: tracing::Level,
    pub logging_enabled: bool,
    pub logger_name: String,
    /// When set, logs are also written to hourly rotated files in this directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            logging_enabled: true,
            logger_name: "cortex_client".to_string(),
            log_dir: None,
        }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn logging_enabled(mut self, enabled: bool) -> Self {
        self.logging_enabled = enabled;
        self
    }

    /// Prefix of the rotated log file names.
    pub fn logger_name<S: Into<String>>(mut self, logger_name: S) -> Self {
        self.logger_name = logger_name.into();
        self
    }

    pub fn log_dir<P: Into<PathBuf>>(mut self, log_dir: P) -> Self {
        self.log_dir = Some(log_dir.into());
        self
    }

    /// Serialized request and response bodies are logged at this level.
    pub fn log_level_trace(mut self) -> Self {
        self.level = tracing::Level::TRACE;
        self
    }

    /// Every request's method, URL and status.
    pub fn log_level_debug(mut self) -> Self {
        self.level = tracing::Level::DEBUG;
        self
    }

    pub fn log_level_info(mut self) -> Self {
        self.level = tracing::Level::INFO;
        self
    }

    /// Recovered problems, e.g. a response that needed single-quote repair.
    pub fn log_level_warn(mut self) -> Self {
        self.level = tracing::Level::WARN;
        self
    }

    pub fn log_level_error(mut self) -> Self {
        self.level = tracing::Level::ERROR;
        self
    }

    /// Returns `Ok(false)` when logging is disabled or another global
    /// subscriber is already installed.
    pub fn init(&self) -> ClientResult<bool> {
        if !self.logging_enabled {
            return Ok(false);
        }

        let file_layer = match &self.log_dir {
            Some(log_dir) => {
                create_dir_all(log_dir)
                    .map_err(|e| ClientError::file_system("create log directory", log_dir, e))?;
                let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
                    .rotation(tracing_appender::rolling::Rotation::HOURLY)
                    .max_log_files(6)
                    .filename_prefix(&self.logger_name)
                    .filename_suffix("log")
                    .build(log_dir)
                    .map_err(|e| {
                        ClientError::file_system(
                            "create log file",
                            log_dir,
                            std::io::Error::new(std::io::ErrorKind::Other, e),
                        )
                    })?;
                Some(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(file_appender),
                )
            }
            None => None,
        };

        let filter = tracing_subscriber::EnvFilter::builder()
            .with_default_directive(self.level.into())
            .from_env_lossy();

        let terminal_layer = tracing_subscriber::fmt::layer()
            .with_ansi(true)
            .with_writer(std::io::stdout);

        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(terminal_layer)
            .try_init()
            .is_ok();
        Ok(installed)
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn disabled_logging_installs_nothing() {
        let installed = LoggingConfig::new().logging_enabled(false).init().unwrap();
        assert!(!installed);
    }

    #[test]
    #[serial]
    fn installs_once_with_file_layer() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");
        let config = LoggingConfig::new()
            .log_level_debug()
            .logger_name("test")
            .log_dir(&log_dir);

        assert!(config.init().unwrap());
        assert!(log_dir.is_dir());
        crate::debug!("logger installed");

        assert!(!config.init().unwrap());
    }
}
