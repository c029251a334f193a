use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;

use super::RunMode;

const SETTINGS_FILE: &str = "appsettings";
const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";

/// Short variable names accepted alongside the `APP__SECTION__KEY` form.
const SHORT_ENV_OVERRIDES: [(&str, &str); 4] = [
    ("INPUT_DIR", "directories.input_dir"),
    ("OUTPUT_DIR", "directories.output_dir"),
    ("RUN_MODE", "run_mode"),
    ("SERVER_PORT", "server.port"),
];

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub run_mode: RunMode,
    pub server: ServerSettings,
    pub directories: DirectorySettings,
    pub extraction: ExtractionSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectorySettings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub timeout_secs: u64,
    pub pdfium_library_path: Option<PathBuf>,
    pub ocr: OcrSettings,
    pub conversion: ConversionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrSettings {
    pub tesseract_cmd: String,
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionSettings {
    pub soffice_cmd: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub json_format: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

impl Settings {
    /// Reads `.env`, `appsettings.toml` and the process environment.
    pub fn load() -> Result<Self, SettingsError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "Ignoring unreadable .env file");
            }
        }
        Self::from_vars(std::env::vars().collect())
    }

    /// Builds settings from an explicit variable map instead of the process environment.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, SettingsError> {
        let mut builder = Config::builder()
            .set_default("run_mode", RunMode::Api.as_str())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.max_upload_mb", 25)?
            .set_default("directories.input_dir", "./input_resumes")?
            .set_default("directories.output_dir", "./output_resumes")?
            .set_default("extraction.timeout_secs", 300)?
            .set_default("extraction.ocr.tesseract_cmd", "tesseract")?
            .set_default("extraction.ocr.language", "eng")?
            .set_default("extraction.conversion.soffice_cmd", "soffice")?
            .set_default("logging.json_format", false)?
            .add_source(File::with_name(SETTINGS_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            );

        for (var, key) in SHORT_ENV_OVERRIDES {
            builder = builder.set_override_option(key, vars.get(var).cloned())?;
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

impl ServerSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

impl ExtractionSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
