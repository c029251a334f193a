mod run_mode;
mod settings;

pub use run_mode::RunMode;
pub use settings::{
    ConversionSettings, DirectorySettings, ExtractionSettings, LoggingSettings, OcrSettings,
    ServerSettings, Settings, SettingsError,
};
