use std::fmt;

use serde::Deserialize;

/// What the binary does after loading settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum RunMode {
    /// Serve the HTTP API.
    Api,
    /// Process the input directory once, print the report and exit.
    Cli,
}

impl RunMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Api => "api",
            RunMode::Cli => "cli",
        }
    }
}

impl TryFrom<String> for RunMode {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "api" | "server" => Ok(Self::Api),
            "cli" | "batch" => Ok(Self::Cli),
            other => Err(format!("Invalid run mode: {}. Expected: api or cli", other)),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
