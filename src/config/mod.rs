pub mod env;

use crate::domain::model::{Intensity, StimulusRequest, StimulusType, UncheckedIntensity};
use crate::utils::error::{Result, ZapError};
use crate::utils::validation::{validate_range, validate_url, Validate};
use clap::error::ErrorKind;
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.pavlok.com/api/v5/stimulus/send";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const MAX_TIMEOUT_SECONDS: u64 = 600;

#[derive(Debug, Clone, Parser)]
#[command(name = "pavlok-zap", version)]
#[command(about = "Send a zap, vibration or beep to a paired Pavlok device")]
#[command(allow_negative_numbers = true)]
#[command(after_help = env::TOKEN_SETUP_HELP)]
pub struct CliConfig {
    /// Stimulus type: zap, vibe or beep (case-insensitive)
    #[arg(value_name = "STIMULUS_TYPE")]
    pub stimulus_type: Option<String>,

    /// Intensity from 1 to 100
    #[arg(value_name = "INTENSITY", allow_hyphen_values = true)]
    pub intensity: Option<String>,

    /// Anything after the intensity is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS, help = "Request timeout in seconds")]
    pub timeout: u64,

    #[arg(long, help = "Validate and print the request body without sending it")]
    pub dry_run: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            stimulus_type: None,
            intensity: None,
            extra: Vec::new(),
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT_SECONDS,
            dry_run: false,
            verbose: false,
        }
    }
}

impl CliConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Checks run as: intensity is a number, stimulus type is known,
    /// intensity is in range. Missing arguments take their defaults.
    pub fn stimulus_request(&self) -> Result<StimulusRequest> {
        let unchecked = match self.intensity.as_deref() {
            Some(raw) => Some(raw.parse::<UncheckedIntensity>()?),
            None => None,
        };
        let stimulus_type = match self.stimulus_type.as_deref() {
            Some(raw) => raw.parse::<StimulusType>()?,
            None => StimulusType::default(),
        };
        let intensity = match unchecked {
            Some(unchecked) => Intensity::try_from(unchecked)?,
            None => Intensity::default(),
        };
        if !self.extra.is_empty() {
            tracing::debug!("Ignoring extra arguments: {:?}", self.extra);
        }
        Ok(StimulusRequest::new(stimulus_type, intensity))
    }
}

/// Whether a clap failure is really a `--help` / `--version` request.
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Maps a command line clap refused to the error to report. A missing token
/// is reported ahead of anything wrong with the arguments.
pub fn rejected_arguments(err: &clap::Error, token: Option<String>) -> ZapError {
    if let Err(missing) = env::require_token(token) {
        return missing;
    }
    ZapError::Usage {
        message: err.render().to_string().trim_end().to_string(),
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_range("timeout", self.timeout, 1, MAX_TIMEOUT_SECONDS)?;
        Ok(())
    }
}
