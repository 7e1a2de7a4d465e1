pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::{
    dispatch::{dispatch, render_outcome, Outcome},
    sender::HttpStimulusSender,
};
pub use domain::model::{ApiResponse, Intensity, StimulusRequest, StimulusType};
pub use domain::ports::StimulusSender;
pub use utils::error::{Result, ZapError};
