pub mod dispatch;
pub mod sender;

pub use crate::domain::model::{ApiResponse, Intensity, StimulusRequest, StimulusType};
pub use crate::domain::ports::StimulusSender;
pub use crate::utils::error::Result;
