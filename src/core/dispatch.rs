use crate::config::{env::require_token, CliConfig};
use crate::core::{ApiResponse, StimulusRequest, StimulusSender};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Sent {
        request: StimulusRequest,
        response: ApiResponse,
    },
    DryRun {
        request: StimulusRequest,
        endpoint: String,
    },
}

/// Runs the checks in order (token, options, then the stimulus arguments) and
/// hands the request to `sender` only when all of them pass.
pub async fn dispatch<S>(sender: &S, config: &CliConfig, token: Option<String>) -> Result<Outcome>
where
    S: StimulusSender + ?Sized,
{
    let token = require_token(token)?;
    config.validate()?;
    let request = config.stimulus_request()?;

    if config.dry_run {
        tracing::info!("Dry run, not sending {:?}", request);
        return Ok(Outcome::DryRun {
            request,
            endpoint: config.api_endpoint.clone(),
        });
    }

    tracing::info!(
        "Sending {} at intensity {}",
        request.stimulus_type,
        request.intensity
    );
    let response = sender.send(&request, &token).await?;

    Ok(Outcome::Sent { request, response })
}

pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Sent { request, response } => format!(
            "✅ {} sent successfully (intensity {})\n{}",
            request.stimulus_type.label(),
            request.intensity,
            response.pretty()
        ),
        Outcome::DryRun { request, endpoint } => format!(
            "Dry run: would POST to {}\n{}",
            endpoint,
            ApiResponse(request.to_payload()).pretty()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Intensity, StimulusType};
    use crate::utils::error::ZapError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSender {
        calls: Mutex<Vec<(StimulusRequest, String)>>,
    }

    #[async_trait::async_trait]
    impl StimulusSender for RecordingSender {
        async fn send(&self, request: &StimulusRequest, token: &str) -> Result<ApiResponse> {
            self.calls
                .lock()
                .unwrap()
                .push((*request, token.to_string()));
            Ok(ApiResponse(serde_json::json!({"status": "ok"})))
        }
    }

    fn config(stimulus_type: Option<&str>, intensity: Option<&str>) -> CliConfig {
        CliConfig {
            stimulus_type: stimulus_type.map(str::to_string),
            intensity: intensity.map(str::to_string),
            ..CliConfig::default()
        }
    }

    #[test]
    fn test_dispatch_forwards_validated_values() {
        let sender = RecordingSender::default();
        let outcome = tokio_test::block_on(dispatch(
            &sender,
            &config(Some("Vibe"), Some("30")),
            Some("tok".to_string()),
        ))
        .unwrap();

        let expected = StimulusRequest::new(StimulusType::Vibe, Intensity::try_from(30i64).unwrap());
        assert_eq!(
            sender.calls.lock().unwrap().as_slice(),
            &[(expected, "tok".to_string())]
        );
        assert!(matches!(outcome, Outcome::Sent { request, .. } if request == expected));
    }

    #[test]
    fn test_dry_run_skips_sender() {
        let sender = RecordingSender::default();
        let mut cfg = config(Some("beep"), Some("10"));
        cfg.dry_run = true;

        let outcome =
            tokio_test::block_on(dispatch(&sender, &cfg, Some("tok".to_string()))).unwrap();

        assert!(sender.calls.lock().unwrap().is_empty());
        let rendered = render_outcome(&outcome);
        assert!(rendered.starts_with("Dry run: would POST to https://api.pavlok.com/"));
        assert!(rendered.contains("\"stimulusType\": \"beep\""));
        assert!(rendered.contains("\"stimulusValue\": 10"));
    }

    #[test]
    fn test_missing_token_wins_over_bad_arguments() {
        let sender = RecordingSender::default();
        let err = tokio_test::block_on(dispatch(&sender, &config(Some("shock"), Some("abc")), None))
            .unwrap_err();

        assert!(matches!(err, ZapError::Configuration { .. }));
        assert!(sender.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_render_sent() {
        let outcome = Outcome::Sent {
            request: StimulusRequest::default(),
            response: ApiResponse(serde_json::json!({"status": "ok"})),
        };
        assert_eq!(
            render_outcome(&outcome),
            "✅ Zap sent successfully (intensity 50)\n{\n  \"status\": \"ok\"\n}"
        );
    }
}
