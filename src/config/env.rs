use crate::utils::error::{Result, ZapError};
use crate::utils::validation::validate_non_empty_string;
use std::env;

pub const TOKEN_ENV_VAR: &str = "PAVLOK_TOKEN";

pub const TOKEN_SETUP_HELP: &str = "\
Setup:
  The API token is read from the PAVLOK_TOKEN environment variable.

  1. Log in to obtain a token:
       curl -X POST https://api.pavlok.com/api/v5/users/login \\
         -H 'Content-Type: application/json' \\
         -d '{\"email\": \"you@example.com\", \"password\": \"your-password\"}'
  2. Copy the token from the response.
  3. Export it:
       export PAVLOK_TOKEN='<token>'";

/// Raw lookup; `require_token` decides whether the value is usable.
pub fn token_from_env() -> Option<String> {
    env::var(TOKEN_ENV_VAR).ok()
}

/// An unset, empty or whitespace-only value is a missing token.
pub fn require_token(value: Option<String>) -> Result<String> {
    let missing = || ZapError::Configuration {
        message: format!("{} environment variable not set\n\n{}", TOKEN_ENV_VAR, TOKEN_SETUP_HELP),
    };

    let token = value.ok_or_else(missing)?;
    validate_non_empty_string(TOKEN_ENV_VAR, &token).map_err(|_| missing())?;
    Ok(token.trim().to_string())
}
