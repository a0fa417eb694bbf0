//! HTTP client for the public word API
//!
//! - `GET  {base}/word-of-the-day` → `{ "word": "crane" }`
//! - `POST {base}/validate-word` with `{ "word": "CRANE" }` → `{ "validWord": true }`

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{FetchFailure, ValidationFailure, WordService};
use crate::core::Word;

/// Public endpoint used when no `--api-base` is given
pub const DEFAULT_API_BASE: &str = "https://words.dev-apis.com";

#[derive(Debug, Deserialize)]
struct WordOfTheDay {
    word: String,
}

#[derive(Debug, Serialize)]
struct ValidateRequest<'a> {
    word: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidateResponse {
    valid_word: bool,
}

/// Blocking client over a shared `ureq` agent
pub struct HttpWordService {
    agent: ureq::Agent,
    base: String,
}

impl HttpWordService {
    /// Create a client for `base` (no trailing slash needed)
    ///
    /// Without a timeout a hung request blocks until the OS gives up.
    #[must_use]
    pub fn new(base: &str, timeout: Option<Duration>) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self {
            agent: builder.build(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }
}

impl WordService for HttpWordService {
    fn word_of_the_day(&self) -> Result<Word, FetchFailure> {
        let url = format!("{}/word-of-the-day", self.base);
        debug!(%url, "fetching word of the day");

        let response = self.agent.get(&url).call().map_err(|err| match err {
            ureq::Error::Status(code, _) => FetchFailure::Status(code),
            ureq::Error::Transport(transport) => FetchFailure::Transport(transport.to_string()),
        })?;
        let body = response
            .into_string()
            .map_err(|err| FetchFailure::Malformed(err.to_string()))?;

        decode_word_of_the_day(&body)
    }

    fn validate(&self, guess: &Word) -> Result<(), ValidationFailure> {
        let url = format!("{}/validate-word", self.base);
        let payload = serde_json::to_string(&ValidateRequest {
            word: guess.as_str(),
        })
        .map_err(|err| ValidationFailure::Malformed(err.to_string()))?;
        debug!(%url, guess = %guess, "validating guess");

        let response = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_string(&payload)
            .map_err(|err| match err {
                ureq::Error::Status(code, _) => {
                    warn!(code, "validator returned error status");
                    ValidationFailure::Status(code)
                }
                ureq::Error::Transport(transport) => {
                    warn!(error = %transport, "validator unreachable");
                    ValidationFailure::Transport(transport.to_string())
                }
            })?;
        let body = response
            .into_string()
            .map_err(|err| ValidationFailure::Malformed(err.to_string()))?;

        decode_validation(&body)
    }
}

fn decode_word_of_the_day(body: &str) -> Result<Word, FetchFailure> {
    let parsed: WordOfTheDay =
        serde_json::from_str(body).map_err(|err| FetchFailure::Malformed(err.to_string()))?;
    Word::new(parsed.word.trim()).map_err(|err| FetchFailure::Malformed(err.to_string()))
}

fn decode_validation(body: &str) -> Result<(), ValidationFailure> {
    let parsed: ValidateResponse =
        serde_json::from_str(body).map_err(|err| ValidationFailure::Malformed(err.to_string()))?;
    if parsed.valid_word {
        Ok(())
    } else {
        Err(ValidationFailure::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_of_the_day_is_uppercased() {
        let word = decode_word_of_the_day(r#"{"word":"crane","puzzleNumber":42}"#).unwrap();
        assert_eq!(word.as_str(), "CRANE");
    }

    #[test]
    fn word_of_the_day_rejects_bad_bodies() {
        assert!(matches!(
            decode_word_of_the_day("<html>oops</html>"),
            Err(FetchFailure::Malformed(_))
        ));
        assert!(matches!(
            decode_word_of_the_day(r#"{"word":"toolong"}"#),
            Err(FetchFailure::Malformed(_))
        ));
        assert!(matches!(
            decode_word_of_the_day(r#"{"answer":"crane"}"#),
            Err(FetchFailure::Malformed(_))
        ));
    }

    #[test]
    fn validation_reply_maps_to_result() {
        assert_eq!(
            decode_validation(r#"{"word":"CRANE","validWord":true}"#),
            Ok(())
        );
        assert_eq!(
            decode_validation(r#"{"word":"XQZVP","validWord":false}"#),
            Err(ValidationFailure::Rejected)
        );
        assert!(matches!(
            decode_validation("{}"),
            Err(ValidationFailure::Malformed(_))
        ));
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_string(&ValidateRequest { word: "CRANE" }).unwrap();
        assert_eq!(body, r#"{"word":"CRANE"}"#);
    }

    #[test]
    fn base_trailing_slash_is_trimmed() {
        let service = HttpWordService::new("http://localhost:8080/", None);
        assert_eq!(service.base(), "http://localhost:8080");
    }
}
