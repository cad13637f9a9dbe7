//! Turns failed API calls into messages an end user can act on.
//!
//! Lookup order for a structured error: JSON parse errors, then the
//! per-operation code map, then the global code map, then the raw server
//! message.

use std::sync::LazyLock;

use console_access_core::{camel_case_to_words, capitalize};
use console_access_domain::{ProcessedError, ServerError, StructuredError};
use regex::Regex;
use tracing::{debug, warn};

mod catalog;
#[cfg(test)]
mod tests;

pub use catalog::{CodeTemplate, ErrorCatalog};

/// Message used when the response body could not be read.
pub const CLIENT_READ_MESSAGE: &str = "Error reading API response";

/// Message used when the server sent nothing presentable.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error from server";

static PARSE_ERROR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    literal_pattern(r"^(?i:unable to parse JSON body: )(.+) at line \d+ column \d+$")
});

static ALREADY_EXISTS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| literal_pattern(r#"^already exists: ([^"]+)"#));

/// Compiles one of the literal patterns above. Both are exercised by the
/// module tests, so a failure here can only come from editing a literal.
#[allow(clippy::expect_used)]
fn literal_pattern(pattern: &str) -> Regex {
    Regex::new(pattern).expect("literal message pattern compiles")
}

/// Classifies `error` for `operation` with the default catalog.
#[must_use]
pub fn process_server_error(operation: &str, error: &ServerError) -> ProcessedError {
    ErrorCatalog::default().process(operation, error)
}

/// Extracts the readable part of a JSON body parse error, dropping the
/// line and column suffix.
#[must_use]
pub fn get_parse_error(message: &str) -> Option<String> {
    PARSE_ERROR_PATTERN
        .captures(message)
        .and_then(|captures| captures.get(1))
        .map(|inner| capitalize(inner.as_str()))
}

/// Names the resource an `ObjectAlreadyExists` error refers to.
///
/// The server message wins because one operation can create several kinds of
/// resource (instance create also creates disks). Otherwise the word before
/// `Create` in the operation name is used, singularized.
#[must_use]
pub fn get_resource_name(operation: &str, message: &str) -> Option<String> {
    if let Some(resource) = ALREADY_EXISTS_PATTERN
        .captures(message)
        .and_then(|captures| captures.get(1))
    {
        return Some(resource.as_str().trim().to_owned());
    }

    let words = camel_case_to_words(operation);
    let position = words.iter().position(|word| word == "create")?;
    if position == 0 {
        return None;
    }

    let noun = words[position - 1].as_str();
    Some(noun.strip_suffix('s').unwrap_or(noun).to_owned())
}

impl ErrorCatalog {
    /// Classifies `error` for `operation` using this catalog.
    #[must_use]
    pub fn process(&self, operation: &str, error: &ServerError) -> ProcessedError {
        let status_code = error.status_code();
        let error = match error {
            ServerError::ClientRead(client_error) => {
                warn!(
                    operation,
                    status_code,
                    detail = client_error.detail.as_deref().unwrap_or(""),
                    "failed to read API response"
                );
                return ProcessedError {
                    message: CLIENT_READ_MESSAGE.to_owned(),
                    status_code,
                    error_code: None,
                    request_id: None,
                };
            }
            ServerError::Structured(structured) => structured,
        };

        let error_code = error.error_code.as_deref().filter(|code| !code.is_empty());
        let message = self.classify(operation, error_code, error);

        debug!(
            operation,
            status_code,
            error_code = error_code.unwrap_or(""),
            "classified server error"
        );

        ProcessedError {
            message,
            status_code,
            error_code: error_code.map(str::to_owned),
            request_id: error.request_id.clone(),
        }
    }

    fn classify(
        &self,
        operation: &str,
        error_code: Option<&str>,
        error: &StructuredError,
    ) -> String {
        if let Some(message) = get_parse_error(&error.message) {
            return message;
        }

        if let Some(code) = error_code {
            if let Some(message) = self.operation_message(operation, code, &error.message) {
                return message;
            }

            if let Some(message) = self.global_message(code) {
                return message.to_owned();
            }
        }

        fallback_message(&error.message)
    }
}

fn fallback_message(message: &str) -> String {
    if message.trim().is_empty() {
        return UNKNOWN_ERROR_MESSAGE.to_owned();
    }

    capitalize(message)
}
