//! User-facing error messages
//!
//! Raw failures from the store and the quote rotation are mapped to fixed,
//! readable sentences by matching known phrases. Anything unrecognised is
//! shown as-is.

use std::any::Any;

/// A failure as it arrives at the request layer
#[derive(Debug, Clone)]
pub enum RawError {
    /// A bare message string
    Text(String),
    /// An error value; carries its display message
    Failure(String),
    /// Anything without a usable message
    Opaque,
}

impl From<&anyhow::Error> for RawError {
    fn from(err: &anyhow::Error) -> Self {
        RawError::Failure(err.to_string())
    }
}

impl From<anyhow::Error> for RawError {
    fn from(err: anyhow::Error) -> Self {
        RawError::Failure(err.to_string())
    }
}

/// A caught panic: string payloads keep their text, anything else is opaque
impl From<Box<dyn Any + Send>> for RawError {
    fn from(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<String>() {
            Ok(text) => RawError::Text(*text),
            Err(payload) => match payload.downcast_ref::<&str>() {
                Some(text) => RawError::Text(text.to_string()),
                None => RawError::Opaque,
            },
        }
    }
}

pub const CONNECTING: &str = "Connection is still initializing. Please wait a moment and try again.";
pub const SELECT_CHALLENGE: &str = "Please select a challenge from the list or describe your own challenge.";
pub const DESCRIBE_CHALLENGE: &str = "Please provide a challenge description.";
pub const NETWORK: &str = "Network error. Please check your connection and try again.";
pub const SERVER: &str = "The server encountered an error. Please try again.";
pub const QUOTE: &str = "Unable to fetch quote. Please try again.";
pub const UNEXPECTED: &str = "An unexpected error occurred. Please try again.";

/// Phrases recognised in both bare strings and error values
fn common_message(message: &str) -> Option<&'static str> {
    if message.contains("Actor not initialized") {
        Some(CONNECTING)
    } else if message.contains("Please select at least a core Leadership Challenge") {
        Some(SELECT_CHALLENGE)
    } else if message.contains("Please provide at least a core Leadership Challenge") {
        Some(DESCRIBE_CHALLENGE)
    } else {
        None
    }
}

/// Map a raw failure to the sentence shown to the attendee
pub fn to_user_facing_error(error: &RawError) -> String {
    match error {
        RawError::Text(text) => common_message(text)
            .map(str::to_string)
            .unwrap_or_else(|| text.clone()),
        RawError::Failure(message) => {
            if let Some(mapped) = common_message(message) {
                return mapped.to_string();
            }
            let mapped = if message.contains("fetch") || message.contains("network") {
                NETWORK
            } else if message.contains("reject") || message.contains("trap") {
                SERVER
            } else if message.contains("quote") {
                QUOTE
            } else {
                return message.clone();
            };
            mapped.to_string()
        }
        RawError::Opaque => UNEXPECTED.to_string(),
    }
}
