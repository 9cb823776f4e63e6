use std::fmt;

use lsp_server::{ExtractError, Notification, ProtocolError, Request};
use serde_json::Error;

#[derive(Debug)]
pub enum LspError {
    ImproperExit,
    ExtractNotificationError(ExtractError<Notification>),
    ExtractRequestError(ExtractError<Request>),
    ProtocolError(ProtocolError),
    JsonError(Error),
}

impl fmt::Display for LspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImproperExit => write!(f, "the client exited without shutting down"),
            Self::ExtractNotificationError(e) => write!(f, "malformed notification: {e:?}"),
            Self::ExtractRequestError(e) => write!(f, "malformed request: {e:?}"),
            Self::ProtocolError(e) => write!(f, "protocol error: {e}"),
            Self::JsonError(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for LspError {}

impl From<ExtractError<Notification>> for LspError {
    fn from(value: ExtractError<Notification>) -> Self {
        Self::ExtractNotificationError(value)
    }
}

impl From<ExtractError<Request>> for LspError {
    fn from(value: ExtractError<Request>) -> Self {
        Self::ExtractRequestError(value)
    }
}

impl From<ProtocolError> for LspError {
    fn from(value: ProtocolError) -> Self {
        Self::ProtocolError(value)
    }
}

impl From<Error> for LspError {
    fn from(value: Error) -> Self {
        Self::JsonError(value)
    }
}
