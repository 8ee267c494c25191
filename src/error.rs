use crate::transport::TransportError;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EcobeeError {
    /// A local precondition failed before any request was sent. The message names the parameter.
    #[error("{0}")]
    InvalidArgument(&'static str),
    /// ecobee rejected the request.
    #[error("{description}")]
    Api { description: String },
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl EcobeeError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, EcobeeError::InvalidArgument(_))
    }

    /// Translates a failed request into an `Api` error when the body carries an ecobee error payload.
    pub(crate) fn from_transport(error: TransportError, source: VendorMessage) -> Self {
        let vendor_error = error.body().and_then(|body| serde_json::from_str::<VendorError>(body).ok());

        match vendor_error {
            Some(VendorError { error_description: Some(description), .. }) => EcobeeError::Api { description },
            Some(VendorError { status: Some(status), .. }) if source == VendorMessage::DescriptionOrStatus => {
                EcobeeError::Api { description: status.message }
            }
            _ => EcobeeError::Transport(error),
        }
    }
}

/// Which parts of an ecobee error body are turned into an `Api` error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VendorMessage {
    /// OAuth endpoints only report `error_description`.
    Description,
    DescriptionOrStatus,
}

#[derive(Debug, Deserialize)]
struct VendorError {
    error_description: Option<String>,
    status: Option<VendorStatus>,
}

#[derive(Debug, Deserialize)]
struct VendorStatus {
    #[serde(default)]
    message: String,
}

pub(crate) fn ensure_non_empty(value: &str, message: &'static str) -> Result<(), EcobeeError> {
    if value.is_empty() {
        return Err(EcobeeError::InvalidArgument(message));
    }
    Ok(())
}
