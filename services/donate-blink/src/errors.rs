use anchor_lang::prelude::{ProgramError, Pubkey};
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::cors::ACTIONS_CORS_HEADERS;

pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

pub type Result<T> = std::result::Result<T, BlinkError>;

#[derive(Debug, Error)]
pub enum BlinkError {
    #[error("Invalid \"account\" provided")]
    InvalidAccount,
    #[error("Invalid input query parameter: to")]
    InvalidTo,
    #[error("Invalid input query parameter: amount")]
    InvalidAmount,
    #[error("Invalid input query parameter: token")]
    InvalidToken,
    #[error("account may not be rent exempt: {0}")]
    RentExemption(Pubkey),
    #[error("rpc error: {0}")]
    Rpc(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to build instruction: {0}")]
    Program(#[from] ProgramError),
    #[error("invalid blockhash: {0}")]
    Blockhash(String),
}

impl BlinkError {
    /// Validation failures are reported verbatim, anything else is masked.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BlinkError::InvalidAccount
                | BlinkError::InvalidTo
                | BlinkError::InvalidAmount
                | BlinkError::InvalidToken
                | BlinkError::RentExemption(_)
        )
    }

    pub fn public_message(&self) -> String {
        if self.is_validation() {
            self.to_string()
        } else {
            UNKNOWN_ERROR_MESSAGE.to_string()
        }
    }
}

impl IntoResponse for BlinkError {
    fn into_response(self) -> Response {
        if self.is_validation() {
            tracing::debug!(error = %self, "rejected action request");
        } else {
            tracing::error!(error = %self, "action request failed");
        }

        (
            StatusCode::BAD_REQUEST,
            ACTIONS_CORS_HEADERS,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.public_message(),
        )
            .into_response()
    }
}
