use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use sucursal_logic::SucursalError;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
pub const ID_EXISTS: &str = "Id already exists in database";
pub const ID_NOT_FOUND: &str = "Id not found in database";
pub const NO_SUCURSALES: &str = "No sucursales were found. Please load sucursales onto database";
pub const INVALID_REQUEST_BODY: &str = "Failed to parse the request body";
pub const CREATED: &str = "Successfully created sucursal";

/// Body of every error response that isn't a validation report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorMsg {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Created {
    pub message: String,
    pub id: String,
}

impl Created {
    pub fn new(id: String) -> Self {
        Self {
            message: CREATED.to_string(),
            id,
        }
    }
}

/// Error returned from handlers, renders a [SucursalError] as a JSON response
#[derive(Debug)]
pub struct ApiError(pub SucursalError);

impl From<SucursalError> for ApiError {
    fn from(err: SucursalError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            SucursalError::MalformedPayload(_)
            | SucursalError::ValidationFailed(_)
            | SucursalError::InvalidFormat(_)
            | SucursalError::OutOfRange(_)
            | SucursalError::NoRecords => StatusCode::BAD_REQUEST,
            SucursalError::AlreadyExists(_) => StatusCode::CONFLICT,
            SucursalError::NotFound(_) => StatusCode::NOT_FOUND,
            SucursalError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn message(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorMsg {
            message: message.into(),
        }),
    )
        .into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.0 {
            SucursalError::ValidationFailed(report) => {
                info!("Validation error in payload: {:?}", report.errors);
                (status, Json(report)).into_response()
            }
            SucursalError::MalformedPayload(why) => {
                warn!("Failed to decode request body: {why}");
                message(status, INVALID_REQUEST_BODY)
            }
            err @ (SucursalError::InvalidFormat(_) | SucursalError::OutOfRange(_)) => {
                info!("Rejected coordinates: {err}");
                message(status, err.to_string())
            }
            SucursalError::AlreadyExists(id) => {
                info!("Sucursal {id} already exists");
                message(status, ID_EXISTS)
            }
            SucursalError::NotFound(id) => {
                info!("Sucursal {id} does not exist");
                message(status, ID_NOT_FOUND)
            }
            SucursalError::NoRecords => {
                warn!("Nearest lookup with no sucursales loaded");
                message(status, NO_SUCURSALES)
            }
            SucursalError::Internal(why) => {
                error!("Internal error while handling request: {why:?}");
                message(status, INTERNAL_SERVER_ERROR)
            }
        }
    }
}
