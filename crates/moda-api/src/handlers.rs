//! Request handlers for the HTTP API.
//!
//! Each handler runs one SDK accessor and maps its typed error to a status
//! code. Validation happens inside the accessor, so handlers take path
//! parameters as raw strings.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use moda_core::{ProfileError, ReadError};
use moda_evm::{get_contract_profiles, get_name, ContractProfilesArgs, GetNameArgs};

use crate::server::AppState;

// ---- Response types ----

/// Response for `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Chain selector the server reads from.
    pub chain: Option<String>,
}

/// Response for `GET /profiles/{address}/name`.
#[derive(Debug, Serialize, Deserialize)]
pub struct NameResponse {
    /// Profile contract address, as requested.
    pub address: String,
    pub name: String,
}

/// Errors returned by handlers.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error("profile registry is not configured for this chain")]
    RegistryNotConfigured,
}

impl HandlerError {
    fn status(&self) -> StatusCode {
        match self {
            HandlerError::Read(ReadError::Address(_)) => StatusCode::BAD_REQUEST,
            HandlerError::Read(ReadError::Profile(ProfileError::NameUndefined)) => {
                StatusCode::NOT_FOUND
            }
            HandlerError::Read(ReadError::Profile(ProfileError::NameUndecodable(_))) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            HandlerError::Read(ReadError::Network(_)) => StatusCode::BAD_GATEWAY,
            HandlerError::Read(ReadError::Config(_)) | HandlerError::RegistryNotConfigured => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(%status, "request failed: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

// ---- Handlers ----

/// Health check. Always succeeds.
pub async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        chain: state.client.chain.clone(),
    })
}

/// Reads the name stored on a profile contract.
pub async fn handle_name(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<NameResponse>, HandlerError> {
    let args = GetNameArgs {
        config: state.client.clone(),
        profile_address: address.clone(),
    };
    let name = get_name(&args).await?;
    Ok(Json(NameResponse { address, name }))
}

/// Lists the profile contracts changed by `address`.
pub async fn handle_contract_profiles(
    State(state): State<AppState>,
    Path(address): Path<String>,
) -> Result<Json<Vec<String>>, HandlerError> {
    let registry = state
        .profile_registry
        .ok_or(HandlerError::RegistryNotConfigured)?;
    let args = ContractProfilesArgs {
        config: state.client.clone(),
        registry_address: registry.to_string(),
        caller: address,
        from_block: state.registry_from_block,
    };
    let contracts = get_contract_profiles(&args).await?;
    Ok(Json(contracts.iter().map(|c| c.to_string()).collect()))
}
