use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;

pub mod logs;
pub mod techs;

/// Confirmation body returned by the delete handlers.
#[derive(Debug, Serialize)]
pub struct Removed {
    pub msg: &'static str,
}

/// Malformed ids surface as server errors, not client errors; the store
/// is the authority on id format.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|err| ApiError::Internal(format!("invalid id {raw:?}: {err}")))
}
