use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One limit/offset window of a list endpoint.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct PageDto<T> {
    /// Total number of matching rows across all pages.
    pub count: u64,
    pub limit: u64,
    pub offset: u64,
    pub results: Vec<T>,
}
