use serde::Deserialize;
use utoipa::IntoParams;

/// Window size used when the request does not name one.
pub const DEFAULT_LIMIT: u64 = 2;
/// Largest window a request may ask for.
pub const MAX_LIMIT: u64 = 10;
/// Largest offset the database accepts as a signed 64-bit value.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Limit/offset window of a list endpoint.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParam {
    /// Number of results to return (default 2, at most 10).
    pub limit: Option<u64>,
    /// Number of results to skip.
    pub offset: Option<u64>,
}

impl PageParam {
    /// Requested limit clamped to `1..=MAX_LIMIT`.
    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Requested offset clamped to `MAX_OFFSET`.
    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0).min(MAX_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_two_results() {
        let param = PageParam::default();

        assert_eq!(param.limit(), DEFAULT_LIMIT);
        assert_eq!(param.offset(), 0);
    }

    #[test]
    fn clamps_limit_to_maximum() {
        let param = PageParam {
            limit: Some(50),
            offset: Some(4),
        };

        assert_eq!(param.limit(), MAX_LIMIT);
        assert_eq!(param.offset(), 4);
    }

    #[test]
    fn clamps_offset_to_signed_range() {
        let param = PageParam {
            limit: None,
            offset: Some(u64::MAX),
        };

        assert_eq!(param.offset(), MAX_OFFSET);
    }
}
