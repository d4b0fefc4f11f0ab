use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

const MOCK_AMOUNT: &str = "55.98";
const CLOSING_DAYS: i64 = 5;

/// Mock account balance. Nothing is stored; every call recomputes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    pub amount: String,
    /// `YYYY-MM-DD`
    pub closes_in: String,
}

impl Balance {
    pub fn closing_from(now: DateTime<Utc>) -> Self {
        Self {
            amount: MOCK_AMOUNT.to_string(),
            closes_in: (now + Duration::days(CLOSING_DAYS))
                .format("%Y-%m-%d")
                .to_string(),
        }
    }
}
