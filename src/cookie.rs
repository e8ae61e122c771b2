use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A single cookie decoded from a binary cookie store.
///
/// Records are immutable once decoded and owned by the caller. Timestamps
/// are Unix milliseconds as stored by the format's Mac-epoch conversion;
/// [`Cookie::expiration_time`] and [`Cookie::creation_time`] give the same
/// instants as [`OffsetDateTime`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cookie {
    pub domain: String,
    pub name: String,
    pub path: String,
    pub value: String,
    /// Expiry instant in Unix milliseconds.
    pub expiration: i64,
    /// Creation instant in Unix milliseconds.
    pub creation: i64,
    pub secure: bool,
    pub http_only: bool,
}

impl Cookie {
    /// Expiry instant, or `None` if the stored value is outside the range
    /// `OffsetDateTime` can represent.
    pub fn expiration_time(&self) -> Option<OffsetDateTime> {
        millis_to_datetime(self.expiration)
    }

    /// Creation instant, or `None` if out of representable range.
    pub fn creation_time(&self) -> Option<OffsetDateTime> {
        millis_to_datetime(self.creation)
    }

    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        match self.expiration_time() {
            Some(expiry) => expiry < current_time,
            None => false,
        }
    }
}

fn millis_to_datetime(millis: i64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
}
