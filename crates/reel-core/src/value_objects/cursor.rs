//! Feed cursor - opaque keyset pagination token
//!
//! A [`FeedPosition`] is the `(created_at, id)` sort key of the last posting on
//! a page. [`FeedCursor`] turns it into an opaque URL-safe token and back.
//!
//! Token layout: unpadded URL-safe base64 over `{"t":<micros>,"id":"<snowflake>"}`.
//! Callers must treat the token as a bookmark; the layout may change.

use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Upper bound on accepted token length. A valid token is well under 100 bytes.
const MAX_TOKEN_LEN: usize = 256;

/// Seek position in the feed's total order `(created_at DESC, id DESC)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedPosition {
    created_at: DateTime<Utc>,
    id: Snowflake,
}

impl FeedPosition {
    /// Earliest timestamp a cursor may carry: 0001-01-01T00:00:00Z, in microseconds
    pub const MIN_TIMESTAMP_MICROS: i64 = -62_135_596_800_000_000;

    /// Latest timestamp a cursor may carry: 9999-12-31T23:59:59.999999Z, in microseconds
    pub const MAX_TIMESTAMP_MICROS: i64 = 253_402_300_799_999_999;

    /// Create a position. The timestamp is truncated to microseconds, which is
    /// the precision the posting log stores.
    pub fn new(created_at: DateTime<Utc>, id: Snowflake) -> Self {
        Self {
            created_at: created_at.trunc_subsecs(6),
            id,
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn id(&self) -> Snowflake {
        self.id
    }

    /// Whether a row with the given sort key sorts strictly after this
    /// position in `(created_at DESC, id DESC)` order, i.e. belongs to the next page.
    pub fn precedes(&self, created_at: DateTime<Utc>, id: Snowflake) -> bool {
        created_at < self.created_at || (created_at == self.created_at && id < self.id)
    }
}

/// Wire record inside the token
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CursorRecord {
    t: i64,
    id: Snowflake,
}

/// Opaque, encoded feed cursor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedCursor(String);

impl FeedCursor {
    /// Encode a position into a cursor
    pub fn encode(position: &FeedPosition) -> Self {
        let record = CursorRecord {
            t: position.created_at.timestamp_micros(),
            id: position.id,
        };
        // Serializing a struct of an i64 and a Snowflake cannot fail
        let json = serde_json::to_vec(&record).unwrap_or_default();
        Self(URL_SAFE_NO_PAD.encode(json))
    }

    /// Decode a raw token into a position
    ///
    /// # Errors
    /// Returns `DomainError::InvalidCursor` for anything that is not a token
    /// produced by [`FeedCursor::encode`].
    pub fn decode(token: &str) -> Result<FeedPosition, DomainError> {
        if token.is_empty() {
            return Err(invalid("empty token"));
        }
        if token.len() > MAX_TOKEN_LEN {
            return Err(invalid("token too long"));
        }

        let bytes = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| invalid("not base64"))?;
        let record: CursorRecord =
            serde_json::from_slice(&bytes).map_err(|_| invalid("malformed payload"))?;

        if !record.id.is_valid() {
            return Err(invalid("id out of range"));
        }
        // The posting log cannot compare against timestamps beyond these bounds
        if !(FeedPosition::MIN_TIMESTAMP_MICROS..=FeedPosition::MAX_TIMESTAMP_MICROS)
            .contains(&record.t)
        {
            return Err(invalid("timestamp out of range"));
        }
        let created_at =
            DateTime::from_timestamp_micros(record.t).ok_or_else(|| invalid("timestamp out of range"))?;

        Ok(FeedPosition {
            created_at,
            id: record.id,
        })
    }

    /// Borrow the token string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the token string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FeedCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<FeedCursor> for String {
    fn from(cursor: FeedCursor) -> Self {
        cursor.0
    }
}

fn invalid(reason: &str) -> DomainError {
    DomainError::InvalidCursor(reason.to_string())
}
