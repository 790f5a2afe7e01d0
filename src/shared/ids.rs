/**
 * Identifiers
 *
 * This module defines the user identifier used as the primary key of user
 * documents, and the parsing rules for group identifiers received as text.
 *
 * # User Identifiers
 *
 * A user id is 12 bytes rendered as 24 hexadecimal characters, the native
 * identifier format of the document store. Every incoming id is validated
 * with `UserId::parse` before any store query is built from it.
 *
 * # Group Identifiers
 *
 * Group ids are small positive integers that travel as path segments. They
 * are parsed leniently: leading whitespace and sign, then the leading run of
 * decimal digits. Anything after the digits is ignored.
 */
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::shared::error::SharedError;

/// Length of a user id in bytes
pub const USER_ID_BYTES: usize = 12;

/// Length of a user id rendered as hex
pub const USER_ID_HEX_LEN: usize = USER_ID_BYTES * 2;

static ID_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Unique identifier of a user document
///
/// Assigned by the store when the user is created and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId([u8; USER_ID_BYTES]);

impl UserId {
    /// Check whether `id` is a well-formed user id
    ///
    /// # Example
    /// ```rust
    /// use groupnotes::shared::ids::UserId;
    ///
    /// assert!(UserId::is_valid("65a1f0c2e4b0a1b2c3d4e5f6"));
    /// assert!(!UserId::is_valid("not-an-id"));
    /// ```
    pub fn is_valid(id: &str) -> bool {
        id.len() == USER_ID_HEX_LEN && id.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// Parse a user id, rejecting anything that is not 24 hex characters
    pub fn parse(id: &str) -> Result<Self, SharedError> {
        if !Self::is_valid(id) {
            return Err(SharedError::InvalidUserId {
                input: id.to_string(),
            });
        }

        let mut bytes = [0u8; USER_ID_BYTES];
        for (i, chunk) in id.as_bytes().chunks(2).enumerate() {
            bytes[i] = (hex_value(chunk[0]) << 4) | hex_value(chunk[1]);
        }
        Ok(Self(bytes))
    }

    /// Mint a fresh id
    ///
    /// Layout: 4-byte big-endian creation time in seconds, 5 random bytes,
    /// 3-byte big-endian counter.
    pub fn generate() -> Self {
        let seconds = chrono::Utc::now().timestamp() as u32;
        let random = uuid::Uuid::new_v4();
        let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut bytes = [0u8; USER_ID_BYTES];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..9].copy_from_slice(&random.as_bytes()[..5]);
        bytes[9..].copy_from_slice(&counter.to_be_bytes()[1..]);
        Self(bytes)
    }

    /// Seconds since the Unix epoch at which this id was minted
    #[cfg(test)]
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Lower-case hex rendering
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

fn hex_value(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0,
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for UserId {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for UserId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Parse a group id the way the client-facing API always has
///
/// Returns `None` when the text has no leading integer. Values that do not
/// fit in an `i64` are also `None`.
///
/// # Example
/// ```rust
/// use groupnotes::shared::ids::parse_group_id;
///
/// assert_eq!(parse_group_id("3"), Some(3));
/// assert_eq!(parse_group_id(" 12abc"), Some(12));
/// assert_eq!(parse_group_id("abc"), None);
/// ```
pub fn parse_group_id(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}
