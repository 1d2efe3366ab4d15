//! OAuth 2.0 bearer token with redacted Debug/Display output.

use crate::{ErrorLocation, RedactError};

use std::fmt;
use std::panic::Location;

use serde::ser::Error;
use zeroize::Zeroize;

/// Bearer token sent as `Authorization: Bearer <token>` on API requests.
///
/// The value is only reachable through [`AccessToken::as_str`]; formatting
/// prints a placeholder and the backing string is zeroized on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    inner: String,
}

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            inner: token.into(),
        }
    }

    /// Raw token value. Only call this when building the request header.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccessToken([REDACTED])")
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED ACCESS TOKEN]")
    }
}

impl Drop for AccessToken {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl serde::Serialize for AccessToken {
    #[track_caller]
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            type_name: "AccessToken",
            accessor: "as_str()",
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}
