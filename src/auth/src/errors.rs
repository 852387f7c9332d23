// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Errors created while decoding credentials.
//!
//! Building [Credentials][crate::credentials::Credentials] from in-memory
//! values never fails. Errors only appear when the values come from an
//! external representation, such as the JSON body of a token endpoint
//! response.

/// Represents an error decoding [Credentials][crate::credentials::Credentials]
/// or one of its inputs.
///
/// Applications can query the error [source][std::error::Error::source] for
/// the underlying parser error.
///
/// # Example
/// ```
/// # use credential_bundle::clock::SystemClock;
/// # use credential_bundle::credentials::Credentials;
/// let err = Credentials::from_json_with_clock(r#"{"expires_in": "soon"}"#, &SystemClock)
///     .unwrap_err();
/// assert!(err.is_decode(), "{err}");
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct CredentialsError(ErrorKind);

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("cannot decode the credentials: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("the timestamp is outside the supported range: {0}")]
    OutOfRange(#[source] time::error::ComponentRange),
}

impl CredentialsError {
    pub(crate) fn decode(source: serde_json::Error) -> Self {
        Self(ErrorKind::Decode(source))
    }

    pub(crate) fn out_of_range(source: time::error::ComponentRange) -> Self {
        Self(ErrorKind::OutOfRange(source))
    }

    /// The input could not be decoded.
    ///
    /// # Troubleshooting
    ///
    /// The most common causes are malformed JSON, a field with the wrong type
    /// (for example, `"expires_in": "3600"`), or an `expires_at` value that is
    /// not a valid [RFC 3339] timestamp.
    ///
    /// [RFC 3339]: https://datatracker.ietf.org/doc/html/rfc3339
    pub fn is_decode(&self) -> bool {
        matches!(self.0, ErrorKind::Decode(_))
    }

    /// A timestamp could not be represented.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self.0, ErrorKind::OutOfRange(_))
    }
}
