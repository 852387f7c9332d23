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

//! The credentials returned by an identity provider's token endpoint.
//!
//! A token endpoint responds with an identity token, an access token, a
//! refresh token, the token type, the granted scope, and the token lifetime.
//! Providers describe the lifetime in one of two ways: relative to the time
//! of issuance (`expires_in`, in seconds), or as an absolute instant
//! (`expires_at`). [Credentials] keeps both. When only one is known, the
//! other is derived once, at construction, using the current time from a
//! [Clock].
//!
//! Example usage:
//!
//! ```
//! # use credential_bundle::clock::FixedClock;
//! # use credential_bundle::credentials::Builder;
//! let clock = FixedClock::from_unix_millis(1_000_000_000_000)?;
//! let credentials = Builder::new()
//!     .with_access_token("YOUR_ACCESS_TOKEN")
//!     .with_token_type("Bearer")
//!     .with_expires_in(3600)
//!     .build_with_clock(&clock);
//! assert_eq!(credentials.expires_in(), Some(3600));
//! assert_eq!(
//!     credentials.expires_at().map(|t| t.unix_timestamp()),
//!     Some(1_000_003_600)
//! );
//! # Ok::<(), credential_bundle::errors::CredentialsError>(())
//! ```

use crate::Result;
use crate::clock::{Clock, SystemClock};
use crate::errors::CredentialsError;
use serde_json::Value;
use time::{Duration, OffsetDateTime};

/// Holds the credentials returned by an identity provider.
///
/// All fields are optional, providers omit the fields that do not apply to
/// a given grant. The value is immutable once created.
///
/// After construction `expires_in` and `expires_at` are either both set or
/// both unset:
/// * If the provider sent both, they are kept as-is, even if they disagree.
/// * If the provider sent only one, the other is derived from it.
/// * If the provider sent neither, the credentials have no known expiration.
#[derive(Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "Builder")]
pub struct Credentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    id_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_in: Option<i64>,
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    expires_at: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
}

impl Credentials {
    /// Creates credentials whose lifetime is relative to the time of issuance.
    ///
    /// The expiration instant is computed from `expires_in` and the system
    /// clock. Use [Builder] to set a scope or to provide a different clock.
    pub fn with_expires_in(
        id_token: Option<String>,
        access_token: Option<String>,
        token_type: Option<String>,
        refresh_token: Option<String>,
        expires_in: Option<i64>,
    ) -> Self {
        Builder {
            id_token,
            access_token,
            token_type,
            refresh_token,
            expires_in,
            ..Builder::default()
        }
        .build()
    }

    /// Creates credentials that expire at a fixed instant.
    ///
    /// The remaining lifetime is computed from `expires_at` and the system
    /// clock. Use [Builder] to provide a different clock.
    pub fn with_expires_at(
        id_token: Option<String>,
        access_token: Option<String>,
        token_type: Option<String>,
        refresh_token: Option<String>,
        expires_at: Option<OffsetDateTime>,
        scope: Option<String>,
    ) -> Self {
        Builder {
            id_token,
            access_token,
            token_type,
            refresh_token,
            expires_at,
            scope,
            ..Builder::default()
        }
        .build()
    }

    /// Decodes credentials from the JSON body of a token endpoint response.
    ///
    /// Missing expiry fields are derived using `clock`.
    ///
    /// # Example
    /// ```
    /// # use credential_bundle::clock::FixedClock;
    /// # use credential_bundle::credentials::Credentials;
    /// let clock = FixedClock::from_unix_millis(1_000_000_000_000)?;
    /// let json = r#"{
    ///     "access_token": "YOUR_ACCESS_TOKEN",
    ///     "token_type": "Bearer",
    ///     "expires_at": "2001-09-09T02:46:40.000Z"
    /// }"#;
    /// let credentials = Credentials::from_json_with_clock(json, &clock)?;
    /// assert_eq!(credentials.expires_in(), Some(3600));
    /// # Ok::<(), credential_bundle::errors::CredentialsError>(())
    /// ```
    pub fn from_json_with_clock<C: Clock + ?Sized>(json: &str, clock: &C) -> Result<Self> {
        let builder = serde_json::from_str::<Builder>(json).map_err(CredentialsError::decode)?;
        Ok(builder.build_with_clock(clock))
    }

    /// Decodes credentials from an already parsed JSON value.
    ///
    /// Missing expiry fields are derived using `clock`.
    pub fn from_value_with_clock<C: Clock + ?Sized>(value: Value, clock: &C) -> Result<Self> {
        let builder = serde_json::from_value::<Builder>(value).map_err(CredentialsError::decode)?;
        Ok(builder.build_with_clock(clock))
    }

    /// The identity token, with information about the user.
    pub fn id_token(&self) -> Option<&str> {
        self.id_token.as_deref()
    }

    /// The access token, used to call APIs on behalf of the user.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// The type of the access token.
    ///
    /// The most common type is `"Bearer"`.
    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_deref()
    }

    /// The refresh token, used to obtain new credentials without signing in
    /// again.
    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// The token lifetime in seconds, at the time the credentials were
    /// created.
    ///
    /// This value does not change as time passes. It may be zero or negative
    /// if the provider returned a token that was already expired.
    pub fn expires_in(&self) -> Option<i64> {
        self.expires_in
    }

    /// The instant at which the access token expires.
    ///
    /// Once expired, the token can no longer be used to call APIs, and new
    /// credentials need to be obtained.
    pub fn expires_at(&self) -> Option<OffsetDateTime> {
        self.expires_at
    }

    /// The granted scope, as returned by the provider.
    ///
    /// Providers usually include this field only if the granted scope differs
    /// from the requested scope.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Iterates over the space-delimited entries in [scope][Self::scope].
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.scope().unwrap_or_default().split_whitespace()
    }

    /// Returns a [Builder] initialized with these credentials.
    ///
    /// Both expiry fields are already present in the builder, so building it
    /// again returns equal credentials regardless of the clock.
    pub fn into_builder(self) -> Builder {
        Builder {
            id_token: self.id_token,
            access_token: self.access_token,
            token_type: self.token_type,
            refresh_token: self.refresh_token,
            expires_in: self.expires_in,
            expires_at: self.expires_at,
            scope: self.scope,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const CENSORED: &str = "[censored]";
        f.debug_struct("Credentials")
            .field("id_token", &self.id_token.as_ref().map(|_| CENSORED))
            .field("access_token", &self.access_token.as_ref().map(|_| CENSORED))
            .field("token_type", &self.token_type)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| CENSORED))
            .field("expires_in", &self.expires_in)
            .field("expires_at", &self.expires_at)
            .field("scope", &self.scope)
            .finish()
    }
}

impl From<Builder> for Credentials {
    fn from(builder: Builder) -> Self {
        builder.build()
    }
}

/// A builder for [Credentials].
///
/// All fields start unset. Call [build][Builder::build] or
/// [build_with_clock][Builder::build_with_clock] to reconcile the expiry
/// fields and create the credentials.
///
/// The builder also describes the wire format of a token endpoint response,
/// any subset of `id_token`, `access_token`, `token_type`, `refresh_token`,
/// `expires_in`, `expires_at` (an RFC 3339 timestamp), and `scope`.
///
/// # Example
/// ```
/// # use credential_bundle::credentials::Builder;
/// let credentials = Builder::new()
///     .with_id_token("YOUR_ID_TOKEN")
///     .with_access_token("YOUR_ACCESS_TOKEN")
///     .with_refresh_token("YOUR_REFRESH_TOKEN")
///     .with_scope("openid profile")
///     .build();
/// assert_eq!(credentials.expires_at(), None);
/// ```
#[derive(Clone, Default, serde::Deserialize)]
pub struct Builder {
    #[serde(default)]
    id_token: Option<String>,
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    expires_at: Option<OffsetDateTime>,
    #[serde(default)]
    scope: Option<String>,
}

impl Builder {
    /// Creates a builder with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identity token.
    pub fn with_id_token<S: Into<String>>(mut self, v: S) -> Self {
        self.id_token = Some(v.into());
        self
    }

    /// Sets the access token.
    pub fn with_access_token<S: Into<String>>(mut self, v: S) -> Self {
        self.access_token = Some(v.into());
        self
    }

    /// Sets the token type, typically `"Bearer"`.
    pub fn with_token_type<S: Into<String>>(mut self, v: S) -> Self {
        self.token_type = Some(v.into());
        self
    }

    /// Sets the refresh token.
    pub fn with_refresh_token<S: Into<String>>(mut self, v: S) -> Self {
        self.refresh_token = Some(v.into());
        self
    }

    /// Sets the token lifetime in seconds, relative to the time of issuance.
    ///
    /// Zero and negative values are accepted, they describe a token that is
    /// already expired.
    pub fn with_expires_in(mut self, seconds: i64) -> Self {
        self.expires_in = Some(seconds);
        self
    }

    /// Sets the instant at which the token expires.
    pub fn with_expires_at(mut self, v: OffsetDateTime) -> Self {
        self.expires_at = Some(v);
        self
    }

    /// Sets the granted scope, a space-delimited list.
    pub fn with_scope<S: Into<String>>(mut self, v: S) -> Self {
        self.scope = Some(v.into());
        self
    }

    /// Returns [Credentials], deriving any missing expiry field from the
    /// system clock.
    pub fn build(self) -> Credentials {
        self.build_with_clock(&SystemClock)
    }

    /// Returns [Credentials], deriving any missing expiry field from `clock`.
    ///
    /// The clock is consulted at most once, and only if exactly one of the
    /// expiry fields is set.
    pub fn build_with_clock<C: Clock + ?Sized>(self, clock: &C) -> Credentials {
        let (expires_in, expires_at) = reconcile(self.expires_in, self.expires_at, clock);
        Credentials {
            id_token: self.id_token,
            access_token: self.access_token,
            token_type: self.token_type,
            refresh_token: self.refresh_token,
            expires_in,
            expires_at,
            scope: self.scope,
        }
    }
}

// 0000-01-01T00:00:00Z, the earliest instant RFC 3339 can encode.
fn rfc3339_min() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH.saturating_add(Duration::seconds(-62_167_219_200))
}

// 9999-12-31T23:59:59.999999999Z, the latest instant RFC 3339 can encode.
fn rfc3339_max() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH.saturating_add(Duration::new(253_402_300_799, 999_999_999))
}

// Derived instants are clamped to the RFC 3339 range so they can be serialized.
// Both conditions test the inputs as received, never the derived values.
fn reconcile<C: Clock + ?Sized>(
    expires_in: Option<i64>,
    expires_at: Option<OffsetDateTime>,
    clock: &C,
) -> (Option<i64>, Option<OffsetDateTime>) {
    match (expires_in, expires_at) {
        (Some(seconds), None) => {
            let at = clock
                .now()
                .saturating_add(Duration::seconds(seconds))
                .clamp(rfc3339_min(), rfc3339_max());
            tracing::debug!(expires_in = seconds, "derived expires_at from expires_in");
            (Some(seconds), Some(at))
        }
        (None, Some(at)) => {
            // `whole_seconds()` truncates toward zero.
            let seconds = (at - clock.now()).whole_seconds();
            tracing::debug!(expires_in = seconds, "derived expires_in from expires_at");
            (Some(seconds), Some(at))
        }
        (expires_in, expires_at) => (expires_in, expires_at),
    }
}
