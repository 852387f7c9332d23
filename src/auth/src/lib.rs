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

//! Credentials returned by OAuth 2.0 and OpenID Connect token endpoints.
//!
//! An identity provider answers a successful token request with a bundle of
//! values: an [ID token], an [access token], a [refresh token], the token
//! type, the granted scope, and the token lifetime. This crate models that
//! bundle as [credentials::Credentials].
//!
//! Providers express the lifetime either as a number of seconds
//! (`expires_in`) or as an absolute instant (`expires_at`). The credentials
//! always carry both, deriving the missing one when they are created. The
//! current time used in that derivation comes from a [clock::Clock], which
//! applications can replace in tests.
//!
//! Fetching the token response, validating tokens, and storing credentials
//! are outside the scope of this crate.
//!
//! [ID token]: https://openid.net/specs/openid-connect-core-1_0.html#IDToken
//! [access token]: https://datatracker.ietf.org/doc/html/rfc6749#section-1.4
//! [refresh token]: https://datatracker.ietf.org/doc/html/rfc6749#section-1.5

pub mod errors;

/// Sources for the current time.
pub mod clock;

/// Types and functions to work with the credentials returned by a token
/// endpoint.
pub mod credentials;

/// A `Result` alias where the `Err` case is
/// `credential_bundle::errors::CredentialsError`.
pub type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;
