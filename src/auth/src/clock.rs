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

//! Sources for the current time.
//!
//! Deriving one expiry field from the other needs to know "now". The
//! [Credentials][crate::credentials::Credentials] constructors take that value
//! from a [Clock] instead of reading the system time directly, so tests can
//! pin the current time to a known instant.

use crate::Result;
use crate::errors::CredentialsError;
use std::sync::Arc;
use time::OffsetDateTime;

/// A source for the current time.
///
/// # Example
/// ```
/// # use credential_bundle::clock::{Clock, FixedClock};
/// let clock = FixedClock::from_unix_millis(1_000_000_000_000)?;
/// assert_eq!(clock.now().unix_timestamp(), 1_000_000_000);
/// # Ok::<(), credential_bundle::errors::CredentialsError>(())
/// ```
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// Returns the current time.
    fn now(&self) -> OffsetDateTime;
}

/// A [Clock] backed by the system time, in UTC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A [Clock] that always returns the same instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(OffsetDateTime);

impl FixedClock {
    /// Creates a clock that always returns `now`.
    pub fn new(now: OffsetDateTime) -> Self {
        Self(now)
    }

    /// Creates a clock from milliseconds since the Unix epoch.
    ///
    /// Fails if `millis` is outside the range supported by [OffsetDateTime].
    pub fn from_unix_millis(millis: i64) -> Result<Self> {
        let nanos = i128::from(millis) * 1_000_000;
        OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .map(Self)
            .map_err(CredentialsError::out_of_range)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for Box<T> {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}
