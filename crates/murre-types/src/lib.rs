//! Shared capability traits and value types.
//!
//! This crate defines the contracts the rest of the workspace is built
//! against:
//!
//! - [`StableHashable`]: a deterministic 64-bit identity, stable across
//!   process restarts.
//! - [`TimeSource`]: injectable wall-clock time, with a real
//!   implementation ([`SystemTimeSource`]) and a settable one for tests
//!   ([`ManualTimeSource`]).
//! - [`HostAndPort`]: the endpoint address value exchanged between
//!   membership layers.

use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Stable identity
// ---------------------------------------------------------------------------

/// A deterministic 64-bit identity, stable across process restarts.
///
/// Native hash codes are implementation-defined and may change between
/// runs. Types that participate in placement (ring nodes, routed items)
/// implement this instead, so the same value always lands in the same
/// place no matter which process computes it.
pub trait StableHashable {
    /// The stable 64-bit identity of this value.
    fn identity(&self) -> u64;
}

/// Raw identities stand in as transient lookup keys.
impl StableHashable for u64 {
    fn identity(&self) -> u64 {
        *self
    }
}

// ---------------------------------------------------------------------------
// Time sources
// ---------------------------------------------------------------------------

/// A source of wall-clock time in Unix milliseconds.
///
/// Components that reason about elapsed time take one of these instead
/// of reading the system clock directly, so tests can drive the clock
/// by hand.
pub trait TimeSource: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn unix_time_millis(&self) -> f64;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn unix_time_millis(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// Settable clock for deterministic tests.
///
/// Shared behind an `Arc`: the test keeps one handle to drive the clock
/// while the component under test reads through another.
#[derive(Debug, Default)]
pub struct ManualTimeSource {
    now_ms: Mutex<f64>,
}

impl ManualTimeSource {
    /// Create a clock reading `now_ms`.
    pub fn new(now_ms: f64) -> Self {
        Self {
            now_ms: Mutex::new(now_ms),
        }
    }

    /// Set the clock to an absolute reading.
    pub fn set(&self, now_ms: f64) {
        *self.now_ms.lock().expect("clock lock poisoned") = now_ms;
    }

    /// Move the clock forward by `delta_ms`.
    pub fn advance(&self, delta_ms: f64) {
        *self.now_ms.lock().expect("clock lock poisoned") += delta_ms;
    }
}

impl TimeSource for ManualTimeSource {
    fn unix_time_millis(&self) -> f64 {
        *self.now_ms.lock().expect("clock lock poisoned")
    }
}

// ---------------------------------------------------------------------------
// Host and port
// ---------------------------------------------------------------------------

/// Error produced when constructing or parsing a [`HostAndPort`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostPortError {
    /// Port was outside the valid range.
    #[error("port {0} outside valid range 1..=65534")]
    InvalidPort(u16),

    /// Input was not of the form `host:port`.
    #[error("expected host:port, got {0:?}")]
    Malformed(String),
}

/// A network endpoint address: host name plus port.
///
/// Plain data with no networking behavior; membership layers exchange
/// these as values. Ports 0 and 65535 are reserved and rejected, so a
/// constructed endpoint always carries a routable port.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HostAndPort {
    host: String,
    port: u16,
}

impl HostAndPort {
    /// Create an endpoint, rejecting ports outside `1..=65534`.
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, HostPortError> {
        if port == 0 || port == u16::MAX {
            return Err(HostPortError::InvalidPort(port));
        }
        Ok(Self {
            host: host.into(),
            port,
        })
    }

    /// The host name or address.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The port number.
    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for HostAndPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.host, self.port)
    }
}

impl FromStr for HostAndPort {
    type Err = HostPortError;

    /// Parse `host:port`, with or without the surrounding brackets
    /// [`Display`] emits.
    ///
    /// [`Display`]: HostAndPort#impl-Display-for-HostAndPort
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = match s.strip_prefix('[') {
            Some(rest) => rest
                .strip_suffix(']')
                .ok_or_else(|| HostPortError::Malformed(s.to_string()))?,
            None => s,
        };
        let (host, port) = inner
            .split_once(':')
            .ok_or_else(|| HostPortError::Malformed(s.to_string()))?;
        if host.is_empty() || port.contains(':') {
            return Err(HostPortError::Malformed(s.to_string()));
        }
        let port: u16 = port
            .parse()
            .map_err(|_| HostPortError::Malformed(s.to_string()))?;
        Self::new(host, port)
    }
}
