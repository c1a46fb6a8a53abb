//! Socket types for node ports
//!
//! A socket is the type tag placed on a port. Two ports may be connected
//! when their sockets are compatible. Surface graphs use a single shared
//! [`DATA_SOCKET`] for every port, so any output can feed any input.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The shared socket used by every built-in port.
pub const DATA_SOCKET: Socket = Socket::new("data");

/// A named type tag for a port
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Socket {
    name: Cow<'static, str>,
}

impl Socket {
    /// Create a socket with a static name
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
        }
    }

    /// Create a socket from an owned name (e.g. one read back from JSON)
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
        }
    }

    /// The socket name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if a port with this socket can connect to one with `other`
    pub fn is_compatible_with(&self, other: &Socket) -> bool {
        self.name == other.name
    }
}

impl Default for Socket {
    fn default() -> Self {
        DATA_SOCKET
    }
}

impl fmt::Display for Socket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
