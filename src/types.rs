// PathVectorD: a BGP-style path-vector routing daemon written in Rust
// Copyright 2025-2026 The pathvectord developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Module containing shared type definitions.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An AS number. On the wire it is a bare integer; logs show it as `AS<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Asn(pub u32);

impl std::fmt::Display for Asn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AS{}", self.0)
    }
}

/// Configuration error raised during bootstrap. Any of these is fatal and makes the process
/// exit with a non-zero status.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A neighbor descriptor did not match the expected shape.
    #[error("invalid neighbor descriptor `{0}`: expected PORT-NEIGHBOR_IP-RELATION")]
    BadDescriptor(String),
    /// The relation token of a neighbor descriptor is unknown.
    #[error(transparent)]
    BadRelation(#[from] crate::policy::ParseRelationError),
    /// The same neighbor address was given more than once.
    #[error("duplicate neighbor {0}")]
    DuplicateNeighbor(Ipv4Addr),
    /// A socket towards a neighbor could not be opened.
    #[error("cannot open a socket towards {neighbor}: {source}")]
    Socket {
        /// The neighbor the socket was meant for.
        neighbor: Ipv4Addr,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Runtime error that terminates the event loop. Per-message failures (malformed datagrams,
/// unknown send targets) are logged and dropped instead; only a dead transport ends the
/// daemon.
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Every socket reader has stopped, so no further message can arrive.
    #[error("all neighbor sockets are gone")]
    ChannelClosed,
}
