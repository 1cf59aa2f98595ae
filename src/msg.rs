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

//! The JSON message schema spoken on the wire.
//!
//! Every datagram carries a single JSON object with a `type` tag, a `src` and a `dst` address,
//! and a type-specific `msg` payload. Messages with an unknown tag are rejected during
//! deserialization.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::prefix::Prefix;
use crate::route::{Origin, Route};
use crate::types::Asn;

/// A message exchanged with a neighbor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Message {
    /// Session greeting, sent once to every neighbor at startup.
    Handshake {
        /// The local-side interface address.
        src: Ipv4Addr,
        /// The neighbor being greeted.
        dst: Ipv4Addr,
        /// Empty payload.
        #[serde(default)]
        msg: Value,
    },
    /// A route announcement.
    Update {
        /// The announcing neighbor.
        src: Ipv4Addr,
        /// The receiving interface.
        dst: Ipv4Addr,
        /// The announced route.
        msg: RouteParams,
    },
    /// A withdrawal revoking one or more earlier announcements.
    Withdraw {
        /// The withdrawing neighbor.
        src: Ipv4Addr,
        /// The receiving interface.
        dst: Ipv4Addr,
        /// The prefixes to revoke, in announcement shape.
        msg: Vec<PrefixPair>,
    },
    /// A data packet in transit.
    Data {
        /// The originating host.
        src: Ipv4Addr,
        /// The destination host.
        dst: Ipv4Addr,
        /// The opaque remainder of the packet, forwarded untouched.
        #[serde(flatten)]
        payload: serde_json::Map<String, Value>,
    },
    /// A request for the current forwarding table.
    Dump {
        /// The requesting neighbor.
        src: Ipv4Addr,
        /// The receiving interface.
        dst: Ipv4Addr,
        /// Empty payload.
        #[serde(default)]
        msg: Value,
    },
    /// The forwarding table, sent in reply to a dump request.
    Table {
        /// The local-side interface address.
        src: Ipv4Addr,
        /// The requester the reply goes to.
        dst: Ipv4Addr,
        /// All current routes.
        msg: Vec<TableEntry>,
    },
    /// Failure notice: a data packet could not be forwarded.
    #[serde(rename = "no route")]
    NoRoute {
        /// The local-side interface address.
        src: Ipv4Addr,
        /// The host being notified.
        dst: Ipv4Addr,
        /// Empty payload.
        #[serde(default)]
        msg: Value,
    },
}

impl Message {
    /// Create a handshake message.
    pub fn handshake(src: Ipv4Addr, dst: Ipv4Addr) -> Self {
        Self::Handshake {
            src,
            dst,
            msg: empty(),
        }
    }

    /// Create a `no route` notice towards `dst`.
    pub fn no_route(src: Ipv4Addr, dst: Ipv4Addr) -> Self {
        Self::NoRoute {
            src,
            dst,
            msg: empty(),
        }
    }

    /// The `src` field of the envelope.
    pub fn src(&self) -> Ipv4Addr {
        match self {
            Message::Handshake { src, .. }
            | Message::Update { src, .. }
            | Message::Withdraw { src, .. }
            | Message::Data { src, .. }
            | Message::Dump { src, .. }
            | Message::Table { src, .. }
            | Message::NoRoute { src, .. } => *src,
        }
    }

    /// The `dst` field of the envelope.
    pub fn dst(&self) -> Ipv4Addr {
        match self {
            Message::Handshake { dst, .. }
            | Message::Update { dst, .. }
            | Message::Withdraw { dst, .. }
            | Message::Data { dst, .. }
            | Message::Dump { dst, .. }
            | Message::Table { dst, .. }
            | Message::NoRoute { dst, .. } => *dst,
        }
    }

    /// The wire name of the message type, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Handshake { .. } => "handshake",
            Message::Update { .. } => "update",
            Message::Withdraw { .. } => "withdraw",
            Message::Data { .. } => "data",
            Message::Dump { .. } => "dump",
            Message::Table { .. } => "table",
            Message::NoRoute { .. } => "no route",
        }
    }
}

/// An empty `msg` payload.
fn empty() -> Value {
    Value::Object(serde_json::Map::new())
}

/// The payload of an `update` message.
///
/// A locally received announcement carries all six fields. The propagated form sent on to
/// other neighbors carries only the public ones: network, netmask, and the AS-path. Local
/// preference, origin, and the self-origin flag stay private to the session they were learned
/// on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteParams {
    /// The network address.
    pub network: Ipv4Addr,
    /// The netmask.
    pub netmask: Ipv4Addr,
    /// LOCAL-PREF; absent in the propagated form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localpref: Option<u32>,
    /// AS-PATH with the most recent AS first.
    #[serde(rename = "ASPath")]
    pub as_path: Vec<Asn>,
    /// ORIGIN; absent in the propagated form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,
    /// Self-origin flag; absent in the propagated form.
    #[serde(rename = "selfOrigin", skip_serializing_if = "Option::is_none")]
    pub self_origin: Option<bool>,
}

impl RouteParams {
    /// The announced prefix.
    pub fn prefix(&self) -> Prefix {
        Prefix::new(self.network, self.netmask)
    }

    /// Turn a complete announcement into a [`Route`] learned from `peer`, or `None` if any of
    /// the private attributes is missing.
    pub fn into_route(self, peer: Ipv4Addr) -> Option<Route> {
        Some(Route {
            prefix: Prefix::new(self.network, self.netmask),
            local_pref: self.localpref?,
            as_path: self.as_path,
            origin: self.origin?,
            self_origin: self.self_origin?,
            peer,
        })
    }

    /// The propagated form of `route`: public attributes only, with `asn` prepended to the
    /// AS-path.
    pub fn exported(route: &Route, asn: Asn) -> Self {
        let mut as_path = Vec::with_capacity(route.as_path.len() + 1);
        as_path.push(asn);
        as_path.extend_from_slice(&route.as_path);
        Self {
            network: route.prefix.network(),
            netmask: route.prefix.netmask(),
            localpref: None,
            as_path,
            origin: None,
            self_origin: None,
        }
    }
}

/// A bare (network, netmask) pair, as listed in withdrawals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixPair {
    /// The network address.
    pub network: Ipv4Addr,
    /// The netmask.
    pub netmask: Ipv4Addr,
}

impl PrefixPair {
    /// The prefix this pair denotes.
    pub fn prefix(&self) -> Prefix {
        Prefix::new(self.network, self.netmask)
    }
}

impl From<Prefix> for PrefixPair {
    fn from(prefix: Prefix) -> Self {
        Self {
            network: prefix.network(),
            netmask: prefix.netmask(),
        }
    }
}

/// One route of a `table` reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    /// The network address.
    pub network: Ipv4Addr,
    /// The netmask.
    pub netmask: Ipv4Addr,
    /// The neighbor the route was learned from.
    pub peer: Ipv4Addr,
    /// LOCAL-PREF.
    pub localpref: u32,
    /// AS-PATH.
    #[serde(rename = "ASPath")]
    pub as_path: Vec<Asn>,
    /// ORIGIN.
    pub origin: Origin,
    /// Whether the route was originated by the announcing AS itself.
    #[serde(rename = "selfOrigin")]
    pub self_origin: bool,
}

impl From<&Route> for TableEntry {
    fn from(route: &Route) -> Self {
        Self {
            network: route.prefix.network(),
            netmask: route.prefix.netmask(),
            peer: route.peer,
            localpref: route.local_pref,
            as_path: route.as_path.clone(),
            origin: route.origin,
            self_origin: route.self_origin,
        }
    }
}
