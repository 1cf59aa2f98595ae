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

//! Route records and the decision process over them.

use std::cmp::Ordering;
use std::fmt;
use std::net::Ipv4Addr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::prefix::Prefix;
use crate::types::Asn;

/// The ORIGIN attribute of a route.
///
/// The declaration order is the preference order: interior routes beat exterior ones, and
/// exterior ones beat routes of unknown origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Origin {
    /// Learned through an interior gateway protocol.
    Igp,
    /// Learned through an exterior gateway protocol.
    Egp,
    /// Origin unknown.
    Unk,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Igp => write!(f, "IGP"),
            Origin::Egp => write!(f, "EGP"),
            Origin::Unk => write!(f, "UNK"),
        }
    }
}

/// A single learned route.
///
/// The `peer` is both the neighbor the route was learned from and the next hop towards which
/// matching traffic is forwarded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Route {
    /// The prefix this route covers.
    pub prefix: Prefix,
    /// LOCAL-PREF, higher is better.
    pub local_pref: u32,
    /// AS-PATH, where the origin of the route is last and each forwarding AS is prepended.
    pub as_path: Vec<Asn>,
    /// The ORIGIN attribute.
    pub origin: Origin,
    /// Whether the route was originated by the announcing AS itself.
    pub self_origin: bool,
    /// The neighbor the route was learned from.
    pub peer: Ipv4Addr,
}

impl Route {
    /// Check whether two routes carry identical attributes for the purpose of aggregation:
    /// local-pref, AS-path, origin, and self-origin. The peer is deliberately left out.
    pub fn same_attributes(&self, other: &Self) -> bool {
        self.local_pref == other.local_pref
            && self.as_path == other.as_path
            && self.origin == other.origin
            && self.self_origin == other.self_origin
    }

    /// Check whether `self` and `other` can be aggregated: identical netmasks, identical
    /// attributes, and numerically adjacent networks.
    pub fn can_merge_with(&self, other: &Self) -> bool {
        self.prefix.netmask() == other.prefix.netmask()
            && self.same_attributes(other)
            && self.prefix.is_adjacent_to(&other.prefix)
    }

    /// The aggregate of `self` and an adjacent `other`: the unioned prefix, with the attributes
    /// and the peer taken from `self`.
    pub fn merge_with(&self, other: &Self) -> Self {
        Self {
            prefix: self.prefix.merge(&other.prefix),
            ..self.clone()
        }
    }

    /// Select the best route among `candidates`, or `None` if there are none. The selection is
    /// deterministic: the decision order ends in a strict tie-break over the peer address.
    pub fn best_route<'a>(candidates: impl IntoIterator<Item = &'a Route>) -> Option<&'a Route> {
        candidates
            .into_iter()
            .reduce(|best, candidate| if candidate > best { candidate } else { best })
    }
}

impl Ord for Route {
    fn cmp(&self, other: &Self) -> Ordering {
        // more specific prefixes win
        match self.prefix.prefix_len().cmp(&other.prefix.prefix_len()) {
            Ordering::Equal => {}
            o => return o,
        }

        // higher local preference wins
        match self.local_pref.cmp(&other.local_pref) {
            Ordering::Equal => {}
            o => return o,
        }

        // self-originated routes win
        match self.self_origin.cmp(&other.self_origin) {
            Ordering::Equal => {}
            o => return o,
        }

        // shorter AS-paths win
        match self.as_path.len().cmp(&other.as_path.len()) {
            Ordering::Equal => {}
            Ordering::Greater => return Ordering::Less,
            Ordering::Less => return Ordering::Greater,
        }

        // IGP before EGP before UNK
        match self.origin.cmp(&other.origin) {
            Ordering::Equal => {}
            Ordering::Greater => return Ordering::Less,
            Ordering::Less => return Ordering::Greater,
        }

        // lowest neighbor address wins
        match self.peer.cmp(&other.peer) {
            Ordering::Equal => Ordering::Equal,
            Ordering::Greater => Ordering::Less,
            Ordering::Less => Ordering::Greater,
        }
    }
}

impl PartialOrd for Route {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} via {} (local-pref {}, path [{}], {}{})",
            self.prefix,
            self.peer,
            self.local_pref,
            self.as_path.iter().format(" "),
            self.origin,
            if self.self_origin { ", self" } else { "" },
        )
    }
}
