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

//! IPv4 prefix arithmetic.
//!
//! On the wire a prefix is a pair of dotted quads: a network address and a netmask. All
//! arithmetic operates on the big-endian 32-bit form of both.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};

/// An IPv4 prefix: a network address together with its netmask.
///
/// The netmask is expected to be contiguous. Non-contiguous masks are not rejected: the prefix
/// length is then the count of leading one bits, while membership keeps operating on the raw
/// mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Prefix {
    network: u32,
    netmask: u32,
}

impl Prefix {
    /// Create a new prefix from a network address and a netmask.
    pub fn new(network: Ipv4Addr, netmask: Ipv4Addr) -> Self {
        Self {
            network: network.into(),
            netmask: netmask.into(),
        }
    }

    /// The network address, exactly as announced.
    pub fn network(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.network)
    }

    /// The netmask.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.netmask)
    }

    /// The prefix length: the number of leading one bits in the netmask.
    pub fn prefix_len(&self) -> u8 {
        self.netmask.leading_ones() as u8
    }

    /// Check whether `ip` falls into this prefix: `(ip & mask) == (net & mask)`.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        (u32::from(ip) & self.netmask) == (self.network & self.netmask)
    }

    /// Check whether `self` and `other` are numerically adjacent: both carry the same netmask,
    /// and the higher network starts right after the last address covered by the lower one.
    /// The pair is ordered before testing, so the argument order does not matter.
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        if self.netmask != other.netmask || self.netmask == 0 {
            return false;
        }
        let (lo, hi) = if self.network <= other.network {
            (self, other)
        } else {
            (other, self)
        };
        hi.network == (lo.network | !lo.netmask).wrapping_add(1)
    }

    /// Merge two adjacent prefixes into one covering both: the netmask loses its last one bit,
    /// and the network is the lower of the two truncated to the shortened mask.
    pub fn merge(&self, other: &Self) -> Self {
        let netmask = self.netmask << 1;
        Self {
            network: self.network.min(other.network) & netmask,
            netmask,
        }
    }

    /// The canonical `ipnet` form of this prefix, truncated to the prefix length.
    pub fn to_net(&self) -> Ipv4Net {
        Ipv4Net::new(self.network(), self.prefix_len())
            .expect("leading_ones of a u32 is at most 32")
            .trunc()
    }
}

impl From<Ipv4Net> for Prefix {
    fn from(net: Ipv4Net) -> Self {
        Self::new(net.network(), net.netmask())
    }
}

impl FromStr for Prefix {
    type Err = ipnet::AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4Net::from_str(s).map(Self::from)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix_len())
    }
}
