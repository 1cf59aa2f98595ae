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

//! The neighbor registry, fixed at startup.

use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::policy::Relation;
use crate::types::ConfigError;

/// A directly connected neighbor AS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbor {
    /// The neighbor's address, which doubles as its logical name.
    pub addr: Ipv4Addr,
    /// The localhost UDP port the neighbor listens on.
    pub port: u16,
    /// Our commercial relationship with the neighbor.
    pub relation: Relation,
}

impl Neighbor {
    /// The local-side address of the interface towards this neighbor: the neighbor's address
    /// with the last octet replaced by `1`.
    pub fn local_addr(&self) -> Ipv4Addr {
        let [a, b, c, _] = self.addr.octets();
        Ipv4Addr::new(a, b, c, 1)
    }
}

/// All neighbors of this router. Built once at startup and never modified.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NeighborTable {
    neighbors: BTreeMap<Ipv4Addr, Neighbor>,
}

impl NeighborTable {
    /// Build the registry, rejecting duplicate addresses.
    pub fn new(neighbors: impl IntoIterator<Item = Neighbor>) -> Result<Self, ConfigError> {
        let mut table = BTreeMap::new();
        for neighbor in neighbors {
            if table.insert(neighbor.addr, neighbor).is_some() {
                return Err(ConfigError::DuplicateNeighbor(neighbor.addr));
            }
        }
        Ok(Self { neighbors: table })
    }

    /// Look up a neighbor by address.
    pub fn get(&self, addr: Ipv4Addr) -> Option<&Neighbor> {
        self.neighbors.get(&addr)
    }

    /// The relation of the given neighbor, if it is known.
    pub fn relation_of(&self, addr: Ipv4Addr) -> Option<Relation> {
        self.neighbors.get(&addr).map(|n| n.relation)
    }

    /// Check whether `addr` is a known neighbor.
    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        self.neighbors.contains_key(&addr)
    }

    /// Iterate over all neighbors in address order.
    pub fn iter(&self) -> impl Iterator<Item = &Neighbor> + '_ {
        self.neighbors.values()
    }

    /// The number of neighbors.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}
