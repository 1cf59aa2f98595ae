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

//! The forwarding table.

use std::fmt;
use std::net::Ipv4Addr;

use ipnet::Ipv4Net;
use itertools::Itertools;
use prefix_trie::PrefixMap;

use crate::prefix::Prefix;
use crate::route::Route;

/// The forwarding table: for every known prefix, the candidate routes towards it.
///
/// Multiple candidates may coexist under one prefix when they were learned from distinct
/// peers. A repeated announcement from the same peer overwrites its earlier candidate.
#[derive(Debug, Clone, Default)]
pub struct Rib {
    routes: PrefixMap<Ipv4Net, Vec<Route>>,
}

impl Rib {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a candidate route, replacing any existing candidate for the same prefix from the
    /// same peer.
    pub fn insert(&mut self, route: Route) {
        let net = route.prefix.to_net();
        if let Some(candidates) = self.routes.get_mut(&net) {
            candidates.retain(|r| !(r.peer == route.peer && r.prefix == route.prefix));
            candidates.push(route);
        } else {
            self.routes.insert(net, vec![route]);
        }
    }

    /// Remove every candidate for exactly `prefix` that was learned from `peer`. Returns the
    /// number of routes removed.
    pub fn withdraw(&mut self, peer: Ipv4Addr, prefix: Prefix) -> usize {
        let net = prefix.to_net();
        let Some(candidates) = self.routes.get_mut(&net) else {
            return 0;
        };
        let before = candidates.len();
        candidates.retain(|r| !(r.peer == peer && r.prefix == prefix));
        let removed = before - candidates.len();
        if candidates.is_empty() {
            self.routes.remove(&net);
        }
        removed
    }

    /// All candidate routes whose prefix covers `dst`.
    pub fn lookup(&self, dst: Ipv4Addr) -> Vec<&Route> {
        self.iter().filter(|r| r.prefix.contains(dst)).collect()
    }

    /// Iterate over every route in the table.
    pub fn iter(&self) -> impl Iterator<Item = &Route> + '_ {
        self.routes.iter().flat_map(|(_, candidates)| candidates.iter())
    }

    /// The total number of routes.
    pub fn len(&self) -> usize {
        self.routes.iter().map(|(_, candidates)| candidates.len()).sum()
    }

    /// Check whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.iter().next().is_none()
    }

    /// Aggregate adjacent prefixes with identical attributes.
    ///
    /// The table is flattened into a list sorted by network address. Each route is merged
    /// with the first later route whose netmask and attributes match and whose network is
    /// numerically adjacent; looking past the immediate list neighbor matters because several
    /// peers may announce the same prefix, and those twins would otherwise sit between a
    /// mergeable pair. A merged route keeps the peer of the lower half, which is sound only
    /// because any later withdrawal rebuilds the table from the journal. The scan repeats
    /// until a full pass performs no merge.
    pub fn aggregate(&mut self) {
        let mut routes: Vec<Route> = self.iter().cloned().collect();
        loop {
            routes.sort_by_key(|r| (r.prefix.network(), r.prefix.prefix_len(), r.peer));
            let mut slots: Vec<Option<Route>> = routes.drain(..).map(Some).collect();
            let mut changed = false;
            for i in 0..slots.len() {
                let Some(mut route) = slots[i].take() else {
                    continue;
                };
                for slot in &mut slots[i + 1..] {
                    match slot {
                        Some(partner) if route.can_merge_with(partner) => {
                            route = route.merge_with(partner);
                            *slot = None;
                            changed = true;
                            break;
                        }
                        _ => {}
                    }
                }
                routes.push(route);
            }
            if !changed {
                break;
            }
        }

        let mut rekeyed: PrefixMap<Ipv4Net, Vec<Route>> = PrefixMap::new();
        for route in routes {
            let net = route.prefix.to_net();
            if let Some(candidates) = rekeyed.get_mut(&net) {
                candidates.push(route);
            } else {
                rekeyed.insert(net, vec![route]);
            }
        }
        self.routes = rekeyed;
    }
}

impl fmt::Display for Rib {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for route in self
            .iter()
            .sorted_by_key(|r| (r.prefix.network(), r.prefix.prefix_len(), r.peer))
        {
            writeln!(f, "  {route}")?;
        }
        Ok(())
    }
}
