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

//! The update journal: an ordered log of every accepted announcement.
//!
//! Aggregation destroys information: a merged table entry no longer knows which announcements
//! it was built from. The journal keeps each accepted announcement (as the route it produced)
//! in arrival order, so the forwarding table can be rebuilt from scratch whenever a withdrawal
//! invalidates an aggregate.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::prefix::Prefix;
use crate::route::Route;

/// The ordered log of accepted announcements.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<Route>,
}

impl Journal {
    /// Record an accepted announcement.
    pub fn record(&mut self, route: Route) {
        self.entries.push(route);
    }

    /// Drop every entry announced by `peer` for exactly the given prefix. Returns the number
    /// of entries removed.
    pub fn retract(&mut self, peer: Ipv4Addr, prefix: Prefix) -> usize {
        let before = self.entries.len();
        self.entries.retain(|r| !(r.peer == peer && r.prefix == prefix));
        before - self.entries.len()
    }

    /// Replay the journal in arrival order.
    pub fn replay(&self) -> impl Iterator<Item = &Route> + '_ {
        self.entries.iter()
    }

    /// The number of recorded announcements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
