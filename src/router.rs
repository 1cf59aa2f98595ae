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

//! The router: message dispatch and the four protocol operations.
//!
//! [`Router`] is a pure state machine. Each handler maps one received message to the messages
//! to emit, so every protocol operation can be exercised without sockets.

use std::net::Ipv4Addr;

use itertools::Itertools;
use log::{debug, trace, warn};
use serde_json::Value;

use crate::journal::Journal;
use crate::msg::{Message, PrefixPair, RouteParams, TableEntry};
use crate::neighbor::{Neighbor, NeighborTable};
use crate::policy::should_export;
use crate::rib::Rib;
use crate::route::Route;
use crate::types::Asn;

/// An outbound message, paired with the neighbor to deliver it to.
pub type Outbound = (Ipv4Addr, Message);

/// A single-AS path-vector router.
///
/// The router owns the forwarding table and the update journal. It is driven by
/// [`handle_message`](Router::handle_message), which dispatches on the message type and
/// returns whatever must be sent in response.
#[derive(Debug, Clone)]
pub struct Router {
    asn: Asn,
    neighbors: NeighborTable,
    rib: Rib,
    journal: Journal,
}

impl Router {
    /// Create a new router for the given AS with a fixed set of neighbors.
    pub fn new(asn: Asn, neighbors: NeighborTable) -> Self {
        Self {
            asn,
            neighbors,
            rib: Rib::new(),
            journal: Journal::default(),
        }
    }

    /// The handshake messages to send to every neighbor at startup.
    pub fn startup_messages(&self) -> Vec<Outbound> {
        self.neighbors
            .iter()
            .map(|n| (n.addr, Message::handshake(n.local_addr(), n.addr)))
            .collect()
    }

    /// The forwarding table.
    pub fn rib(&self) -> &Rib {
        &self.rib
    }

    /// The update journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// The neighbor registry.
    pub fn neighbors(&self) -> &NeighborTable {
        &self.neighbors
    }

    /// Handle one decoded message that arrived on the interface towards `srcif`, and return
    /// the messages to emit in response.
    pub fn handle_message(&mut self, srcif: Ipv4Addr, msg: Message) -> Vec<Outbound> {
        if !self.neighbors.contains(srcif) {
            warn!("received a message from unknown neighbor {srcif}; dropped");
            return Vec::new();
        }
        trace!("received a {} message from {srcif}", msg.kind());
        match msg {
            Message::Update { msg, .. } => self.handle_update(srcif, msg),
            Message::Withdraw { msg, .. } => self.handle_withdraw(srcif, msg),
            Message::Data { src, dst, payload } => self.handle_data(srcif, src, dst, payload),
            Message::Dump { src, .. } => self.handle_dump(srcif, src),
            other => {
                debug!("nothing to do for a {} message from {srcif}", other.kind());
                Vec::new()
            }
        }
    }

    /// Process a route announcement: insert it into the table, journal it, re-advertise it
    /// under the export policy, and aggregate.
    fn handle_update(&mut self, srcif: Ipv4Addr, params: RouteParams) -> Vec<Outbound> {
        let prefix = params.prefix();
        let Some(route) = params.into_route(srcif) else {
            warn!("update from {srcif} for {prefix} is missing required attributes; dropped");
            return Vec::new();
        };
        debug!("update from {srcif}: {route}");

        self.rib.insert(route.clone());
        self.journal.record(route.clone());

        let asn = self.asn;
        let out = self.propagate(srcif, |n| Message::Update {
            src: n.local_addr(),
            dst: n.addr,
            msg: RouteParams::exported(&route, asn),
        });

        self.rib.aggregate();
        trace!("forwarding table:\n{}", self.rib);
        out
    }

    /// Process a withdrawal: pass it on under the export policy, drop the revoked
    /// announcements from the table and the journal, and rebuild the table so that aggregates
    /// built from a revoked announcement fall apart.
    fn handle_withdraw(&mut self, srcif: Ipv4Addr, revoked: Vec<PrefixPair>) -> Vec<Outbound> {
        debug!("withdraw from {srcif} for {} prefixes", revoked.len());

        let out = self.propagate(srcif, |n| Message::Withdraw {
            src: n.local_addr(),
            dst: n.addr,
            msg: revoked.clone(),
        });

        for entry in &revoked {
            let prefix = entry.prefix();
            self.rib.withdraw(srcif, prefix);
            if self.journal.retract(srcif, prefix) == 0 {
                debug!("withdraw from {srcif} for {prefix} matches no recorded announcement");
            }
        }

        self.rebuild();
        trace!("forwarding table:\n{}", self.rib);
        out
    }

    /// Forward a data packet along the best matching route, or notify the origin that no
    /// usable route exists.
    fn handle_data(
        &mut self,
        srcif: Ipv4Addr,
        src: Ipv4Addr,
        dst: Ipv4Addr,
        payload: serde_json::Map<String, Value>,
    ) -> Vec<Outbound> {
        let Some(origin) = self.neighbors.get(srcif) else {
            return Vec::new();
        };

        let candidates = self.rib.lookup(dst);
        let Some(best) = Route::best_route(candidates) else {
            debug!("no route towards {dst}; notifying {src}");
            return vec![(srcif, Message::no_route(origin.local_addr(), src))];
        };
        let best_peer = best.peer;

        // traffic is carried only when the sending or the receiving side is a customer
        let Some(to) = self.neighbors.relation_of(best_peer) else {
            warn!("best route towards {dst} points at unknown neighbor {best_peer}; dropped");
            return vec![(srcif, Message::no_route(origin.local_addr(), src))];
        };
        if should_export(origin.relation, to) {
            debug!("forwarding data for {dst} via {best_peer}");
            vec![(best_peer, Message::Data { src, dst, payload })]
        } else {
            debug!("data from {srcif} towards {dst} denied by policy; notifying {src}");
            vec![(srcif, Message::no_route(origin.local_addr(), src))]
        }
    }

    /// Reply to a dump request with the aggregated forwarding table.
    fn handle_dump(&mut self, srcif: Ipv4Addr, requester: Ipv4Addr) -> Vec<Outbound> {
        self.rib.aggregate();
        let Some(origin) = self.neighbors.get(srcif) else {
            return Vec::new();
        };
        let entries: Vec<TableEntry> = self
            .rib
            .iter()
            .sorted_by_key(|r| (r.prefix.network(), r.prefix.prefix_len(), r.peer))
            .map(TableEntry::from)
            .collect();
        debug!("dump from {srcif}: replying with {} routes", entries.len());
        vec![(
            srcif,
            Message::Table {
                src: origin.local_addr(),
                dst: requester,
                msg: entries,
            },
        )]
    }

    /// Fan a message out to every neighbor, other than `srcif`, that the export policy permits
    /// for something learned from `srcif`.
    fn propagate(&self, srcif: Ipv4Addr, mut build: impl FnMut(&Neighbor) -> Message) -> Vec<Outbound> {
        let Some(from) = self.neighbors.relation_of(srcif) else {
            return Vec::new();
        };
        self.neighbors
            .iter()
            .filter(|n| n.addr != srcif && should_export(from, n.relation))
            .map(|n| (n.addr, build(n)))
            .collect()
    }

    /// Rebuild the forwarding table by replaying the journal, re-aggregating after every
    /// replayed announcement.
    fn rebuild(&mut self) {
        let replayed: Vec<Route> = self.journal.replay().cloned().collect();
        self.rib = Rib::new();
        for route in replayed {
            self.rib.insert(route);
            self.rib.aggregate();
        }
    }
}
