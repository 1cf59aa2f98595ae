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

#![deny(missing_docs, missing_debug_implementations)]

//! # PathVectorD
//!
//! A simplified BGP-style path-vector routing daemon for a single autonomous system node. The
//! daemon maintains UDP sessions with a fixed set of neighbors, learns reachability from route
//! announcements and withdrawals, selects a best path per destination with the usual decision
//! rules (longest prefix, local preference, self-origin, path length, origin, neighbor
//! address), forwards data packets along that selection, and re-advertises routes under
//! customer/peer/provider export policies. Adjacent prefixes with identical attributes are
//! aggregated; withdrawing part of an aggregate rebuilds the table from the update journal so
//! the remaining half reappears on its own.
//!
//! The library is the complete router. [`router::Router`] is a pure state machine that maps
//! one received [`msg::Message`] to the messages to emit, which makes every protocol
//! operation testable without sockets; the binary wires it to [`net::Transport`].
//!
//! ## Example
//!
//! ```
//! use std::net::Ipv4Addr;
//! use pathvectord::msg::Message;
//! use pathvectord::neighbor::{Neighbor, NeighborTable};
//! use pathvectord::policy::Relation;
//! use pathvectord::router::Router;
//! use pathvectord::types::Asn;
//!
//! let customer = Neighbor {
//!     addr: Ipv4Addr::new(192, 0, 2, 2),
//!     port: 7000,
//!     relation: Relation::Customer,
//! };
//! let peer = Neighbor {
//!     addr: Ipv4Addr::new(198, 51, 100, 2),
//!     port: 7001,
//!     relation: Relation::Peer,
//! };
//! let neighbors = NeighborTable::new([customer, peer]).unwrap();
//! let mut router = Router::new(Asn(7), neighbors);
//!
//! // a customer announces a prefix; the peer hears about it with our ASN prepended
//! let update: Message = serde_json::from_str(
//!     r#"{
//!         "type": "update",
//!         "src": "192.0.2.2",
//!         "dst": "192.0.2.1",
//!         "msg": {
//!             "network": "10.0.0.0",
//!             "netmask": "255.255.0.0",
//!             "localpref": 100,
//!             "ASPath": [4],
//!             "origin": "IGP",
//!             "selfOrigin": true
//!         }
//!     }"#,
//! )
//! .unwrap();
//! let out = router.handle_message(customer.addr, update);
//! assert_eq!(out.len(), 1);
//! assert_eq!(out[0].0, peer.addr);
//! ```

pub mod config;
pub mod journal;
pub mod msg;
pub mod neighbor;
pub mod net;
pub mod policy;
pub mod prefix;
pub mod rib;
pub mod route;
pub mod router;
pub mod types;

#[cfg(test)]
mod test;
