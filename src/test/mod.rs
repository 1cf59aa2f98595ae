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

//! Unit and scenario tests, together with the helpers shared between them.

use std::net::Ipv4Addr;

use crate::msg::{Message, PrefixPair, RouteParams};
use crate::neighbor::{Neighbor, NeighborTable};
use crate::policy::Relation;
use crate::prefix::Prefix;
use crate::route::{Origin, Route};
use crate::router::Router;
use crate::types::Asn;

mod test_prefix;
mod test_route;

/// Parse an IPv4 address.
pub(crate) fn ip(s: &str) -> Ipv4Addr {
    s.parse().unwrap()
}

/// Parse a prefix in `network/len` notation.
pub(crate) fn prefix(s: &str) -> Prefix {
    s.parse().unwrap()
}

/// The local-side address of the interface towards `addr`.
fn local(addr: Ipv4Addr) -> Ipv4Addr {
    let [a, b, c, _] = addr.octets();
    Ipv4Addr::new(a, b, c, 1)
}

/// Build a route learned from `peer`.
pub(crate) fn route(
    prefix_str: &str,
    local_pref: u32,
    path: &[u32],
    origin: Origin,
    self_origin: bool,
    peer: &str,
) -> Route {
    Route {
        prefix: prefix(prefix_str),
        local_pref,
        as_path: path.iter().map(|&asn| Asn(asn)).collect(),
        origin,
        self_origin,
        peer: ip(peer),
    }
}

/// Build a router with one neighbor per `(address, relation)` pair.
pub(crate) fn test_router(asn: u32, neighbors: &[(&str, Relation)]) -> Router {
    let table = NeighborTable::new(neighbors.iter().enumerate().map(|(i, (addr, relation))| {
        Neighbor {
            addr: ip(addr),
            port: 7000 + i as u16,
            relation: *relation,
        }
    }))
    .unwrap();
    Router::new(Asn(asn), table)
}

/// Build a complete `update` message from `src`.
pub(crate) fn update_msg(
    src: &str,
    network: &str,
    netmask: &str,
    localpref: u32,
    path: &[u32],
    origin: Origin,
    self_origin: bool,
) -> Message {
    let src = ip(src);
    Message::Update {
        src,
        dst: local(src),
        msg: RouteParams {
            network: ip(network),
            netmask: ip(netmask),
            localpref: Some(localpref),
            as_path: path.iter().map(|&asn| Asn(asn)).collect(),
            origin: Some(origin),
            self_origin: Some(self_origin),
        },
    }
}

/// Build a `withdraw` message from `src`.
pub(crate) fn withdraw_msg(src: &str, prefixes: &[(&str, &str)]) -> Message {
    let src = ip(src);
    Message::Withdraw {
        src,
        dst: local(src),
        msg: prefixes
            .iter()
            .map(|(network, netmask)| PrefixPair {
                network: ip(network),
                netmask: ip(netmask),
            })
            .collect(),
    }
}

/// Build a `data` message with an empty payload.
pub(crate) fn data_msg(src: &str, dst: &str) -> Message {
    Message::Data {
        src: ip(src),
        dst: ip(dst),
        payload: serde_json::Map::new(),
    }
}

/// Build a `dump` request from `src`.
pub(crate) fn dump_msg(src: &str) -> Message {
    let src = ip(src);
    Message::Dump {
        src,
        dst: local(src),
        msg: serde_json::Value::Null,
    }
}
