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

//! Command-line configuration.

use std::net::Ipv4Addr;
use std::str::FromStr;

use clap::Parser;

use crate::neighbor::Neighbor;
use crate::policy::Relation;
use crate::types::ConfigError;

/// A BGP-style path-vector routing daemon for a single AS node.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The autonomous system number of this router.
    pub asn: u32,

    /// Neighbor descriptors of the form `PORT-NEIGHBOR_IP-RELATION`, where the relation is
    /// one of `cust`, `peer`, or `prov`.
    #[arg(required = true)]
    pub neighbors: Vec<NeighborSpec>,
}

/// One parsed `PORT-NEIGHBOR_IP-RELATION` descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborSpec {
    /// The localhost UDP port the neighbor listens on.
    pub port: u16,
    /// The neighbor's address.
    pub addr: Ipv4Addr,
    /// Our relationship with the neighbor.
    pub relation: Relation,
}

impl FromStr for NeighborSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');
        let (Some(port), Some(addr), Some(relation)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ConfigError::BadDescriptor(s.to_string()));
        };
        Ok(Self {
            port: port
                .parse()
                .map_err(|_| ConfigError::BadDescriptor(s.to_string()))?,
            addr: addr
                .parse()
                .map_err(|_| ConfigError::BadDescriptor(s.to_string()))?,
            relation: relation.parse()?,
        })
    }
}

impl From<NeighborSpec> for Neighbor {
    fn from(spec: NeighborSpec) -> Self {
        Self {
            addr: spec.addr,
            port: spec.port,
            relation: spec.relation,
        }
    }
}
