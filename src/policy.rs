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

//! Commercial relationships and the export policy derived from them.

use serde::{Deserialize, Serialize};

/// The commercial relationship with a neighboring AS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// The neighbor pays us for transit.
    Customer,
    /// Settlement-free interconnection.
    Peer,
    /// We pay the neighbor for transit.
    Provider,
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::Customer => write!(f, "cust"),
            Relation::Peer => write!(f, "peer"),
            Relation::Provider => write!(f, "prov"),
        }
    }
}

impl std::str::FromStr for Relation {
    type Err = ParseRelationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cust" => Ok(Relation::Customer),
            "peer" => Ok(Relation::Peer),
            "prov" => Ok(Relation::Provider),
            _ => Err(ParseRelationError(s.to_string())),
        }
    }
}

/// Error returned when parsing a [`Relation`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a known relation (expected `cust`, `peer`, or `prov`)")]
pub struct ParseRelationError(String);

/// returns a bool which tells whether something learned from a `from` neighbor may be handed to
/// a `to` neighbor. Anything learned from a customer goes to everyone; anything learned from a
/// peer or a provider goes to customers only.
#[inline(always)]
pub fn should_export(from: Relation, to: Relation) -> bool {
    matches!(
        (from, to),
        (Relation::Customer, _) | (_, Relation::Customer)
    )
}
