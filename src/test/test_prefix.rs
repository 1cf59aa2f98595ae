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

use super::{ip, prefix};
use crate::prefix::Prefix;

use pretty_assertions::assert_eq;

#[test]
fn prefix_len_counts_leading_ones() {
    assert_eq!(Prefix::new(ip("10.0.0.0"), ip("255.0.0.0")).prefix_len(), 8);
    assert_eq!(Prefix::new(ip("10.0.0.0"), ip("255.255.0.0")).prefix_len(), 16);
    assert_eq!(
        Prefix::new(ip("10.0.0.0"), ip("255.255.254.0")).prefix_len(),
        23
    );
    assert_eq!(
        Prefix::new(ip("10.0.0.0"), ip("255.255.255.255")).prefix_len(),
        32
    );
    assert_eq!(Prefix::new(ip("10.0.0.0"), ip("0.0.0.0")).prefix_len(), 0);
}

#[test]
fn prefix_len_of_a_non_contiguous_mask() {
    // not rejected; only the leading ones count
    assert_eq!(Prefix::new(ip("10.0.0.0"), ip("255.0.255.0")).prefix_len(), 8);
    assert_eq!(Prefix::new(ip("10.0.0.0"), ip("0.255.0.0")).prefix_len(), 0);
}

#[test]
fn membership() {
    let p = prefix("10.1.0.0/16");
    assert!(p.contains(ip("10.1.0.0")));
    assert!(p.contains(ip("10.1.2.3")));
    assert!(p.contains(ip("10.1.255.255")));
    assert!(!p.contains(ip("10.2.0.0")));
    assert!(!p.contains(ip("11.1.0.0")));

    // the default route covers everything
    assert!(prefix("0.0.0.0/0").contains(ip("203.0.113.77")));
}

#[test]
fn membership_uses_the_raw_mask() {
    // host bits in the announced network are ignored by the mask
    let p = Prefix::new(ip("10.1.2.3"), ip("255.255.0.0"));
    assert!(p.contains(ip("10.1.200.200")));
    assert!(!p.contains(ip("10.2.2.3")));
}

#[test]
fn adjacency() {
    let lo = prefix("192.168.0.0/24");
    let hi = prefix("192.168.1.0/24");
    assert!(lo.is_adjacent_to(&hi));
    // the pair is ordered internally, so the direction does not matter
    assert!(hi.is_adjacent_to(&lo));

    // a gap in between
    assert!(!lo.is_adjacent_to(&prefix("192.168.2.0/24")));
    // different mask lengths never merge
    assert!(!lo.is_adjacent_to(&prefix("192.168.1.0/25")));
    // a prefix is not adjacent to itself
    assert!(!lo.is_adjacent_to(&lo));
    // the default route has no neighbor
    assert!(!prefix("0.0.0.0/0").is_adjacent_to(&prefix("128.0.0.0/0")));
}

#[test]
fn merge_forms_the_supernet() {
    let lo = prefix("192.168.0.0/24");
    let hi = prefix("192.168.1.0/24");

    let merged = lo.merge(&hi);
    assert_eq!(merged.network(), ip("192.168.0.0"));
    assert_eq!(merged.netmask(), ip("255.255.254.0"));
    assert_eq!(merged.prefix_len(), 23);

    // merging is symmetric
    assert_eq!(hi.merge(&lo), merged);

    // both halves are covered
    assert!(merged.contains(ip("192.168.0.17")));
    assert!(merged.contains(ip("192.168.1.17")));
    assert!(!merged.contains(ip("192.168.2.17")));
}

#[test]
fn merge_chain_up_to_a_slash_22() {
    let a = prefix("10.0.0.0/24").merge(&prefix("10.0.1.0/24"));
    let b = prefix("10.0.2.0/24").merge(&prefix("10.0.3.0/24"));
    assert!(a.is_adjacent_to(&b));
    let merged = a.merge(&b);
    assert_eq!(merged, prefix("10.0.0.0/22"));
}

#[test]
fn net_conversion_truncates_host_bits() {
    let p = Prefix::new(ip("10.0.0.5"), ip("255.0.0.0"));
    assert_eq!(p.to_net(), "10.0.0.0/8".parse::<ipnet::Ipv4Net>().unwrap());
}

#[test]
fn parse_and_display() {
    let p = prefix("10.0.0.0/8");
    assert_eq!(p.network(), ip("10.0.0.0"));
    assert_eq!(p.netmask(), ip("255.0.0.0"));
    assert_eq!(p.to_string(), "10.0.0.0/8");
    assert!("10.0.0.0".parse::<Prefix>().is_err());
}
