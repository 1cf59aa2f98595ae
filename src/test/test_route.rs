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

use super::route;
use crate::route::Origin::{Egp, Igp, Unk};
use crate::route::Route;

#[test]
fn more_specific_prefixes_win() {
    // a longer prefix beats even a much better local preference
    let specific = route("10.1.0.0/16", 50, &[1, 2, 3], Unk, false, "172.16.0.9");
    let general = route("10.0.0.0/8", 500, &[1], Igp, true, "172.16.0.2");
    assert!(specific > general);
    assert!(general < specific);
}

#[test]
fn higher_local_pref_wins() {
    let low = route("10.0.0.0/24", 100, &[1], Igp, true, "172.16.0.2");
    let high = route("10.0.0.0/24", 200, &[1, 2, 3], Unk, false, "172.16.0.9");
    assert!(high > low);
}

#[test]
fn self_origin_wins() {
    let foreign = route("10.0.0.0/24", 100, &[1], Igp, false, "172.16.0.2");
    let own = route("10.0.0.0/24", 100, &[1, 2, 3], Unk, true, "172.16.0.9");
    assert!(own > foreign);
}

#[test]
fn shorter_as_path_wins() {
    let long = route("10.0.0.0/24", 100, &[1, 2, 3], Igp, false, "172.16.0.2");
    let short = route("10.0.0.0/24", 100, &[7, 8], Unk, false, "172.16.0.9");
    assert!(short > long);
}

#[test]
fn origin_preference() {
    let igp = route("10.0.0.0/24", 100, &[1, 2], Igp, false, "172.16.0.9");
    let egp = route("10.0.0.0/24", 100, &[1, 2], Egp, false, "172.16.0.2");
    let unk = route("10.0.0.0/24", 100, &[1, 2], Unk, false, "172.16.0.2");
    assert!(igp > egp);
    assert!(egp > unk);
    assert!(igp > unk);
}

#[test]
fn lowest_peer_address_breaks_the_final_tie() {
    let low = route("10.0.0.0/24", 100, &[1, 2], Igp, false, "172.16.0.2");
    let high = route("10.0.0.0/24", 100, &[1, 2], Igp, false, "172.16.0.9");
    assert!(low > high);
}

#[test]
fn best_route_is_deterministic() {
    let a = route("10.0.0.0/8", 100, &[1], Igp, false, "172.16.0.2");
    let b = route("10.0.0.0/16", 100, &[1, 2], Igp, false, "172.16.0.9");
    let c = route("10.0.0.0/16", 200, &[1, 2, 3], Unk, false, "172.16.0.5");

    let forward = Route::best_route([&a, &b, &c]).unwrap();
    let backward = Route::best_route([&c, &b, &a]).unwrap();
    assert_eq!(forward, backward);
    assert_eq!(forward, &c);

    assert_eq!(Route::best_route([]), None);
}

#[test]
fn the_order_is_antisymmetric() {
    let routes = [
        route("10.0.0.0/8", 100, &[1], Igp, true, "172.16.0.2"),
        route("10.0.0.0/16", 100, &[1], Igp, false, "172.16.0.2"),
        route("10.0.0.0/16", 300, &[1, 2], Egp, false, "172.16.0.9"),
        route("10.0.0.0/24", 100, &[9], Unk, false, "172.16.0.5"),
    ];
    for a in &routes {
        for b in &routes {
            assert_eq!(a.cmp(b), b.cmp(a).reverse());
        }
    }
}

#[test]
fn aggregation_attributes_ignore_the_peer() {
    let a = route("10.0.0.0/24", 100, &[1, 2], Igp, false, "172.16.0.2");
    let b = route("10.0.1.0/24", 100, &[1, 2], Igp, false, "172.16.0.9");
    assert!(a.same_attributes(&b));
    assert!(a.can_merge_with(&b));

    let c = route("10.0.1.0/24", 200, &[1, 2], Igp, false, "172.16.0.2");
    assert!(!a.same_attributes(&c));
    assert!(!a.can_merge_with(&c));
}

#[test]
fn merged_routes_inherit_the_lower_half() {
    let a = route("10.0.0.0/24", 100, &[1, 2], Igp, false, "172.16.0.2");
    let b = route("10.0.1.0/24", 100, &[1, 2], Igp, false, "172.16.0.9");
    let merged = a.merge_with(&b);
    assert_eq!(merged.prefix, super::prefix("10.0.0.0/23"));
    assert_eq!(merged.peer, a.peer);
    assert_eq!(merged.as_path, a.as_path);
}
