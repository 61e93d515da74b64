use sdn_netmgr::domain::network::allotment::ONE_GIG;
use sdn_netmgr::domain::network::builder::build;
use sdn_netmgr::domain::network::id::LinkId;
use sdn_netmgr::domain::network::network::Network;
use sdn_netmgr::sdn::sdn_client_mock::{MockSdnClient, host, host_multi, link};

const CAP: i64 = 10 * ONE_GIG;

const H1_MAC: &str = "00:00:00:00:00:01";
const H2_MAC: &str = "00:00:00:00:00:02";

fn lid(id: &str) -> LinkId {
    LinkId::new(id)
}

/// A -- B -- C with h1 on A and h2 on C.
fn linear_net() -> Network {
    let client = MockSdnClient::new(
        vec![link("A", 1, "B", 2), link("B", 3, "C", 4)],
        vec![host(H1_MAC, "10.0.0.1", "A", 10), host(H2_MAC, "10.0.0.2", "C", 11)],
    );
    build(None, &client, CAP).unwrap()
}

#[test]
fn test_direct_path_is_found_in_reverse_order() {
    let mut net = linear_net();

    let paths = net.find_path("10.0.0.1", "10.0.0.2", 1000, 2000, ONE_GIG);
    assert_eq!(paths.len(), 1);

    let path = &paths[0];
    assert!(path.is_reversed());

    // assembled target -> source
    let switches: Vec<&str> = path.switches().iter().map(|s| s.as_str()).collect();
    assert_eq!(switches, vec!["C", "B", "A"]);

    let links: Vec<&str> = path.links().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(links, vec!["B-C", "A-B"]);
}

#[test]
fn test_unknown_host_yields_no_paths() {
    let mut net = linear_net();

    assert!(net.find_path("10.9.9.9", "10.0.0.2", 0, 100, 1).is_empty());
    assert!(net.find_path("10.0.0.1", "10.9.9.9", 0, 100, 1).is_empty());
}

#[test]
fn test_saturated_link_blocks_the_search() {
    let mut net = linear_net();
    net.links.get(&lid("A-B")).unwrap().set_queue("res-1", 1000, 2000, CAP);

    assert!(net.find_path("10.0.0.1", "10.0.0.2", 1000, 2000, ONE_GIG).is_empty());

    // the same request outside the reserved window goes through
    assert_eq!(net.find_path("10.0.0.1", "10.0.0.2", 3000, 4000, ONE_GIG).len(), 1);
}

#[test]
fn test_search_routes_around_a_saturated_link() {
    // A -- B -- C plus a detour A -- D -- C
    let client = MockSdnClient::new(
        vec![link("A", 1, "B", 2), link("B", 3, "C", 4), link("A", 5, "D", 6), link("D", 7, "C", 8)],
        vec![host(H1_MAC, "10.0.0.1", "A", 10), host(H2_MAC, "10.0.0.2", "C", 11)],
    );
    let mut net = build(None, &client, CAP).unwrap();

    net.links.get(&lid("A-B")).unwrap().set_queue("res-1", 1000, 2000, CAP);

    let paths = net.find_path("10.0.0.1", "10.0.0.2", 1000, 2000, ONE_GIG);
    assert_eq!(paths.len(), 1);

    let switches: Vec<&str> = paths[0].switches().iter().map(|s| s.as_str()).collect();
    assert_eq!(switches, vec!["C", "D", "A"]);
}

#[test]
fn test_equal_cost_tie_keeps_first_discovered_predecessor() {
    // two two-hop routes; B1 comes first in the controller's link list
    let client = MockSdnClient::new(
        vec![link("A", 1, "B1", 2), link("A", 3, "B2", 4), link("B1", 5, "C", 6), link("B2", 7, "C", 8)],
        vec![host(H1_MAC, "10.0.0.1", "A", 10), host(H2_MAC, "10.0.0.2", "C", 11)],
    );
    let mut net = build(None, &client, CAP).unwrap();

    let paths = net.find_path("10.0.0.1", "10.0.0.2", 0, 100, ONE_GIG);
    assert_eq!(paths.len(), 1);

    let switches: Vec<&str> = paths[0].switches().iter().map(|s| s.as_str()).collect();
    assert_eq!(switches, vec!["C", "B1", "A"]);
}

#[test]
fn test_same_switch_different_ports_uses_a_vlink() {
    let client = MockSdnClient::new(
        vec![link("S", 1, "T", 2)],
        vec![host(H1_MAC, "10.0.0.1", "S", 3), host(H2_MAC, "10.0.0.2", "S", 4)],
    );
    let mut net = build(None, &client, CAP).unwrap();

    let paths = net.find_path("10.0.0.1", "10.0.0.2", 0, 100, 2 * ONE_GIG);
    assert_eq!(paths.len(), 1);

    let path = &paths[0];
    assert!(!path.is_reversed());
    assert_eq!(path.switches().len(), 1);
    assert_eq!(path.links().len(), 1);
    assert_eq!(path.links()[0].id.as_str(), "S.3.4");

    // the vlink is stashed for reuse
    assert!(net.vlinks.contains_key(&lid("S.3.4")));
}

#[test]
fn test_same_switch_same_port_has_no_path() {
    let client = MockSdnClient::new(
        vec![link("S", 1, "T", 2)],
        vec![host(H1_MAC, "10.0.0.1", "S", 3), host(H2_MAC, "10.0.0.2", "S", 3)],
    );
    let mut net = build(None, &client, CAP).unwrap();

    assert!(net.find_path("10.0.0.1", "10.0.0.2", 0, 100, ONE_GIG).is_empty());
}

#[test]
fn test_exhausted_vlink_is_skipped() {
    let client = MockSdnClient::new(
        vec![link("S", 1, "T", 2)],
        vec![host(H1_MAC, "10.0.0.1", "S", 3), host(H2_MAC, "10.0.0.2", "S", 4)],
    );
    let mut net = build(None, &client, CAP).unwrap();

    net.find_vlink(&sdn_netmgr::domain::network::id::SwitchId::new("S"), 3, 4).set_queue("res-1", 0, 100, CAP);

    assert!(net.find_path("10.0.0.1", "10.0.0.2", 0, 100, ONE_GIG).is_empty());
}

#[test]
fn test_split_attachment_returns_one_path_per_attachment() {
    // h1 visible at A and A2; both reach C through B
    let client = MockSdnClient::new(
        vec![link("A", 1, "B", 2), link("A2", 3, "B", 4), link("B", 5, "C", 6)],
        vec![host_multi(H1_MAC, "10.0.0.1", &[("A", 10), ("A2", 12)]), host(H2_MAC, "10.0.0.2", "C", 11)],
    );
    let mut net = build(None, &client, CAP).unwrap();

    let paths = net.find_path("10.0.0.1", "10.0.0.2", 0, 100, ONE_GIG);
    assert_eq!(paths.len(), 2);

    let firsts: Vec<&str> = paths.iter().map(|p| p.switches().last().unwrap().as_str()).collect();
    assert_eq!(firsts, vec!["A", "A2"]);
}
