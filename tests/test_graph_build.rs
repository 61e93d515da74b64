use sdn_netmgr::api::sdn_dto::SdnHostDto;
use sdn_netmgr::domain::network::allotment::{Allotment, ONE_GIG};
use sdn_netmgr::domain::network::builder::build;
use sdn_netmgr::domain::network::id::LinkId;
use sdn_netmgr::sdn::sdn_client_mock::{MockSdnClient, host, link};

const CAP: i64 = 10 * ONE_GIG;

fn lid(id: &str) -> LinkId {
    LinkId::new(id)
}

#[test]
fn test_mirror_links_share_one_ledger() {
    let client = MockSdnClient::new(vec![link("A", 1, "B", 2)], vec![]);
    let net = build(None, &client, CAP).unwrap();

    let fwd = net.links.get(&lid("A-B")).expect("forward link missing");
    let bwd = net.links.get(&lid("B-A")).expect("mirror link missing");

    assert!(Allotment::same_ledger(fwd.allotment(), bwd.allotment()));

    // reserving through one direction is immediately visible on the other
    fwd.set_queue("res-1", 0, 100, CAP);
    assert!(!bwd.has_capacity(0, 100, 1));
}

#[test]
fn test_link_ports_are_reciprocal() {
    let client = MockSdnClient::new(vec![link("A", 7, "B", 9)], vec![]);
    let net = build(None, &client, CAP).unwrap();

    let fwd = net.links.get(&lid("A-B")).unwrap();
    assert_eq!((fwd.port1(), fwd.port2()), (7, 9));

    let bwd = net.links.get(&lid("B-A")).unwrap();
    assert_eq!((bwd.port1(), bwd.port2()), (9, 7));
}

#[test]
fn test_adjacency_references_resolve_in_link_table() {
    let client = MockSdnClient::new(vec![link("A", 1, "B", 2), link("B", 3, "C", 4)], vec![]);
    let net = build(None, &client, CAP).unwrap();

    for sw in net.switches.values() {
        for link_id in sw.link_ids() {
            assert!(net.links.contains_key(link_id), "switch {} references unknown link {}", sw.id, link_id);
        }
    }
}

#[test]
fn test_rebuild_preserves_reused_links() {
    let client = MockSdnClient::new(vec![link("A", 1, "B", 2)], vec![]);
    let mut old = build(None, &client, CAP).unwrap();

    // record an obligation, then rebuild over an identical topology
    old.links.get(&lid("A-B")).unwrap().set_queue("res-1", 100, 200, ONE_GIG);
    let old_allotment = old.links.get(&lid("A-B")).unwrap().allotment().clone();
    let old_entries = old_allotment.entries();

    let new = build(Some(&mut old), &client, CAP).unwrap();

    let reused = new.links.get(&lid("A-B")).unwrap();
    assert!(Allotment::same_ledger(reused.allotment(), &old_allotment));
    assert_eq!(reused.allotment().entries(), old_entries);
}

#[test]
fn test_rebuild_gives_new_links_an_empty_ledger() {
    let client = MockSdnClient::new(vec![link("A", 1, "B", 2)], vec![]);
    let mut old = build(None, &client, CAP).unwrap();
    old.links.get(&lid("A-B")).unwrap().set_queue("res-1", 100, 200, ONE_GIG);
    let untouched = old.links.get(&lid("A-B")).unwrap().allotment().entries();

    client.set_links(Some(vec![link("A", 1, "B", 2), link("B", 3, "C", 4)]));
    let new = build(Some(&mut old), &client, CAP).unwrap();

    assert!(new.links.get(&lid("B-C")).unwrap().allotment().entries().is_empty());
    assert!(new.links.get(&lid("C-B")).unwrap().allotment().entries().is_empty());
    assert_eq!(new.links.get(&lid("A-B")).unwrap().allotment().entries(), untouched);
}

#[test]
fn test_failed_fetch_returns_no_graph_and_keeps_old_intact() {
    let client = MockSdnClient::new(vec![link("A", 1, "B", 2)], vec![]);
    let mut old = build(None, &client, CAP).unwrap();

    client.set_links(None);
    assert!(build(Some(&mut old), &client, CAP).is_err());

    // the old graph keeps its tables; nothing was moved out of it
    assert!(old.links.contains_key(&lid("A-B")));
    assert!(old.links.contains_key(&lid("B-A")));
}

#[test]
fn test_hosts_are_aliased_under_every_address() {
    let mut h = host("00:00:00:00:00:01", "10.0.0.1", "A", 5);
    h.ipv6 = vec!["fe80::1".to_string()];

    let client = MockSdnClient::new(vec![link("A", 1, "B", 2)], vec![h]);
    let net = build(None, &client, CAP).unwrap();

    for key in ["00:00:00:00:00:01", "10.0.0.1", "fe80::1"] {
        let entry = net.hosts.get(key).unwrap_or_else(|| panic!("host not reachable via {}", key));
        assert_eq!(entry.get_mac(), "00:00:00:00:00:01");
    }

    // one physical host even though three aliases exist
    let listed: serde_json::Value = serde_json::from_str(&net.host_list()).unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[test]
fn test_attachment_registers_host_on_switch() {
    let client = MockSdnClient::new(vec![link("A", 1, "B", 2)], vec![host("00:00:00:00:00:01", "10.0.0.1", "A", 5)]);
    let net = build(None, &client, CAP).unwrap();

    assert!(net.switches.get(&sdn_netmgr::domain::network::id::SwitchId::new("A")).unwrap().has_host("00:00:00:00:00:01"));

    let h = net.hosts.get("10.0.0.1").unwrap();
    assert_eq!(h.nconns(), 1);
    let (sw, port) = h.get_switch_port(0).unwrap();
    assert_eq!((sw.as_str(), port), ("A", 5));
}

#[test]
fn test_switches_echoed_in_device_list_are_skipped() {
    let echoed_switch = SdnHostDto { mac: vec!["00:00:00:00:00:99".to_string()], ..Default::default() };

    let client = MockSdnClient::new(vec![link("A", 1, "B", 2)], vec![echoed_switch]);
    let net = build(None, &client, CAP).unwrap();

    assert!(net.hosts.is_empty());
}

#[test]
fn test_net_graph_json_lists_every_switch() {
    let client = MockSdnClient::new(vec![link("A", 1, "B", 2), link("B", 3, "C", 4)], vec![]);
    let net = build(None, &client, CAP).unwrap();

    let graph: serde_json::Value = serde_json::from_str(&net.to_json()).unwrap();
    let netele = graph["netele"].as_array().unwrap();

    let ids: Vec<&str> = netele.iter().map(|e| e["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["A", "B", "C"]);
}
