use std::sync::Arc;

use crate::domain::network::host::Host;
use crate::domain::network::id::SwitchId;
use crate::domain::network::network::Network;
use crate::domain::network::switch::Switch;
use crate::error::{Error, Result};
use crate::sdn::sdn_client::SdnClient;

/// Builds a new network graph from a fresh controller snapshot.
///
/// When `old_net` is given, its link and vlink tables are carried into
/// the new graph and `find_link` reuses their entries, so reservation
/// ledgers survive the rebuild. Switches and hosts are always rebuilt
/// from the snapshot. If either fetch fails the previous graph stays
/// untouched and `FetchFailure` is returned.
pub fn build(old_net: Option<&mut Network>, client: &dyn SdnClient, max_capacity: i64) -> Result<Network> {
    let Some(link_list) = client.fetch_links() else {
        return Err(Error::FetchFailure);
    };
    let Some(host_list) = client.fetch_hosts() else {
        return Err(Error::FetchFailure);
    };

    let mut net = Network::new();
    if let Some(old) = old_net {
        // carry the tables over; obligations must not reset on rebuild
        net.links = std::mem::take(&mut old.links);
        net.vlinks = std::mem::take(&mut old.vlinks);
    }

    for (i, ld) in link_list.iter().enumerate() {
        let src = SwitchId::new(&ld.src_switch);
        let dst = SwitchId::new(&ld.dst_switch);

        net.switches.entry(src.clone()).or_insert_with(|| Switch::new(src.clone()));
        net.switches.entry(dst.clone()).or_insert_with(|| Switch::new(dst.clone()));

        // forward direction; omitting a ledger reuses the stored one
        let fwd_id = net.find_link(&src, &dst, max_capacity, None);
        let fwd_allotment = match net.links.get_mut(&fwd_id) {
            Some(fwd) => {
                fwd.set_ports(ld.src_port, ld.dst_port);
                fwd.allotment().clone()
            }
            None => continue,
        };

        // mirror direction, bound to the forward ledger
        let bwd_id = net.find_link(&dst, &src, max_capacity, Some(&fwd_allotment));
        if let Some(bwd) = net.links.get_mut(&bwd_id) {
            bwd.set_ports(ld.dst_port, ld.src_port);
        }

        if let Some(sw) = net.switches.get_mut(&src) {
            sw.add_link(fwd_id.clone());
        }
        if let Some(sw) = net.switches.get_mut(&dst) {
            sw.add_link(bwd_id.clone());
        }

        log::trace!("build: addlink [{}]: {} and {}", i, fwd_id, bwd_id);
    }

    for hd in &host_list {
        // switches are echoed in the device list without attachment points
        if hd.mac.is_empty() || hd.attachment_point.is_empty() {
            continue;
        }

        let mac = hd.mac[0].clone();
        let ip4 = hd.ipv4.first().filter(|ip| !ip.is_empty()).cloned();
        let ip6 = hd.ipv6.first().filter(|ip| !ip.is_empty()).cloned();

        let mut host = Host::new(mac.clone(), ip4.clone(), ip6.clone());

        for ap in &hd.attachment_point {
            let swid = SwitchId::new(&ap.switch_dpid);
            host.add_switch(swid.clone(), ap.port);

            match net.switches.get_mut(&swid) {
                Some(sw) => {
                    sw.add_host(&mac, ap.port);
                    log::trace!("build: saving host {} on switch {} port {}", mac, swid, ap.port);
                }
                None => {
                    log::warn!("host {} reports attachment to unknown switch {}", mac, swid);
                }
            }
        }

        let host = Arc::new(host);
        log::debug!("build: saving host as mac: {}", mac);
        net.hosts.insert(mac, host.clone());
        if let Some(ip) = ip4 {
            net.hosts.insert(ip, host.clone());
        }
        if let Some(ip) = ip6 {
            net.hosts.insert(ip, host);
        }
    }

    Ok(net)
}
