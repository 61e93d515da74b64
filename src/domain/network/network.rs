use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::api::netgraph_dto::{HostEntryDto, NetGraphDto, SwitchEleDto};
use crate::domain::network::allotment::{Allotment, ONE_GIG};
use crate::domain::network::host::Host;
use crate::domain::network::id::{LinkId, SwitchId};
use crate::domain::network::link::Link;
use crate::domain::network::switch::Switch;
use crate::error::{Error, Result};

/// Default capacity of a virtual intra-switch link.
pub const VLINK_CAPACITY: i64 = 10 * ONE_GIG;

/// Keys of at least this length in `vm2ip` are treated as opaque VM ids
/// and lose against an already-present human-readable name when the
/// reverse map is built.
const VM_ID_MIN_LEN: usize = 36;

/// The network graph: switches, hosts and links harvested from the SDN
/// controller, plus the VM-name translation maps.
///
/// The host map aliases one `Host` under its MAC and, when present, its
/// IPv4 and IPv6 addresses. The link and vlink tables survive rebuilds
/// so reservation ledgers outlive a topology refresh.
#[derive(Debug, Default)]
pub struct Network {
    pub switches: HashMap<SwitchId, Switch>,
    pub hosts: HashMap<String, Arc<Host>>,
    pub links: HashMap<LinkId, Link>,
    pub vlinks: HashMap<LinkId, Link>,
    pub vm2ip: HashMap<String, String>,
    pub ip2vm: HashMap<String, String>,
}

impl Network {
    pub fn new() -> Self {
        Network::default()
    }

    /// Maps a host name (MAC, IPv4, IPv6, VM name or VM id) to an IP
    /// address known to the graph. A name that is already a host-map
    /// key passes through; anything else is translated via `vm2ip`.
    pub fn name2ip(&self, name: &str) -> Result<String> {
        if self.hosts.contains_key(name) {
            return Ok(name.to_string());
        }

        match self.vm2ip.get(name) {
            Some(ip) if self.hosts.contains_key(ip) => Ok(ip.clone()),
            Some(ip) => Err(Error::UnknownHost(format!("{} maps to an IP, but IP not known to SDNC: {}", name, ip))),
            None => Err(Error::UnknownHost(format!("{} could not be mapped to an IP address", name))),
        }
    }

    /// Builds the reverse map ip -> vm name from `vm2ip`.
    ///
    /// `vm2ip` mixes user-assigned names and opaque VM ids. When two
    /// keys resolve to the same IP, a key of id-like length never
    /// displaces an entry that is already present, so human-readable
    /// names win. Stored strings are owned copies.
    pub fn build_ip2vm(&self) -> HashMap<String, String> {
        let mut i2v: HashMap<String, String> = HashMap::new();

        for (name, ip) in &self.vm2ip {
            if name.len() < VM_ID_MIN_LEN || !i2v.contains_key(ip) {
                log::trace!("build_ip2vm {} --> {} ({})", ip, name, name.len());
                i2v.insert(ip.clone(), name.clone());
            }
        }

        log::trace!("built ip2vm map: {} entries", i2v.len());
        return i2v;
    }

    /// Finds the directed link `ssw -> dsw`, creating it when absent.
    ///
    /// An existing link is reused as-is, which is what preserves its
    /// allotment across rebuilds. Passing `bind` forces the (found or
    /// created) link onto the given ledger; the builder uses this to tie
    /// a mirror to its forward half.
    pub fn find_link(&mut self, ssw: &SwitchId, dsw: &SwitchId, capacity: i64, bind: Option<&Allotment>) -> LinkId {
        let id = Link::link_id(ssw, dsw);

        if let Some(existing) = self.links.get_mut(&id) {
            // don't assume the pair shared one ledger before this rebuild
            if let Some(allotment) = bind {
                existing.bind_allotment(allotment.clone());
            }
            return id;
        }

        log::trace!("making link: {}", id);
        let link = match bind {
            Some(allotment) => Link::with_allotment(ssw.clone(), dsw.clone(), allotment.clone()),
            None => Link::new(ssw.clone(), dsw.clone(), capacity),
        };
        self.links.insert(id.clone(), link);

        return id;
    }

    /// Finds the vlink between two ports of `sw`, creating it on first
    /// use. Returns a handle sharing the stored ledger.
    pub fn find_vlink(&mut self, sw: &SwitchId, p1: i32, p2: i32) -> Link {
        let id = Link::vlink_id(sw, p1, p2);

        if let Some(existing) = self.vlinks.get(&id) {
            return existing.clone();
        }

        log::trace!("making vlink: {}", id);
        let vlink = Link::new_vlink(sw.clone(), p1, p2, VLINK_CAPACITY);
        self.vlinks.insert(id, vlink.clone());

        return vlink;
    }

    /// Queue-map generation: every link and vlink renders its queues
    /// active at `ts`; tokens are de-duplicated because the two halves
    /// of an edge render the same shared ledger.
    pub fn gen_queue_map(&self, ts: i64) -> Vec<String> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut qmap: Vec<String> = Vec::new();

        for link in self.links.values().chain(self.vlinks.values()) {
            for token in link.queues2str(ts).split_whitespace() {
                if seen.insert(token.to_string()) {
                    qmap.push(token.to_string());
                }
            }
        }

        return qmap;
    }

    /// JSON host listing: one entry per distinct MAC even when the host
    /// is aliased under its IP addresses, with the VM name when the
    /// reverse map knows one.
    pub fn host_list(&self) -> String {
        let mut seen: HashSet<String> = HashSet::new();
        let mut entries: Vec<HostEntryDto> = Vec::new();

        for host in self.hosts.values() {
            if !seen.insert(host.get_mac().to_string()) {
                continue;
            }

            let (ip4, ip6) = host.get_addresses();
            let name = ip4.and_then(|ip| self.ip2vm.get(ip)).cloned().unwrap_or_else(|| "unknown".to_string());

            entries.push(HostEntryDto {
                name,
                mac: host.get_mac().to_string(),
                ip4: ip4.unwrap_or("").to_string(),
                ip6: ip6.unwrap_or("").to_string(),
                conns: host.ports_dto(),
            });
        }

        entries.sort_by(|a, b| a.mac.cmp(&b.mac));

        serde_json::to_string(&entries).unwrap_or_else(|e| {
            log::error!("host list serialization failed: {}", e);
            "[]".to_string()
        })
    }

    /// JSON representation of the graph, `{"netele": [ ... ]}`, sorted
    /// by switch id for stable output.
    pub fn to_json(&self) -> String {
        let mut netele: Vec<SwitchEleDto> = self
            .switches
            .values()
            .map(|sw| SwitchEleDto {
                id: sw.id.to_string(),
                links: sw.link_ids().iter().map(|l| l.to_string()).collect(),
                hosts: sw.host_macs(),
            })
            .collect();

        netele.sort_by(|a, b| a.id.cmp(&b.id));

        serde_json::to_string(&NetGraphDto { netele }).unwrap_or_else(|e| {
            log::error!("network graph serialization failed: {}", e);
            r#"{"netele":[]}"#.to_string()
        })
    }
}
