use std::sync::{Arc, RwLock};

use crate::api::sdn_dto::{SdnAttachmentDto, SdnHostDto, SdnLinkDto};
use crate::sdn::sdn_client::SdnClient;

/// Scripted SDN client for tests. The handle is cheap to clone; a test
/// keeps one clone to rewrite the snapshot (or inject a fetch failure)
/// while the manager owns the other.
#[derive(Debug, Clone, Default)]
pub struct MockSdnClient {
    links: Arc<RwLock<Option<Vec<SdnLinkDto>>>>,
    hosts: Arc<RwLock<Option<Vec<SdnHostDto>>>>,
}

impl MockSdnClient {
    pub fn new(links: Vec<SdnLinkDto>, hosts: Vec<SdnHostDto>) -> Self {
        MockSdnClient { links: Arc::new(RwLock::new(Some(links))), hosts: Arc::new(RwLock::new(Some(hosts))) }
    }

    pub fn set_links(&self, links: Option<Vec<SdnLinkDto>>) {
        *self.links.write().unwrap() = links;
    }

    pub fn set_hosts(&self, hosts: Option<Vec<SdnHostDto>>) {
        *self.hosts.write().unwrap() = hosts;
    }

    /// Both fetches fail until the next `set_links`/`set_hosts`.
    pub fn fail_fetches(&self) {
        self.set_links(None);
        self.set_hosts(None);
    }
}

impl SdnClient for MockSdnClient {
    fn fetch_links(&self) -> Option<Vec<SdnLinkDto>> {
        self.links.read().unwrap().clone()
    }

    fn fetch_hosts(&self) -> Option<Vec<SdnHostDto>> {
        self.hosts.read().unwrap().clone()
    }
}

/// Shorthand for one undirected inter-switch link.
pub fn link(src: &str, src_port: i32, dst: &str, dst_port: i32) -> SdnLinkDto {
    SdnLinkDto { src_switch: src.to_string(), src_port, dst_switch: dst.to_string(), dst_port }
}

/// Shorthand for a host with a single attachment point.
pub fn host(mac: &str, ip4: &str, sw: &str, port: i32) -> SdnHostDto {
    SdnHostDto {
        mac: vec![mac.to_string()],
        ipv4: if ip4.is_empty() { Vec::new() } else { vec![ip4.to_string()] },
        ipv6: Vec::new(),
        attachment_point: vec![SdnAttachmentDto { switch_dpid: sw.to_string(), port }],
    }
}

/// Shorthand for a split host observed at several attachment points.
pub fn host_multi(mac: &str, ip4: &str, points: &[(&str, i32)]) -> SdnHostDto {
    SdnHostDto {
        mac: vec![mac.to_string()],
        ipv4: if ip4.is_empty() { Vec::new() } else { vec![ip4.to_string()] },
        ipv6: Vec::new(),
        attachment_point: points.iter().map(|(sw, port)| SdnAttachmentDto { switch_dpid: sw.to_string(), port: *port }).collect(),
    }
}
