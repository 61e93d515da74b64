use crate::api::netgraph_dto::ConnDto;
use crate::domain::network::id::SwitchId;

/// A host as observed on the data plane. A split network may surface
/// the same host at several attachment points, so `conns` is ordered
/// and may hold more than one entry.
#[derive(Debug, Clone)]
pub struct Host {
    mac: String,
    ip4: Option<String>,
    ip6: Option<String>,
    conns: Vec<(SwitchId, i32)>,
}

impl Host {
    pub fn new(mac: impl Into<String>, ip4: Option<String>, ip6: Option<String>) -> Self {
        Host { mac: mac.into(), ip4, ip6, conns: Vec::new() }
    }

    pub fn add_switch(&mut self, sw: SwitchId, port: i32) {
        self.conns.push((sw, port));
    }

    pub fn get_mac(&self) -> &str {
        &self.mac
    }

    pub fn get_addresses(&self) -> (Option<&str>, Option<&str>) {
        (self.ip4.as_deref(), self.ip6.as_deref())
    }

    pub fn nconns(&self) -> usize {
        self.conns.len()
    }

    /// The i-th attachment point, in the order the controller reported.
    pub fn get_switch_port(&self, i: usize) -> Option<(&SwitchId, i32)> {
        self.conns.get(i).map(|(sw, port)| (sw, *port))
    }

    /// The port this host arrives on at the given switch, if attached
    /// there. The first matching attachment wins.
    pub fn get_port(&self, sw: &SwitchId) -> Option<i32> {
        self.conns.iter().find(|(s, _)| s == sw).map(|(_, port)| *port)
    }

    pub fn ports_dto(&self) -> Vec<ConnDto> {
        self.conns.iter().map(|(sw, port)| ConnDto { switch: sw.to_string(), port: *port }).collect()
    }
}
