use serde::Serialize;

/// Outbound JSON view of the network graph: `{"netele": [ ...switches... ]}`.
#[derive(Debug, Serialize)]
pub struct NetGraphDto {
    pub netele: Vec<SwitchEleDto>,
}

#[derive(Debug, Serialize)]
pub struct SwitchEleDto {
    pub id: String,
    pub links: Vec<String>,
    pub hosts: Vec<String>,
}

/// One entry of the host listing; one entry per distinct MAC.
#[derive(Debug, Serialize)]
pub struct HostEntryDto {
    pub name: String,
    pub mac: String,
    pub ip4: String,
    pub ip6: String,
    pub conns: Vec<ConnDto>,
}

/// A single attachment point of a host.
#[derive(Debug, Serialize)]
pub struct ConnDto {
    pub switch: String,
    pub port: i32,
}
