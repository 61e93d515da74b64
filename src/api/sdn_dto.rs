use serde::{Deserialize, Serialize};

/// One directed inter-switch link as reported by the controller's
/// topology endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SdnLinkDto {
    #[serde(rename = "src-switch")]
    pub src_switch: String,

    #[serde(rename = "src-port")]
    pub src_port: i32,

    #[serde(rename = "dst-switch")]
    pub dst_switch: String,

    #[serde(rename = "dst-port")]
    pub dst_port: i32,
}

/// One device as reported by the controller's device endpoint. Switches
/// are echoed in this list too; they carry no attachment points and are
/// dropped by the graph builder.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SdnHostDto {
    #[serde(default)]
    pub mac: Vec<String>,

    #[serde(default)]
    pub ipv4: Vec<String>,

    #[serde(default)]
    pub ipv6: Vec<String>,

    #[serde(default, rename = "attachmentPoint")]
    pub attachment_point: Vec<SdnAttachmentDto>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SdnAttachmentDto {
    #[serde(rename = "switchDPID")]
    pub switch_dpid: String,

    pub port: i32,
}
