use reqwest::blocking::Client;
use std::time::Duration;

use crate::api::sdn_dto::{SdnHostDto, SdnLinkDto};
use crate::error::Result;

/// Read-only view of the SDN controller.
///
/// Both fetches return `None` on any failure (connection refused, bad
/// status, malformed body); the graph builder treats `None` as "retain
/// the previous graph".
pub trait SdnClient: Send {
    fn fetch_links(&self) -> Option<Vec<SdnLinkDto>>;
    fn fetch_hosts(&self) -> Option<Vec<SdnHostDto>>;
}

/// REST client for a Floodlight-style controller.
#[derive(Debug)]
pub struct FloodlightClient {
    base_url: String,
    client: Client,
}

impl FloodlightClient {
    pub fn new(sdn_host: &str) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(20)).build()?;

        Ok(FloodlightClient { base_url: format!("http://{}", sdn_host), client })
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Option<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = match self.client.get(&url).send() {
            Ok(r) => r,
            Err(e) => {
                log::warn!("SDN controller unreachable at {}: {}", url, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            log::warn!("SDN controller returned {} for {}", status, url);
            return None;
        }

        match response.json::<T>() {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                log::warn!("SDN controller sent an unparsable body for {}: {}", url, e);
                None
            }
        }
    }
}

impl SdnClient for FloodlightClient {
    fn fetch_links(&self) -> Option<Vec<SdnLinkDto>> {
        self.get_json("/wm/topology/links/json")
    }

    fn fetch_hosts(&self) -> Option<Vec<SdnHostDto>> {
        self.get_json("/wm/device/")
    }
}
