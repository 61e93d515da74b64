use crate::api::config_dto::ConfigDto;
use crate::domain::network::allotment::ONE_GIG;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

/// Smallest rebuild interval the manager accepts.
const REFRESH_FLOOR_SECS: u64 = 15;
const REFRESH_DEFAULT_SECS: u64 = 30;

/// Resolved manager configuration: every field validated and defaulted.
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    /// Seconds between automatic `NetUpdate` ticks.
    pub refresh_secs: u64,

    /// Default capacity for a newly discovered link, bits/s.
    pub link_max_cap: i64,

    /// Log verbosity when RUST_LOG is not set.
    pub verbose: u32,

    /// host:port of the SDN controller.
    pub sdn_host: String,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        ManagerConfig {
            refresh_secs: REFRESH_DEFAULT_SECS,
            link_max_cap: 10 * ONE_GIG,
            verbose: 1,
            sdn_host: "localhost:8080".to_string(),
        }
    }
}

impl ManagerConfig {
    pub fn load(file_path: &str) -> Result<Self> {
        let dto: ConfigDto = parse_json_file(file_path)?;
        Ok(ManagerConfig::from_dto(dto))
    }

    pub fn from_dto(dto: ConfigDto) -> Self {
        let defaults = ManagerConfig::default();

        let mut refresh_secs = dto.network.refresh.unwrap_or(defaults.refresh_secs);
        if refresh_secs < REFRESH_FLOOR_SECS {
            log::warn!("refresh rate in config file ({}) was too small; set to {}s", refresh_secs, REFRESH_FLOOR_SECS);
            refresh_secs = REFRESH_FLOOR_SECS;
        }

        let mut link_max_cap = dto.network.link_max_cap.unwrap_or(defaults.link_max_cap);
        if link_max_cap <= 0 {
            log::warn!("link_max_cap in config file ({}) is not positive; using {} b/s", link_max_cap, defaults.link_max_cap);
            link_max_cap = defaults.link_max_cap;
        }

        ManagerConfig {
            refresh_secs,
            link_max_cap,
            verbose: dto.network.verbose.unwrap_or(defaults.verbose),
            sdn_host: dto.defaults.sdn_host.unwrap_or(defaults.sdn_host),
        }
    }
}
