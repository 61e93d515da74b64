use crate::domain::manager::manager_config::ManagerConfig;
use crate::domain::manager::network_manager::NetworkManager;
use crate::domain::manager::network_manager_proxy::NetworkManagerProxy;
use crate::error::Result;
use crate::sdn::sdn_client::FloodlightClient;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;
pub mod sdn;

/// Wires a network manager up from a configuration file and starts it.
///
/// Passing no config path runs on defaults; `sdn_host_override` wins
/// over the configured controller endpoint. The returned proxy is the
/// only way to talk to the manager.
pub fn start_manager(config_path: Option<&str>, sdn_host_override: Option<&str>) -> Result<NetworkManagerProxy> {
    let mut cfg = match config_path {
        Some(path) => ManagerConfig::load(path)?,
        None => ManagerConfig::default(),
    };

    if let Some(host) = sdn_host_override {
        cfg.sdn_host = host.to_string();
    }

    logger::init(logger::verbose_to_level(cfg.verbose));
    log::info!("Logger initialized. Starting network manager for SDN controller at {}.", cfg.sdn_host);

    let client = FloodlightClient::new(&cfg.sdn_host)?;

    Ok(NetworkManager::spawn(cfg, Box::new(client)))
}
