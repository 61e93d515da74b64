pub mod manager_config;
pub mod net_message;
pub mod network_manager;
pub mod network_manager_proxy;
pub mod pledge;
