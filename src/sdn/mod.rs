pub mod sdn_client;
pub mod sdn_client_mock;
