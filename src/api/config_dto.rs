use serde::Deserialize;

/// On-disk configuration file layout.
///
/// ```json
/// {
///     "network": { "refresh": 30, "link_max_cap": 10737418240, "verbose": 1 },
///     "default": { "sdn_host": "localhost:8080" }
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigDto {
    #[serde(default)]
    pub network: NetworkSectionDto,

    #[serde(default, rename = "default")]
    pub defaults: DefaultSectionDto,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkSectionDto {
    /// Seconds between automatic graph rebuilds.
    pub refresh: Option<u64>,

    /// Default capacity assigned to a newly discovered link, in bits/s.
    pub link_max_cap: Option<i64>,

    /// Log verbosity when RUST_LOG is not set.
    pub verbose: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultSectionDto {
    /// host:port of the SDN controller to fall back to when none is
    /// given on the command line.
    pub sdn_host: Option<String>,
}
