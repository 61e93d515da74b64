use clap::Parser;

/// Bandwidth-reservation network manager for an SDN controller.
#[derive(Parser, Debug)]
#[command(name = "sdn_netmgr")]
struct Args {
    /// Path to the JSON configuration file.
    #[arg(long)]
    config: Option<String>,

    /// Overrides the configured SDN controller host:port.
    #[arg(long)]
    sdn_host: Option<String>,
}

fn main() {
    let args = Args::parse();

    match sdn_netmgr::start_manager(args.config.as_deref(), args.sdn_host.as_deref()) {
        Ok(proxy) => {
            // the ping returns once the initial graph build is done
            proxy.ping();
            log::info!("network manager is ready");

            loop {
                std::thread::park();
            }
        }
        Err(e) => {
            eprintln!("failed to start network manager: {}", e);
            std::process::exit(1);
        }
    }
}
