use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::domain::manager::manager_config::ManagerConfig;
use crate::domain::manager::net_message::{NetMessage, ReserveOutcome};
use crate::domain::manager::network_manager_proxy::NetworkManagerProxy;
use crate::domain::network::builder::build;
use crate::domain::network::host::Host;
use crate::domain::network::network::Network;
use crate::domain::network::path::Path;
use crate::error::{Error, Result};
use crate::sdn::sdn_client::SdnClient;

/// The network manager actor.
///
/// One dedicated thread owns the active graph and is the sole mutator
/// of it: graph swaps, ledger updates, `vm2ip` replacement and searches
/// all happen while servicing one request at a time, so the graph needs
/// no locking. Callers talk to the thread through the proxy returned by
/// `spawn`.
pub struct NetworkManager;

impl NetworkManager {
    /// Starts the manager thread. The thread performs the first
    /// (blocking) graph build before servicing requests, then a tickler
    /// thread drives a `NetUpdate` every `refresh_secs`.
    pub fn spawn(cfg: ManagerConfig, client: Box<dyn SdnClient>) -> NetworkManagerProxy {
        let (tx, rx) = mpsc::channel::<NetMessage>();
        let tickle_tx = tx.clone();

        thread::Builder::new()
            .name("netmgr".to_string())
            .spawn(move || {
                run_loop(cfg, client, rx, tickle_tx);
            })
            .expect("Failed to spawn network manager thread");

        NetworkManagerProxy::new(tx)
    }
}

fn run_loop(cfg: ManagerConfig, client: Box<dyn SdnClient>, rx: mpsc::Receiver<NetMessage>, tickle_tx: mpsc::Sender<NetMessage>) {
    log::info!(
        "network manager thread started: sdn_host={} link_max_cap={} refresh={}s",
        cfg.sdn_host,
        cfg.link_max_cap,
        cfg.refresh_secs
    );

    // initial build; requests queue on the channel until it succeeds
    let mut act_net = loop {
        match build(None, client.as_ref(), cfg.link_max_cap) {
            Ok(net) => break net,
            Err(e) => {
                log::warn!("initial network graph build failed ({}); retrying in {}s", e, cfg.refresh_secs);
                thread::sleep(Duration::from_secs(cfg.refresh_secs));
            }
        }
    };
    log::info!("initial network graph has been built");

    start_tickler(cfg.refresh_secs, tickle_tx);

    while let Ok(msg) = rx.recv() {
        match msg {
            NetMessage::Noop(reply_to) => {
                let _ = reply_to.send(());
            }

            NetMessage::HasCapacity { pledge, reply_to } => {
                let (h1, h2, commence, expiry, bandw_in, bandw_out) = pledge.get_values();
                log::info!("has-capacity request received on channel {} -> {}", h1, h2);

                let result = resolve_and_find(&mut act_net, h1, h2, commence, expiry, bandw_in + bandw_out);
                if let Err(e) = &result {
                    log::info!("has-capacity: {}", e);
                }
                let _ = reply_to.send(result);
            }

            NetMessage::Reserve { pledge, reply_to } => {
                let (h1, h2, commence, expiry, bandw_in, bandw_out) = pledge.get_values();
                log::info!("reservation request received: {} -> {} from {} to {}", h1, h2, commence, expiry);

                let want = bandw_in + bandw_out;
                let result = resolve_and_find(&mut act_net, h1, h2, commence, expiry, want).and_then(|mut paths| {
                    // all-or-nothing: no ledger is touched unless every
                    // returned path still admits the request
                    if !paths.iter().all(|p| p.has_capacity(commence, expiry, want)) {
                        return Err(Error::NoPath);
                    }

                    let qid = pledge.get_id().to_string();
                    for (i, path) in paths.iter_mut().enumerate() {
                        log::debug!("path_list[{}]: {}", i, path.to_str());
                        path.set_queue(&qid, commence, expiry, bandw_in, bandw_out);
                    }

                    log::info!("acceptable path found; reservation {} applied to {} path(s)", qid, paths.len());
                    Ok(ReserveOutcome { qid, paths })
                });

                if let Err(e) = &result {
                    log::warn!("reservation rejected: {}", e);
                }
                let _ = reply_to.send(result);
            }

            NetMessage::Delete { pledge, reply_to } => {
                log::info!("deleting reservation {}", pledge.get_id());
                let (_, _, commence, expiry, bandw_in, bandw_out) = pledge.get_values();

                for (i, path) in pledge.get_path_list().iter().enumerate() {
                    log::debug!("deleting path {}", i);
                    path.inc_utilisation(commence, expiry, -(bandw_in + bandw_out));
                }

                let _ = reply_to.send(());
            }

            NetMessage::Vm2Ip(map) => {
                act_net.vm2ip = map;
                act_net.ip2vm = act_net.build_ip2vm();
                log::debug!("vm2ip and ip2vm maps were updated; vm2ip has {} entries", act_net.vm2ip.len());
            }

            NetMessage::GenQueueMap { ts, reply_to } => {
                let _ = reply_to.send(act_net.gen_queue_map(ts));
            }

            NetMessage::GetIp { name, reply_to } => {
                let _ = reply_to.send(act_net.name2ip(&name));
            }

            NetMessage::NetUpdate => {
                log::debug!("rebuilding network graph");
                match build(Some(&mut act_net), client.as_ref(), cfg.link_max_cap) {
                    Ok(mut new_net) => {
                        // the translation maps don't come from the controller;
                        // carry them into the new graph
                        new_net.vm2ip = std::mem::take(&mut act_net.vm2ip);
                        new_net.ip2vm = std::mem::take(&mut act_net.ip2vm);
                        act_net = new_net;
                        log::info!("network graph rebuild completed");
                    }
                    Err(e) => {
                        log::info!("unable to update network graph -- SDNC down? ({})", e);
                    }
                }
            }

            NetMessage::NetGraph(reply_to) => {
                let _ = reply_to.send(act_net.to_json());
            }

            NetMessage::HostList(reply_to) => {
                let _ = reply_to.send(act_net.host_list());
            }

            NetMessage::ListConns { name, reply_to } => {
                let _ = reply_to.send(list_conns(&act_net, &name));
            }

            NetMessage::Shutdown => break,
        }
    }

    log::info!("network manager thread stopped");
}

/// Translates both host names and runs the path finder. Resolution
/// failures surface as `UnknownHost`, an empty search result as `NoPath`.
fn resolve_and_find(net: &mut Network, h1: &str, h2: &str, commence: i64, expiry: i64, want: i64) -> Result<Vec<Path>> {
    let ip1 = net.name2ip(h1)?;
    let ip2 = net.name2ip(h2)?;

    log::debug!("attempt to find path between {} -> {}", ip1, ip2);
    let paths = net.find_path(&ip1, &ip2, commence, expiry, want);

    if paths.is_empty() {
        return Err(Error::NoPath);
    }

    return Ok(paths);
}

/// Attachment points of a host as JSON, trying a `vm2ip` translation
/// when the direct lookup misses.
fn list_conns(net: &Network, name: &str) -> Result<String> {
    if let Some(host) = net.hosts.get(name) {
        return Ok(ports_json(host));
    }

    log::debug!("looking up name for listconns: {}", name);
    let translated = net.vm2ip.get(name).and_then(|ip| net.hosts.get(ip));

    match translated {
        Some(host) => Ok(ports_json(host)),
        None => Err(Error::UnknownHost(format!("did not find host: {}", name))),
    }
}

fn ports_json(host: &Host) -> String {
    serde_json::to_string(&host.ports_dto()).unwrap_or_else(|e| {
        log::error!("conn list serialization failed: {}", e);
        "[]".to_string()
    })
}

fn start_tickler(refresh_secs: u64, tx: mpsc::Sender<NetMessage>) {
    thread::Builder::new()
        .name("netmgr-tickler".to_string())
        .spawn(move || {
            loop {
                thread::sleep(Duration::from_secs(refresh_secs));
                if tx.send(NetMessage::NetUpdate).is_err() {
                    // manager is gone
                    break;
                }
            }
        })
        .expect("Failed to spawn network tickler thread");
}
