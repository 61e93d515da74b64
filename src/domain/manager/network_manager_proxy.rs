use std::collections::HashMap;
use std::sync::mpsc;

use crate::domain::manager::net_message::NetMessage;
use crate::domain::manager::pledge::Pledge;
use crate::domain::network::path::Path;
use crate::error::Result;

/// Caller-side handle of the network manager. Cheap to clone; every
/// request travels the manager's inbound channel and blocks on a fresh
/// reply channel where the protocol answers.
#[derive(Debug, Clone)]
pub struct NetworkManagerProxy {
    tx: mpsc::Sender<NetMessage>,
}

impl NetworkManagerProxy {
    pub(crate) fn new(tx: mpsc::Sender<NetMessage>) -> Self {
        NetworkManagerProxy { tx }
    }

    fn call<R, F>(&self, msg_builder: F) -> R
    where
        F: FnOnce(mpsc::Sender<R>) -> NetMessage,
    {
        let (reply_tx, reply_rx) = mpsc::channel();
        let msg = msg_builder(reply_tx);

        match self.tx.send(msg) {
            Ok(_) => reply_rx.recv().expect("Network manager thread died unexpectedly"),
            Err(_) => panic!("Failed to send request to network manager"),
        }
    }

    /// Round-trips an empty request; returns once every previously
    /// queued request has been serviced.
    pub fn ping(&self) {
        self.call(NetMessage::Noop)
    }

    /// Pathfind without touching any ledger.
    pub fn has_capacity(&self, pledge: &Pledge) -> Result<Vec<Path>> {
        self.call(|tx| NetMessage::HasCapacity { pledge: pledge.clone(), reply_to: tx })
    }

    /// Pathfind and, on success, stamp the reservation onto every
    /// returned path. The pledge receives the queue id and the paths.
    pub fn reserve(&self, pledge: &mut Pledge) -> Result<Vec<Path>> {
        let outcome = self.call(|tx| NetMessage::Reserve { pledge: pledge.clone(), reply_to: tx })?;

        pledge.set_qid(outcome.qid);
        pledge.set_path_list(outcome.paths.clone());

        Ok(outcome.paths)
    }

    /// Releases the bandwidth recorded in the pledge's saved paths.
    pub fn delete(&self, pledge: &Pledge) {
        self.call(|tx| NetMessage::Delete { pledge: pledge.clone(), reply_to: tx })
    }

    pub fn set_vm2ip(&self, map: HashMap<String, String>) {
        let _ = self.tx.send(NetMessage::Vm2Ip(map));
    }

    pub fn gen_queue_map(&self, ts: i64) -> Vec<String> {
        self.call(|tx| NetMessage::GenQueueMap { ts, reply_to: tx })
    }

    pub fn get_ip(&self, name: &str) -> Result<String> {
        self.call(|tx| NetMessage::GetIp { name: name.to_string(), reply_to: tx })
    }

    /// Asks for a rebuild outside the regular tick.
    pub fn trigger_net_update(&self) {
        let _ = self.tx.send(NetMessage::NetUpdate);
    }

    pub fn network_graph(&self) -> String {
        self.call(NetMessage::NetGraph)
    }

    pub fn host_list(&self) -> String {
        self.call(NetMessage::HostList)
    }

    pub fn list_conns(&self, name: &str) -> Result<String> {
        self.call(|tx| NetMessage::ListConns { name: name.to_string(), reply_to: tx })
    }

    pub fn shutdown(&self) {
        let _ = self.tx.send(NetMessage::Shutdown);
    }
}
