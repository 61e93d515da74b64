use std::collections::HashMap;
use std::sync::mpsc;

use crate::domain::manager::pledge::Pledge;
use crate::domain::network::path::Path;
use crate::error::Result;

/// Outcome of an accepted reservation: the queue id stamped into the
/// ledgers and the paths it was applied to.
#[derive(Debug)]
pub struct ReserveOutcome {
    pub qid: String,
    pub paths: Vec<Path>,
}

/// Messages understood by the network manager actor. Requests with a
/// reply in the protocol table carry a sender for it; `Vm2Ip`,
/// `NetUpdate` and `Shutdown` are fire-and-forget.
///
/// Requests are serviced strictly in arrival order, which gives
/// reservations and deletions a total order.
pub enum NetMessage {
    /// No-op; the empty reply makes it usable as a ping.
    Noop(mpsc::Sender<()>),

    /// Pathfind only; never mutates ledgers.
    HasCapacity {
        pledge: Pledge,
        reply_to: mpsc::Sender<Result<Vec<Path>>>,
    },

    /// Pathfind, then stamp the reservation onto every returned path.
    Reserve {
        pledge: Pledge,
        reply_to: mpsc::Sender<Result<ReserveOutcome>>,
    },

    /// Release the reservation recorded in the pledge's saved paths.
    Delete {
        pledge: Pledge,
        reply_to: mpsc::Sender<()>,
    },

    /// Replace the vm-name/vm-id -> IP map and regenerate its reverse.
    Vm2Ip(HashMap<String, String>),

    /// Render the queue map for all links at the given instant.
    GenQueueMap {
        ts: i64,
        reply_to: mpsc::Sender<Vec<String>>,
    },

    /// Resolve a host name / VM name / VM id to an IP address.
    GetIp {
        name: String,
        reply_to: mpsc::Sender<Result<String>>,
    },

    /// Rebuild the graph from the controller; retain on fetch failure.
    NetUpdate,

    /// JSON dump of the network graph.
    NetGraph(mpsc::Sender<String>),

    /// JSON list of hosts with name, mac, ips and attachment points.
    HostList(mpsc::Sender<String>),

    /// JSON list of attachment points for one host.
    ListConns {
        name: String,
        reply_to: mpsc::Sender<Result<String>>,
    },

    Shutdown,
}
