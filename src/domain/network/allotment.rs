use std::sync::{Arc, RwLock};

pub const ONE_GIG: i64 = 1024 * 1024 * 1024;

/// Queue priority stamped into generated queue-map tokens.
const QUEUE_PRIORITY: i32 = 200;

/// One reserved-bandwidth interval on a link. Entries created by
/// `set_queue` carry the reservation id and the egress switch/port they
/// were stamped with; entries created by a raw `inc_utilisation` carry
/// neither and never surface in the queue map.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueEntry {
    pub queue_id: Option<String>,
    pub queue_no: i64,
    pub commence: i64,
    pub expiry: i64,
    pub amount: i64,
    pub swid: String,
    pub port: i32,
}

#[derive(Debug)]
struct AllotmentLedger {
    capacity: i64,
    next_queue_no: i64,
    queues: Vec<QueueEntry>,
}

impl AllotmentLedger {
    /// Total bandwidth reserved at the instant `ts`.
    fn reserved_at(&self, ts: i64) -> i64 {
        self.queues.iter().filter(|q| q.commence <= ts && ts <= q.expiry).map(|q| q.amount).sum()
    }
}

/// Time-keyed reservation ledger of a link.
///
/// The handle is cheap to clone; the two directed `Link` halves of one
/// physical edge hold clones of the **same** ledger so a reservation
/// counts once against the edge no matter which direction stamped it.
/// Only the network manager's actor thread mutates a ledger.
#[derive(Debug, Clone)]
pub struct Allotment {
    inner: Arc<RwLock<AllotmentLedger>>,
}

impl Allotment {
    pub fn new(capacity: i64) -> Self {
        Allotment { inner: Arc::new(RwLock::new(AllotmentLedger { capacity, next_queue_no: 1, queues: Vec::new() })) }
    }

    /// True when both handles point at the same underlying ledger.
    pub fn same_ledger(a: &Allotment, b: &Allotment) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    pub fn capacity(&self) -> i64 {
        self.inner.read().unwrap().capacity
    }

    /// Total bandwidth reserved at the instant `ts`.
    pub fn reserved_at(&self, ts: i64) -> i64 {
        self.inner.read().unwrap().reserved_at(ts)
    }

    /// True iff `reserved(t) + want <= capacity` for every instant `t`
    /// in `[commence, expiry]`.
    ///
    /// The reservation curve is piecewise constant and only rises where
    /// an entry commences, so evaluating the window start plus every
    /// entry commencement inside the window covers the maximum.
    pub fn has_capacity(&self, commence: i64, expiry: i64, want: i64) -> bool {
        if commence > expiry {
            log::warn!("capacity probe with inverted window [{}, {}]", commence, expiry);
            return false;
        }

        let ledger = self.inner.read().unwrap();

        let mut check_points: Vec<i64> = vec![commence];
        for q in &ledger.queues {
            if q.commence > commence && q.commence <= expiry {
                check_points.push(q.commence);
            }
        }

        for ts in check_points {
            if ledger.reserved_at(ts) + want > ledger.capacity {
                return false;
            }
        }

        return true;
    }

    /// Records one reservation queue over `[commence, expiry]`.
    /// `swid`/`port` name the egress side the queue will be rendered
    /// against in the queue map.
    pub fn set_queue(&self, queue_id: &str, commence: i64, expiry: i64, amount: i64, swid: &str, port: i32) {
        let mut ledger = self.inner.write().unwrap();
        let queue_no = ledger.next_queue_no;
        ledger.next_queue_no += 1;

        ledger.queues.push(QueueEntry {
            queue_id: Some(queue_id.to_string()),
            queue_no,
            commence,
            expiry,
            amount,
            swid: swid.to_string(),
            port,
        });
    }

    /// Adds `delta` (may be negative) to the reservation curve over the
    /// interval. A negative delta releases: the first entry matching the
    /// window and amount is cancelled outright, which is what restores a
    /// ledger to its pre-reservation state after a delete. A release
    /// that matches no entry still enters the curve as a negative
    /// adjustment so the arithmetic stays consistent, but is logged.
    pub fn inc_utilisation(&self, commence: i64, expiry: i64, delta: i64) {
        let mut ledger = self.inner.write().unwrap();

        if delta < 0 {
            let matching = ledger.queues.iter().position(|q| q.commence == commence && q.expiry == expiry && q.amount == -delta);

            if let Some(idx) = matching {
                ledger.queues.remove(idx);
                return;
            }

            log::warn!("release of {} over [{}, {}] matches no ledger entry; recording adjustment", -delta, commence, expiry);
        }

        ledger.queues.push(QueueEntry {
            queue_id: None,
            queue_no: 0,
            commence,
            expiry,
            amount: delta,
            swid: String::new(),
            port: 0,
        });
    }

    /// Renders the queues active at `ts` as space-separated
    /// `swid/port,res-id,queue,min,max,pri` tokens.
    pub fn queues2str(&self, ts: i64) -> String {
        let ledger = self.inner.read().unwrap();

        let tokens: Vec<String> = ledger
            .queues
            .iter()
            .filter(|q| q.queue_id.is_some() && q.commence <= ts && ts <= q.expiry)
            .map(|q| {
                format!(
                    "{}/{},{},{},{},{},{}",
                    q.swid,
                    q.port,
                    q.queue_id.as_deref().unwrap_or(""),
                    q.queue_no,
                    q.amount,
                    ledger.capacity,
                    QUEUE_PRIORITY
                )
            })
            .collect();

        tokens.join(" ")
    }

    /// Snapshot of the ledger entries, mostly for inspection in tests.
    pub fn entries(&self) -> Vec<QueueEntry> {
        self.inner.read().unwrap().queues.clone()
    }
}
