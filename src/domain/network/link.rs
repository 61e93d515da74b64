use crate::domain::network::allotment::Allotment;
use crate::domain::network::id::{LinkId, SwitchId};

/// A directed edge between two switches. Every physical edge is two
/// `Link` values, one per direction, bound to one shared allotment.
///
/// `port1` is the egress port on `source`, `port2` the ingress port on
/// `target`; the mirror link stores the reciprocal assignment.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: LinkId,
    pub source: SwitchId,
    pub target: SwitchId,
    port1: i32,
    port2: i32,
    allotment: Allotment,
}

impl Link {
    /// Table key of the directed link `ssw -> dsw`.
    pub fn link_id(ssw: &SwitchId, dsw: &SwitchId) -> LinkId {
        LinkId::new(format!("{}-{}", ssw, dsw))
    }

    /// Table key of the vlink between two ports of one switch.
    pub fn vlink_id(sw: &SwitchId, p1: i32, p2: i32) -> LinkId {
        LinkId::new(format!("{}.{}.{}", sw, p1, p2))
    }

    pub fn new(source: SwitchId, target: SwitchId, capacity: i64) -> Self {
        let id = Link::link_id(&source, &target);
        Link { id, source, target, port1: 0, port2: 0, allotment: Allotment::new(capacity) }
    }

    /// Mirror constructor: binds this direction to the allotment of the
    /// already-built opposite direction.
    pub fn with_allotment(source: SwitchId, target: SwitchId, allotment: Allotment) -> Self {
        let id = Link::link_id(&source, &target);
        Link { id, source, target, port1: 0, port2: 0, allotment }
    }

    /// A virtual link between two ports of the same switch.
    pub fn new_vlink(sw: SwitchId, p1: i32, p2: i32, capacity: i64) -> Self {
        let id = Link::vlink_id(&sw, p1, p2);
        Link { id, source: sw.clone(), target: sw, port1: p1, port2: p2, allotment: Allotment::new(capacity) }
    }

    pub fn set_ports(&mut self, p1: i32, p2: i32) {
        self.port1 = p1;
        self.port2 = p2;
    }

    pub fn port1(&self) -> i32 {
        self.port1
    }

    pub fn port2(&self) -> i32 {
        self.port2
    }

    /// Rebinds the ledger; used when a rebuild re-pairs a reused link
    /// with its freshly chosen mirror.
    pub fn bind_allotment(&mut self, allotment: Allotment) {
        self.allotment = allotment;
    }

    pub fn allotment(&self) -> &Allotment {
        &self.allotment
    }

    pub fn capacity(&self) -> i64 {
        self.allotment.capacity()
    }

    pub fn has_capacity(&self, commence: i64, expiry: i64, want: i64) -> bool {
        self.allotment.has_capacity(commence, expiry, want)
    }

    /// Stamps one reservation queue on the shared ledger, rendered
    /// against this direction's egress side.
    pub fn set_queue(&self, queue_id: &str, commence: i64, expiry: i64, amount: i64) {
        self.allotment.set_queue(queue_id, commence, expiry, amount, self.source.as_str(), self.port1);
    }

    pub fn inc_utilisation(&self, commence: i64, expiry: i64, delta: i64) {
        self.allotment.inc_utilisation(commence, expiry, delta);
    }

    pub fn queues2str(&self, ts: i64) -> String {
        self.allotment.queues2str(ts)
    }
}
