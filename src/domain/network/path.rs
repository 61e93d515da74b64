use std::sync::Arc;

use crate::domain::network::host::Host;
use crate::domain::network::id::SwitchId;
use crate::domain::network::link::Link;

/// One usable route between two hosts: the switches traversed and the
/// links (or single vlink) between them.
///
/// When `reversed` is set the stored order runs from the target back to
/// the source, which is how the cross-switch search assembles it.
#[derive(Debug, Clone)]
pub struct Path {
    h1: Arc<Host>,
    h2: Arc<Host>,
    switches: Vec<SwitchId>,
    links: Vec<Link>,
    reversed: bool,
    qid: Option<String>,
}

impl Path {
    pub fn new(h1: Arc<Host>, h2: Arc<Host>) -> Self {
        Path { h1, h2, switches: Vec::new(), links: Vec::new(), reversed: false, qid: None }
    }

    pub fn add_switch(&mut self, sw: SwitchId) {
        self.switches.push(sw);
    }

    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    pub fn set_reverse(&mut self, reversed: bool) {
        self.reversed = reversed;
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn h1(&self) -> &Arc<Host> {
        &self.h1
    }

    pub fn h2(&self) -> &Arc<Host> {
        &self.h2
    }

    pub fn switches(&self) -> &[SwitchId] {
        &self.switches
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn qid(&self) -> Option<&str> {
        self.qid.as_deref()
    }

    /// True iff every link on the path admits `want` more bandwidth
    /// over the window.
    pub fn has_capacity(&self, commence: i64, expiry: i64, want: i64) -> bool {
        self.links.iter().all(|l| l.has_capacity(commence, expiry, want))
    }

    /// Accepts a reservation: stamps one queue carrying `qid` and the
    /// summed bandwidth onto the ledger of every link on the path.
    pub fn set_queue(&mut self, qid: &str, commence: i64, expiry: i64, bandw_in: i64, bandw_out: i64) {
        self.qid = Some(qid.to_string());

        for link in &self.links {
            link.set_queue(qid, commence, expiry, bandw_in + bandw_out);
        }
    }

    /// Adjusts the reservation curve of every link on the path; a
    /// negative delta releases a prior reservation.
    pub fn inc_utilisation(&self, commence: i64, expiry: i64, delta: i64) {
        for link in &self.links {
            link.inc_utilisation(commence, expiry, delta);
        }
    }

    pub fn to_str(&self) -> String {
        let hops: Vec<&str> = self.switches.iter().map(|s| s.as_str()).collect();
        format!("{} -> {} via [{}] (reversed: {})", self.h1.get_mac(), self.h2.get_mac(), hops.join(", "), self.reversed)
    }
}
