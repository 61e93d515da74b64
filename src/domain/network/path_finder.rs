use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use crate::domain::network::host::Host;
use crate::domain::network::id::SwitchId;
use crate::domain::network::network::Network;
use crate::domain::network::path::Path;

/// Cost of an undiscovered switch: never a real hop count, and keeps
/// costs representable as int32.
const INFINITE_COST: i64 = i32::MAX as i64;

/// Per-search scratch for one switch. Kept outside `Switch` so a search
/// never mutates the graph; a fresh context per search is the reset.
#[derive(Debug)]
struct SearchState {
    cost: i64,
    prev: Option<SwitchId>,
    /// Index into `prev`'s adjacency of the link that reached this switch.
    plink: usize,
}

type SearchContext = HashMap<SwitchId, SearchState>;

impl Network {
    /// Finds the set of usable paths between two hosts, one per
    /// attachment point of `h1`, honouring the additional bandwidth
    /// `inc_cap` over `[commence, expiry]` on every traversed link.
    ///
    /// A split network surfaces a host at several switches, so the
    /// result is a list; a caller must treat the entries as alternative
    /// routes to the same host and reserve on each. Host names must
    /// already be host-map keys (MAC or IP); translation of VM names
    /// happens upstream.
    pub fn find_path(&mut self, h1nm: &str, h2nm: &str, commence: i64, expiry: i64, inc_cap: i64) -> Vec<Path> {
        let mut path_list: Vec<Path> = Vec::new();

        let Some(h1) = self.hosts.get(h1nm).cloned() else {
            log::info!("find-path: cannot find host(1) in network -- not reported by SDNC? {}", h1nm);
            return path_list;
        };
        let Some(h2) = self.hosts.get(h2nm).cloned() else {
            log::info!("find-path: cannot find host(2) in network -- not reported by SDNC? {}", h2nm);
            return path_list;
        };

        // flow-mods are pushed at MAC level; work with the MACs from here on
        let h1mac = h1.get_mac().to_string();
        let h2mac = h2.get_mac().to_string();

        let mut ctx: SearchContext = SearchContext::new();

        for swidx in 0..h1.nconns() {
            let Some((ssw_id, _)) = h1.get_switch_port(swidx) else {
                break;
            };
            let ssw_id = ssw_id.clone();

            let Some(ssw) = self.switches.get(&ssw_id) else {
                log::warn!("find-path: attachment switch {} of {} is not in the graph", ssw_id, h1mac);
                continue;
            };

            if ssw.has_host(&h1mac) && ssw.has_host(&h2mac) {
                // both hosts on one switch; forward over a vlink unless
                // they share the port
                let p1 = h1.get_port(&ssw_id);
                let p2 = h2.get_port(&ssw_id);
                let (Some(p1), Some(p2)) = (p1, p2) else {
                    continue;
                };

                if p1 == p2 {
                    log::debug!("find-path: path[{}]: target {} on same switch {} with same port {}", path_list.len(), h2mac, ssw_id, p1);
                    continue;
                }

                let vlink = self.find_vlink(&ssw_id, p1, p2);
                if vlink.has_capacity(commence, expiry, inc_cap) {
                    log::info!("path[{}]: found target on same switch, different ports: {} {}, {}", path_list.len(), ssw_id, p1, p2);

                    let mut path = Path::new(h1.clone(), h2.clone());
                    path.add_switch(ssw_id.clone());
                    path.add_link(vlink);
                    path_list.push(path);
                } else {
                    log::warn!("path[{}]: hosts on same switch, virtual link cannot support bandwidth increase of {}", path_list.len(), inc_cap);
                }
            } else {
                // usual case: hosts on different switches
                log::debug!("path[{}]: searching for path from switch: {}", path_list.len(), ssw_id);

                if let Some(tsw) = self.path_to(&mut ctx, &ssw_id, &h2mac, commence, expiry, inc_cap) {
                    log::debug!("path[{}]: found target on {}", path_list.len(), tsw);
                    path_list.push(self.assemble_path(&ctx, &h1, &h2, tsw));
                }
            }
        }

        return path_list;
    }

    /// Best-first search from `ssw` for any switch that advertises the
    /// target MAC as a host. Edge weight is hop count; relaxation is
    /// permitted only across links whose shared ledger admits `inc_cap`
    /// over the window.
    ///
    /// Ties in cost keep the first discovered predecessor: the frontier
    /// is FIFO and an update requires a strict cost improvement.
    fn path_to(&self, ctx: &mut SearchContext, ssw: &SwitchId, target_mac: &str, commence: i64, expiry: i64, inc_cap: i64) -> Option<SwitchId> {
        ctx.clear();
        ctx.insert(ssw.clone(), SearchState { cost: 0, prev: None, plink: 0 });

        let mut frontier: VecDeque<SwitchId> = VecDeque::new();
        frontier.push_back(ssw.clone());

        while let Some(cur_id) = frontier.pop_front() {
            let Some(cur) = self.switches.get(&cur_id) else {
                continue;
            };

            if cur.has_host(target_mac) {
                return Some(cur_id);
            }

            let cur_cost = match ctx.get(&cur_id) {
                Some(state) => state.cost,
                None => continue,
            };

            for (idx, link_id) in cur.link_ids().iter().enumerate() {
                let Some(link) = self.links.get(link_id) else {
                    continue;
                };

                if !link.has_capacity(commence, expiry, inc_cap) {
                    log::trace!("path_to: link {} cannot take {} more over [{}, {}]", link_id, inc_cap, commence, expiry);
                    continue;
                }

                let next_id = link.target.clone();
                let next_cost = ctx.get(&next_id).map(|s| s.cost).unwrap_or(INFINITE_COST);

                if cur_cost + 1 < next_cost {
                    ctx.insert(next_id.clone(), SearchState { cost: cur_cost + 1, prev: Some(cur_id.clone()), plink: idx });
                    frontier.push_back(next_id);
                }
            }
        }

        return None;
    }

    /// Walks the predecessor chain back from the terminating switch,
    /// collecting each (switch, link) pair. The result is stored in
    /// target-to-source order and flagged `reversed`.
    fn assemble_path(&self, ctx: &SearchContext, h1: &Arc<Host>, h2: &Arc<Host>, tsw: SwitchId) -> Path {
        let mut path = Path::new(h1.clone(), h2.clone());
        path.set_reverse(true);

        let mut cursor = Some(tsw);
        while let Some(cur_id) = cursor {
            let state = ctx.get(&cur_id);
            let prev = state.and_then(|s| s.prev.clone());

            if let (Some(prev_id), Some(state)) = (&prev, state) {
                let link = self.switches.get(prev_id).and_then(|sw| sw.get_link(state.plink)).and_then(|lid| self.links.get(lid));

                match link {
                    Some(link) => path.add_link(link.clone()),
                    None => log::error!("path walk-back lost link {} of switch {}", state.plink, prev_id),
                }
            }

            path.add_switch(cur_id);
            cursor = prev;
        }

        return path;
    }
}
