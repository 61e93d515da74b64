use uuid::Uuid;

use crate::domain::network::path::Path;

/// A bandwidth reservation request: two endpoints, a time window and
/// the inbound/outbound bandwidth to be guaranteed. Once the manager
/// accepts the pledge it carries the queue id stamped into every ledger
/// entry, and the paths the reservation was applied to.
#[derive(Debug, Clone)]
pub struct Pledge {
    id: String,
    h1: String,
    h2: String,
    commence: i64,
    expiry: i64,
    bandw_in: i64,
    bandw_out: i64,
    qid: Option<String>,
    path_list: Vec<Path>,
}

impl Pledge {
    pub fn new(h1: impl Into<String>, h2: impl Into<String>, commence: i64, expiry: i64, bandw_in: i64, bandw_out: i64) -> Self {
        Pledge {
            id: Uuid::new_v4().to_string(),
            h1: h1.into(),
            h2: h2.into(),
            commence,
            expiry,
            bandw_in,
            bandw_out,
            qid: None,
            path_list: Vec::new(),
        }
    }

    pub fn get_values(&self) -> (&str, &str, i64, i64, i64, i64) {
        (&self.h1, &self.h2, self.commence, self.expiry, self.bandw_in, self.bandw_out)
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn set_qid(&mut self, qid: impl Into<String>) {
        self.qid = Some(qid.into());
    }

    pub fn get_qid(&self) -> Option<&str> {
        self.qid.as_deref()
    }

    pub fn set_path_list(&mut self, paths: Vec<Path>) {
        self.path_list = paths;
    }

    pub fn get_path_list(&self) -> &[Path] {
        &self.path_list
    }
}
