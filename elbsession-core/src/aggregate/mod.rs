//! Session and client engagement metrics.
//!
//! Every projection here is a read-only pass over the sessionized records.
//! Durations are summed in whole microseconds and converted to seconds once,
//! so results do not depend on summation order.

mod engagement;
mod sessions;
mod types;

pub use engagement::most_engaged_clients;
pub use sessions::{average_session_duration, session_durations, unique_url_counts};
pub use types::*;

use crate::sessionize::SessionAnnotatedRecord;
use sessions::average_of;

/// All four projections over one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    pub sessions: Vec<SessionSummary>,
    pub average_session_duration: Option<f64>,
    pub unique_url_counts: Vec<UniqueUrlCount>,
    pub most_engaged_clients: Vec<ClientEngagement>,
}

impl Aggregates {
    pub fn compute(records: &[SessionAnnotatedRecord]) -> Self {
        let sessions = session_durations(records);
        let average_session_duration = average_of(&sessions);
        let unique_url_counts = sessions.iter().map(UniqueUrlCount::from).collect();
        let most_engaged_clients = most_engaged_clients(records);

        Self {
            sessions,
            average_session_duration,
            unique_url_counts,
            most_engaged_clients,
        }
    }
}
