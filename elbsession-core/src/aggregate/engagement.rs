use crate::aggregate::ClientEngagement;
use crate::sessionize::{SessionAnnotatedRecord, micros_to_seconds};
use ahash::AHashMap;
use std::cmp::Reverse;

#[derive(Default)]
struct ClientAccumulator {
    duration_micros: i64,
    session_count: u32,
    request_count: usize,
}

/// Total session time per client, longest first.
///
/// Clients with a single request are kept with a total of 0. Equal totals
/// are ordered by client IP.
pub fn most_engaged_clients(records: &[SessionAnnotatedRecord]) -> Vec<ClientEngagement> {
    let mut clients: AHashMap<&str, ClientAccumulator> = AHashMap::new();

    for record in records {
        let acc = clients.entry(record.client_ip()).or_default();
        acc.duration_micros = acc
            .duration_micros
            .saturating_add(record.interval_micros());
        acc.session_count = acc.session_count.max(record.session_seq);
        acc.request_count += 1;
    }

    let mut ranked: Vec<(&str, ClientAccumulator)> = clients.into_iter().collect();
    ranked.sort_by_key(|(client_ip, acc)| (Reverse(acc.duration_micros), *client_ip));

    ranked
        .into_iter()
        .map(|(client_ip, acc)| ClientEngagement {
            client_ip: client_ip.to_string(),
            total_duration_seconds: micros_to_seconds(acc.duration_micros),
            session_count: acc.session_count,
            request_count: acc.request_count,
        })
        .collect()
}
