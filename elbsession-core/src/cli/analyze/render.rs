use crate::aggregate::{ClientEngagement, SessionSummary, UniqueUrlCount};
use crate::pipeline::{LineError, PipelineReport, PipelineStats, SessionizedRow};
use crate::record::TIMESTAMP_FORMAT;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::{self, Write};

/// Human-readable tables, `top` rows each.
pub fn render_pretty(report: &PipelineReport, top: usize, out: &mut impl Write) -> io::Result<()> {
    let stats = &report.stats;
    writeln!(
        out,
        "{} lines, {} parsed, {} rejected, {} clients, {} sessions\n",
        stats.lines, stats.parsed, stats.rejected, stats.clients, stats.sessions
    )?;

    heading(out, "Prepared Logs", report.sessionized.len(), top)?;
    for row in report.sessionized_rows().take(top) {
        let interval = row
            .time_interval_seconds
            .map(|s| format!("{s:.6}"))
            .unwrap_or_else(|| "-".to_string());
        let marker = if row.is_session_start { "*" } else { " " };
        writeln!(
            out,
            "  {:<15} {:>4}{} {} {:>14} {}",
            row.client_ip, row.session_seq, marker, row.timestamp, interval, row.url
        )?;
    }
    writeln!(out)?;

    heading(out, "Sessionized Logs", report.sessions.len(), top)?;
    for session in report.sessions.iter().take(top) {
        writeln!(
            out,
            "  {:<15} {:>4} {:>6} req {:>14.6}s  {} .. {}",
            session.client_ip,
            session.session_seq,
            session.record_count,
            session.total_duration_seconds,
            session.started_at.format(TIMESTAMP_FORMAT),
            session.ended_at.format(TIMESTAMP_FORMAT),
        )?;
    }
    writeln!(out)?;

    writeln!(out, "{}", "Average Session Time".bold())?;
    match report.average_session_duration {
        Some(avg) => writeln!(out, "  {avg:.6}s")?,
        None => writeln!(out, "  {}", "n/a (no session has more than one request)".dimmed())?,
    }
    writeln!(out)?;

    heading(out, "Unique URL Visit per Session", report.unique_url_counts.len(), top)?;
    for count in report.unique_url_counts.iter().take(top) {
        writeln!(
            out,
            "  {:<15} {:>4} {:>6} urls",
            count.client_ip, count.session_seq, count.unique_url_count
        )?;
    }
    writeln!(out)?;

    heading(out, "Most Engaged Users", report.most_engaged_clients.len(), top)?;
    for (rank, client) in report.most_engaged_clients.iter().take(top).enumerate() {
        writeln!(
            out,
            "  {:>3}. {:<15} {:>14.6}s {:>4} sessions {:>6} req",
            rank + 1,
            client.client_ip,
            client.total_duration_seconds,
            client.session_count,
            client.request_count
        )?;
    }

    if !report.rejected.is_empty() {
        writeln!(out)?;
        writeln!(
            out,
            "{}: {} malformed line(s) skipped",
            "warning".yellow().bold(),
            report.rejected.len()
        )?;
        for rejected in report.rejected.iter().take(top) {
            writeln!(out, "  line {}: {}", rejected.line, rejected.source)?;
        }
    }

    Ok(())
}

fn heading(out: &mut impl Write, title: &str, total: usize, top: usize) -> io::Result<()> {
    if total > top {
        writeln!(out, "{} (first {top} of {total})", title.bold())
    } else {
        writeln!(out, "{} ({total})", title.bold())
    }
}

#[derive(Serialize)]
struct ReportJson<'a> {
    stats: &'a PipelineStats,
    average_session_duration: Option<f64>,
    sessions: &'a [SessionSummary],
    unique_url_counts: &'a [UniqueUrlCount],
    most_engaged_clients: &'a [ClientEngagement],
    sessionized: Vec<SessionizedRow<'a>>,
    rejected: Vec<RejectedJson<'a>>,
}

#[derive(Serialize)]
struct RejectedJson<'a> {
    line: usize,
    error: String,
    text: &'a str,
}

impl<'a> From<&'a LineError> for RejectedJson<'a> {
    fn from(err: &'a LineError) -> Self {
        Self {
            line: err.line,
            error: err.source.to_string(),
            text: &err.text,
        }
    }
}

/// The whole report as one pretty-printed JSON document.
pub fn render_json(report: &PipelineReport, out: &mut impl Write) -> anyhow::Result<()> {
    let json = ReportJson {
        stats: &report.stats,
        average_session_duration: report.average_session_duration,
        sessions: &report.sessions,
        unique_url_counts: &report.unique_url_counts,
        most_engaged_clients: &report.most_engaged_clients,
        sessionized: report.sessionized_rows().collect(),
        rejected: report.rejected.iter().map(RejectedJson::from).collect(),
    };

    serde_json::to_writer_pretty(&mut *out, &json)?;
    writeln!(out)?;
    Ok(())
}
