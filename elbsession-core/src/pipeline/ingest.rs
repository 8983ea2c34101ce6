use crate::pipeline::LineError;
use crate::record::{LogRecord, parse_line};
use std::thread;

/// Parse every line, splitting the work over up to `workers` threads.
///
/// Results come back in input order whatever the worker count.
pub(crate) fn parse_lines<S>(lines: &[S], workers: usize) -> Vec<Result<LogRecord, LineError>>
where
    S: AsRef<str> + Sync,
{
    if workers <= 1 || lines.len() < 2 {
        return parse_chunk(lines, 0);
    }

    let chunk_size = lines.len().div_ceil(workers);

    thread::scope(|scope| {
        let handles: Vec<_> = lines
            .chunks(chunk_size)
            .enumerate()
            .map(|(index, chunk)| scope.spawn(move || parse_chunk(chunk, index * chunk_size)))
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    })
}

fn parse_chunk<S>(lines: &[S], offset: usize) -> Vec<Result<LogRecord, LineError>>
where
    S: AsRef<str>,
{
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let line = line.as_ref();
            parse_line(line).map_err(|source| LineError {
                line: offset + index + 1,
                text: line.to_string(),
                source,
            })
        })
        .collect()
}
