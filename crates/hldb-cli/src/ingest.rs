//! Streaming dataset reader and the bounded worker pool both ingestion
//! commands share.

use std::future::Future;
use std::path::Path;
use std::pin::pin;

use anyhow::Context;
use futures::stream::{self, Stream, StreamExt};
use hldb_core::{parse_row, RawRow};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Open `path` and stream its lines without loading the whole file.
///
/// Lines are split on `\n` with any trailing `\r` removed. Bytes that are
/// not valid UTF-8 decode to U+FFFD instead of failing the line.
///
/// # Errors
///
/// Returns an error if the file cannot be opened. I/O failures while
/// reading surface later as `Err` items of the stream.
pub(crate) async fn open_lines(
    path: &Path,
) -> anyhow::Result<impl Stream<Item = std::io::Result<String>>> {
    let file = tokio::fs::File::open(path)
        .await
        .with_context(|| format!("failed to open dataset {}", path.display()))?;

    Ok(stream::try_unfold(BufReader::new(file), |mut reader| async move {
        let mut buf = Vec::new();
        let read = reader.read_until(b'\n', &mut buf).await?;
        let next = (read > 0).then(|| (decode_line(&buf), reader));
        Ok::<_, std::io::Error>(next)
    }))
}

fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

/// Parse every line into a [`RawRow`] and hand each row to `process`, with
/// at most `max_concurrent` rows in flight.
///
/// Lines that do not parse are skipped. The first read or `process` error
/// stops the run: no further rows are started and the error is returned.
/// Rows already written stay written. `on_written` sees the running count
/// after each successful row.
///
/// With `max_concurrent == 1` rows are processed strictly in file order.
///
/// # Errors
///
/// Returns the first line-read or `process` error.
pub(crate) async fn ingest_rows<S, F, Fut, P>(
    lines: S,
    max_concurrent: usize,
    process: F,
    mut on_written: P,
) -> anyhow::Result<usize>
where
    S: Stream<Item = std::io::Result<String>>,
    F: Fn(RawRow) -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
    P: FnMut(usize),
{
    let process = &process;
    let rows = lines.filter_map(|line| async move {
        match line {
            Ok(line) => parse_row(&line).map(Ok),
            Err(e) => Some(Err(anyhow::Error::new(e).context("failed to read dataset line"))),
        }
    });

    let mut results = pin!(rows
        .map(move |row: anyhow::Result<RawRow>| async move { process(row?).await })
        .buffer_unordered(max_concurrent.max(1)));

    let mut written = 0_usize;
    while let Some(result) = results.next().await {
        if let Err(e) = result {
            tracing::error!(written, error = %e, "ingestion aborted");
            return Err(e.context(format!("ingestion stopped after {written} rows")));
        }
        written += 1;
        on_written(written);
    }

    Ok(written)
}

#[cfg(test)]
#[path = "ingest_test.rs"]
mod tests;
