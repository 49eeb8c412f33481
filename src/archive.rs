//! Batch generation: fetch, render and archive many receipts into one zip.

use std::io::{Cursor, Write};

use serde::Serialize;
use zip::ZipWriter;
use zip::write::FileOptions;

use crate::assembler::render_receipt;
use crate::error::EngineError;
use crate::source::ReceiptSource;

pub const ARCHIVE_FILENAME: &str = "receipts.zip";

/// What a failed id does to the rest of the batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Record the failure and keep going; the archive carries whatever
    /// succeeded.
    #[default]
    CollectOutcomes,
    /// Abort on the first failure and discard the partial archive.
    FailFast,
}

/// Per-id outcome: the archived filename on success, the error message
/// otherwise.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub id: String,
    pub outcome: Result<String, String>,
}

impl BatchEntry {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

#[derive(Debug)]
pub struct BatchSummary {
    /// The suggested download name for the archive.
    pub filename: &'static str,
    /// The zip bytes.
    pub archive: Vec<u8>,
    /// One entry per requested id, in request order.
    pub entries: Vec<BatchEntry>,
}

impl BatchSummary {
    pub fn succeeded_count(&self) -> usize {
        self.entries.iter().filter(|e| e.succeeded()).count()
    }
}

/// Fetches every id through `source`, renders each receipt and writes the
/// results into one deflate-compressed zip.
///
/// An empty id list yields an empty archive with no entries. A non-empty
/// list where nothing succeeds is an error under either policy: there is no
/// point handing back an empty zip as if it were a result.
pub async fn render_batch<S: ReceiptSource + ?Sized>(
    source: &S,
    ids: &[String],
    policy: BatchPolicy,
) -> Result<BatchSummary, EngineError> {
    let mut buffer = Cursor::new(Vec::new());
    let mut entries = Vec::with_capacity(ids.len());
    {
        let mut zip = ZipWriter::new(&mut buffer);
        let options: FileOptions<()> =
            FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        for id in ids {
            let rendered = match source.fetch_receipt(id).await {
                Ok(record) => render_receipt(&record),
                Err(err) => Err(EngineError::Fetch(err)),
            };
            match rendered {
                Ok(receipt) => {
                    zip.start_file(receipt.filename.clone(), options)?;
                    zip.write_all(&receipt.bytes)?;
                    log::debug!("archived order {id} as {}", receipt.filename);
                    entries.push(BatchEntry {
                        id: id.clone(),
                        outcome: Ok(receipt.filename),
                    });
                }
                Err(err) => match policy {
                    BatchPolicy::FailFast => return Err(err),
                    BatchPolicy::CollectOutcomes => {
                        log::warn!("skipping order {id}: {err}");
                        entries.push(BatchEntry {
                            id: id.clone(),
                            outcome: Err(err.to_string()),
                        });
                    }
                },
            }
        }
        zip.finish()?;
    }

    if !ids.is_empty() && entries.iter().all(|e| !e.succeeded()) {
        return Err(EngineError::EmptyBatch);
    }
    Ok(BatchSummary {
        filename: ARCHIVE_FILENAME,
        archive: buffer.into_inner(),
        entries,
    })
}
