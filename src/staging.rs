//! Staging buffer and batch commit controller.
//!
//! Uploads accumulate in a [`StagingBuffer`] across requests until a commit
//! is triggered. Commit is all-or-nothing at the batch-size gate: an empty
//! buffer or one over the configured maximum aborts with the buffer left
//! exactly as it was. A successful commit writes every staged file to the
//! upload directory, extracts its text, scores it, ranks the results, and
//! clears the buffer.
//!
//! The buffer is shared by all request handlers and guarded by a mutex that
//! `commit` holds for the whole batch, so interleaved stage/commit sequences
//! from concurrent requests serialize instead of losing or duplicating
//! files.

use parking_lot::Mutex;
use tracing::{debug, info};

use crate::config::Config;
use crate::extract::{extract_text, ExtractError};
use crate::models::{Candidate, DocFormat, StagedFile};
use crate::rank::assign_ranks;
use crate::sanitize::secure_filename;
use crate::score::academic_score;

/// Errors surfaced by [`StagingBuffer::commit`].
///
/// `EmptyBatch` and `BatchTooLarge` are the recoverable guard conditions;
/// both leave the buffer untouched. `Extract` and `Io` are fatal to the
/// batch and also leave the buffer in its pre-commit state, so the failing
/// file stays staged.
#[derive(Debug)]
pub enum BatchError {
    EmptyBatch,
    BatchTooLarge(usize),
    Extract {
        filename: String,
        source: ExtractError,
    },
    Io {
        filename: String,
        source: std::io::Error,
    },
}

impl std::fmt::Display for BatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchError::EmptyBatch => write!(f, "no resumes staged for commit"),
            BatchError::BatchTooLarge(max) => {
                write!(f, "staged resumes exceed the batch limit of {}", max)
            }
            BatchError::Extract { filename, source } => {
                write!(f, "failed to extract text from {}: {}", filename, source)
            }
            BatchError::Io { filename, source } => {
                write!(f, "failed to write {}: {}", filename, source)
            }
        }
    }
}

impl std::error::Error for BatchError {}

/// Shared holding area for uploaded files awaiting a batch commit.
#[derive(Default)]
pub struct StagingBuffer {
    slots: Mutex<Vec<StagedFile>>,
}

impl StagingBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sanitizes the filename and appends the file if its extension is on
    /// the allow-list. Disallowed or extension-less files are dropped
    /// without an error — the caller sees no difference.
    pub fn stage(&self, filename: &str, content: Vec<u8>) {
        let filename = secure_filename(filename);
        if DocFormat::from_filename(&filename).is_none() {
            debug!(filename = %filename, "dropped upload with disallowed extension");
            return;
        }
        info!(filename = %filename, bytes = content.len(), "staged resume");
        self.slots.lock().push(StagedFile {
            filename,
            content,
        });
    }

    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }

    /// Filenames currently staged, in insertion order.
    pub fn staged_names(&self) -> Vec<String> {
        self.slots.lock().iter().map(|f| f.filename.clone()).collect()
    }

    /// Processes the full buffer as one batch.
    ///
    /// Holds the buffer lock for the duration, including extraction and
    /// disk writes, so no concurrent stage or commit interleaves with a
    /// running batch. Clears the buffer only on success.
    pub fn commit(&self, config: &Config) -> Result<Vec<Candidate>, BatchError> {
        let mut slots = self.slots.lock();

        if slots.is_empty() {
            return Err(BatchError::EmptyBatch);
        }
        let max = config.uploads.max_batch;
        if slots.len() > max {
            return Err(BatchError::BatchTooLarge(max));
        }

        std::fs::create_dir_all(&config.uploads.dir).map_err(|source| BatchError::Io {
            filename: config.uploads.dir.display().to_string(),
            source,
        })?;

        let mut candidates = Vec::with_capacity(slots.len());
        for staged in slots.iter() {
            // The extension was checked at stage time; re-check here so a
            // buffer that somehow holds an unrecognized name skips it
            // instead of failing the batch.
            let Some(format) = DocFormat::from_filename(&staged.filename) else {
                debug!(filename = %staged.filename, "skipped staged file with no decoder");
                continue;
            };

            let path = config.uploads.dir.join(&staged.filename);
            std::fs::write(&path, &staged.content).map_err(|source| BatchError::Io {
                filename: staged.filename.clone(),
                source,
            })?;

            let text =
                extract_text(&staged.content, format).map_err(|source| BatchError::Extract {
                    filename: staged.filename.clone(),
                    source,
                })?;
            let score = academic_score(&text);

            candidates.push(Candidate {
                filename: staged.filename.clone(),
                score,
                text,
                rank: 0,
            });
        }

        slots.clear();
        let ranked = assign_ranks(candidates);
        info!(candidates = ranked.len(), "committed resume batch");
        Ok(ranked)
    }
}
