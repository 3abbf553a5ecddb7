//! # Resume Rank
//!
//! A small resume screening service. Resumes (PDF/DOCX) are uploaded through
//! a web form into an in-process staging buffer, then committed as one batch:
//! each document is decoded to plain text, a numeric academic score (CGPA or
//! percentage) is pulled out of the text with a regex heuristic, and the
//! candidates are returned ranked by descending score.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌───────────────┐   ┌──────────────────┐
//! │  Upload   │──▶│ StagingBuffer │──▶│  Batch Commit     │
//! │ (HTTP/CLI)│   │ (mutex-guarded)│  │ extract→score→rank│
//! └──────────┘   └───────────────┘   └────────┬─────────┘
//!                                             ▼
//!                                     ranked Candidates
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! rrank serve                    # start the upload form on [server].bind
//! rrank score a.pdf b.docx       # rank files straight from disk
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Core data types |
//! | [`sanitize`] | Safe-filename normalization |
//! | [`extract`] | PDF/DOCX text extraction |
//! | [`score`] | CGPA/percentage score heuristic |
//! | [`rank`] | Descending sort and dense rank assignment |
//! | [`staging`] | Staging buffer and batch commit |
//! | [`server`] | HTTP upload form and ranking endpoint |

pub mod config;
pub mod extract;
pub mod models;
pub mod rank;
pub mod sanitize;
pub mod score;
pub mod server;
pub mod staging;
