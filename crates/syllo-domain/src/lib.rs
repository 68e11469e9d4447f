//! Syllo Domain Layer
//!
//! Core types and pure logic for the logic-reasoning workflow client.
//! The backend runs a multi-stage pipeline (entity extraction, relation
//! extraction, search-space generation, argument construction, target
//! construction, program assembly, solving, interpretation, final answer)
//! and returns a heterogeneous, partially-stringified JSON payload. This
//! crate turns that payload into a stable internal shape and projects it
//! into the views the rest of the system consumes.
//!
//! ## Key Concepts
//!
//! - **Normalization**: [`normalize`] is total. Any input, including empty
//!   or malformed payloads, produces a [`WorkflowResult`]; parse failures
//!   degrade fields to their raw text form instead of erroring.
//! - **Tagged fields**: [`JsonField`] keeps the parsed-vs-raw distinction
//!   explicit for payload fields whose encoding is inconsistent upstream.
//! - **Stages**: [`Stage`] is the fixed, ordered list of pipeline phases;
//!   [`stage_views`] projects a result onto it for display and export.
//! - **History records**: [`HistoryRecord`] is the persisted summary of one
//!   past question/answer interaction.
//!
//! ## Architecture
//!
//! Pure functions and plain data only. Persistence lives in
//! `syllo-history`, transport in `syllo-client`, document rendering in
//! `syllo-export`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod field;
pub mod record;
pub mod stage;
pub mod workflow;

// Re-exports for convenience
pub use field::JsonField;
pub use record::{answer_summary, HistoryRecord, ReasoningStep, StepStatus};
pub use stage::{stage_views, Stage, StageView};
pub use workflow::{normalize, WorkflowResult};
