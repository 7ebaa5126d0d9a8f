//! Talentgen Extract
//!
//! Best-effort recovery of structured data from LLM completions.
//!
//! # Overview
//!
//! Generation prompts instruct the model to return a single JSON object, but
//! completions routinely arrive wrapped in markdown fences, surrounded by
//! prose, or carrying minor syntax defects (trailing commas, literal newlines
//! inside string values). This crate coerces such text back into structured
//! data and signals failure distinctly from success, so callers can degrade
//! gracefully instead of propagating a raw parse error.
//!
//! # Architecture
//!
//! ```text
//! Completion text → fence stripping → object isolation → parse
//!                                                          ↘ repair steps → parse
//! ```
//!
//! # Key Features
//!
//! - **Fence Stripping**: Tolerates ```` ```json ```` wrappers
//! - **Prose Tolerance**: Isolates the outermost `{...}` from surrounding text
//! - **Ordered Repairs**: Each heuristic is a pure step, retried independently
//! - **Typed Failure**: Exactly one failure kind, carrying the raw text
//!
//! # Example Usage
//!
//! ```
//! use talentgen_extract::{extract, FieldSpec, OutputSchema};
//!
//! let schema = OutputSchema::new(vec![
//!     FieldSpec::text("description"),
//!     FieldSpec::text_list("requirements"),
//! ]);
//!
//! let completion = "Here is the JSON:\n{\"description\":\"Builds APIs\",}";
//! let extraction = extract(completion, &schema).unwrap();
//!
//! assert_eq!(extraction.value["description"], "Builds APIs");
//! assert_eq!(extraction.missing, vec!["requirements".to_string()]);
//! ```
//!
//! Extraction is a pure function of its input: no I/O, no shared state, safe
//! to call concurrently from any number of callers.

#![warn(missing_docs)]

mod error;
mod experience;
mod extract;
mod repair;
mod schema;

pub use error::ExtractError;
pub use experience::{normalize_experience_range, DEFAULT_EXPERIENCE_RANGE};
pub use extract::{extract, Extraction};
pub use schema::{FieldKind, FieldSpec, OutputSchema};
