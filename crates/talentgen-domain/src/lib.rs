//! Talentgen Domain Layer
//!
//! This crate contains the core vocabulary for the recruitment content
//! pipeline. It has ZERO external dependencies and defines the fundamental
//! value objects and trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Completion**: free-form text returned by an LLM call
//! - **Experience Level**: the seniority vocabulary used across job postings
//! - **Provider**: the injected capability that turns a prompt into a completion
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - No external crate dependencies
//! - Pure business vocabulary only
//! - Infrastructure implementations live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod level;
pub mod traits;

// Re-exports for convenience
pub use level::ExperienceLevel;
