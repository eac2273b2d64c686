//! # Gleaner
//!
//! Two concurrent command-line utilities built on the same
//! fan-out/fan-in pattern: independent tasks pushed through a bounded
//! semaphore, joined once, then aggregated.
//!
//! ## Usage
//!
//! ```bash
//! gleaner organize <SOURCE> <OUTPUT>
//! gleaner wordfreq [--url URL] [--top N] [--format chart|json]
//! ```
//!
//! ## Modules
//!
//! - `config` - Defaults and per-command configuration types
//! - `error` - Unified error type for the library
//! - `organize` - Extension-keyed file organizing with concurrent copies
//! - `wordfreq` - Fetch, chunk, map, reduce, and rank word frequencies

pub mod config;
pub mod error;
pub mod organize;
pub mod wordfreq;
