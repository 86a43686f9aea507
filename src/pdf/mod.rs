//! PDF rendering for student reports.
//!
//! # Responsibilities
//! - Turn a fetched `StudentRecord` into a fixed-layout PDF byte stream
//! - Derive the download filename and content length
//!
//! # Design Decisions
//! - One page, fixed A4 layout, builtin Helvetica faces; no font assets
//!   to ship or load at runtime.
//! - Rendering never legitimately fails for a populated record; the error
//!   type exists for the pipeline contract and wraps the PDF library.

pub mod report;

pub use report::{render_student_report, RenderError, RenderedDocument};
