//! crema-util - Core utilities and foundation types shared across the Crema
//! compiler crates.
//!
//! This crate provides the ambient infrastructure that `crema-ast`,
//! `crema-sem`, `crema-ir`, and `crema-drv` all build on:
//!
//! - [`symbol`] - interned identifiers (`Symbol`) with O(1) equality
//! - [`span`] - source locations (`Span`, `FileId`) and the `SourceMap`
//! - [`index_vec`] - typed index vectors (`IndexVec<I, T>`, `Idx`)
//! - [`def_id`] - globally unique definition identifiers (`DefId`)
//! - [`diagnostic`] - error/warning reporting (`Diagnostic`, `Handler`)
//! - [`error`] - infrastructure error types for this crate's own operations
//!
//! None of these are compiler-specific; they are the foundation every phase
//! of the pipeline is built on top of.

pub mod def_id;
pub mod diagnostic;
pub mod error;
pub mod index_vec;
pub mod span;
pub mod symbol;

pub use def_id::{DefId, DefIdGenerator};
pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{DiagnosticError, IndexVecError, SourceMapError, SymbolError};
pub use index_vec::{Idx, IndexVec};
pub use span::{FileId, SourceFile, SourceMap, Span};
pub use symbol::Symbol;
