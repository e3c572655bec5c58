//! ddmin: a minimizing delta-debugger core.
//!
//! Given an initial configuration known to exhibit an "interesting" property,
//! [`Ddmin::ddmin`] reduces it to a 1-minimal subsequence that still exhibits
//! that property — removing any single remaining unit makes it stop being
//! interesting. The interesting property is supplied by the caller as an
//! [`Oracle`]; this crate never implements one itself.
//!
//! The three cooperating pieces are the [`OutcomeCache`] (never test the same
//! configuration twice), the strategy surface ([`splitter`], [`iterator`],
//! and the `subset_first` direction flag), and the [`Ddmin`] engine that
//! drives them. Build an engine with [`DdminBuilder`].

#![forbid(unsafe_code)]

pub mod cache;
pub mod engine;
pub mod error;
pub mod iterator;
pub mod logging;
pub mod oracle;
pub mod outcome;
pub mod slice;
pub mod splitter;

pub use cache::{HashMapCache, OutcomeCache};
pub use engine::{Ddmin, DdminBuilder, SplitFn};
pub use error::DdminError;
pub use iterator::{IndexIterFn, backward, forward};
pub use logging::{Emitter, JsonlEmitter, LogEntry, LogLevel, NullEmitter};
pub use oracle::{Oracle, StringWireOracle};
pub use outcome::{ConfigId, Outcome};
pub use slice::Slice;
pub use splitter::balanced;
