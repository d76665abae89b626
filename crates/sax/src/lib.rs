//! # saxfreq-sax
//!
//! Symbolic Aggregate approXimation (SAX) of a univariate time series,
//! with symbol-frequency aggregation.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────┐   ┌─────────────┐   ┌─────────────┐   ┌───────────┐
//!  │ segment  │──▶│ z_normalize │──▶│  symbolize  │──▶│ aggregate │
//!  │  (PAA)   │   │             │   │(breakpoints)│   │  (counts) │
//!  └──────────┘   └─────────────┘   └─────────────┘   └───────────┘
//! ```
//!
//! Every stage is a pure function of its inputs; nothing is cached
//! between runs. [`pipeline::run`] composes the stages end to end,
//! prepending ARMA(1,1) series generation from `saxfreq-arma`.
//!
//! # Quick start
//!
//! ```rust
//! use saxfreq_arma::Arma11Params;
//! use saxfreq_sax::pipeline;
//!
//! let params = Arma11Params::new(0.5, 0.3, 1.0, 100);
//! let run = pipeline::run_seeded(&params, 10, 4, Some(42)).unwrap();
//! assert_eq!(run.series().len(), 100);
//! assert_eq!(run.frequency().total(), 10);
//! ```

pub mod discretize;
pub mod error;
pub mod frequency;
pub mod normalize;
pub mod paa;
pub mod pipeline;

pub use discretize::{breakpoints, symbol_letter, symbolize};
pub use error::{PipelineError, SaxError};
pub use frequency::{SymbolFrequency, aggregate};
pub use normalize::z_normalize;
pub use paa::segment;
pub use pipeline::SaxRun;
