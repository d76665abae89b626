//! # saxfreq-arma
//!
//! ARMA(1,1) synthetic time-series generation.
//!
//! The process is
//!
//! ```text
//! x_t = phi * x_{t-1} + eps_t + theta * eps_{t-1},   eps_t ~ N(0, sigma)
//! ```
//!
//! with cold-start initial conditions: the lagged observation and lagged
//! innovation before `t = 0` are zero. With a fixed seed the returned
//! series is therefore exactly the first `n` values of the recursion,
//! reproducible across runs.
//!
//! # Quick start
//!
//! ```rust
//! use saxfreq_arma::{Arma11Params, generate_seeded};
//!
//! let params = Arma11Params::new(0.5, 0.3, 1.0, 100);
//! let series = generate_seeded(&params, Some(42)).unwrap();
//! assert_eq!(series.len(), 100);
//! ```

mod error;
mod generate;
mod params;

pub use error::ArmaError;
pub use generate::{generate, generate_seeded};
pub use params::Arma11Params;
