//! Generic structures, not specific to a solve.

mod minimal_pcg;
pub use minimal_pcg::MinimalPCG32;
