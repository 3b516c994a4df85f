use crate::{config::Config, generic::MinimalPCG32};

use super::GenericContext;

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration.
    ///
    /// The source of randomness is seeded from [Config::seed].
    pub fn from_config(config: Config) -> Self {
        let rng = MinimalPCG32::from_u64_seed(config.seed.value);
        Self::from_config_and_rng(config, rng)
    }
}
