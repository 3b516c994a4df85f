/*!
Configuration of a context.

All configuration for a context is contained within a [Config].
Most options are [ConfigOption]s, which pair a value with the bounds it may take.

```rust
# use otter_pup::config::Config;
let mut config = Config::default();

assert!(config.restart_probability.set(0.5).is_ok());
assert!(config.restart_probability.set(2.0).is_err());

config.restart.value = false;
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// Representation for the activity of a literal.
pub type Activity = f64;

/// Representation for a probability.
pub type Probability = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The amount added to the activity of each literal in a conflicting clause.
    pub activity_bump: ConfigOption<Activity>,

    /// The factor the activity of every literal is multiplied by after a conflict.
    pub activity_decay: ConfigOption<Activity>,

    /// Permit (randomised) restarts.
    pub restart: ConfigOption<bool>,

    /// The probability of a restart after the first conflict.
    pub restart_probability: ConfigOption<Probability>,

    /// The factor the restart probability is multiplied by after each restart.
    pub restart_decay: ConfigOption<Probability>,

    /// A restart probability below the floor is reset to [restart_reset](Config::restart_reset).
    pub restart_floor: ConfigOption<Probability>,

    /// The probability used in place of a probability below the floor.
    pub restart_reset: ConfigOption<Probability>,

    /// Restarts are disabled once the count of restarts exceeds the length of the trail by the slack.
    pub restart_slack: ConfigOption<usize>,

    /// The seed for the source of randomness.
    pub seed: ConfigOption<u64>,

    /// The time limit for a solve, if any.
    pub time_limit: Option<std::time::Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            activity_bump: ConfigOption {
                name: "activity_bump",
                min: 0.0,
                max: Activity::MAX,
                value: 1.0,
            },

            activity_decay: ConfigOption {
                name: "activity_decay",
                min: 0.0,
                max: 1.0,
                value: 0.95,
            },

            restart: ConfigOption {
                name: "restart",
                min: false,
                max: true,
                value: true,
            },

            restart_probability: ConfigOption {
                name: "restart_probability",
                min: 0.0,
                max: 1.0,
                value: 0.9,
            },

            restart_decay: ConfigOption {
                name: "restart_decay",
                min: 0.0,
                max: 1.0,
                value: 0.5,
            },

            restart_floor: ConfigOption {
                name: "restart_floor",
                min: 0.0,
                max: 1.0,
                value: 0.001,
            },

            restart_reset: ConfigOption {
                name: "restart_reset",
                min: 0.0,
                max: 1.0,
                value: 0.2,
            },

            restart_slack: ConfigOption {
                name: "restart_slack",
                min: 0,
                max: usize::MAX,
                value: 10,
            },

            seed: ConfigOption {
                name: "seed",
                min: 0,
                max: u64::MAX,
                value: 0,
            },

            time_limit: None,
        }
    }
}
