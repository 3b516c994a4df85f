/*!
Randomised restarts.

After each conflict, a restart happens with some probability.
A restart returns the trail to the baseline fixed by [bootstrap](crate::procedures::bootstrap), and so undoes every decision.
Learnt clauses, activity, and watches are kept.

The probability of a restart begins at [restart_probability](crate::config::Config::restart_probability).
After each restart:
- The probability is multiplied by [restart_decay](crate::config::Config::restart_decay).
- A probability below [restart_floor](crate::config::Config::restart_floor) is reset to [restart_reset](crate::config::Config::restart_reset).
- Once the count of restarts exceeds the length of the trail by more than [restart_slack](crate::config::Config::restart_slack), the probability is set to zero, and no further restart happens.

As a restart only happens after a conflict, and the final condition eventually prevents any restart, restarts do not prevent a solve from ending.
*/

use crate::{
    config::{Config, Probability},
    context::GenericContext,
    misc::log::targets::{self},
};

/// The state of the restart policy, through a solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RestartPolicy {
    /// The probability of a restart after the next conflict.
    pub probability: Probability,
}

impl RestartPolicy {
    pub fn from_config(config: &Config) -> Self {
        RestartPolicy {
            probability: config.restart_probability.value,
        }
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Restarts with the current probability, returning true if a restart happened.
    ///
    /// For documentation, see [procedures::restart](crate::procedures::restart).
    pub fn maybe_restart(&mut self) -> bool {
        if !self.config.restart.value {
            return false;
        }

        let draw: Probability = self.rng.gen();
        if draw >= self.restart_policy.probability {
            return false;
        }

        self.trail.truncate(self.baseline.len());
        self.counters.restarts += 1;

        let probability = &mut self.restart_policy.probability;
        *probability *= self.config.restart_decay.value;
        if *probability < self.config.restart_floor.value {
            *probability = self.config.restart_reset.value;
        }
        if self.counters.restarts > self.trail.len() + self.config.restart_slack.value {
            *probability = 0.0;
        }

        log::debug!(target: targets::RESTART, "Restart {}, next with probability {}", self.counters.restarts, self.restart_policy.probability);

        true
    }
}
