//! One philosopher's turn within a step.

use dp_agent::PhilosopherState;
use dp_core::{ModelConfig, PhilosopherId, RandomSource};
use dp_strategy::{World, attempt_acquire};

/// Run `who`'s state machine once.
///
/// Random draws: one `uniform()` while Thinking or Eating, none while
/// Hungry (strategies are deterministic).
pub fn take_turn<R: RandomSource>(
    who:    PhilosopherId,
    config: &ModelConfig,
    world:  &mut World<'_>,
    rng:    &mut R,
) {
    world.philosopher_mut(who).begin_turn();

    match world.philosopher(who).state {
        PhilosopherState::Thinking => {
            if rng.bernoulli(config.hungry_chance) {
                world.philosopher_mut(who).become_hungry();
            }
        }
        PhilosopherState::Hungry => {
            if attempt_acquire(config.strategy, who, world) {
                world.philosopher_mut(who).start_eating();
            }
        }
        PhilosopherState::Eating => {
            if rng.bernoulli(config.full_chance) {
                world.release_forks(who);
                world.philosopher_mut(who).finish_eating();
            }
        }
    }
}
