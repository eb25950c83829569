//! Match simulation: the minute loop, officials, phases, randomness and
//! the observer plumbing around them.

pub mod broadcast;
pub mod match_sim;
pub mod phase;
pub mod random;
pub mod referee;

#[cfg(test)]
pub(crate) mod test_support;

pub use broadcast::{Broadcast, MatchObserver};
pub use match_sim::MatchEngine;
pub use phase::MatchPhase;
pub use random::RandomSource;
pub use referee::{CardType, Foul, Referee};
