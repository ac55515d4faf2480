//!
//! Sampling hidden paths and observations from the model
//!

// struct to store the sampled states and observations
pub mod history;
pub use history::History;

// pick an element from list
pub mod picker;
use picker::pick_state;

use crate::emission::EmissionModel;
use crate::model::Hmm;
use log::trace;
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;

///
/// Public functions
///
impl<E: EmissionModel> Hmm<E> {
    ///
    /// Generate a hidden state path and its observations by ancestral
    /// sampling with the given rng (random number generator).
    ///
    /// State 0 is drawn from the initial distribution, each following
    /// state from the transition row of its predecessor, and each
    /// observation triple from the emission distribution of the
    /// transition's destination state.
    ///
    pub fn sample<R: Rng>(&self, rng: &mut R, length: usize) -> History<E::Obs> {
        let mut history = History::start(pick_state(rng, self.init()));
        for i in 0..length {
            let state = pick_state(rng, self.trans_row(history.last_state()));
            let observation = self.emission().sample_obs(rng, state);
            trace!("iter {} state {} obs {:?}", i, state, observation);
            history.push(state, observation);
        }
        history
    }
    ///
    /// `sample` with a rng seeded from the given seed.
    ///
    pub fn sample_from_seed(&self, length: usize, seed: u64) -> History<E::Obs> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        self.sample(&mut rng, length)
    }
}

//
// Tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{mock_gaussian, mock_identity_emission, mock_single_state, mock_sticky};
    use test_case::test_case;

    #[test_case(0, 0)]
    #[test_case(10, 0)]
    #[test_case(50, 7)]
    #[test_case(200, 42)]
    fn hmm_sample_lengths(length: usize, seed: u64) {
        let hmm = mock_sticky();
        let h = hmm.sample_from_seed(length, seed);
        assert_eq!(h.states().len(), length + 1);
        assert_eq!(h.observations().len(), length);
    }
    #[test]
    fn hmm_sample_deterministic_under_seed() {
        let hmm = mock_sticky();
        let h1 = hmm.sample_from_seed(50, 7);
        let h2 = hmm.sample_from_seed(50, 7);
        assert_eq!(h1.states(), h2.states());
        assert_eq!(h1.observations(), h2.observations());

        // another seed gives another path on a 50-step chain
        let h3 = hmm.sample_from_seed(50, 8);
        assert_ne!(h1.observations(), h3.observations());
    }
    #[test]
    fn hmm_sample_states_are_in_range() {
        let hmm = mock_sticky();
        let h = hmm.sample_from_seed(100, 3);
        for &s in h.states() {
            assert!(s < hmm.n_states());
        }
    }
    #[test]
    fn hmm_sample_observations_come_from_destination_state() {
        // channel 0 emits its state index with certainty, so every
        // observation identifies the destination of its transition
        let hmm = mock_identity_emission();
        let h = hmm.sample_from_seed(30, 5);
        for (i, obs) in h.observations().iter().enumerate() {
            assert_eq!(obs[0], h.states()[i + 1]);
        }
    }
    #[test]
    fn hmm_sample_single_state() {
        let hmm = mock_single_state();
        let h = hmm.sample_from_seed(20, 0);
        assert!(h.states().iter().all(|&s| s == 0));
    }
    #[test]
    fn hmm_sample_gaussian_observations() {
        let hmm = mock_gaussian();
        let h = hmm.sample_from_seed(20, 11);
        assert_eq!(h.observations().len(), 20);
        for obs in h.observations() {
            assert!(obs.iter().all(|x| x.is_finite()));
        }
    }
}
