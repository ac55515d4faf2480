use crate::common::State;
use crate::prob::Prob;
use crate::table::StateTable;
use rand::prelude::*;
use rand_distr::Normal;

///
/// pick randomly from the choices with its own probability.
///
pub fn pick_with_prob<R: Rng, T: Copy>(rng: &mut R, choices: &[(T, Prob)]) -> T {
    choices
        .choose_weighted(rng, |item| item.1.to_value())
        .unwrap()
        .0
}

///
/// Pick a state from a distribution over states: the drawn index is the
/// first whose cumulative weight reaches the uniform draw.
///
pub fn pick_state<R: Rng>(rng: &mut R, dist: &StateTable) -> State {
    let choices: Vec<(State, Prob)> = dist.iter().enumerate().map(|(i, &p)| (i, p)).collect();
    pick_with_prob(rng, &choices)
}

///
/// Draw one value from a normal distribution with the given parameters.
///
pub fn pick_gaussian<R: Rng>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    // std > 0 is checked at model construction
    Normal::new(mean, std_dev).unwrap().sample(rng)
}
