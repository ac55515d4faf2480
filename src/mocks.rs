//!
//! Mock models for testing
//!
use crate::emission::{CategoricalEmission, GaussParam, GaussianEmission};
use crate::model::Hmm;

///
/// informative 2-symbol channel: symbol k is likely in state k
///
pub fn sticky_channel() -> Vec<Vec<f64>> {
    vec![vec![0.9, 0.1], vec![0.1, 0.9]]
}

///
/// uninformative 2-symbol channel
///
pub fn neutral_channel() -> Vec<Vec<f64>> {
    vec![vec![0.5, 0.5], vec![0.5, 0.5]]
}

///
/// Two sticky states with one informative channel: `pi=[0.5,0.5]`,
/// self-transition 0.9, channel 0 reveals the state with p=0.9.
///
pub fn mock_sticky() -> Hmm<CategoricalEmission> {
    let emission =
        CategoricalEmission::new([sticky_channel(), neutral_channel(), neutral_channel()])
            .unwrap();
    Hmm::new(&[0.5, 0.5], &[vec![0.9, 0.1], vec![0.1, 0.9]], emission).unwrap()
}

///
/// Fully symmetric two-state model; every inference quantity is tied.
///
pub fn mock_uniform() -> Hmm<CategoricalEmission> {
    let emission =
        CategoricalEmission::new([neutral_channel(), neutral_channel(), neutral_channel()])
            .unwrap();
    Hmm::new(&[0.5, 0.5], &[vec![0.5, 0.5], vec![0.5, 0.5]], emission).unwrap()
}

///
/// Degenerate single-state model.
///
pub fn mock_single_state() -> Hmm<CategoricalEmission> {
    let channel = || vec![vec![0.7], vec![0.3]];
    let emission = CategoricalEmission::new([channel(), channel(), channel()]).unwrap();
    Hmm::new(&[1.0], &[vec![1.0]], emission).unwrap()
}

///
/// Like `mock_sticky`, but channel 0 carries a third symbol that no state
/// can emit.
///
pub fn mock_with_impossible_symbol() -> Hmm<CategoricalEmission> {
    let channel0 = vec![vec![0.9, 0.1], vec![0.1, 0.9], vec![0.0, 0.0]];
    let emission =
        CategoricalEmission::new([channel0, neutral_channel(), neutral_channel()]).unwrap();
    Hmm::new(&[0.5, 0.5], &[vec![0.9, 0.1], vec![0.1, 0.9]], emission).unwrap()
}

///
/// Channel 0 emits the state index with certainty; sampled observations
/// reveal the hidden path exactly.
///
pub fn mock_identity_emission() -> Hmm<CategoricalEmission> {
    let channel0 = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    let emission =
        CategoricalEmission::new([channel0, neutral_channel(), neutral_channel()]).unwrap();
    Hmm::new(&[0.5, 0.5], &[vec![0.9, 0.1], vec![0.1, 0.9]], emission).unwrap()
}

///
/// Two-state gaussian model; channel 0 separates the states (means 0 and
/// 5), the other channels are wide and uninformative.
///
pub fn mock_gaussian() -> Hmm<GaussianEmission> {
    let informative = vec![GaussParam::new(0.0, 1.0), GaussParam::new(5.0, 1.0)];
    let wide = || vec![GaussParam::new(0.0, 5.0), GaussParam::new(0.0, 5.0)];
    let emission = GaussianEmission::new([informative, wide(), wide()]).unwrap();
    Hmm::new(&[0.5, 0.5], &[vec![0.9, 0.1], vec![0.1, 0.9]], emission).unwrap()
}
