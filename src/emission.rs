//!
//! Emission families of the three observation channels
//!
//! The recursions are written once against `EmissionModel`; the two
//! families (categorical symbol tables, per-state gaussians) implement it.
//!
use crate::common::{State, Symbol, DEFAULT_TOLERANCE, N_CHANNELS};
use crate::errors::{HmmError, HmmResult};
use crate::prob::Prob;
use crate::sample::picker::{pick_gaussian, pick_with_prob};
use crate::table::StateTable;
use rand::prelude::*;

///
/// emission capability of a model
///
/// * `likelihood(&self, obs) -> StateTable`
///     Per-state likelihood of one observation triple, the product of the
///     three per-channel emission probabilities/densities.
///
/// * `sample_obs(&self, rng, state) -> Obs`
///     Draw one observation triple conditioned on the hidden state.
///
pub trait EmissionModel {
    /// One observation triple (symbol indices or real scalars).
    type Obs: Copy + std::fmt::Debug;
    ///
    /// Number of hidden states the emission tables are defined over.
    fn n_states(&self) -> usize;
    ///
    /// Per-state likelihood vector of the observation triple.
    fn likelihood(&self, obs: &Self::Obs) -> HmmResult<StateTable>;
    ///
    /// Draw one observation triple from the emission distribution of `state`.
    fn sample_obs<R: Rng>(&self, rng: &mut R, state: State) -> Self::Obs;
}

//
//
// Categorical family
//
//

///
/// Categorical emissions: per channel a `num_symbols x n_states` table,
/// column-stochastic (`table[s][j]` = P(symbol s | state j)).
///
#[derive(Debug, Clone)]
pub struct CategoricalEmission {
    /// tables[k][s] = per-state probability row of symbol s on channel k
    tables: [Vec<StateTable>; N_CHANNELS],
    n_states: usize,
}

impl CategoricalEmission {
    ///
    /// Construct from linear-space tables, one per channel, each
    /// `num_symbols_k` rows of `n_states` entries. Columns must sum to 1
    /// within `DEFAULT_TOLERANCE`.
    ///
    pub fn new(tables: [Vec<Vec<f64>>; N_CHANNELS]) -> HmmResult<CategoricalEmission> {
        CategoricalEmission::with_tolerance(tables, DEFAULT_TOLERANCE)
    }
    ///
    /// `new` with a caller-chosen normalization tolerance.
    ///
    pub fn with_tolerance(
        tables: [Vec<Vec<f64>>; N_CHANNELS],
        tolerance: f64,
    ) -> HmmResult<CategoricalEmission> {
        let n_states = tables
            .get(0)
            .and_then(|t| t.get(0))
            .map(|row| row.len())
            .unwrap_or(0);
        if n_states == 0 {
            return Err(HmmError::EmptyModel);
        }
        for (k, table) in tables.iter().enumerate() {
            if table.is_empty() {
                return Err(HmmError::DimensionMismatch {
                    what: format!("channel {} symbol table", k),
                    expected: 1,
                    found: 0,
                });
            }
            for (s, row) in table.iter().enumerate() {
                if row.len() != n_states {
                    return Err(HmmError::DimensionMismatch {
                        what: format!("channel {} symbol {} row", k, s),
                        expected: n_states,
                        found: row.len(),
                    });
                }
                for &v in row.iter() {
                    if v < 0.0 {
                        return Err(HmmError::NegativeEntry {
                            what: format!("channel {} symbol table", k),
                            value: v,
                        });
                    }
                }
            }
            // each column (fixed state) is a distribution over symbols
            for j in 0..n_states {
                let sum: f64 = table.iter().map(|row| row[j]).sum();
                if (sum - 1.0).abs() > tolerance {
                    return Err(HmmError::NotNormalized {
                        what: format!("channel {} emission column {}", k, j),
                        sum,
                    });
                }
            }
        }
        let tables = [
            to_prob_rows(&tables[0]),
            to_prob_rows(&tables[1]),
            to_prob_rows(&tables[2]),
        ];
        Ok(CategoricalEmission { tables, n_states })
    }
    ///
    /// Number of symbols of the channel
    ///
    pub fn n_symbols(&self, channel: usize) -> usize {
        self.tables[channel].len()
    }
}

fn to_prob_rows(table: &[Vec<f64>]) -> Vec<StateTable> {
    table.iter().map(|row| StateTable::from_probs(row)).collect()
}

impl EmissionModel for CategoricalEmission {
    type Obs = [Symbol; N_CHANNELS];

    fn n_states(&self) -> usize {
        self.n_states
    }
    ///
    /// table row lookup per channel, elementwise product across channels
    ///
    fn likelihood(&self, obs: &Self::Obs) -> HmmResult<StateTable> {
        let mut likelihood = StateTable::new(self.n_states, Prob::one());
        for (channel, table) in self.tables.iter().enumerate() {
            let symbol = obs[channel];
            let row = table.get(symbol).ok_or(HmmError::SymbolOutOfRange {
                channel,
                symbol,
                n_symbols: table.len(),
            })?;
            likelihood = &likelihood * row;
        }
        Ok(likelihood)
    }
    fn sample_obs<R: Rng>(&self, rng: &mut R, state: State) -> Self::Obs {
        let mut obs = [0; N_CHANNELS];
        for (channel, table) in self.tables.iter().enumerate() {
            // column of the channel table = distribution over symbols
            let choices: Vec<(Symbol, Prob)> = table
                .iter()
                .enumerate()
                .map(|(s, row)| (s, row[state]))
                .collect();
            obs[channel] = pick_with_prob(rng, &choices);
        }
        obs
    }
}

//
//
// Gaussian family
//
//

///
/// (mean, std) of one state's emission on one channel
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussParam {
    pub mean: f64,
    pub std_dev: f64,
}

impl GaussParam {
    pub fn new(mean: f64, std_dev: f64) -> GaussParam {
        GaussParam { mean, std_dev }
    }
}

///
/// Gaussian emissions: per channel one `GaussParam` per state.
///
#[derive(Debug, Clone)]
pub struct GaussianEmission {
    /// params[k][j] = (mean, std) of state j on channel k
    params: [Vec<GaussParam>; N_CHANNELS],
    n_states: usize,
}

impl GaussianEmission {
    ///
    /// Construct from per-channel per-state (mean, std) rows.
    /// Standard deviations must be finite and strictly positive.
    ///
    pub fn new(params: [Vec<GaussParam>; N_CHANNELS]) -> HmmResult<GaussianEmission> {
        let n_states = params[0].len();
        if n_states == 0 {
            return Err(HmmError::EmptyModel);
        }
        for (channel, channel_params) in params.iter().enumerate() {
            if channel_params.len() != n_states {
                return Err(HmmError::DimensionMismatch {
                    what: format!("channel {} gaussian params", channel),
                    expected: n_states,
                    found: channel_params.len(),
                });
            }
            for (state, param) in channel_params.iter().enumerate() {
                if !(param.std_dev > 0.0) || !param.std_dev.is_finite() {
                    return Err(HmmError::NonPositiveStd {
                        channel,
                        state,
                        value: param.std_dev,
                    });
                }
            }
        }
        Ok(GaussianEmission { params, n_states })
    }
}

///
/// normal pdf `N(x; mean, std)` as a log-space likelihood weight
///
/// ```text
/// log pdf = -log(std) - log(2 pi)/2 - (x - mean)^2 / (2 std^2)
/// ```
pub fn normal_density(x: f64, mean: f64, std_dev: f64) -> Prob {
    let z = (x - mean) / std_dev;
    let log_norm = std_dev.ln() + 0.5 * (2.0 * std::f64::consts::PI).ln();
    Prob::from_log_prob(-log_norm - 0.5 * z * z)
}

impl EmissionModel for GaussianEmission {
    type Obs = [f64; N_CHANNELS];

    fn n_states(&self) -> usize {
        self.n_states
    }
    ///
    /// normal pdf per state, elementwise product across channels
    ///
    fn likelihood(&self, obs: &Self::Obs) -> HmmResult<StateTable> {
        let mut likelihood = StateTable::new(self.n_states, Prob::one());
        for (channel, channel_params) in self.params.iter().enumerate() {
            let x = obs[channel];
            for (state, param) in channel_params.iter().enumerate() {
                likelihood[state] *= normal_density(x, param.mean, param.std_dev);
            }
        }
        Ok(likelihood)
    }
    fn sample_obs<R: Rng>(&self, rng: &mut R, state: State) -> Self::Obs {
        let mut obs = [0.0; N_CHANNELS];
        for (channel, channel_params) in self.params.iter().enumerate() {
            let param = channel_params[state];
            obs[channel] = pick_gaussian(rng, param.mean, param.std_dev);
        }
        obs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn two_state_tables() -> [Vec<Vec<f64>>; N_CHANNELS] {
        // channel 0 is informative, channels 1 and 2 are uniform
        [
            vec![vec![0.9, 0.1], vec![0.1, 0.9]],
            vec![vec![0.5, 0.5], vec![0.5, 0.5]],
            vec![vec![0.5, 0.5], vec![0.5, 0.5]],
        ]
    }

    #[test]
    fn categorical_likelihood_is_channel_product() {
        let emission = CategoricalEmission::new(two_state_tables()).unwrap();
        let l = emission.likelihood(&[0, 0, 1]).unwrap();
        assert_eq!(l.n_states(), 2);
        assert_abs_diff_eq!(l[0].to_value(), 0.9 * 0.5 * 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(l[1].to_value(), 0.1 * 0.5 * 0.5, epsilon = 1e-12);
    }
    #[test]
    fn categorical_symbol_out_of_range() {
        let emission = CategoricalEmission::new(two_state_tables()).unwrap();
        let err = emission.likelihood(&[2, 0, 0]).unwrap_err();
        assert_eq!(
            err,
            HmmError::SymbolOutOfRange {
                channel: 0,
                symbol: 2,
                n_symbols: 2,
            }
        );
    }
    #[test]
    fn categorical_rejects_unnormalized_column() {
        let mut tables = two_state_tables();
        tables[1][0][0] = 0.7; // column 0 of channel 1 now sums to 1.2
        let err = CategoricalEmission::new(tables).unwrap_err();
        match err {
            HmmError::NotNormalized { sum, .. } => {
                assert_abs_diff_eq!(sum, 1.2, epsilon = 1e-12);
            }
            _ => panic!("unexpected error {:?}", err),
        }
    }
    #[test]
    fn categorical_rejects_negative_entry() {
        let mut tables = two_state_tables();
        tables[2][0][1] = -0.5;
        tables[2][1][1] = 1.5;
        assert!(matches!(
            CategoricalEmission::new(tables),
            Err(HmmError::NegativeEntry { .. })
        ));
    }
    #[test]
    fn categorical_sample_respects_state_column() {
        // channel 0 emits symbol 0 with p=1 in state 0, symbol 1 with p=1 in state 1
        let tables = [
            vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            vec![vec![1.0, 1.0]],
            vec![vec![1.0, 1.0]],
        ];
        let emission = CategoricalEmission::new(tables).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        for _ in 0..20 {
            assert_eq!(emission.sample_obs(&mut rng, 0), [0, 0, 0]);
            assert_eq!(emission.sample_obs(&mut rng, 1), [1, 0, 0]);
        }
    }

    #[test]
    fn normal_density_standard() {
        // N(0; 0, 1) = 1/sqrt(2 pi)
        let d = normal_density(0.0, 0.0, 1.0);
        assert_abs_diff_eq!(d.to_value(), 0.3989422804014327, epsilon = 1e-12);
        // symmetric around the mean
        assert_abs_diff_eq!(
            normal_density(1.5, 1.0, 2.0).to_value(),
            normal_density(0.5, 1.0, 2.0).to_value(),
            epsilon = 1e-12
        );
    }
    #[test]
    fn gaussian_likelihood_peaks_at_mean_state() {
        let params = [
            vec![GaussParam::new(0.0, 1.0), GaussParam::new(5.0, 1.0)],
            vec![GaussParam::new(0.0, 10.0), GaussParam::new(0.0, 10.0)],
            vec![GaussParam::new(0.0, 10.0), GaussParam::new(0.0, 10.0)],
        ];
        let emission = GaussianEmission::new(params).unwrap();
        let l = emission.likelihood(&[0.0, 0.0, 0.0]).unwrap();
        assert!(l[0] > l[1]);
        let l = emission.likelihood(&[5.0, 0.0, 0.0]).unwrap();
        assert!(l[1] > l[0]);
    }
    #[test]
    fn gaussian_rejects_non_positive_std() {
        let params = [
            vec![GaussParam::new(0.0, 1.0)],
            vec![GaussParam::new(0.0, 0.0)],
            vec![GaussParam::new(0.0, 1.0)],
        ];
        assert_eq!(
            GaussianEmission::new(params).unwrap_err(),
            HmmError::NonPositiveStd {
                channel: 1,
                state: 0,
                value: 0.0,
            }
        );
    }
    #[test]
    fn gaussian_sample_tracks_state_mean() {
        let params = [
            vec![GaussParam::new(0.0, 0.01), GaussParam::new(100.0, 0.01)],
            vec![GaussParam::new(0.0, 0.01), GaussParam::new(0.0, 0.01)],
            vec![GaussParam::new(0.0, 0.01), GaussParam::new(0.0, 0.01)],
        ];
        let emission = GaussianEmission::new(params).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let obs = emission.sample_obs(&mut rng, 1);
        assert!((obs[0] - 100.0).abs() < 1.0);
        assert!(obs[1].abs() < 1.0);
    }
}
