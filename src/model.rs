//!
//! Definition of the three-channel hidden markov model
//!
use crate::common::{State, DEFAULT_TOLERANCE};
use crate::emission::EmissionModel;
use crate::errors::{HmmError, HmmResult};
use crate::prob::Prob;
use crate::table::StateTable;

///
/// Hidden markov model over `n_states` discrete states, observed through
/// three conditionally independent channels.
///
/// The model is immutable after construction; every inference call takes
/// `&self` and allocates only its own outputs, so one model can be shared
/// across any number of concurrent calls.
///
#[derive(Debug, Clone)]
pub struct Hmm<E: EmissionModel> {
    /// initial state distribution
    init: StateTable,
    /// transition rows, `trans[i][j]` = P(next = j | current = i)
    trans: Vec<StateTable>,
    /// per-channel emission parameters of the active family
    emission: E,
}

impl<E: EmissionModel> Hmm<E> {
    ///
    /// Build a model from linear-space parameters, validating that `init`
    /// and every transition row are probability distributions (within
    /// `DEFAULT_TOLERANCE`) and that all dimensions agree.
    ///
    pub fn new(init: &[f64], trans: &[Vec<f64>], emission: E) -> HmmResult<Hmm<E>> {
        Hmm::with_tolerance(init, trans, emission, DEFAULT_TOLERANCE)
    }
    ///
    /// `new` with a caller-chosen normalization tolerance.
    ///
    pub fn with_tolerance(
        init: &[f64],
        trans: &[Vec<f64>],
        emission: E,
        tolerance: f64,
    ) -> HmmResult<Hmm<E>> {
        let n_states = init.len();
        if n_states == 0 {
            return Err(HmmError::EmptyModel);
        }
        check_distribution("initial distribution", init, tolerance)?;
        if trans.len() != n_states {
            return Err(HmmError::DimensionMismatch {
                what: "transition matrix".to_string(),
                expected: n_states,
                found: trans.len(),
            });
        }
        for (i, row) in trans.iter().enumerate() {
            if row.len() != n_states {
                return Err(HmmError::DimensionMismatch {
                    what: format!("transition row {}", i),
                    expected: n_states,
                    found: row.len(),
                });
            }
            check_distribution(&format!("transition row {}", i), row, tolerance)?;
        }
        if emission.n_states() != n_states {
            return Err(HmmError::DimensionMismatch {
                what: "emission tables".to_string(),
                expected: n_states,
                found: emission.n_states(),
            });
        }
        Ok(Hmm {
            init: StateTable::from_probs(init),
            trans: trans.iter().map(|row| StateTable::from_probs(row)).collect(),
            emission,
        })
    }
    ///
    /// Return the number of hidden states
    ///
    pub fn n_states(&self) -> usize {
        self.init.n_states()
    }
    ///
    /// Initial state distribution
    ///
    pub fn init(&self) -> &StateTable {
        &self.init
    }
    ///
    /// Transition distribution out of state `i`
    ///
    pub fn trans_row(&self, i: State) -> &StateTable {
        &self.trans[i]
    }
    ///
    /// Transition probability `P(next = j | current = i)`
    ///
    pub fn trans_prob(&self, i: State, j: State) -> Prob {
        self.trans[i][j]
    }
    ///
    /// Emission parameters of the model
    ///
    pub fn emission(&self) -> &E {
        &self.emission
    }
    ///
    /// Per-state likelihood of one observation triple
    ///
    pub fn likelihood(&self, obs: &E::Obs) -> HmmResult<StateTable> {
        self.emission.likelihood(obs)
    }
}

///
/// entries non-negative and summing to 1 within tolerance
///
fn check_distribution(what: &str, values: &[f64], tolerance: f64) -> HmmResult<()> {
    for &v in values.iter() {
        if v < 0.0 {
            return Err(HmmError::NegativeEntry {
                what: what.to_string(),
                value: v,
            });
        }
    }
    let sum: f64 = values.iter().sum();
    if (sum - 1.0).abs() > tolerance {
        return Err(HmmError::NotNormalized {
            what: what.to_string(),
            sum,
        });
    }
    Ok(())
}

impl<E: EmissionModel> std::fmt::Display for Hmm<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "n_states: {}", self.n_states())?;
        writeln!(f, "init:")?;
        write!(f, "{}", self.init)?;
        for (i, row) in self.trans.iter().enumerate() {
            writeln!(f, "trans[{}]:", i)?;
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}
