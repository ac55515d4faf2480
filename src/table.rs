//!
//! Table definitions
//!
//! ## StateTable
//!
//! the prob assigned for each hidden state at one time step
//!
//! a row of the filtering/backward/smoothing matrices, or one row of the
//! viterbi score trellis
//!
use crate::common::State;
use crate::prob::Prob;
use std::ops::{Index, IndexMut, Mul};

/// Vector of `Prob` indexed by hidden state.
///
/// Rows produced by the recursions are normalized to sum 1; intermediate
/// rows (emission likelihoods, unnormalized messages) need not be.
#[derive(Debug, Clone, PartialEq)]
pub struct StateTable(Vec<Prob>);

/// Constructors of StateTable
impl StateTable {
    pub fn new(n_states: usize, value: Prob) -> Self {
        StateTable(vec![value; n_states])
    }
    pub fn zero(n_states: usize) -> Self {
        StateTable::new(n_states, Prob::zero())
    }
    ///
    /// constant table `1/n` for all states
    ///
    pub fn uniform(n_states: usize) -> Self {
        assert!(n_states > 0);
        StateTable::new(n_states, Prob::from_prob(1.0 / n_states as f64))
    }
    ///
    /// from linear-space values
    ///
    pub fn from_probs(values: &[f64]) -> Self {
        StateTable(values.iter().map(|&v| Prob::from_prob(v)).collect())
    }
}

/// Accessors of StateTable
impl StateTable {
    /// Get the number of hidden states in the table
    pub fn n_states(&self) -> usize {
        self.0.len()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Prob> + '_ {
        self.0.iter()
    }
    /// Total probability mass of the table
    pub fn sum(&self) -> Prob {
        self.0.iter().sum()
    }
    /// Convert to linear-space values
    pub fn to_values(&self) -> Vec<f64> {
        self.0.iter().map(|p| p.to_value()).collect()
    }
    ///
    /// Divide every entry by the total mass so the table sums to 1.
    /// Returns `None` if the table has zero mass.
    ///
    pub fn normalized(&self) -> Option<StateTable> {
        let sum = self.sum();
        if sum.is_zero() {
            None
        } else {
            Some(StateTable(self.0.iter().map(|&p| p / sum).collect()))
        }
    }
    ///
    /// Index of the largest entry.
    /// Ties resolve to the lowest state index.
    ///
    pub fn argmax(&self) -> State {
        assert!(!self.0.is_empty());
        let mut best: State = 0;
        for (i, &p) in self.0.iter().enumerate().skip(1) {
            if p > self.0[best] {
                best = i;
            }
        }
        best
    }
    ///
    /// max entry and its index, with the same lowest-index tie rule
    ///
    pub fn max(&self) -> (State, Prob) {
        let i = self.argmax();
        (i, self.0[i])
    }
}

impl Index<State> for StateTable {
    type Output = Prob;
    fn index(&self, state: State) -> &Prob {
        &self.0[state]
    }
}

impl IndexMut<State> for StateTable {
    fn index_mut(&mut self, state: State) -> &mut Prob {
        &mut self.0[state]
    }
}

// Mul (elementwise)
impl<'a, 'b> Mul<&'a StateTable> for &'b StateTable {
    type Output = StateTable;
    fn mul(self, other: &'a StateTable) -> StateTable {
        assert_eq!(self.n_states(), other.n_states());
        StateTable(
            self.0
                .iter()
                .zip(other.0.iter())
                .map(|(&a, &b)| a * b)
                .collect(),
        )
    }
}

impl std::fmt::Display for StateTable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            writeln!(f, "{}\t{}", i, p)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prob::p;

    #[test]
    fn table_uniform_sums_to_one() {
        let t = StateTable::uniform(4);
        assert_abs_diff_eq!(t.sum().to_value(), 1.0, epsilon = 1e-12);
        for q in t.iter() {
            assert_abs_diff_eq!(q.to_value(), 0.25, epsilon = 1e-12);
        }
    }
    #[test]
    fn table_normalized() {
        let t = StateTable::from_probs(&[0.2, 0.2, 0.4]);
        let n = t.normalized().unwrap();
        assert_abs_diff_eq!(n[0].to_value(), 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(n[1].to_value(), 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(n[2].to_value(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(n.sum().to_value(), 1.0, epsilon = 1e-12);
    }
    #[test]
    fn table_normalized_zero_mass() {
        let t = StateTable::zero(3);
        assert!(t.normalized().is_none());
    }
    #[test]
    fn table_argmax_ties_to_lowest_index() {
        let t = StateTable::from_probs(&[0.1, 0.4, 0.4, 0.1]);
        assert_eq!(t.argmax(), 1);
        let t = StateTable::from_probs(&[0.5, 0.5]);
        assert_eq!(t.argmax(), 0);
        let t = StateTable::zero(3);
        assert_eq!(t.argmax(), 0);
        let t = StateTable::from_probs(&[0.0, 0.0, 1.0]);
        assert_eq!(t.argmax(), 2);
    }
    #[test]
    fn table_elementwise_mul() {
        let a = StateTable::from_probs(&[0.5, 0.2, 0.0]);
        let b = StateTable::from_probs(&[0.4, 0.5, 0.9]);
        let c = &a * &b;
        assert_abs_diff_eq!(c[0].to_value(), 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(c[1].to_value(), 0.1, epsilon = 1e-12);
        assert!(c[2].is_zero());
    }
    #[test]
    fn table_indexing() {
        let mut t = StateTable::zero(2);
        t[1] = p(0.3);
        assert!(t[0].is_zero());
        assert_abs_diff_eq!(t[1], p(0.3));
    }
}
