//!
//! Backward algorithm definitions
//!
use crate::emission::EmissionModel;
use crate::errors::{HmmError, HmmResult};
use crate::model::Hmm;
use crate::result::MessageResult;
use crate::table::StateTable;
use log::trace;

///
/// Backward Algorithm
///
impl<E: EmissionModel> Hmm<E> {
    ///
    /// Run Backward algorithm to the observations
    ///
    /// `b_t[j]` proportional to P(`x[t:] = x[t],...,x[T-1]` | in state j at time t)
    ///
    /// The final row is the uniform constant vector and every stored row
    /// is renormalized to sum 1. The absolute scale of the rows is not
    /// meaningful on its own; the smoother renormalizes the product with
    /// the forward rows anyway.
    ///
    pub fn backward(&self, observations: &[E::Obs]) -> HmmResult<MessageResult> {
        let mut tables = Vec::with_capacity(observations.len() + 1);
        tables.push(self.b_init());
        // feed the observations backward
        for (i, obs) in observations.iter().enumerate().rev() {
            trace!("backward step {}", i);
            let table = self.b_step(i, obs, tables.last().unwrap())?;
            tables.push(table);
        }
        // reverse the vector, to order the tables along with time
        // i.e. tables[t] corresponds to the message at time t
        tables.reverse();
        Ok(MessageResult { tables })
    }
    ///
    /// Create the last table for Backward algorithm
    ///
    /// ```text
    /// b_T[j] = 1/n
    /// ```
    ///
    fn b_init(&self) -> StateTable {
        StateTable::uniform(self.n_states())
    }
    ///
    /// Calculate the table from the next table
    /// for Backward algorithm
    ///
    /// ```text
    /// v[i] = \sum_{j} A[i][j] e(x[t])[j] b_t+1[j]
    /// b_t  = v / sum(v)
    /// ```
    ///
    fn b_step(&self, i: usize, obs: &E::Obs, next_table: &StateTable) -> HmmResult<StateTable> {
        let emission = self.likelihood(obs)?;
        let n = self.n_states();
        let mut v = StateTable::zero(n);
        for k in 0..n {
            v[k] = (0..n)
                .map(|j| self.trans_prob(k, j) * emission[j] * next_table[j])
                .sum();
        }
        v.normalized()
            .ok_or(HmmError::ZeroLikelihood { position: i })
    }
}

//
// Tests
//
