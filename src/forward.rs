//!
//! Forward algorithm definitions
//!
use crate::emission::EmissionModel;
use crate::errors::{HmmError, HmmResult};
use crate::model::Hmm;
use crate::prob::Prob;
use crate::result::MessageResult;
use crate::table::StateTable;
use log::trace;

// wrappers and exposed functions
impl<E: EmissionModel> Hmm<E> {
    ///
    /// Run Forward algorithm to the observations
    ///
    /// `f_t[j]` = P(in state j at time t | `x[:t] = x[0],...,x[t-1]`)
    ///
    /// Every row is renormalized to sum 1, which keeps long sequences away
    /// from underflow at the cost of the absolute sequence likelihood (the
    /// step normalizers are discarded; accumulating their logs would be
    /// the extension point for model evidence).
    ///
    pub fn forward(&self, observations: &[E::Obs]) -> HmmResult<MessageResult> {
        let mut tables = Vec::with_capacity(observations.len() + 1);
        tables.push(self.f_init());
        for (i, obs) in observations.iter().enumerate() {
            trace!("forward step {}", i);
            let table = self.f_step(i, obs, tables.last().unwrap())?;
            tables.push(table);
        }
        Ok(MessageResult { tables })
    }
    ///
    /// Create the first table for Forward algorithm
    ///
    /// ```text
    /// f_0[j] = pi[j]
    /// ```
    ///
    fn f_init(&self) -> StateTable {
        self.init().clone()
    }
    ///
    /// Calculate the table from the previous table
    /// for Forward algorithm
    ///
    /// ```text
    /// v[j]   = e(x[t])[j] * \sum_{i} A[i][j] f_t[i]
    /// f_t+1  = v / sum(v)
    /// ```
    ///
    fn f_step(&self, i: usize, obs: &E::Obs, prev_table: &StateTable) -> HmmResult<StateTable> {
        let emission = self.likelihood(obs)?;
        let n = self.n_states();
        let mut v = StateTable::zero(n);
        for j in 0..n {
            let from_prev: Prob = (0..n).map(|k| self.trans_prob(k, j) * prev_table[k]).sum();
            v[j] = emission[j] * from_prev;
        }
        v.normalized()
            .ok_or(HmmError::ZeroLikelihood { position: i })
    }
}

//
// Tests
//
