//!
//! Viterbi algorithm definitions
//!
use crate::common::State;
use crate::emission::EmissionModel;
use crate::errors::{HmmError, HmmResult};
use crate::model::Hmm;
use crate::result::ViterbiResult;
use crate::table::StateTable;
use log::trace;

impl<E: EmissionModel> Hmm<E> {
    ///
    /// Run Viterbi algorithm to the observations, computing the single
    /// most probable hidden state path
    ///
    /// ```text
    /// score_0[j]   = pi[j]
    /// cand[i]      = score_t[i] * A[i][j] * e(x[t])[j]
    /// bp_t+1[j]    = argmax_i cand[i]
    /// score_t+1[j] = max_i cand[i]      (then renormalized)
    /// ```
    ///
    /// The score row is renormalized after every step; this scales every
    /// entry equally, so the argmax path is unchanged while long
    /// sequences stay away from underflow. All argmax ties (per step and
    /// at termination) resolve to the lowest state index.
    ///
    /// Without observations the path degenerates to `[argmax(pi)]`.
    ///
    pub fn viterbi(&self, observations: &[E::Obs]) -> HmmResult<ViterbiResult> {
        let n = self.n_states();
        let mut tables = Vec::with_capacity(observations.len() + 1);
        // best precursor state per (time, state)
        let mut backpointers: Vec<Vec<State>> = Vec::with_capacity(observations.len());
        tables.push(self.init().clone());
        for (i, obs) in observations.iter().enumerate() {
            trace!("viterbi step {}", i);
            let emission = self.likelihood(obs)?;
            let prev_table = tables.last().unwrap();
            let mut scores = StateTable::zero(n);
            let mut bp = vec![0; n];
            for j in 0..n {
                let mut best: State = 0;
                let mut best_score = prev_table[0] * self.trans_prob(0, j) * emission[j];
                for k in 1..n {
                    let cand = prev_table[k] * self.trans_prob(k, j) * emission[j];
                    // strict comparison keeps the lowest index on ties
                    if cand > best_score {
                        best = k;
                        best_score = cand;
                    }
                }
                bp[j] = best;
                scores[j] = best_score;
            }
            let scores = scores
                .normalized()
                .ok_or(HmmError::ZeroLikelihood { position: i })?;
            tables.push(scores);
            backpointers.push(bp);
        }
        // backtrack from the best final state
        let last = observations.len();
        let mut path = vec![0; last + 1];
        path[last] = tables[last].argmax();
        for t in (0..last).rev() {
            path[t] = backpointers[t][path[t + 1]];
        }
        Ok(ViterbiResult { path, tables })
    }
}

//
// Tests
//
