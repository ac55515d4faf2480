//!
//! Forward-backward smoothing definitions
//!
use crate::emission::EmissionModel;
use crate::errors::{HmmError, HmmResult};
use crate::model::Hmm;
use crate::result::{HmmOutput, MessageResult};

impl<E: EmissionModel> Hmm<E> {
    ///
    /// Compute the smoothing (posterior) distribution over states at every
    /// time, given the whole observation sequence
    ///
    /// ```text
    /// post_t = (f_t . b_t) / sum(f_t . b_t)
    /// ```
    ///
    /// where `f` and `b` are the forward and backward messages over the
    /// same observations.
    ///
    pub fn smooth(&self, observations: &[E::Obs]) -> HmmResult<MessageResult> {
        Ok(self.run(observations)?.posterior)
    }
    ///
    /// Run forward, backward, and their combination in one call, returning
    /// all three.
    ///
    pub fn run(&self, observations: &[E::Obs]) -> HmmResult<HmmOutput> {
        let forward = self.forward(observations)?;
        let backward = self.backward(observations)?;
        let posterior = combine(&forward, &backward)?;
        Ok(HmmOutput {
            forward,
            backward,
            posterior,
        })
    }
}

///
/// rowwise normalized product of forward and backward messages
///
fn combine(forward: &MessageResult, backward: &MessageResult) -> HmmResult<MessageResult> {
    let tables = forward
        .iter()
        .zip(backward.iter())
        .enumerate()
        .map(|(t, (f, b))| {
            (f * b)
                .normalized()
                .ok_or(HmmError::ZeroLikelihood { position: t })
        })
        .collect::<HmmResult<Vec<_>>>()?;
    Ok(MessageResult { tables })
}

//
// Tests
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{mock_single_state, mock_sticky};

    #[test]
    fn hmm_smooth_rows_sum_to_one() {
        let hmm = mock_sticky();
        let r = hmm.smooth(&[[0, 0, 0], [1, 0, 1], [0, 1, 0]]).unwrap();
        assert_eq!(r.n_observations(), 3);
        for table in r.iter() {
            assert_abs_diff_eq!(table.sum().to_value(), 1.0, epsilon = 1e-9);
        }
    }
    #[test]
    fn hmm_smooth_empty_observations_equals_init() {
        let hmm = mock_sticky();
        let r = hmm.smooth(&[]).unwrap();
        assert_eq!(r.tables.len(), 1);
        for (j, q) in r.table(0).iter().enumerate() {
            assert_abs_diff_eq!(
                q.to_value(),
                hmm.init()[j].to_value(),
                epsilon = 1e-12
            );
        }
    }
    #[test]
    fn hmm_smooth_uses_future_observations() {
        // the filtering row at t=1 only sees [0, 1]; the smoothing row
        // also sees the trailing ones and should lean further to state 1
        let hmm = mock_sticky();
        let obs = [[0, 0, 0], [1, 0, 0], [1, 0, 0], [1, 0, 0]];
        let out = hmm.run(&obs).unwrap();
        assert!(out.posterior.table(1)[1] > out.forward.table(1)[1]);
    }
    #[test]
    fn hmm_smooth_single_state_is_constant() {
        let hmm = mock_single_state();
        let r = hmm.smooth(&[[0, 0, 0], [1, 1, 1]]).unwrap();
        for table in r.iter() {
            assert_abs_diff_eq!(table[0].to_value(), 1.0, epsilon = 1e-12);
        }
    }
    #[test]
    fn hmm_run_bundles_consistent_lengths() {
        let hmm = mock_sticky();
        let out = hmm.run(&[[0, 0, 0], [1, 1, 1]]).unwrap();
        assert_eq!(out.n_observations(), 2);
        assert_eq!(out.forward.tables.len(), 3);
        assert_eq!(out.backward.tables.len(), 3);
        assert_eq!(out.posterior.tables.len(), 3);
    }
}
