//!
//!
//!

/// index of a hidden state (in `0..n_states`)
pub type State = usize;

/// index of a categorical observation symbol
pub type Symbol = usize;

///
/// number of observation channels of the model
///
pub const N_CHANNELS: usize = 3;

///
/// default tolerance when checking that a probability table sums to 1
///
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
