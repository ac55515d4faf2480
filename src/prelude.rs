//!
//! globally-available parts
//!
pub use crate::common::{State, Symbol, N_CHANNELS};
pub use crate::emission::{CategoricalEmission, EmissionModel, GaussParam, GaussianEmission};
pub use crate::errors::{HmmError, HmmResult};
pub use crate::model::Hmm;
pub use crate::prob::{lp, p, Prob};
pub use crate::result::{HmmOutput, MessageResult, ViterbiResult};
pub use crate::sample::History;
pub use crate::table::StateTable;
