//!
//! trihmm: exact inference and ancestral sampling for a discrete-time
//! hidden markov model observed through three independent channels
//!
pub mod backward;
pub mod common;
pub mod emission;
pub mod errors;
pub mod forward;
pub mod mocks;
pub mod model;
pub mod prelude;
pub mod prob;
pub mod result;
pub mod sample;
pub mod smooth;
pub mod table;
pub mod viterbi;

#[macro_use]
extern crate approx;
