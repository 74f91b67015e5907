//! Password generation, scoring, and output.

pub mod charset;
pub mod entropy;
pub mod output;
pub mod sample;
pub mod service;

pub use entropy::{Strength, estimate};
pub use service::{GenerationRequest, Password, generate};
