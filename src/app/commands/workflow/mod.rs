//! GitHub Actions integration.

pub mod output;

pub use output::{StepOutput, write_step_outputs};
