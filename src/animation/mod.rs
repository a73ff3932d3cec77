//! Timing curves for the two flip phases.

pub(crate) mod ease;
