//! The flip transition state machine and its host-facing surfaces.
//!
//! `controller` owns the authoritative state, `snapshot` derives per-frame
//! render parameters from it, `direction` holds the hinge geometry mapping,
//! and `params` parses host-supplied transition specs.

pub(crate) mod controller;
pub(crate) mod direction;
pub(crate) mod params;
pub(crate) mod snapshot;
