//! Cardflip is a deterministic two-phase card-flip transition controller.
//!
//! Cardflip turns a single external boolean ("is the card flipped?") into a
//! timed, two-phase face swap: the visible face rotates out over the first
//! half of the duration, the other face rotates in over the second half, and
//! a final fix-up restores stacking order and layout shortcuts. The crate
//! owns no pixels; a host render layer samples the controller each frame and
//! composes the two faces from the returned parameters.
//!
//! # Pipeline overview
//!
//! 1. **Mutate**: [`FlipController::set_flipped`] anchors a new transition
//!    to a single origin timestamp.
//! 2. **Advance**: [`FlipController::advance_to`] applies phase-boundary
//!    mutations whose deadlines have passed (face swap at `duration/2`,
//!    z-order fix-up at `duration`).
//! 3. **Sample**: [`FlipController::snapshot`] derives per-face render
//!    parameters (visibility, z-order, hinge angle, offset, shading)
//!    without mutating anything.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: phase boundaries are scheduled off the
//!   origin timestamp, never chained on completion callbacks, so the second
//!   phase starts at exactly `duration/2` regardless of notification latency.
//! - **Single mutator**: all state changes happen through `set_flipped`,
//!   `advance_to`, or `force_settle` on one thread; sampling is read-only
//!   and tolerates mid-transition state (both faces visible, partial
//!   progress).
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod compose;
mod foundation;
mod transition;

pub use animation::ease::{Ease, FLIP_INSERT_CURVE, FLIP_REMOVE_CURVE};
pub use compose::builder::{FaceRenderer, FlipBuilder, FlipView};
pub use foundation::core::Rgba8;
pub use foundation::error::{FlipError, FlipResult};
pub use transition::controller::{Deadlines, Face, FlipConfig, FlipController, FlipPhase};
pub use transition::direction::{AnchorEdge, FlipDirection};
pub use transition::params::parse_flip_params;
pub use transition::snapshot::{FaceRenderState, FlipSnapshot};
