use crate::{
    foundation::core::Rgba8,
    foundation::error::{FlipError, FlipResult},
    transition::direction::FlipDirection,
};

/// Immutable construction parameters for a [`FlipController`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlipConfig {
    /// Initial settled value of the external flag.
    pub flipped: bool,
    /// Total transition duration in seconds; each phase runs for half of it.
    pub duration: f64,
    /// Color briefly exposed between the faces around the midpoint.
    pub background: Rgba8,
}

impl FlipConfig {
    /// Default total duration in seconds.
    pub const DEFAULT_DURATION: f64 = 0.6;

    /// Check the configuration for values that would break scheduling.
    pub fn validate(&self) -> FlipResult<()> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(FlipError::validation("duration must be finite and > 0"));
        }
        Ok(())
    }
}

impl Default for FlipConfig {
    fn default() -> Self {
        Self {
            flipped: false,
            duration: Self::DEFAULT_DURATION,
            background: Rgba8::BLACK,
        }
    }
}

/// The two faces of the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Face {
    /// Shown while the external flag is `false`.
    Front,
    /// Shown while the external flag is `true`.
    Back,
}

impl Face {
    /// Fixed per-face rotation direction. Front always swings toward the
    /// trailing edge, back toward the leading edge; because one face is
    /// removed while the other is inserted, the pair always moves in
    /// complementary directions.
    pub fn direction(self) -> FlipDirection {
        match self {
            Self::Front => FlipDirection::Trailing,
            Self::Back => FlipDirection::Leading,
        }
    }

    /// The face shown when the external flag has the given value.
    pub fn for_flag(flipped: bool) -> Self {
        if flipped { Self::Back } else { Self::Front }
    }

    /// The other face.
    pub fn other(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }
}

/// Lifecycle of one logical flip event, derived from the active deadlines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum FlipPhase {
    /// Exactly one face visible, matching the flag; no deadlines pending.
    Idle,
    /// First half: the outgoing face animates toward full rotation.
    RemovingCurrent,
    /// Second half: the incoming face animates back to identity.
    InsertingNew,
    /// Both deadlines have elapsed but [`FlipController::advance_to`] has
    /// not yet committed the final z-order fix-up.
    Settled,
}

/// Pending phase-boundary times, for hosts that schedule wakeups instead of
/// polling every frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Deadlines {
    /// When the outgoing face hides and the incoming face appears.
    pub midpoint: f64,
    /// When z-order is fixed up and content tightening is restored.
    pub end: f64,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct ActiveFlip {
    pub(crate) origin: f64,
    pub(crate) target: bool,
    pub(crate) outgoing: Face,
    pub(crate) incoming: Face,
    pub(crate) midpoint_applied: bool,
}

/// Two-phase flip transition state machine.
///
/// The controller observes changes to an externally owned boolean flag and
/// turns each change into a scheduled two-phase sequence anchored to the
/// timestamp of the [`set_flipped`](Self::set_flipped) call: the outgoing
/// face rotates out over `[0, duration/2)`, the incoming face rotates in
/// over `[duration/2, duration)`, and the final fix-up at `duration`
/// corrects stacking order and re-enables content tightening.
///
/// Steady-state invariant: exactly one face is visible, it matches the flag
/// (front visible iff not flipped), and z-order mirrors visibility. During
/// a transition both faces may transiently be visible around the midpoint;
/// at no sampled instant are both absent.
#[derive(Clone, Debug)]
pub struct FlipController {
    pub(crate) duration: f64,
    pub(crate) background: Rgba8,
    pub(crate) target: bool,
    pub(crate) front_visible: bool,
    pub(crate) back_visible: bool,
    pub(crate) front_z: u8,
    pub(crate) back_z: u8,
    pub(crate) content_tightening: bool,
    pub(crate) active: Option<ActiveFlip>,
}

impl FlipController {
    /// Build a controller in the steady state described by `config`.
    pub fn new(config: FlipConfig) -> FlipResult<Self> {
        config.validate()?;
        let visible = Face::for_flag(config.flipped);
        Ok(Self {
            duration: config.duration,
            background: config.background,
            target: config.flipped,
            front_visible: visible == Face::Front,
            back_visible: visible == Face::Back,
            front_z: u8::from(visible == Face::Front),
            back_z: u8::from(visible == Face::Back),
            content_tightening: true,
            active: None,
        })
    }

    /// React to a change of the external flag at time `now`.
    ///
    /// A call that repeats the settled value while nothing is in flight is
    /// a no-op, as is a mid-flight call that repeats the in-flight target.
    /// A mid-flight call with the opposite value supersedes the pending
    /// deadlines: the in-flight transition is snapped to its end state and
    /// a fresh transition starts from there (settle-then-restart), so the
    /// steady-state invariant holds after every completed sequence.
    #[tracing::instrument(skip(self))]
    pub fn set_flipped(&mut self, new: bool, now: f64) {
        self.advance_to(now);
        if self.active.is_some() {
            if self.target == new {
                return;
            }
            self.settle_now();
        } else if self.target == new {
            return;
        }

        let outgoing = Face::for_flag(self.target);
        tracing::debug!(from = self.target, to = new, origin = now, "flip started");
        self.active = Some(ActiveFlip {
            origin: now,
            target: new,
            outgoing,
            incoming: outgoing.other(),
            midpoint_applied: false,
        });
        self.target = new;
        self.content_tightening = false;
    }

    /// Apply phase-boundary mutations whose deadlines have passed.
    ///
    /// Hosts call this once per frame (or from a wakeup scheduled via
    /// [`deadlines`](Self::deadlines)) before sampling. Boundaries are
    /// compared against the transition origin, not against each other, so
    /// a late first call still lands both mutations in order.
    pub fn advance_to(&mut self, now: f64) {
        let Some(active) = self.active else {
            return;
        };
        if !active.midpoint_applied && now >= active.origin + self.duration / 2.0 {
            self.set_visible(active.outgoing, false);
            self.set_visible(active.incoming, true);
            self.active = Some(ActiveFlip {
                midpoint_applied: true,
                ..active
            });
            tracing::trace!(at = now, "flip midpoint, faces swapped");
        }
        if now >= active.origin + self.duration {
            self.settle_now();
        }
    }

    /// Immediately complete the in-flight transition without animating.
    ///
    /// This is the fallback for hosts whose timer scheduling failed: the
    /// faces land in the exact state the pending deadlines would have
    /// produced, instead of sticking mid-transition.
    pub fn force_settle(&mut self) {
        self.settle_now();
    }

    /// Latest requested value of the external flag.
    pub fn flipped(&self) -> bool {
        self.target
    }

    /// Whether no transition is in flight.
    pub fn is_settled(&self) -> bool {
        self.active.is_none()
    }

    /// Total transition duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Backdrop color exposed between the faces.
    pub fn background(&self) -> Rgba8 {
        self.background
    }

    /// Hand the pending phase-boundary times to a host timer.
    ///
    /// `schedule` is called once per pending boundary, midpoint first. A
    /// settled controller schedules nothing. If the host refuses a wakeup,
    /// the in-flight transition is completed immediately without animating
    /// (the faces land in their final state rather than sticking
    /// mid-transition) and the refusal is reported as
    /// [`FlipError::Timing`].
    pub fn schedule_wakeups(
        &mut self,
        mut schedule: impl FnMut(f64) -> anyhow::Result<()>,
    ) -> FlipResult<()> {
        let Some(deadlines) = self.deadlines() else {
            return Ok(());
        };
        for at in [deadlines.midpoint, deadlines.end] {
            if let Err(err) = schedule(at) {
                self.force_settle();
                return Err(FlipError::timing(format!(
                    "host refused wakeup at {at}: {err}"
                )));
            }
        }
        Ok(())
    }

    /// Pending phase-boundary times, if a transition is in flight.
    pub fn deadlines(&self) -> Option<Deadlines> {
        self.active.map(|a| Deadlines {
            midpoint: a.origin + self.duration / 2.0,
            end: a.origin + self.duration,
        })
    }

    /// Lifecycle phase at time `now`.
    pub fn phase(&self, now: f64) -> FlipPhase {
        let Some(active) = self.active else {
            return FlipPhase::Idle;
        };
        if now < active.origin + self.duration / 2.0 {
            FlipPhase::RemovingCurrent
        } else if now < active.origin + self.duration {
            FlipPhase::InsertingNew
        } else {
            FlipPhase::Settled
        }
    }

    fn set_visible(&mut self, face: Face, visible: bool) {
        match face {
            Face::Front => self.front_visible = visible,
            Face::Back => self.back_visible = visible,
        }
    }

    /// Commit the end state of the in-flight transition: visibility and
    /// z-order match the target, content tightening is restored.
    fn settle_now(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        let visible = Face::for_flag(active.target);
        self.front_visible = visible == Face::Front;
        self.back_visible = visible == Face::Back;
        self.front_z = u8::from(visible == Face::Front);
        self.back_z = u8::from(visible == Face::Back);
        self.content_tightening = true;
        tracing::debug!(flipped = active.target, "flip settled");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/controller.rs"]
mod tests;
