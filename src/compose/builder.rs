use crate::{
    foundation::core::Rgba8,
    foundation::error::{FlipError, FlipResult},
    transition::controller::{FlipConfig, FlipController},
    transition::snapshot::{FaceRenderState, FlipSnapshot},
};

/// Opaque face renderer supplied by the host. Called with the face's
/// sampled parameters whenever the face is visible.
pub type FaceRenderer = Box<dyn FnMut(&FaceRenderState)>;

/// Builder for a [`FlipView`].
///
/// Both face renderers must be supplied; `build` fails fast on a missing
/// renderer or an invalid duration, so misconfiguration surfaces at
/// construction rather than at animation time.
pub struct FlipBuilder {
    config: FlipConfig,
    front: Option<FaceRenderer>,
    back: Option<FaceRenderer>,
}

impl FlipBuilder {
    /// Start from the default configuration (not flipped, 0.6s, black
    /// backdrop) with no renderers attached.
    pub fn new() -> Self {
        Self {
            config: FlipConfig::default(),
            front: None,
            back: None,
        }
    }

    /// Set the initial value of the flag.
    pub fn flipped(mut self, flipped: bool) -> Self {
        self.config.flipped = flipped;
        self
    }

    /// Set the total transition duration in seconds.
    pub fn duration(mut self, duration: f64) -> Self {
        self.config.duration = duration;
        self
    }

    /// Set the backdrop color exposed between the faces.
    pub fn background(mut self, background: Rgba8) -> Self {
        self.config.background = background;
        self
    }

    /// Attach the front face renderer.
    pub fn front(mut self, renderer: impl FnMut(&FaceRenderState) + 'static) -> Self {
        self.front = Some(Box::new(renderer));
        self
    }

    /// Attach the back face renderer.
    pub fn back(mut self, renderer: impl FnMut(&FaceRenderState) + 'static) -> Self {
        self.back = Some(Box::new(renderer));
        self
    }

    /// Validate the configuration and wire up the view.
    pub fn build(self) -> FlipResult<FlipView> {
        let front = self
            .front
            .ok_or_else(|| FlipError::validation("front face renderer must be supplied"))?;
        let back = self
            .back
            .ok_or_else(|| FlipError::validation("back face renderer must be supplied"))?;
        Ok(FlipView {
            controller: FlipController::new(self.config)?,
            front,
            back,
        })
    }
}

impl Default for FlipBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A controller coupled with the two opaque face renderers.
///
/// Taps relay in both directions: a tap on the front face flips to the
/// back face, a tap on the back face flips to the front.
pub struct FlipView {
    controller: FlipController,
    front: FaceRenderer,
    back: FaceRenderer,
}

impl std::fmt::Debug for FlipView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlipView")
            .field("controller", &self.controller)
            .finish_non_exhaustive()
    }
}

impl FlipView {
    /// Tap relay from the front face.
    pub fn flip_to_back(&mut self, now: f64) {
        self.controller.set_flipped(true, now);
    }

    /// Tap relay from the back face.
    pub fn flip_to_front(&mut self, now: f64) {
        self.controller.set_flipped(false, now);
    }

    /// Propagate an external flag change.
    pub fn set_flipped(&mut self, new: bool, now: f64) {
        self.controller.set_flipped(new, now);
    }

    /// The underlying controller, for host timer scheduling and phase
    /// inspection.
    pub fn controller(&self) -> &FlipController {
        &self.controller
    }

    /// Advance due phase boundaries, then invoke each visible face's
    /// renderer in stacking order (lower z first, so the higher face
    /// paints on top). Returns the sampled snapshot.
    pub fn render_frame(&mut self, now: f64, width: f64) -> FlipSnapshot {
        self.controller.advance_to(now);
        let snapshot = self.controller.snapshot(now, width);
        if snapshot.front.z_order <= snapshot.back.z_order {
            if snapshot.front.visible {
                (self.front)(&snapshot.front);
            }
            if snapshot.back.visible {
                (self.back)(&snapshot.back);
            }
        } else {
            if snapshot.back.visible {
                (self.back)(&snapshot.back);
            }
            if snapshot.front.visible {
                (self.front)(&snapshot.front);
            }
        }
        snapshot
    }
}
