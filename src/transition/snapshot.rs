use crate::{
    animation::ease::{FLIP_INSERT_CURVE, FLIP_REMOVE_CURVE},
    foundation::core::Rgba8,
    transition::controller::{Face, FlipController},
    transition::direction::AnchorEdge,
};

/// Render parameters for one face at one sampled instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FaceRenderState {
    /// Whether the face is composed at all this frame.
    pub visible: bool,
    /// Stacking order; the higher face paints on top during the overlap.
    pub z_order: u8,
    /// Transition progress in `[0, 1]`; 0 is the face at rest.
    pub progress: f64,
    /// Hinge rotation angle about the vertical axis, in degrees.
    pub rotation_angle_degrees: f64,
    /// Edge the rotation is anchored to.
    pub rotation_anchor: AnchorEdge,
    /// Horizontal displacement of the face, in the same unit as the
    /// sampled width.
    pub horizontal_offset: f64,
    /// Opacity of the directional shading overlay, gradient running from
    /// the opposite edge toward the anchor.
    pub shading_opacity: f64,
}

/// Frame-ready composition of both faces over the backdrop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct FlipSnapshot {
    /// Backdrop color behind both faces.
    pub background: Rgba8,
    /// Whether content-fitting shortcuts may be applied this frame; false
    /// for the whole transition window.
    pub content_tightening: bool,
    /// Front face parameters.
    pub front: FaceRenderState,
    /// Back face parameters.
    pub back: FaceRenderState,
}

impl FlipController {
    /// Sample render parameters for both faces at time `now`.
    ///
    /// Sampling is pure: visibility and progress during a transition are
    /// derived from the origin timestamp, so a snapshot is correct even if
    /// [`advance_to`](Self::advance_to) has not run for a while. `width` is
    /// the face width used to scale the horizontal offset.
    pub fn snapshot(&self, now: f64, width: f64) -> FlipSnapshot {
        FlipSnapshot {
            background: self.background,
            content_tightening: self.content_tightening,
            front: self.face_state(Face::Front, now, width),
            back: self.face_state(Face::Back, now, width),
        }
    }

    fn face_state(&self, face: Face, now: f64, width: f64) -> FaceRenderState {
        let (visible, progress) = self.visibility_progress(face, now);
        let dir = face.direction();
        FaceRenderState {
            visible,
            z_order: match face {
                Face::Front => self.front_z,
                Face::Back => self.back_z,
            },
            progress,
            rotation_angle_degrees: dir.angle_degrees(progress),
            rotation_anchor: dir.anchor(),
            horizontal_offset: dir.offset(width, progress),
            shading_opacity: progress,
        }
    }

    fn visibility_progress(&self, face: Face, now: f64) -> (bool, f64) {
        let Some(active) = self.active else {
            let visible = match face {
                Face::Front => self.front_visible,
                Face::Back => self.back_visible,
            };
            return (visible, 0.0);
        };

        let half = self.duration / 2.0;
        let midpoint = active.origin + half;
        if face == active.outgoing {
            if now < midpoint {
                let t = (now - active.origin) / half;
                (true, FLIP_REMOVE_CURVE.apply(t))
            } else {
                (false, 1.0)
            }
        } else if now < midpoint {
            (false, 1.0)
        } else {
            // Incoming face enters at full rotation and eases back to rest.
            let t = (now - midpoint) / half;
            (true, 1.0 - FLIP_INSERT_CURVE.apply(t))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/snapshot.rs"]
mod tests;
