/// Horizontal edge of a face, named independent of left/right layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AnchorEdge {
    /// The leading edge (left in left-to-right layout).
    Leading,
    /// The trailing edge (right in left-to-right layout).
    Trailing,
}

/// Which edge a face swings about while flipping.
///
/// The removed face and the inserted face always use complementary
/// directions so the whole motion reads as one continuous rotation rather
/// than two independent ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FlipDirection {
    /// Rotate about the trailing edge with a negative angle.
    Trailing,
    /// Rotate about the leading edge with a positive angle.
    Leading,
}

impl FlipDirection {
    /// Rotation anchor edge.
    pub fn anchor(self) -> AnchorEdge {
        match self {
            Self::Trailing => AnchorEdge::Trailing,
            Self::Leading => AnchorEdge::Leading,
        }
    }

    /// Edge opposite the anchor; the shading gradient runs from here toward
    /// the anchor.
    pub fn opposite(self) -> AnchorEdge {
        match self {
            Self::Trailing => AnchorEdge::Leading,
            Self::Leading => AnchorEdge::Trailing,
        }
    }

    /// Hinge angle in degrees for a given progress.
    ///
    /// The angle is binary-valued: zero only at the exact identity point,
    /// otherwise the direction's quarter turn. The discontinuity is the
    /// hinge effect itself, not an approximation of a smooth sweep.
    pub fn angle_degrees(self, progress: f64) -> f64 {
        if progress == 0.0 {
            return 0.0;
        }
        match self {
            Self::Trailing => -90.0,
            Self::Leading => 90.0,
        }
    }

    /// Horizontal offset for a face of the given width at `progress`.
    pub fn offset(self, width: f64, progress: f64) -> f64 {
        match self {
            Self::Trailing => width * progress * -0.5,
            Self::Leading => width * progress * 0.5,
        }
    }
}
