use crate::{
    foundation::core::Rgba8,
    foundation::error::{FlipError, FlipResult},
    transition::controller::FlipConfig,
};

/// Parse a host-supplied transition spec into a [`FlipConfig`].
///
/// The only recognized kind is `"flip"`. `params` may be null or an object
/// with optional keys `duration` (seconds, finite and > 0), `flipped`
/// (initial flag value) and `background` (`[r, g, b]`, 0..=255 each);
/// missing keys take the construction defaults.
pub fn parse_flip_params(kind: &str, params: &serde_json::Value) -> FlipResult<FlipConfig> {
    let kind = kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(FlipError::validation("transition kind must be non-empty"));
    }
    if kind != "flip" {
        return Err(FlipError::validation(format!(
            "unknown transition kind '{kind}'"
        )));
    }

    let params = if params.is_null() {
        None
    } else {
        Some(
            params
                .as_object()
                .ok_or_else(|| FlipError::validation("flip params must be an object"))?,
        )
    };

    let duration = match params.and_then(|p| p.get("duration")).and_then(|v| v.as_f64()) {
        None => FlipConfig::DEFAULT_DURATION,
        Some(v) => {
            if !v.is_finite() || v <= 0.0 {
                return Err(FlipError::validation(
                    "flip.duration must be finite and > 0 when set",
                ));
            }
            v
        }
    };

    let flipped = match params.and_then(|p| p.get("flipped")) {
        None => false,
        Some(v) => v
            .as_bool()
            .ok_or_else(|| FlipError::validation("flip.flipped must be a bool when set"))?,
    };

    let background = match params.and_then(|p| p.get("background")) {
        None => Rgba8::BLACK,
        Some(v) => parse_background(v)?,
    };

    let config = FlipConfig {
        flipped,
        duration,
        background,
    };
    config.validate()?;
    Ok(config)
}

fn parse_background(v: &serde_json::Value) -> FlipResult<Rgba8> {
    let arr = v
        .as_array()
        .ok_or_else(|| FlipError::validation("flip.background must be an [r, g, b] array"))?;
    if arr.len() != 3 {
        return Err(FlipError::validation(
            "flip.background must have exactly 3 channels",
        ));
    }
    let mut rgb = [0u8; 3];
    for (slot, value) in rgb.iter_mut().zip(arr) {
        let n = value.as_u64().ok_or_else(|| {
            FlipError::validation("flip.background channels must be integers in 0..=255")
        })?;
        if n > 255 {
            return Err(FlipError::validation(
                "flip.background channels must be integers in 0..=255",
            ));
        }
        *slot = n as u8;
    }
    Ok(Rgba8::from_rgb8(rgb[0], rgb[1], rgb[2]))
}

#[cfg(test)]
#[path = "../../tests/unit/transition/params.rs"]
mod tests;
