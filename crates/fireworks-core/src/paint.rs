//! Drawing seam between the simulation and whatever raster surface shows it.
//!
//! The web front-end implements [`Painter`] over a 2D canvas context; tests
//! implement it with a recorder. Visual variants that the effect supports but
//! ships with disabled are carried by [`RenderOptions`].

use crate::color::Rgb;
use glam::DVec2;
use thiserror::Error;

/// Raster target for one frame.
pub trait Painter {
    /// Cover the whole surface with `color` at `alpha` (1.0 overwrites fully).
    fn fill_background(&mut self, width: f64, height: f64, color: Rgb, alpha: f64);

    /// Filled circle at `center`. `alpha` is already clamped to \[0, 1\].
    /// `glow_blur`, when set, is a shadow blur radius in the same colour.
    fn fill_circle(
        &mut self,
        center: DVec2,
        radius: f64,
        color: Rgb,
        alpha: f64,
        glow_blur: Option<f64>,
    );
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderOptions {
    /// Translucent clear instead of an opaque one, leaving motion trails.
    pub trail_fade: Option<f64>,
    /// Shadow-blur glow around every particle.
    pub glow_blur: Option<f64>,
}

#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("{attr}: `{value}` is not a number")]
    NotANumber { attr: &'static str, value: String },
    #[error("{attr}: {value} is outside {expected}")]
    OutOfRange {
        attr: &'static str,
        value: f64,
        expected: &'static str,
    },
}

pub const TRAIL_FADE_ATTR: &str = "data-trail-fade";
pub const GLOW_BLUR_ATTR: &str = "data-glow-blur";

impl RenderOptions {
    /// Parse the optional attribute strings. Absent or blank values leave the
    /// variant disabled.
    pub fn from_attrs(
        trail_fade: Option<&str>,
        glow_blur: Option<&str>,
    ) -> Result<Self, OptionsError> {
        let trail_fade = parse_attr(TRAIL_FADE_ATTR, trail_fade)?;
        if let Some(v) = trail_fade {
            if !(v > 0.0 && v <= 1.0) {
                return Err(OptionsError::OutOfRange {
                    attr: TRAIL_FADE_ATTR,
                    value: v,
                    expected: "(0, 1]",
                });
            }
        }
        let glow_blur = parse_attr(GLOW_BLUR_ATTR, glow_blur)?;
        if let Some(v) = glow_blur {
            if !(v >= 0.0 && v.is_finite()) {
                return Err(OptionsError::OutOfRange {
                    attr: GLOW_BLUR_ATTR,
                    value: v,
                    expected: "[0, inf)",
                });
            }
        }
        Ok(Self {
            trail_fade,
            glow_blur,
        })
    }

    /// Alpha of the per-frame background fill.
    #[inline]
    pub fn clear_alpha(&self) -> f64 {
        self.trail_fade.unwrap_or(1.0)
    }
}

fn parse_attr(attr: &'static str, raw: Option<&str>) -> Result<Option<f64>, OptionsError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<f64>()
            .map(Some)
            .map_err(|_| OptionsError::NotANumber {
                attr,
                value: s.to_string(),
            }),
    }
}
