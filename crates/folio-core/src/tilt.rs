//! Pointer-driven perspective tilt for the hero frame.
//!
//! Pointer coordinates are normalised to fractions of the frame box
//! and clamped to `[0, 1]`, so a pointer that has already left the
//! frame (before `mouseleave` arrives) cannot over-rotate it.

pub const TILTING_CLASS: &str =
  "is-tilting";
pub const GLARE_X_PROPERTY: &str = "--mx";
pub const GLARE_Y_PROPERTY: &str = "--my";

/// Client-space box of the frame element.
#[derive(
  Debug, Clone, Copy, PartialEq,
)]
pub struct FrameRect {
  pub left:   f64,
  pub top:    f64,
  pub width:  f64,
  pub height: f64
}

#[derive(
  Debug, Clone, Copy, PartialEq,
)]
pub struct TiltSettings {
  pub amplitude_deg:  f64,
  pub perspective_px: f64,
  pub lift_px:        f64
}

impl Default for TiltSettings {
  fn default() -> Self {
    Self {
      amplitude_deg:  10.0,
      perspective_px: 900.0,
      lift_px:        2.0
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq,
)]
pub struct TiltPose {
  pub fraction_x: f64,
  pub fraction_y: f64,
  /// Rotation around the horizontal axis, driven by vertical position.
  pub rotate_x:   f64,
  /// Rotation around the vertical axis, driven by horizontal position.
  pub rotate_y:   f64
}

fn fraction(
  offset: f64,
  extent: f64
) -> f64 {
  if extent <= 0.0 || !extent.is_finite() {
    return 0.5;
  }
  (offset / extent).clamp(0.0, 1.0)
}

impl TiltPose {
  pub fn from_pointer(
    rect: FrameRect,
    client_x: f64,
    client_y: f64,
    settings: &TiltSettings
  ) -> Self {
    let fraction_x = fraction(
      client_x - rect.left,
      rect.width
    );
    let fraction_y = fraction(
      client_y - rect.top,
      rect.height
    );
    Self {
      fraction_x,
      fraction_y,
      rotate_x: -(fraction_y - 0.5)
        * settings.amplitude_deg,
      rotate_y: (fraction_x - 0.5)
        * settings.amplitude_deg
    }
  }

  pub fn transform(
    &self,
    settings: &TiltSettings
  ) -> String {
    format!(
      "perspective({}px) rotateX({}deg) \
       rotateY({}deg) translateY(-{}px)",
      css_number(settings.perspective_px),
      css_number(self.rotate_x),
      css_number(self.rotate_y),
      css_number(settings.lift_px)
    )
  }

  pub fn glare_x(&self) -> String {
    percent(self.fraction_x)
  }

  pub fn glare_y(&self) -> String {
    percent(self.fraction_y)
  }
}

fn percent(fraction: f64) -> String {
  format!(
    "{}%",
    css_number(fraction * 100.0)
  )
}

/// Rounds to three decimals and folds `-0` into `0`.
pub fn css_number(value: f64) -> f64 {
  (value * 1000.0).round() / 1000.0 + 0.0
}

#[cfg(test)]
mod tests {
  use super::*;

  const RECT: FrameRect = FrameRect {
    left:   100.0,
    top:    50.0,
    width:  400.0,
    height: 300.0
  };

  #[test]
  fn centre_has_no_rotation() {
    let pose = TiltPose::from_pointer(
      RECT,
      300.0,
      200.0,
      &TiltSettings::default()
    );
    assert_eq!(pose.rotate_x, 0.0);
    assert_eq!(pose.rotate_y, 0.0);
    assert_eq!(pose.glare_x(), "50%");
  }

  #[test]
  fn right_edge_hits_half_amplitude() {
    let pose = TiltPose::from_pointer(
      RECT,
      500.0,
      200.0,
      &TiltSettings::default()
    );
    assert_eq!(pose.rotate_y, 5.0);
  }

  #[test]
  fn outside_pointer_is_clamped() {
    let pose = TiltPose::from_pointer(
      RECT,
      900.0,
      -40.0,
      &TiltSettings::default()
    );
    assert_eq!(pose.fraction_x, 1.0);
    assert_eq!(pose.fraction_y, 0.0);
    assert_eq!(pose.rotate_y, 5.0);
    assert_eq!(pose.rotate_x, 5.0);
  }

  #[test]
  fn collapsed_frame_falls_back_to_centre()
  {
    let rect = FrameRect {
      width: 0.0,
      ..RECT
    };
    let pose = TiltPose::from_pointer(
      rect,
      120.0,
      200.0,
      &TiltSettings::default()
    );
    assert_eq!(pose.fraction_x, 0.5);
  }

  #[test]
  fn transform_string_matches_css_syntax()
  {
    let settings = TiltSettings::default();
    let pose = TiltPose::from_pointer(
      RECT, 100.0, 50.0, &settings
    );
    assert_eq!(
      pose.transform(&settings),
      "perspective(900px) rotateX(5deg) \
       rotateY(-5deg) translateY(-2px)"
    );
    assert_eq!(pose.glare_y(), "0%");
  }
}
