//! Smoothed trailing ring for the custom cursor.

pub const CURSOR_BODY_CLASS: &str =
  "terminal-cursor";
pub const DEFAULT_SMOOTHING: f64 = 0.18;
pub const DEFAULT_PRESS_SCALE: f64 = 0.85;

#[derive(
  Debug, Clone, Copy, PartialEq,
)]
pub struct Point {
  pub x: f64,
  pub y: f64
}

/// Raw pointer target plus the position the ring is easing towards
/// it from.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorTrail {
  target:    Point,
  trail:     Point,
  smoothing: f64
}

impl CursorTrail {
  /// Both points start at the viewport centre.
  pub fn centred(
    viewport_width: f64,
    viewport_height: f64,
    smoothing: f64
  ) -> Self {
    let centre = Point {
      x: viewport_width / 2.0,
      y: viewport_height / 2.0
    };
    Self {
      target: centre,
      trail: centre,
      smoothing
    }
  }

  pub fn target(&self) -> Point {
    self.target
  }

  pub fn trail(&self) -> Point {
    self.trail
  }

  pub fn point_at(
    &mut self,
    x: f64,
    y: f64
  ) {
    self.target = Point { x, y };
  }

  /// One animation frame: close `smoothing` of the remaining gap.
  pub fn step(&mut self) -> Point {
    self.trail.x += (self.target.x
      - self.trail.x)
      * self.smoothing;
    self.trail.y += (self.target.y
      - self.trail.y)
      * self.smoothing;
    self.trail
  }
}

pub fn ring_transform(
  pressed: bool,
  press_scale: f64
) -> String {
  let scale =
    if pressed { press_scale } else { 1.0 };
  format!(
    "translate(-50%,-50%) scale({scale})"
  )
}

pub fn px(value: f64) -> String {
  format!("{value}px")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn starts_in_viewport_centre() {
    let trail = CursorTrail::centred(
      1280.0,
      800.0,
      DEFAULT_SMOOTHING
    );
    assert_eq!(
      trail.trail(),
      Point { x: 640.0, y: 400.0 }
    );
  }

  #[test]
  fn each_frame_closes_eighteen_percent() {
    let mut trail = CursorTrail::centred(
      0.0,
      0.0,
      DEFAULT_SMOOTHING
    );
    trail.point_at(100.0, -50.0);
    let first = trail.step();
    assert!((first.x - 18.0).abs() < 1e-9);
    assert!((first.y + 9.0).abs() < 1e-9);

    let second = trail.step();
    assert!(
      (second.x - (18.0 + 82.0 * 0.18))
        .abs()
        < 1e-9
    );
    assert_eq!(
      trail.target(),
      Point { x: 100.0, y: -50.0 }
    );
  }

  #[test]
  fn converges_without_overshoot() {
    let mut trail = CursorTrail::centred(
      0.0,
      0.0,
      DEFAULT_SMOOTHING
    );
    trail.point_at(10.0, 10.0);
    for _ in 0..200 {
      let p = trail.step();
      assert!(p.x <= 10.0);
    }
    assert!((trail.trail().x - 10.0).abs() < 1e-6);
  }

  #[test]
  fn ring_scale_follows_press_state() {
    assert_eq!(
      ring_transform(true, 0.85),
      "translate(-50%,-50%) scale(0.85)"
    );
    assert_eq!(
      ring_transform(false, 0.85),
      "translate(-50%,-50%) scale(1)"
    );
    assert_eq!(px(12.5), "12.5px");
  }
}
