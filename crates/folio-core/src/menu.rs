//! Mobile navigation panel state.
//!
//! `aria-hidden` and `style.display` are two views of one boolean and
//! are always written together from a [`MenuState`].

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct MenuState {
  pub open: bool
}

impl MenuState {
  pub const CLOSED: Self =
    Self { open: false };

  /// Only an explicit `"false"` counts as open.
  pub fn from_aria_hidden(
    value: Option<&str>
  ) -> Self {
    Self {
      open: value == Some("false")
    }
  }

  pub fn toggled(self) -> Self {
    Self { open: !self.open }
  }

  pub fn aria_hidden(
    self
  ) -> &'static str {
    if self.open { "false" } else { "true" }
  }

  pub fn display(self) -> &'static str {
    if self.open { "block" } else { "none" }
  }
}
