//! Cosmetic copy deterrence.
//!
//! None of this is a security boundary; it only suppresses the
//! browser's default handling of a few events and shortcuts.

pub const PROTECTED_NOTICE: &str =
  "Content protected";
pub const PROTECTED_NOTICE_MS: u32 = 1200;

pub const DEFAULT_BLOCKED_KEYS: [&str; 5] =
  ["c", "x", "a", "s", "u"];

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum GuardedEvent {
  ContextMenu,
  Copy,
  Cut,
  Paste,
  DragStart
}

impl GuardedEvent {
  pub const ALL: [Self; 5] = [
    Self::ContextMenu,
    Self::Copy,
    Self::Cut,
    Self::Paste,
    Self::DragStart
  ];

  pub fn event_type(
    self
  ) -> &'static str {
    match self {
      | Self::ContextMenu => "contextmenu",
      | Self::Copy => "copy",
      | Self::Cut => "cut",
      | Self::Paste => "paste",
      | Self::DragStart => "dragstart"
    }
  }

  /// Copy and context-menu attempts also flash a notice.
  pub fn flashes_notice(self) -> bool {
    matches!(
      self,
      Self::ContextMenu | Self::Copy
    )
  }
}

/// Key state of a `keydown` event, reduced to what matters here.
#[derive(Debug, Clone, Copy)]
pub struct KeyChord<'a> {
  pub key:  &'a str,
  pub ctrl: bool,
  pub meta: bool
}

pub fn is_blocked_shortcut<S: AsRef<str>>(
  chord: KeyChord<'_>,
  blocked_keys: &[S]
) -> bool {
  if !(chord.ctrl || chord.meta) {
    return false;
  }
  let key = chord.key.to_lowercase();
  blocked_keys
    .iter()
    .any(|blocked| blocked.as_ref() == key)
}
