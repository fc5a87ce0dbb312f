//! Single-slot transient notice.
//!
//! The slot only ever holds the most recent message. Each `notify`
//! bumps a generation counter; a scheduled hide carries the
//! generation it was issued for and is ignored once superseded.

use tracing::trace;

pub const TOAST_DURATION_MS: u32 = 2200;
pub const VISIBLE_CLASS: &str = "show";

/// Handle returned by [`ToastSlot::notify`]. The caller arms a timer
/// for `delay_ms` and hands the ticket back to [`ToastSlot::expire`].
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct HideTicket {
  pub generation: u64,
  pub delay_ms:   u32
}

#[derive(Debug, Clone, Default)]
pub struct ToastSlot {
  message:    Option<String>,
  visible:    bool,
  generation: u64
}

impl ToastSlot {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn message(&self) -> Option<&str> {
    self.message.as_deref()
  }

  pub fn is_visible(&self) -> bool {
    self.visible
  }

  /// Replaces whatever is showing and restarts the window.
  pub fn notify(
    &mut self,
    message: impl Into<String>,
    duration_ms: u32
  ) -> HideTicket {
    self.generation += 1;
    self.message = Some(message.into());
    self.visible = true;
    trace!(
      generation = self.generation,
      duration_ms,
      "toast scheduled"
    );
    HideTicket {
      generation: self.generation,
      delay_ms:   duration_ms.max(1)
    }
  }

  /// Applies a scheduled hide. Returns `true` when the widget should
  /// actually be hidden.
  pub fn expire(
    &mut self,
    ticket: HideTicket
  ) -> bool {
    if ticket.generation != self.generation
      || !self.visible
    {
      return false;
    }
    self.visible = false;
    true
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stale_ticket_does_not_hide_newer_message()
  {
    let mut slot = ToastSlot::new();
    let first = slot.notify("one", 2200);
    let second = slot.notify("two", 2200);

    assert!(!slot.expire(first));
    assert!(slot.is_visible());
    assert_eq!(slot.message(), Some("two"));

    assert!(slot.expire(second));
    assert!(!slot.is_visible());
    assert!(!slot.expire(second));
  }

  #[test]
  fn ticket_carries_requested_delay() {
    let mut slot = ToastSlot::new();
    slot.notify("Email copied", 2200);
    let flash =
      slot.notify("Content protected", 1200);
    assert_eq!(flash.delay_ms, 1200);
    assert_eq!(
      slot.message(),
      Some("Content protected")
    );
    assert!(slot.expire(flash));
  }

  #[test]
  fn zero_duration_still_schedules_a_hide()
  {
    let mut slot = ToastSlot::new();
    assert_eq!(
      slot.notify("x", 0).delay_ms,
      1
    );
  }

  #[test]
  fn fresh_slot_is_hidden() {
    let slot = ToastSlot::new();
    assert!(!slot.is_visible());
    assert_eq!(slot.message(), None);
  }
}
