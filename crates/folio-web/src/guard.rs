//! Suppresses the browser's copy affordances. Cosmetic only.

use std::rc::Rc;

use folio_core::config::ProtectionConfig;
use folio_core::guard::{
  GuardedEvent,
  KeyChord,
  is_blocked_shortcut
};
use gloo::events::{
  EventListener,
  EventListenerOptions
};
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  KeyboardEvent
};

use crate::notifier::Notifier;

pub struct CopyGuard {
  _listeners: Vec<EventListener>
}

fn guarded_listener(
  document: &Document,
  kind: GuardedEvent,
  config: &ProtectionConfig,
  notifier: &Rc<Notifier>
) -> EventListener {
  let notice = config.notice.clone();
  let notice_ms = config.notice_ms;
  let notifier = Rc::clone(notifier);
  EventListener::new_with_options(
    document,
    kind.event_type(),
    EventListenerOptions::enable_prevent_default(),
    move |event| {
      event.prevent_default();
      if kind.flashes_notice() {
        notifier.flash(&notice, notice_ms);
      }
      tracing::trace!(
        event = kind.event_type(),
        "suppressed default action"
      );
    }
  )
}

fn shortcut_listener(
  document: &Document,
  blocked_keys: Vec<String>
) -> EventListener {
  EventListener::new_with_options(
    document,
    "keydown",
    EventListenerOptions::enable_prevent_default(),
    move |event| {
      let Some(event) =
        event.dyn_ref::<KeyboardEvent>()
      else {
        return;
      };
      let key = event.key();
      let chord = KeyChord {
        key:  &key,
        ctrl: event.ctrl_key(),
        meta: event.meta_key()
      };
      if is_blocked_shortcut(
        chord,
        &blocked_keys
      ) {
        event.prevent_default();
      }
    }
  )
}

pub fn mount(
  document: &Document,
  config: &ProtectionConfig,
  notifier: &Rc<Notifier>
) -> Option<CopyGuard> {
  if !config.enabled {
    return None;
  }

  let mut listeners: Vec<EventListener> =
    GuardedEvent::ALL
      .into_iter()
      .map(|kind| {
        guarded_listener(
          document, kind, config, notifier
        )
      })
      .collect();
  listeners.push(shortcut_listener(
    document,
    config.blocked_keys.clone()
  ));

  tracing::debug!(
    blocked_keys = ?config.blocked_keys,
    "copy deterrence enabled"
  );
  Some(CopyGuard {
    _listeners: listeners
  })
}
