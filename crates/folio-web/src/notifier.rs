//! The page's single toast widget.

use std::cell::RefCell;
use std::rc::{
  Rc,
  Weak
};

use folio_core::toast::{
  HideTicket,
  ToastSlot,
  VISIBLE_CLASS
};
use gloo::timers::callback::Timeout;
use web_sys::HtmlElement;

use crate::dom;

pub const TOAST_ELEMENT_ID: &str = "toast";

/// Shared by every behavior. Without a `#toast` element all calls
/// are no-ops.
pub struct Notifier {
  element:      Option<HtmlElement>,
  slot:         RefCell<ToastSlot>,
  duration_ms:  u32,
  hide_timer:   RefCell<Option<Timeout>>,
  notice_timer: RefCell<Option<Timeout>>
}

impl Notifier {
  pub fn new(
    element: Option<HtmlElement>,
    duration_ms: u32
  ) -> Rc<Self> {
    if element.is_none() {
      tracing::debug!(
        "no toast element; notices \
         disabled"
      );
    }
    Rc::new(Self {
      element,
      slot: RefCell::new(ToastSlot::new()),
      duration_ms,
      hide_timer: RefCell::new(None),
      notice_timer: RefCell::new(None)
    })
  }

  pub fn notify(
    self: &Rc<Self>,
    message: &str
  ) {
    self.notify_for(
      message,
      self.duration_ms
    );
  }

  /// Replaces the visible message and restarts the hide window.
  pub fn notify_for(
    self: &Rc<Self>,
    message: &str,
    duration_ms: u32
  ) {
    self.show(
      message,
      duration_ms,
      &self.hide_timer
    );
  }

  /// Short-lived notice with its own timer; it leaves the regular
  /// hide timer running.
  pub fn flash(
    self: &Rc<Self>,
    message: &str,
    duration_ms: u32
  ) {
    self.show(
      message,
      duration_ms,
      &self.notice_timer
    );
  }

  fn show(
    self: &Rc<Self>,
    message: &str,
    duration_ms: u32,
    timer: &RefCell<Option<Timeout>>
  ) {
    let Some(element) = self.element.as_ref()
    else {
      return;
    };

    let ticket = self
      .slot
      .borrow_mut()
      .notify(message, duration_ms);
    element.set_text_content(Some(message));
    dom::add_class(element, VISIBLE_CLASS);
    tracing::debug!(
      message,
      duration_ms,
      "toast shown"
    );

    let notifier: Weak<Self> =
      Rc::downgrade(self);
    let timeout =
      Timeout::new(ticket.delay_ms, move || {
        if let Some(notifier) =
          notifier.upgrade()
        {
          notifier.expire(ticket);
        }
      });
    // dropping the previous handle cancels it
    *timer.borrow_mut() = Some(timeout);
  }

  fn expire(&self, ticket: HideTicket) {
    if !self.slot.borrow_mut().expire(ticket)
    {
      return;
    }
    if let Some(element) =
      self.element.as_ref()
    {
      dom::remove_class(
        element,
        VISIBLE_CLASS
      );
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use gloo::timers::future::TimeoutFuture;
  use wasm_bindgen::JsCast;
  use wasm_bindgen_test::*;

  wasm_bindgen_test_configure!(run_in_browser);

  fn toast_element() -> HtmlElement {
    let document = web_sys::window()
      .and_then(|window| window.document())
      .expect("document available");
    let element = document
      .create_element("div")
      .expect("create toast element")
      .dyn_into::<HtmlElement>()
      .expect("div is an HtmlElement");
    document
      .body()
      .expect("body available")
      .append_child(&element)
      .expect("attach toast element");
    element
  }

  fn shown(element: &HtmlElement) -> bool {
    element.class_list().contains(VISIBLE_CLASS)
  }

  #[wasm_bindgen_test]
  fn latest_message_replaces_text() {
    let element = toast_element();
    let notifier =
      Notifier::new(Some(element.clone()), 2200);

    notifier.notify("Light theme enabled");
    assert!(shown(&element));
    notifier.notify("Email copied");
    assert_eq!(
      element.text_content().as_deref(),
      Some("Email copied")
    );
    assert!(shown(&element));
  }

  #[wasm_bindgen_test]
  fn missing_element_is_a_no_op() {
    let notifier = Notifier::new(None, 2200);
    notifier.notify("Email copied");
    notifier.flash("Content protected", 1200);
    assert!(!notifier.slot.borrow().is_visible());
  }

  #[wasm_bindgen_test(async)]
  async fn second_notify_restarts_the_window() {
    let element = toast_element();
    let notifier =
      Notifier::new(Some(element.clone()), 200);

    notifier.notify("first");
    TimeoutFuture::new(120).await;
    notifier.notify("second");

    // the first window has lapsed; the second has not
    TimeoutFuture::new(140).await;
    assert!(shown(&element));
    assert_eq!(
      element.text_content().as_deref(),
      Some("second")
    );

    TimeoutFuture::new(160).await;
    assert!(!shown(&element));
  }

  #[wasm_bindgen_test(async)]
  async fn stale_flash_timer_leaves_newer_toast_up()
  {
    let element = toast_element();
    let notifier =
      Notifier::new(Some(element.clone()), 300);

    notifier.notify("Filter: RUST");
    TimeoutFuture::new(20).await;
    notifier.flash("Content protected", 100);
    TimeoutFuture::new(20).await;
    notifier.notify("Email copied");

    // the flash timer fires near t=120 and must not hide this one
    TimeoutFuture::new(200).await;
    assert!(shown(&element));
    assert_eq!(
      element.text_content().as_deref(),
      Some("Email copied")
    );

    TimeoutFuture::new(200).await;
    assert!(!shown(&element));
  }

  #[wasm_bindgen_test(async)]
  async fn flash_hides_on_its_own_duration() {
    let element = toast_element();
    let notifier =
      Notifier::new(Some(element.clone()), 400);

    notifier.notify("Email copied");
    notifier.flash("Content protected", 80);
    TimeoutFuture::new(160).await;
    assert!(!shown(&element));
  }
}
