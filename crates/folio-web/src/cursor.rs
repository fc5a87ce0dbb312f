//! Custom cursor: a dot pinned to the pointer and an eased ring.
//!
//! The ring follows through a self-rescheduling animation frame. The
//! loop has an explicit lifecycle so it can be stopped and restarted
//! (the page does so around back/forward cache transitions).

use std::cell::{
  Cell,
  RefCell
};
use std::rc::Rc;

use folio_core::config::CursorConfig;
use folio_core::trail::{
  CURSOR_BODY_CLASS,
  CursorTrail,
  px,
  ring_transform
};
use gloo::events::EventListener;
use gloo::render::{
  AnimationFrame,
  request_animation_frame
};
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  HtmlElement,
  MouseEvent,
  Window
};

use crate::dom;

const DOT_ID: &str = "termCursor";
const RING_ID: &str = "termRing";

struct TrailState {
  dot:     HtmlElement,
  ring:    HtmlElement,
  model:   RefCell<CursorTrail>,
  frame:   RefCell<Option<AnimationFrame>>,
  running: Cell<bool>
}

impl TrailState {
  fn tick(&self) {
    let at = self.model.borrow_mut().step();
    dom::set_style(&self.ring, "left", &px(at.x));
    dom::set_style(&self.ring, "top", &px(at.y));
  }
}

fn schedule(state: &Rc<TrailState>) {
  let next = Rc::clone(state);
  let handle =
    request_animation_frame(move |_| {
      next.tick();
      if next.running.get() {
        schedule(&next);
      }
    });
  *state.frame.borrow_mut() = Some(handle);
}

pub struct CursorTrailEffect {
  window:      Window,
  body:        HtmlElement,
  press_scale: f64,
  state:       Rc<TrailState>,
  listeners:   RefCell<Vec<EventListener>>
}

impl CursorTrailEffect {
  /// Builds the effect when the device and markup allow it. Nothing
  /// runs until [`CursorTrailEffect::start`].
  pub fn new(
    window: &Window,
    document: &Document,
    config: &CursorConfig
  ) -> Option<Self> {
    if !config.enabled
      || !dom::fine_pointer(window)
    {
      return None;
    }
    let dot: HtmlElement =
      dom::by_id(document, DOT_ID)?;
    let ring: HtmlElement =
      dom::by_id(document, RING_ID)?;
    let body = document.body()?;

    let (width, height) =
      dom::viewport_size(window);
    let model = CursorTrail::centred(
      width,
      height,
      config.smoothing
    );

    Some(Self {
      window: window.clone(),
      body,
      press_scale: config.press_scale,
      state: Rc::new(TrailState {
        dot,
        ring,
        model: RefCell::new(model),
        frame: RefCell::new(None),
        running: Cell::new(false)
      }),
      listeners: RefCell::new(Vec::new())
    })
  }

  pub fn start(&self) {
    if self.state.running.replace(true) {
      return;
    }
    dom::add_class(
      &self.body,
      CURSOR_BODY_CLASS
    );

    let on_move = {
      let state = Rc::clone(&self.state);
      EventListener::new(
        &self.window,
        "mousemove",
        move |event| {
          let Some(event) =
            event.dyn_ref::<MouseEvent>()
          else {
            return;
          };
          let x = f64::from(event.client_x());
          let y = f64::from(event.client_y());
          state.model.borrow_mut().point_at(x, y);
          dom::set_style(&state.dot, "left", &px(x));
          dom::set_style(&state.dot, "top", &px(y));
        }
      )
    };
    let on_press = self.scale_listener(
      "mousedown",
      true
    );
    let on_release = self.scale_listener(
      "mouseup",
      false
    );

    *self.listeners.borrow_mut() = vec![
      on_move, on_press, on_release,
    ];
    schedule(&self.state);
    tracing::debug!("cursor trail started");
  }

  pub fn stop(&self) {
    if !self.state.running.replace(false) {
      return;
    }
    self.state.frame.borrow_mut().take();
    self.listeners.borrow_mut().clear();
    dom::remove_class(
      &self.body,
      CURSOR_BODY_CLASS
    );
    tracing::debug!("cursor trail stopped");
  }

  fn scale_listener(
    &self,
    event_type: &'static str,
    pressed: bool
  ) -> EventListener {
    let ring = self.state.ring.clone();
    let transform =
      ring_transform(pressed, self.press_scale);
    EventListener::new(
      &self.window,
      event_type,
      move |_event| {
        dom::set_style(
          &ring,
          "transform",
          &transform
        );
      }
    )
  }
}

impl Drop for CursorTrailEffect {
  fn drop(&mut self) {
    self.stop();
  }
}
