//! Perspective tilt on the hero frame, fine pointers only.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::config::TiltConfig;
use folio_core::tilt::{
  FrameRect,
  GLARE_X_PROPERTY,
  GLARE_Y_PROPERTY,
  TILTING_CLASS,
  TiltPose,
  TiltSettings
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

const FRAME_SELECTOR: &str =
  ".hero__right .frame";
const IMAGE_SELECTOR: &str = ".frame__img";

struct TiltState {
  frame:    HtmlElement,
  image:    Option<HtmlElement>,
  settings: TiltSettings,
  /// At most one transform waiting for the next frame.
  pending:  RefCell<Option<AnimationFrame>>
}

pub struct HeroTilt {
  _state:     Rc<TiltState>,
  _listeners: [EventListener; 2]
}

impl TiltState {
  fn frame_rect(&self) -> FrameRect {
    let rect =
      self.frame.get_bounding_client_rect();
    FrameRect {
      left:   rect.left(),
      top:    rect.top(),
      width:  rect.width(),
      height: rect.height()
    }
  }

  fn apply(&self, pose: TiltPose) {
    self.pending.borrow_mut().take();
    dom::add_class(
      &self.frame,
      TILTING_CLASS
    );
    dom::set_style(
      &self.frame,
      "transform",
      &pose.transform(&self.settings)
    );
    if let Some(image) = self.image.as_ref()
    {
      dom::set_style(
        image,
        GLARE_X_PROPERTY,
        &pose.glare_x()
      );
      dom::set_style(
        image,
        GLARE_Y_PROPERTY,
        &pose.glare_y()
      );
    }
  }

  fn reset(&self) {
    self.pending.borrow_mut().take();
    dom::remove_class(
      &self.frame,
      TILTING_CLASS
    );
    dom::clear_style(
      &self.frame,
      "transform"
    );
  }
}

fn schedule(
  state: &Rc<TiltState>,
  pose: TiltPose
) {
  let frame_state = Rc::clone(state);
  let handle =
    request_animation_frame(move |_| {
      frame_state.apply(pose);
    });
  // replacing the handle cancels a frame that has not run yet
  *state.pending.borrow_mut() = Some(handle);
}

pub fn mount(
  window: &Window,
  document: &Document,
  config: &TiltConfig
) -> Option<HeroTilt> {
  if !config.enabled {
    return None;
  }
  let frame: HtmlElement =
    dom::query(document, FRAME_SELECTOR)?;
  if !dom::fine_pointer(window) {
    tracing::debug!(
      "coarse pointer; tilt disabled"
    );
    return None;
  }
  let image = dom::query_in::<HtmlElement>(
    &frame,
    IMAGE_SELECTOR
  );

  let state = Rc::new(TiltState {
    frame: frame.clone(),
    image,
    settings: config.settings(),
    pending: RefCell::new(None)
  });

  let on_move = {
    let state = Rc::clone(&state);
    EventListener::new(
      &frame,
      "mousemove",
      move |event| {
        let Some(event) =
          event.dyn_ref::<MouseEvent>()
        else {
          return;
        };
        let pose = TiltPose::from_pointer(
          state.frame_rect(),
          f64::from(event.client_x()),
          f64::from(event.client_y()),
          &state.settings
        );
        schedule(&state, pose);
      }
    )
  };

  let on_leave = {
    let state = Rc::clone(&state);
    EventListener::new(
      &frame,
      "mouseleave",
      move |_event| state.reset()
    )
  };

  tracing::debug!("hero tilt enabled");
  Some(HeroTilt {
    _state:     state,
    _listeners: [on_move, on_leave]
  })
}
