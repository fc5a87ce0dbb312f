use folio_core::anchor::fragment_target;
use gloo::events::{
  EventListener,
  EventListenerOptions
};
use wasm_bindgen::JsValue;
use web_sys::{
  Document,
  Element,
  ScrollBehavior,
  ScrollIntoViewOptions,
  ScrollLogicalPosition,
  Window
};

use crate::dom;

const IN_PAGE_LINKS: &str = "a[href^=\"#\"]";

pub struct SmoothScroll {
  _links: Vec<EventListener>
}

fn scroll_to(element: &Element) {
  let options = ScrollIntoViewOptions::new();
  options.set_behavior(ScrollBehavior::Smooth);
  options.set_block(
    ScrollLogicalPosition::Start
  );
  element
    .scroll_into_view_with_scroll_into_view_options(
      &options
    );
}

pub fn mount(
  window: &Window,
  document: &Document
) -> SmoothScroll {
  let links = dom::query_all(
    document,
    IN_PAGE_LINKS
  )
  .into_iter()
  .map(|link| {
    let window = window.clone();
    let document = document.clone();
    let target = link.clone();
    EventListener::new_with_options(
      &target,
      "click",
      EventListenerOptions::enable_prevent_default(),
      move |event| {
        let href = link.get_attribute("href");
        let Some(fragment) =
          fragment_target(href.as_deref())
        else {
          return;
        };
        let Some(destination) = document
          .query_selector(fragment)
          .ok()
          .flatten()
        else {
          tracing::debug!(
            fragment,
            "no element for in-page link"
          );
          return;
        };

        event.prevent_default();
        scroll_to(&destination);
        match window.history() {
          | Ok(history) => {
            if let Err(error) = history
              .push_state_with_url(
                &JsValue::NULL,
                "",
                Some(fragment)
              )
            {
              tracing::warn!(
                ?error,
                "failed to push history \
                 entry"
              );
            }
          }
          | Err(error) => {
            tracing::warn!(
              ?error,
              "history unavailable"
            );
          }
        }
      }
    )
  })
  .collect::<Vec<_>>();

  tracing::debug!(
    count = links.len(),
    "wired in-page links"
  );
  SmoothScroll { _links: links }
}
