//! Copy-to-clipboard for the contact address controls.

use std::rc::Rc;

use folio_core::clipboard::{
  copy_source,
  resolve_copy
};
use gloo::events::EventListener;
use wasm_bindgen::{
  JsCast,
  JsValue
};
use wasm_bindgen_futures::{
  JsFuture,
  spawn_local
};
use web_sys::{
  Document,
  HtmlDocument,
  HtmlElement,
  HtmlTextAreaElement
};

use crate::dom;
use crate::notifier::Notifier;

const COPY_CONTROL_IDS: [&str; 2] =
  ["copyEmail", "emailBtn"];

pub struct CopyControls {
  _clicks: Vec<EventListener>
}

/// `navigator.clipboard.writeText`, if the API exists at all.
async fn write_with_clipboard_api(
  text: &str
) -> Result<(), ()> {
  let window = web_sys::window().ok_or(())?;
  let navigator = window.navigator();
  let available = js_sys::Reflect::get(
    &navigator,
    &JsValue::from_str("clipboard")
  )
  .is_ok_and(|api| {
    !api.is_undefined() && !api.is_null()
  });
  if !available {
    tracing::debug!(
      "clipboard api unavailable"
    );
    return Err(());
  }

  JsFuture::from(
    navigator.clipboard().write_text(text)
  )
  .await
  .map(|_| ())
  .map_err(|error| {
    tracing::debug!(
      ?error,
      "clipboard write rejected"
    );
  })
}

/// Off-screen textarea plus `execCommand("copy")`.
fn copy_with_selection(
  document: &Document,
  text: &str
) -> bool {
  let Some(body) = document.body() else {
    return false;
  };
  let Some(area) = document
    .create_element("textarea")
    .ok()
    .and_then(|element| {
      element
        .dyn_into::<HtmlTextAreaElement>()
        .ok()
    })
  else {
    return false;
  };

  area.set_value(text);
  let _ = area.set_attribute("readonly", "");
  dom::set_style(&area, "position", "fixed");
  dom::set_style(&area, "top", "0");
  dom::set_style(&area, "left", "-9999px");
  dom::set_style(&area, "opacity", "0");

  if body.append_child(&area).is_err() {
    return false;
  }
  area.select();
  let copied = document
    .dyn_ref::<HtmlDocument>()
    .and_then(|html| {
      html.exec_command("copy").ok()
    })
    .unwrap_or(false);
  area.remove();
  copied
}

async fn copy_text(
  document: &Document,
  text: &str
) -> folio_core::clipboard::CopyOutcome {
  let platform =
    write_with_clipboard_api(text).await;
  let (path, outcome) =
    resolve_copy(platform, || {
      copy_with_selection(document, text)
    });
  tracing::info!(
    ?path,
    ?outcome,
    "copy attempt finished"
  );
  outcome
}

pub fn mount(
  document: &Document,
  notifier: Rc<Notifier>
) -> Option<CopyControls> {
  let clicks: Vec<EventListener> =
    COPY_CONTROL_IDS
      .iter()
      .filter_map(|id| {
        dom::by_id::<HtmlElement>(document, id)
      })
      .map(|control| {
        let document = document.clone();
        let notifier = Rc::clone(&notifier);
        let target = control.clone();
        EventListener::new(
          &target,
          "click",
          move |_event| {
            let Some(text) = copy_source(
              control.get_attribute(
                "data-email"
              )
            ) else {
              return;
            };
            let document = document.clone();
            let notifier =
              Rc::clone(&notifier);
            spawn_local(async move {
              let outcome =
                copy_text(&document, &text)
                  .await;
              notifier.notify(outcome.notice());
            });
          }
        )
      })
      .collect();

  if clicks.is_empty() {
    return None;
  }
  Some(CopyControls { _clicks: clicks })
}
