//! Small `web-sys` helpers shared by the behaviors.

use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element,
  HtmlElement,
  Window
};

const FINE_POINTER_QUERY: &str =
  "(pointer:fine)";

pub fn by_id<T: JsCast>(
  document: &Document,
  id: &str
) -> Option<T> {
  document
    .get_element_by_id(id)?
    .dyn_into::<T>()
    .ok()
}

pub fn query<T: JsCast>(
  document: &Document,
  selector: &str
) -> Option<T> {
  document
    .query_selector(selector)
    .ok()
    .flatten()?
    .dyn_into::<T>()
    .ok()
}

pub fn query_in<T: JsCast>(
  scope: &Element,
  selector: &str
) -> Option<T> {
  scope
    .query_selector(selector)
    .ok()
    .flatten()?
    .dyn_into::<T>()
    .ok()
}

pub fn query_all(
  document: &Document,
  selector: &str
) -> Vec<HtmlElement> {
  let Ok(list) =
    document.query_selector_all(selector)
  else {
    tracing::warn!(
      selector,
      "selector rejected by document"
    );
    return Vec::new();
  };
  (0..list.length())
    .filter_map(|index| list.item(index))
    .filter_map(|node| {
      node.dyn_into::<HtmlElement>().ok()
    })
    .collect()
}

pub fn set_style(
  element: &HtmlElement,
  property: &str,
  value: &str
) {
  if let Err(error) = element
    .style()
    .set_property(property, value)
  {
    tracing::warn!(
      property,
      value,
      ?error,
      "failed to set style property"
    );
  }
}

pub fn clear_style(
  element: &HtmlElement,
  property: &str
) {
  if let Err(error) = element
    .style()
    .remove_property(property)
  {
    tracing::warn!(
      property,
      ?error,
      "failed to clear style property"
    );
  }
}

pub fn add_class(
  element: &Element,
  class: &str
) {
  if let Err(error) =
    element.class_list().add_1(class)
  {
    tracing::warn!(
      class,
      ?error,
      "failed to add class"
    );
  }
}

pub fn remove_class(
  element: &Element,
  class: &str
) {
  if let Err(error) =
    element.class_list().remove_1(class)
  {
    tracing::warn!(
      class,
      ?error,
      "failed to remove class"
    );
  }
}

/// Precise, hover-capable pointer such as a mouse.
pub fn fine_pointer(
  window: &Window
) -> bool {
  window
    .match_media(FINE_POINTER_QUERY)
    .ok()
    .flatten()
    .is_some_and(|query| query.matches())
}

pub fn viewport_size(
  window: &Window
) -> (f64, f64) {
  let read = |value: Result<
    wasm_bindgen::JsValue,
    wasm_bindgen::JsValue
  >| {
    value
      .ok()
      .and_then(|v| v.as_f64())
      .unwrap_or_default()
  };
  (
    read(window.inner_width()),
    read(window.inner_height())
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use wasm_bindgen_test::*;

  wasm_bindgen_test_configure!(run_in_browser);

  fn scratch() -> HtmlElement {
    let document = web_sys::window()
      .and_then(|window| window.document())
      .expect("document available");
    document
      .create_element("div")
      .expect("create scratch element")
      .dyn_into::<HtmlElement>()
      .expect("div is an HtmlElement")
  }

  #[wasm_bindgen_test]
  fn class_helpers_toggle_membership() {
    let element = scratch();
    add_class(&element, "show");
    assert!(
      element.class_list().contains("show")
    );
    remove_class(&element, "show");
    assert!(
      !element.class_list().contains("show")
    );
  }

  #[wasm_bindgen_test]
  fn rejected_class_token_is_absorbed() {
    let element = scratch();
    element.set_class_name("card");
    // DOMTokenList throws for an empty token
    add_class(&element, "");
    remove_class(&element, "");
    assert_eq!(element.class_name(), "card");
  }

  #[wasm_bindgen_test]
  fn style_set_then_cleared() {
    let element = scratch();
    set_style(&element, "display", "flex");
    assert_eq!(
      element
        .style()
        .get_property_value("display")
        .ok()
        .as_deref(),
      Some("flex")
    );
    clear_style(&element, "display");
    assert_eq!(
      element
        .style()
        .get_property_value("display")
        .ok()
        .as_deref(),
      Some("")
    );
  }
}
