use folio_core::menu::MenuState;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element,
  HtmlElement
};

use crate::dom;

const MENU_BUTTON_ID: &str = "menuBtn";
const MENU_PANEL_ID: &str = "mobileMenu";
const ARIA_HIDDEN: &str = "aria-hidden";

pub struct MobileMenu {
  _toggle:     Option<EventListener>,
  _link_close: EventListener
}

fn read_state(
  panel: &HtmlElement
) -> MenuState {
  MenuState::from_aria_hidden(
    panel.get_attribute(ARIA_HIDDEN).as_deref()
  )
}

fn write_state(
  panel: &HtmlElement,
  state: MenuState
) {
  if let Err(error) = panel.set_attribute(
    ARIA_HIDDEN,
    state.aria_hidden()
  ) {
    tracing::warn!(
      ?error,
      "failed to write menu aria-hidden"
    );
  }
  dom::set_style(
    panel,
    "display",
    state.display()
  );
}

pub fn mount(
  document: &Document
) -> Option<MobileMenu> {
  let panel: HtmlElement =
    dom::by_id(document, MENU_PANEL_ID)?;

  let toggle = dom::by_id::<HtmlElement>(
    document,
    MENU_BUTTON_ID
  )
  .map(|button| {
    let panel = panel.clone();
    EventListener::new(
      &button,
      "click",
      move |_event| {
        let next = read_state(&panel).toggled();
        tracing::debug!(
          open = next.open,
          "mobile menu toggled"
        );
        write_state(&panel, next);
      }
    )
  });

  let link_close = {
    let target = panel.clone();
    EventListener::new(
      &target,
      "click",
      move |event| {
        let inside_link = event
          .target()
          .and_then(|target| {
            target.dyn_into::<Element>().ok()
          })
          .and_then(|element| {
            element.closest("a").ok().flatten()
          })
          .is_some();
        if inside_link {
          write_state(
            &panel,
            MenuState::CLOSED
          );
        }
      }
    )
  };

  Some(MobileMenu {
    _toggle:     toggle,
    _link_close: link_close
  })
}
