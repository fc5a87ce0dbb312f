use std::rc::Rc;

use folio_core::theme::{
  THEME_ATTRIBUTE,
  ThemeMode
};
use gloo::events::EventListener;
use web_sys::{
  Document,
  Element,
  HtmlElement,
  Storage,
  Window
};

use crate::dom;
use crate::notifier::Notifier;

const THEME_BUTTON_ID: &str = "themeBtn";
const ICON_SELECTOR: &str = ".icon";

pub struct ThemeToggle {
  _click: EventListener
}

fn local_storage(
  window: &Window
) -> Option<Storage> {
  window.local_storage().ok().flatten()
}

fn load_theme_mode(
  window: &Window,
  key: &str
) -> ThemeMode {
  let stored =
    local_storage(window).and_then(
      |storage| {
        storage.get_item(key).ok().flatten()
      }
    );
  ThemeMode::from_value(stored.as_deref())
}

fn save_theme_mode(
  window: &Window,
  key: &str,
  mode: ThemeMode
) {
  let Some(storage) = local_storage(window)
  else {
    tracing::warn!(
      "local storage unavailable; theme \
       not persisted"
    );
    return;
  };
  if let Err(error) = storage
    .set_item(key, mode.storage_value())
  {
    tracing::warn!(
      ?error,
      "failed to persist theme"
    );
  }
}

fn apply_theme_mode(
  root: &Element,
  mode: ThemeMode
) {
  let result = match mode.attribute_value()
  {
    | Some(value) => {
      root.set_attribute(
        THEME_ATTRIBUTE,
        value
      )
    }
    | None => {
      root.remove_attribute(
        THEME_ATTRIBUTE
      )
    }
  };
  if let Err(error) = result {
    tracing::warn!(
      ?error,
      "failed to update theme attribute"
    );
  }
}

fn current_mode(root: &Element) -> ThemeMode {
  ThemeMode::from_value(
    root
      .get_attribute(THEME_ATTRIBUTE)
      .as_deref()
  )
}

fn refresh_icon(
  button: &HtmlElement,
  mode: ThemeMode
) {
  if let Some(icon) =
    dom::query_in::<Element>(
      button,
      ICON_SELECTOR
    )
  {
    icon.set_text_content(Some(mode.icon()));
  }
}

/// Applies the stored preference and wires the toggle button.
pub fn mount(
  window: &Window,
  document: &Document,
  storage_key: &str,
  notifier: Rc<Notifier>
) -> Option<ThemeToggle> {
  let root = document.document_element()?;

  let initial =
    load_theme_mode(window, storage_key);
  apply_theme_mode(&root, initial);
  tracing::info!(
    theme = initial.storage_value(),
    "applied stored theme"
  );

  let button: HtmlElement =
    dom::by_id(document, THEME_BUTTON_ID)?;
  refresh_icon(&button, initial);

  let window = window.clone();
  let storage_key = storage_key.to_string();
  let target = button.clone();
  let click = EventListener::new(
    &target,
    "click",
    move |_event| {
      let next = current_mode(&root).toggled();
      apply_theme_mode(&root, next);
      save_theme_mode(
        &window,
        &storage_key,
        next
      );
      refresh_icon(&button, next);
      tracing::debug!(
        theme = next.storage_value(),
        "theme toggled"
      );
      notifier.notify(next.enabled_notice());
    }
  );

  Some(ThemeToggle { _click: click })
}
