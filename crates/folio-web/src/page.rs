//! Wires every behavior onto the loaded document.
//!
//! Behaviors are independent: each `mount` returns `None` when its
//! markup is missing and the rest of the page carries on.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Local;
use folio_core::SiteConfig;
use folio_core::config::CONFIG_ELEMENT_ID;
use folio_core::year::year_stamp;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{
  Document,
  Element,
  HtmlElement,
  PageTransitionEvent,
  Window
};

use crate::clipboard::{
  self,
  CopyControls
};
use crate::contact::{
  self,
  ContactForm
};
use crate::cursor::CursorTrailEffect;
use crate::dom;
use crate::filter::{
  self,
  ProjectFilterBar
};
use crate::guard::{
  self,
  CopyGuard
};
use crate::menu::{
  self,
  MobileMenu
};
use crate::notifier::{
  Notifier,
  TOAST_ELEMENT_ID
};
use crate::scroll::{
  self,
  SmoothScroll
};
use crate::theme::{
  self,
  ThemeToggle
};
use crate::tilt::{
  self,
  HeroTilt
};

const YEAR_ELEMENT_ID: &str = "year";

thread_local! {
  static PAGE: RefCell<Option<Rc<Page>>> =
    const { RefCell::new(None) };
}

pub struct Page {
  _theme:     Option<ThemeToggle>,
  _menu:      Option<MobileMenu>,
  _scroll:    SmoothScroll,
  _filter:    Option<ProjectFilterBar>,
  _copy:      Option<CopyControls>,
  _contact:   Option<ContactForm>,
  _tilt:      Option<HeroTilt>,
  _guard:     Option<CopyGuard>,
  cursor:     Option<CursorTrailEffect>,
  lifecycle:  RefCell<Vec<EventListener>>
}

fn load_config(
  document: &Document
) -> SiteConfig {
  let inline = document
    .get_element_by_id(CONFIG_ELEMENT_ID)
    .and_then(|element| element.text_content());
  SiteConfig::load(inline.as_deref())
}

fn stamp_year(document: &Document) {
  if let Some(element) = dom::by_id::<Element>(
    document,
    YEAR_ELEMENT_ID
  ) {
    element.set_text_content(Some(
      &year_stamp(&Local::now())
    ));
  }
}

fn log_mounted<T>(
  name: &str,
  behavior: &Option<T>
) {
  if behavior.is_some() {
    tracing::debug!(behavior = name, "mounted");
  } else {
    tracing::debug!(
      behavior = name,
      "markup missing or disabled; skipped"
    );
  }
}

impl Page {
  #[tracing::instrument(skip_all)]
  pub fn mount(
    window: &Window,
    document: &Document
  ) -> Rc<Self> {
    let config = load_config(document);
    stamp_year(document);

    let notifier = Notifier::new(
      dom::by_id::<HtmlElement>(
        document,
        TOAST_ELEMENT_ID
      ),
      config.toast.duration_ms
    );

    let theme = theme::mount(
      window,
      document,
      &config.theme_storage_key,
      Rc::clone(&notifier)
    );
    log_mounted("theme", &theme);
    let menu = menu::mount(document);
    log_mounted("menu", &menu);
    let scroll = scroll::mount(window, document);
    let filter =
      filter::mount(document, Rc::clone(&notifier));
    log_mounted("filter", &filter);
    let copy = clipboard::mount(
      document,
      Rc::clone(&notifier)
    );
    log_mounted("copy", &copy);
    let contact = contact::mount(
      document,
      Rc::clone(&notifier)
    );
    log_mounted("contact", &contact);
    let tilt =
      tilt::mount(window, document, &config.tilt);
    log_mounted("tilt", &tilt);
    let cursor = CursorTrailEffect::new(
      window,
      document,
      &config.cursor
    );
    log_mounted("cursor", &cursor);
    let guard = guard::mount(
      document,
      &config.protection,
      &notifier
    );
    log_mounted("guard", &guard);

    if let Some(cursor) = cursor.as_ref() {
      cursor.start();
    }

    let page = Rc::new(Self {
      _theme: theme,
      _menu: menu,
      _scroll: scroll,
      _filter: filter,
      _copy: copy,
      _contact: contact,
      _tilt: tilt,
      _guard: guard,
      cursor,
      lifecycle: RefCell::new(Vec::new())
    });
    page.watch_lifecycle(window);
    tracing::info!("portfolio page ready");
    page
  }

  /// Pauses the cursor loop while the page sits in the back/forward
  /// cache and resumes it when restored.
  fn watch_lifecycle(
    self: &Rc<Self>,
    window: &Window
  ) {
    if self.cursor.is_none() {
      return;
    }

    let hidden = {
      let page = Rc::downgrade(self);
      EventListener::new(
        window,
        "pagehide",
        move |_event| {
          if let Some(cursor) = page
            .upgrade()
            .as_ref()
            .and_then(|page| page.cursor.as_ref())
          {
            cursor.stop();
          }
        }
      )
    };
    let shown = {
      let page = Rc::downgrade(self);
      EventListener::new(
        window,
        "pageshow",
        move |event| {
          let restored = event
            .dyn_ref::<PageTransitionEvent>()
            .is_some_and(|event| event.persisted());
          if !restored {
            return;
          }
          if let Some(cursor) = page
            .upgrade()
            .as_ref()
            .and_then(|page| page.cursor.as_ref())
          {
            cursor.start();
          }
        }
      )
    };

    *self.lifecycle.borrow_mut() =
      vec![hidden, shown];
  }
}

/// Keeps the mounted page alive for the document's lifetime.
pub fn install(page: Rc<Page>) {
  PAGE.with(|slot| {
    *slot.borrow_mut() = Some(page);
  });
}
