use std::rc::Rc;

use folio_core::filter::{
  ACTIVE_CLASS,
  ProjectFilter
};
use gloo::events::EventListener;
use web_sys::{
  Document,
  HtmlElement
};

use crate::dom;
use crate::notifier::Notifier;

const FILTER_BUTTONS: &str = ".filter";
const PROJECT_CARDS: &str = ".card";

pub struct ProjectFilterBar {
  _buttons: Vec<EventListener>
}

fn apply_filter(
  filter: &ProjectFilter,
  cards: &[HtmlElement]
) {
  for card in cards {
    let display = filter.card_display(
      card
        .get_attribute("data-tags")
        .as_deref()
    );
    dom::set_style(card, "display", display);
  }
}

pub fn mount(
  document: &Document,
  notifier: Rc<Notifier>
) -> Option<ProjectFilterBar> {
  let buttons = Rc::new(dom::query_all(
    document,
    FILTER_BUTTONS
  ));
  if buttons.is_empty() {
    return None;
  }
  let cards = Rc::new(dom::query_all(
    document,
    PROJECT_CARDS
  ));

  let listeners = buttons
    .iter()
    .map(|button| {
      let buttons = Rc::clone(&buttons);
      let cards = Rc::clone(&cards);
      let notifier = Rc::clone(&notifier);
      let active = button.clone();
      EventListener::new(
        button,
        "click",
        move |_event| {
          for other in buttons.iter() {
            dom::remove_class(
              other,
              ACTIVE_CLASS
            );
          }
          dom::add_class(&active, ACTIVE_CLASS);

          let filter =
            ProjectFilter::from_button(
              active
                .get_attribute("data-filter")
                .as_deref()
            );
          tracing::debug!(
            ?filter,
            cards = cards.len(),
            "project filter selected"
          );
          apply_filter(&filter, &cards);
          notifier.notify(&filter.notice());
        }
      )
    })
    .collect();

  Some(ProjectFilterBar {
    _buttons: listeners
  })
}
