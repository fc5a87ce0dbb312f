use std::rc::Rc;

use folio_core::contact::{
  ContactDraft,
  QUEUED_NOTICE
};
use gloo::events::{
  EventListener,
  EventListenerOptions
};
use web_sys::{
  Document,
  FormData,
  HtmlFormElement
};

use crate::dom;
use crate::notifier::Notifier;

const CONTACT_FORM_ID: &str =
  "contactForm";

pub struct ContactForm {
  _submit: EventListener
}

fn read_draft(
  form: &HtmlFormElement
) -> ContactDraft {
  let Ok(data) = FormData::new_with_form(form)
  else {
    tracing::warn!(
      "could not read contact form data"
    );
    return ContactDraft::default();
  };
  let field =
    |name: &str| data.get(name).as_string();
  ContactDraft {
    name:    field("name"),
    email:   field("email"),
    message: field("message")
  }
}

/// Validates on submit. The form never leaves the page.
pub fn mount(
  document: &Document,
  notifier: Rc<Notifier>
) -> Option<ContactForm> {
  let form: HtmlFormElement =
    dom::by_id(document, CONTACT_FORM_ID)?;
  let target = form.clone();

  let submit = EventListener::new_with_options(
    &target,
    "submit",
    EventListenerOptions::enable_prevent_default(),
    move |event| {
      event.prevent_default();
      match read_draft(&form).validate() {
        | Ok(message) => {
          form.reset();
          tracing::info!(
            name = %message.name,
            email = %message.email,
            "contact message queued \
             locally"
          );
          notifier.notify(QUEUED_NOTICE);
        }
        | Err(error) => {
          tracing::debug!(%error, "contact form rejected");
          notifier.notify(error.notice());
        }
      }
    }
  );

  Some(ContactForm { _submit: submit })
}
