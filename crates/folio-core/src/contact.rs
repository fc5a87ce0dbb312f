//! Demo contact form validation.
//!
//! Nothing is ever sent: a valid submission only clears the form and
//! tells the visitor the message is queued.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

// `\s` here must mean browser whitespace: Unicode White_Space plus
// U+FEFF, without U+0085.
const EMAIL_SHAPE: &str = concat!(
  r"^[^[\s--\x{85}]\x{FEFF}@]+",
  r"@[^[\s--\x{85}]\x{FEFF}@]+",
  r"\.[^[\s--\x{85}]\x{FEFF}@]+$"
);

pub const QUEUED_NOTICE: &str =
  "Message queued (demo) \u{2014} add a \
   backend to send it.";

fn email_shape() -> &'static Regex {
  static EMAIL_RE: OnceLock<Regex> =
    OnceLock::new();
  EMAIL_RE.get_or_init(|| {
    Regex::new(EMAIL_SHAPE)
      .expect("email pattern compiles")
  })
}

/// `local@domain.tld` shape check, nothing stricter.
pub fn looks_like_email(
  email: &str
) -> bool {
  email_shape().is_match(email)
}

/// Raw field values as read from the form.
#[derive(Debug, Clone, Default)]
pub struct ContactDraft {
  pub name:    Option<String>,
  pub email:   Option<String>,
  pub message: Option<String>
}

/// A submission that passed validation, fields trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
  pub name:    String,
  pub email:   String,
  pub message: String
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ContactError {
  MissingField,
  InvalidEmail
}

impl ContactError {
  pub fn notice(self) -> &'static str {
    match self {
      | Self::MissingField => {
        "Please fill all required fields \
         (*)"
      }
      | Self::InvalidEmail => {
        "Please enter a valid email"
      }
    }
  }
}

impl fmt::Display for ContactError {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.notice())
  }
}

impl std::error::Error for ContactError {}

fn is_form_space(c: char) -> bool {
  c == '\u{FEFF}'
    || (c.is_whitespace() && c != '\u{85}')
}

fn trimmed(
  value: Option<&String>
) -> String {
  value
    .map(|v| {
      v.trim_matches(is_form_space)
        .to_string()
    })
    .unwrap_or_default()
}

impl ContactDraft {
  /// Required fields are checked before the email shape.
  #[tracing::instrument(skip_all)]
  pub fn validate(
    &self
  ) -> Result<ContactMessage, ContactError>
  {
    let name = trimmed(self.name.as_ref());
    let email =
      trimmed(self.email.as_ref());
    let message =
      trimmed(self.message.as_ref());

    if name.is_empty()
      || email.is_empty()
      || message.is_empty()
    {
      debug!("contact form missing a required field");
      return Err(
        ContactError::MissingField
      );
    }

    if !looks_like_email(&email) {
      debug!(%email, "contact form email rejected");
      return Err(
        ContactError::InvalidEmail
      );
    }

    Ok(ContactMessage {
      name,
      email,
      message
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn draft(
    name: &str,
    email: &str,
    message: &str
  ) -> ContactDraft {
    ContactDraft {
      name:    Some(name.to_string()),
      email:   Some(email.to_string()),
      message: Some(message.to_string())
    }
  }

  #[test]
  fn whitespace_only_fields_count_as_missing()
  {
    let err = draft("  ", "a@b.com", "hi")
      .validate()
      .unwrap_err();
    assert_eq!(
      err,
      ContactError::MissingField
    );
    assert_eq!(
      ContactDraft::default()
        .validate()
        .unwrap_err(),
      ContactError::MissingField
    );
  }

  #[test]
  fn missing_field_wins_over_bad_email() {
    let err = draft("Alice", "nope", "")
      .validate()
      .unwrap_err();
    assert_eq!(
      err.to_string(),
      "Please fill all required fields \
       (*)"
    );
  }

  #[test]
  fn email_shape_rules() {
    assert!(looks_like_email("a@b.com"));
    assert!(looks_like_email(
      "first.last@sub.example.org"
    ));
    assert!(!looks_like_email("bad-email"));
    assert!(!looks_like_email("a@b"));
    assert!(!looks_like_email("a@@b.com"));
    assert!(!looks_like_email("a b@c.com"));
    assert!(!looks_like_email("a@b."));
  }

  #[test]
  fn byte_order_mark_is_whitespace() {
    assert!(!looks_like_email(
      "a\u{FEFF}b@c.com"
    ));
    assert_eq!(
      draft("\u{FEFF}", "a@b.com", "hi")
        .validate(),
      Err(ContactError::MissingField)
    );
    let msg = draft(
      "\u{FEFF}Alice",
      "a@b.com\u{FEFF}",
      "hi"
    )
    .validate()
    .unwrap();
    assert_eq!(msg.name, "Alice");
    assert_eq!(msg.email, "a@b.com");
  }

  #[test]
  fn next_line_is_not_whitespace() {
    assert!(looks_like_email(
      "a\u{85}b@c.com"
    ));
    assert_eq!(
      draft("\u{85}", "a@b.com", "hi")
        .validate()
        .map(|msg| msg.name),
      Ok("\u{85}".to_string())
    );
  }

  #[test]
  fn unicode_spaces_still_rejected() {
    assert!(!looks_like_email(
      "a\u{A0}b@c.com"
    ));
    assert!(!looks_like_email(
      "a@c\u{3000}d.com"
    ));
  }

  #[test]
  fn valid_submission_is_trimmed() {
    let msg =
      draft(" Alice ", " a@b.com\n", "hi ")
        .validate()
        .unwrap();
    assert_eq!(
      msg,
      ContactMessage {
        name:    "Alice".to_string(),
        email:   "a@b.com".to_string(),
        message: "hi".to_string()
      }
    );
  }
}
