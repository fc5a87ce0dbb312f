//! Outcome reporting for copying the contact address.

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum CopyOutcome {
  Copied,
  Failed
}

impl CopyOutcome {
  pub fn from_success(ok: bool) -> Self {
    if ok { Self::Copied } else { Self::Failed }
  }

  pub fn notice(self) -> &'static str {
    match self {
      | Self::Copied => "Email copied",
      | Self::Failed => "Copy failed"
    }
  }
}

/// Which path produced the final result.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum CopyPath {
  Clipboard,
  LegacyCommand
}

/// Combines the two attempts: a successful platform write wins;
/// otherwise the legacy command's boolean decides.
pub fn resolve_copy(
  platform_write: Result<(), ()>,
  legacy_command: impl FnOnce() -> bool
) -> (CopyPath, CopyOutcome) {
  match platform_write {
    | Ok(()) => {
      (
        CopyPath::Clipboard,
        CopyOutcome::Copied
      )
    }
    | Err(()) => {
      (
        CopyPath::LegacyCommand,
        CopyOutcome::from_success(
          legacy_command()
        )
      )
    }
  }
}

/// The string a copy control carries, if any.
pub fn copy_source(
  data_email: Option<String>
) -> Option<String> {
  data_email
    .filter(|email| !email.is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn platform_success_skips_legacy_command()
  {
    let (path, outcome) =
      resolve_copy(Ok(()), || {
        panic!("legacy path must not run")
      });
    assert_eq!(path, CopyPath::Clipboard);
    assert_eq!(
      outcome.notice(),
      "Email copied"
    );
  }

  #[test]
  fn fallback_reports_legacy_result() {
    let (path, outcome) =
      resolve_copy(Err(()), || true);
    assert_eq!(
      path,
      CopyPath::LegacyCommand
    );
    assert_eq!(outcome, CopyOutcome::Copied);

    let (_, outcome) =
      resolve_copy(Err(()), || false);
    assert_eq!(
      outcome.notice(),
      "Copy failed"
    );
  }

  #[test]
  fn empty_source_is_a_no_op() {
    assert_eq!(copy_source(None), None);
    assert_eq!(
      copy_source(Some(String::new())),
      None
    );
    assert_eq!(
      copy_source(Some(
        "x@y.com".to_string()
      )),
      Some("x@y.com".to_string())
    );
  }
}
