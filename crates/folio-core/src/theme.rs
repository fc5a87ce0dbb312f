//! Light/dark preference.
//!
//! The root element carries `data-theme="light"` in light mode and no
//! attribute at all in dark mode. The preference is persisted as the
//! plain strings `"light"` and `"dark"`.

pub const THEME_STORAGE_KEY: &str =
  "portfolioTheme";
pub const THEME_ATTRIBUTE: &str =
  "data-theme";

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum ThemeMode {
  Light,
  #[default]
  Dark
}

impl ThemeMode {
  /// Parses either representation: the stored preference or the
  /// root attribute. Anything other than `"light"` means dark.
  pub fn from_value(
    value: Option<&str>
  ) -> Self {
    match value {
      | Some("light") => Self::Light,
      | _ => Self::Dark
    }
  }

  pub fn toggled(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark"
    }
  }

  /// `None` means the attribute is removed.
  pub fn attribute_value(
    self
  ) -> Option<&'static str> {
    match self {
      | Self::Light => Some("light"),
      | Self::Dark => None
    }
  }

  pub fn icon(self) -> &'static str {
    match self {
      | Self::Light => "\u{2600}",
      | Self::Dark => "\u{263E}"
    }
  }

  pub fn enabled_notice(
    self
  ) -> &'static str {
    match self {
      | Self::Light => {
        "Light theme enabled"
      }
      | Self::Dark => "Dark theme enabled"
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_or_unknown_storage_is_dark()
  {
    assert_eq!(
      ThemeMode::from_value(None),
      ThemeMode::Dark
    );
    assert_eq!(
      ThemeMode::from_value(Some(
        "sepia"
      )),
      ThemeMode::Dark
    );
    assert_eq!(
      ThemeMode::from_value(Some(
        "light"
      )),
      ThemeMode::Light
    );
  }

  #[test]
  fn value_match_is_exact() {
    for value in
      ["Light", " light", "light ", ""]
    {
      assert_eq!(
        ThemeMode::from_value(Some(value)),
        ThemeMode::Dark
      );
    }
  }

  #[test]
  fn double_toggle_restores_both_representations()
  {
    for start in
      [ThemeMode::Light, ThemeMode::Dark]
    {
      let back =
        start.toggled().toggled();
      assert_eq!(back, start);
      assert_eq!(
        back.attribute_value(),
        start.attribute_value()
      );
      assert_eq!(
        back.storage_value(),
        start.storage_value()
      );
    }
  }

  #[test]
  fn attribute_round_trips_through_dom_value()
  {
    for mode in
      [ThemeMode::Light, ThemeMode::Dark]
    {
      assert_eq!(
        ThemeMode::from_value(
          mode.attribute_value()
        ),
        mode
      );
    }
  }

  #[test]
  fn icon_and_notice_follow_new_mode() {
    assert_eq!(
      ThemeMode::Light.icon(),
      "☀"
    );
    assert_eq!(
      ThemeMode::Dark.icon(),
      "☾"
    );
    assert_eq!(
      ThemeMode::Dark
        .toggled()
        .enabled_notice(),
      "Light theme enabled"
    );
  }
}
