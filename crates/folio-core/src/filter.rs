//! Project card filtering by tag.

use tracing::debug;

pub const ALL_FILTER: &str = "all";
pub const ACTIVE_CLASS: &str =
  "is-active";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectFilter {
  All,
  Tag(String)
}

impl ProjectFilter {
  /// Builds the filter from a button's `data-filter` value.
  pub fn from_button(
    value: Option<&str>
  ) -> Self {
    match value.unwrap_or_default() {
      | ALL_FILTER => Self::All,
      | tag => Self::Tag(tag.to_string())
    }
  }

  /// Whether a card with the given `data-tags` list stays visible.
  pub fn shows(
    &self,
    card_tags: Option<&str>
  ) -> bool {
    match self {
      | Self::All => true,
      | Self::Tag(tag) => {
        card_tag_list(
          card_tags.unwrap_or_default()
        )
        .any(|candidate| candidate == tag)
      }
    }
  }

  pub fn card_display(
    &self,
    card_tags: Option<&str>
  ) -> &'static str {
    let visible = self.shows(card_tags);
    debug!(
      filter = ?self,
      tags = card_tags.unwrap_or_default(),
      visible,
      "evaluated project card"
    );
    if visible { "flex" } else { "none" }
  }

  pub fn notice(&self) -> String {
    match self {
      | Self::All => {
        "Showing all projects".to_string()
      }
      | Self::Tag(tag) => {
        format!(
          "Filter: {}",
          tag.to_uppercase()
        )
      }
    }
  }
}

/// Splits a comma-separated tag list, trimming each entry.
pub fn card_tag_list(
  raw: &str
) -> impl Iterator<Item = &str> {
  raw.split(',').map(str::trim)
}
