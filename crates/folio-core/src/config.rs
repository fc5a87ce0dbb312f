//! Page-level settings.
//!
//! The page may embed a TOML block
//! (`<script type="application/toml" id="folio-config">`) to adjust
//! timings and switch behaviors off. Every field has a default, so an
//! absent or partial block is fine.

use anyhow::Context;
use serde::Deserialize;
use tracing::{
  debug,
  warn
};

use crate::guard::{
  DEFAULT_BLOCKED_KEYS,
  PROTECTED_NOTICE,
  PROTECTED_NOTICE_MS
};
use crate::theme::THEME_STORAGE_KEY;
use crate::tilt::TiltSettings;
use crate::toast::TOAST_DURATION_MS;
use crate::trail::{
  DEFAULT_PRESS_SCALE,
  DEFAULT_SMOOTHING
};

pub const CONFIG_ELEMENT_ID: &str =
  "folio-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
  pub theme_storage_key: String,
  pub toast:             ToastConfig,
  pub tilt:              TiltConfig,
  pub cursor:            CursorConfig,
  pub protection:        ProtectionConfig
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
  pub duration_ms: u32
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
  pub enabled:        bool,
  pub amplitude_deg:  f64,
  pub perspective_px: f64,
  pub lift_px:        f64
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
  pub enabled:     bool,
  pub smoothing:   f64,
  pub press_scale: f64
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProtectionConfig {
  pub enabled:      bool,
  pub notice:       String,
  pub notice_ms:    u32,
  pub blocked_keys: Vec<String>
}

impl Default for SiteConfig {
  fn default() -> Self {
    Self {
      theme_storage_key: THEME_STORAGE_KEY
        .to_string(),
      toast:             ToastConfig::default(),
      tilt:              TiltConfig::default(),
      cursor:            CursorConfig::default(),
      protection:        ProtectionConfig::default()
    }
  }
}

impl Default for ToastConfig {
  fn default() -> Self {
    Self {
      duration_ms: TOAST_DURATION_MS
    }
  }
}

impl Default for TiltConfig {
  fn default() -> Self {
    let settings = TiltSettings::default();
    Self {
      enabled:        true,
      amplitude_deg:  settings.amplitude_deg,
      perspective_px: settings
        .perspective_px,
      lift_px:        settings.lift_px
    }
  }
}

impl Default for CursorConfig {
  fn default() -> Self {
    Self {
      enabled:     true,
      smoothing:   DEFAULT_SMOOTHING,
      press_scale: DEFAULT_PRESS_SCALE
    }
  }
}

impl Default for ProtectionConfig {
  fn default() -> Self {
    Self {
      enabled:      true,
      notice:       PROTECTED_NOTICE
        .to_string(),
      notice_ms:    PROTECTED_NOTICE_MS,
      blocked_keys: DEFAULT_BLOCKED_KEYS
        .iter()
        .map(|key| key.to_string())
        .collect()
    }
  }
}

impl TiltConfig {
  pub fn settings(&self) -> TiltSettings {
    TiltSettings {
      amplitude_deg:  self.amplitude_deg,
      perspective_px: self.perspective_px,
      lift_px:        self.lift_px
    }
  }
}

impl SiteConfig {
  #[tracing::instrument(skip(text))]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let cfg: SiteConfig =
      toml::from_str(text).context(
        "failed to parse page \
         configuration"
      )?;
    debug!(?cfg, "parsed page configuration");
    Ok(cfg.sanitized())
  }

  /// Loads from an optional inline block; bad input falls back to
  /// defaults.
  pub fn load(
    inline: Option<&str>
  ) -> Self {
    match inline.map(str::trim) {
      | None | Some("") => Self::default(),
      | Some(text) => {
        match Self::from_toml_str(text) {
          | Ok(cfg) => cfg,
          | Err(error) => {
            tracing::error!(
              ?error,
              "invalid page configuration; \
               using defaults"
            );
            Self::default()
          }
        }
      }
    }
  }

  pub fn sanitized(mut self) -> Self {
    if self.theme_storage_key.trim().is_empty()
    {
      warn!(
        "empty theme storage key; using \
         default"
      );
      self.theme_storage_key =
        THEME_STORAGE_KEY.to_string();
    }

    self.toast.duration_ms =
      self.toast.duration_ms.max(1);
    self.protection.notice_ms =
      self.protection.notice_ms.max(1);

    let smoothing = self.cursor.smoothing;
    let in_range =
      smoothing > 0.0 && smoothing <= 1.0;
    if !in_range {
      warn!(
        smoothing,
        "cursor smoothing out of range; \
         clamping"
      );
      self.cursor.smoothing =
        if smoothing.is_finite()
          && smoothing > 1.0
        {
          1.0
        } else {
          DEFAULT_SMOOTHING
        };
    }

    self.protection.blocked_keys = self
      .protection
      .blocked_keys
      .iter()
      .map(|key| key.trim().to_lowercase())
      .filter(|key| !key.is_empty())
      .collect();

    self
  }
}
