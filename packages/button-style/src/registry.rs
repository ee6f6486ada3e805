//! Named styles: built-in presets plus styles read from a style sheet.
//!
//! A style sheet is a TOML (or JSON) document of `[styles.<id>]` tables.
//! Each entry names a variant and overrides any preset field it sets:
//!
//! ```toml
//! [styles.submit]
//! variant = "loading"
//! placement = "leading"
//! background_paint = "red"
//! disabled_paint = "#FF3B3080"
//! shape = { kind = "rect", corner_radius = 8.0 }
//! ```

use crate::loading::LoadingPlacement;
use crate::paint::Paint;
use crate::shape::Shape;
use crate::style::{ButtonStyle, StyleKind};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// One `[styles.<id>]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleEntry {
    pub variant: StyleKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<LoadingPlacement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_paint: Option<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressed_text_paint: Option<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_paint: Option<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressed_background_paint: Option<Paint>,
    /// Loading fill; only valid for the loading variant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_paint: Option<Paint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_padding: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_padding: Option<f32>,
}

impl StyleEntry {
    /// Entry that reproduces the preset for `variant`.
    pub fn new(variant: StyleKind) -> Self {
        Self {
            variant,
            placement: None,
            text_paint: None,
            pressed_text_paint: None,
            background_paint: None,
            pressed_background_paint: None,
            disabled_paint: None,
            shape: None,
            vertical_padding: None,
            horizontal_padding: None,
        }
    }

    /// Resolve the entry against its variant's preset.
    pub fn to_style(&self) -> Result<ButtonStyle> {
        let is_loading = self.variant == StyleKind::Loading;
        if !is_loading && self.placement.is_some() {
            return Err(Error::InvalidOperation(format!(
                "placement is only valid for loading styles, not {}",
                self.variant
            )));
        }
        if !is_loading && self.disabled_paint.is_some() {
            return Err(Error::InvalidOperation(format!(
                "disabled_paint is only valid for loading styles, not {}",
                self.variant
            )));
        }

        let mut style = match self.variant {
            StyleKind::Loading => ButtonStyle::loading(self.placement.unwrap_or_default()),
            kind => kind.preset(),
        };
        let config = &mut style.config;

        if let Some(paint) = &self.text_paint {
            config.text_paint = paint.clone();
            // Presets with no distinct pressed text follow the idle paint.
            if self.variant != StyleKind::Bouncy && self.pressed_text_paint.is_none() {
                config.pressed_text_paint = paint.clone();
            }
        }
        if let Some(paint) = &self.pressed_text_paint {
            config.pressed_text_paint = paint.clone();
        }
        if let Some(paint) = &self.background_paint {
            config.background_paint = paint.clone();
            if !matches!(self.variant, StyleKind::Bouncy | StyleKind::Loading)
                && self.pressed_background_paint.is_none()
            {
                config.pressed_background_paint = paint.clone();
            }
        }
        if let Some(paint) = self
            .disabled_paint
            .as_ref()
            .or(self.pressed_background_paint.as_ref())
        {
            config.pressed_background_paint = paint.clone();
        }
        if let Some(shape) = self.shape {
            if let Shape::Rect { corner_radius } = shape {
                check_length("corner_radius", corner_radius)?;
            }
            config.shape = shape;
        }
        if let Some(padding) = self.vertical_padding {
            config.vertical_padding = check_length("vertical_padding", padding)?;
        }
        if let Some(padding) = self.horizontal_padding {
            config.horizontal_padding = check_length("horizontal_padding", padding)?;
        }

        Ok(style)
    }
}

/// Paddings and corner radii must be finite and non-negative.
fn check_length(field: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidLength { field, value })
    }
}

/// A document of named style entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    #[serde(default)]
    pub styles: BTreeMap<String, StyleEntry>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the default style sheet path.
    ///
    /// Default path: `<config dir>/button-style/styles.toml`
    /// Can be overridden with `BUTTON_STYLE_FILE` environment variable.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = env::var("BUTTON_STYLE_FILE") {
            return PathBuf::from(path);
        }

        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("button-style/styles.toml"))
            .unwrap_or_else(|| PathBuf::from("styles.toml"))
    }

    /// Parse and validate a TOML document.
    pub fn parse(content: &str) -> Result<Self> {
        let sheet: Self = toml::from_str(content)?;
        sheet.validate()?;
        Ok(sheet)
    }

    /// Load the sheet from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::default_path())
    }

    /// Load a sheet; a missing file is an empty sheet.
    ///
    /// Files ending in `.json` are read as JSON, anything else as TOML.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No style sheet at {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let sheet = if is_json(path) {
            let sheet: Self = serde_json::from_str(&content)?;
            sheet.validate()?;
            sheet
        } else {
            Self::parse(&content)?
        };

        tracing::debug!(
            "Loaded {} styles from {}",
            sheet.styles.len(),
            path.display()
        );
        Ok(sheet)
    }

    /// Write the sheet, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };
        fs::write(path, content)?;

        tracing::debug!("Saved {} styles to {}", self.styles.len(), path.display());
        Ok(())
    }

    pub fn insert(&mut self, id: impl Into<String>, entry: StyleEntry) {
        self.styles.insert(id.into(), entry);
    }

    /// Resolve every entry, in id order.
    pub fn resolve(&self) -> Result<Vec<(String, ButtonStyle)>> {
        self.styles
            .iter()
            .map(|(id, entry)| Ok((id.clone(), entry.to_style()?)))
            .collect()
    }

    fn validate(&self) -> Result<()> {
        self.resolve().map(|_| ())
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Basic style information for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleInfo {
    pub id: String,
    pub kind: StyleKind,
    pub builtin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<LoadingPlacement>,
}

/// Registry of all available styles.
pub struct StyleRegistry {
    builtins: HashMap<&'static str, fn() -> ButtonStyle>,
    custom: BTreeMap<String, ButtonStyle>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            builtins: HashMap::new(),
            custom: BTreeMap::new(),
        };

        // Register all built-in presets
        registry.register("capsule", ButtonStyle::capsule);
        registry.register("bouncy", ButtonStyle::bouncy);
        registry.register("growing", ButtonStyle::growing);
        registry.register("shape", ButtonStyle::shape);
        registry.register("primary", ButtonStyle::primary);
        registry.register("loading", || ButtonStyle::loading(LoadingPlacement::default()));

        registry
    }

    /// Registry with built-ins plus every style in `sheet`.
    pub fn with_sheet(sheet: &StyleSheet) -> Result<Self> {
        let mut registry = Self::new();
        registry.merge_sheet(sheet)?;
        Ok(registry)
    }

    fn register(&mut self, id: &'static str, style_fn: fn() -> ButtonStyle) {
        self.builtins.insert(id, style_fn);
    }

    /// Add or replace a named style. Custom styles shadow built-ins.
    pub fn insert(&mut self, id: impl Into<String>, style: ButtonStyle) {
        let id = id.into();
        if self.builtins.contains_key(id.as_str()) {
            tracing::warn!("Style {} shadows a built-in preset", id);
        }
        self.custom.insert(id, style);
    }

    /// Resolve and add every style in `sheet`. Nothing is added if any
    /// entry is invalid.
    pub fn merge_sheet(&mut self, sheet: &StyleSheet) -> Result<usize> {
        let resolved = sheet.resolve()?;
        let count = resolved.len();
        for (id, style) in resolved {
            self.insert(id, style);
        }
        tracing::debug!("Merged {} styles from sheet", count);
        Ok(count)
    }

    /// Get a style by ID.
    pub fn get(&self, id: &str) -> Option<ButtonStyle> {
        self.custom
            .get(id)
            .cloned()
            .or_else(|| self.builtins.get(id).map(|f| f()))
    }

    /// Like [`get`](Self::get), but an unknown id is an error.
    pub fn require(&self, id: &str) -> Result<ButtonStyle> {
        self.get(id).ok_or_else(|| Error::UnknownStyle(id.to_string()))
    }

    /// All available styles, sorted by id.
    pub fn list(&self) -> Vec<StyleInfo> {
        let mut ids: Vec<&str> = self.builtins.keys().copied().collect();
        ids.extend(self.custom.keys().map(String::as_str));
        ids.sort_unstable();
        ids.dedup();

        ids.into_iter()
            .filter_map(|id| {
                let style = self.get(id)?;
                Some(StyleInfo {
                    id: id.to_string(),
                    kind: style.kind(),
                    builtin: !self.custom.contains_key(id),
                    placement: style.placement(),
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.list().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Rgba;
    use crate::types::InteractionState;
    use tempfile::tempdir;

    const SHEET: &str = r##"
[styles.submit]
variant = "loading"
placement = "leading"
background_paint = "red"
disabled_paint = "#FF3B3080"

[styles.tile]
variant = "shape"
text_paint = "white"
background_paint = { gradient = ["red", "orange"] }
shape = { kind = "rect", corner_radius = 4.0 }
"##;

    #[test]
    fn test_builtins_registered() {
        let registry = StyleRegistry::new();
        assert_eq!(registry.len(), 6);
        for kind in StyleKind::ALL {
            let style = registry.get(kind.as_str()).unwrap();
            assert_eq!(style.kind(), kind);
        }
        assert!(registry.get("missing").is_none());
        assert!(matches!(registry.require("missing"), Err(Error::UnknownStyle(_))));
    }

    #[test]
    fn test_parse_sheet() {
        let sheet = StyleSheet::parse(SHEET).unwrap();
        let registry = StyleRegistry::with_sheet(&sheet).unwrap();

        let submit = registry.get("submit").unwrap();
        assert_eq!(submit.placement(), Some(LoadingPlacement::Leading));
        assert_eq!(submit.config.background_paint, Paint::Color(Rgba::RED));
        let busy = submit.render_with_loading(InteractionState::Idle, true);
        assert_eq!(busy.background_paint, Paint::Color(Rgba::hex("#FF3B3080").unwrap()));

        let tile = registry.get("tile").unwrap();
        assert_eq!(tile.config.shape, Shape::rounded_rect(4.0));
        assert_eq!(tile.config.pressed_background_paint, tile.config.background_paint);
        // untouched fields keep preset defaults
        assert_eq!(tile.config.vertical_padding, 10.0);

        let listed: Vec<_> = registry.list().into_iter().map(|i| i.id).collect();
        assert!(listed.contains(&"submit".to_string()));
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_bouncy_keeps_pressed_defaults() {
        let mut entry = StyleEntry::new(StyleKind::Bouncy);
        entry.text_paint = Some(Paint::Color(Rgba::RED));
        entry.background_paint = Some(Paint::Color(Rgba::GREEN));
        let style = entry.to_style().unwrap();
        assert_eq!(style.config.pressed_text_paint, Paint::Color(Rgba::WHITE));
        assert_eq!(style.config.pressed_background_paint, Paint::Color(Rgba::CYAN));
    }

    #[test]
    fn test_rejects_negative_padding() {
        let err = StyleSheet::parse(
            r#"
[styles.bad]
variant = "capsule"
vertical_padding = -1.0
"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidLength { field: "vertical_padding", .. }));
    }

    #[test]
    fn test_rejects_bad_corner_radius() {
        let err = StyleSheet::parse(
            r#"
[styles.bad]
variant = "shape"
shape = { kind = "rect", corner_radius = -4.0 }
"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidLength { field: "corner_radius", .. }));

        let mut entry = StyleEntry::new(StyleKind::Shape);
        entry.shape = Some(Shape::rounded_rect(f32::NAN));
        assert!(matches!(entry.to_style(), Err(Error::InvalidLength { .. })));

        entry.shape = Some(Shape::rounded_rect(0.0));
        assert!(entry.to_style().is_ok());
    }

    #[test]
    fn test_rejects_placement_on_press_style() {
        let err = StyleSheet::parse(
            r#"
[styles.bad]
variant = "growing"
placement = "top"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidOperation(_)));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = StyleSheet::parse(
            r#"
[styles.bad]
variant = "capsule"
colour = "red"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let sheet = StyleSheet::load_from_path(&dir.path().join("nope.toml")).unwrap();
        assert!(sheet.styles.is_empty());
    }

    #[test]
    fn test_save_and_load_toml_and_json() {
        let dir = tempdir().unwrap();
        let sheet = StyleSheet::parse(SHEET).unwrap();

        for name in ["nested/styles.toml", "styles.json"] {
            let path = dir.path().join(name);
            sheet.save_to_path(&path).unwrap();
            let loaded = StyleSheet::load_from_path(&path).unwrap();
            assert_eq!(loaded, sheet, "{name}");
        }
    }

    #[test]
    fn test_faded_paints_survive_save_and_load() {
        let dir = tempdir().unwrap();
        let mut entry = StyleEntry::new(StyleKind::Loading);
        entry.disabled_paint = Some(Paint::Color(Rgba::RED.opacity(0.5)));
        entry.background_paint = Some(Paint::gradient([Rgba::BLUE.opacity(0.8), Rgba::CYAN]));
        let mut sheet = StyleSheet::new();
        sheet.insert("submit", entry);

        for name in ["faded.toml", "faded.json"] {
            let path = dir.path().join(name);
            sheet.save_to_path(&path).unwrap();
            let loaded = StyleSheet::load_from_path(&path).unwrap();
            assert_eq!(loaded, sheet, "{name}");
        }
    }

    #[test]
    fn test_custom_shadows_builtin() {
        let mut registry = StyleRegistry::new();
        registry.insert("capsule", ButtonStyle::growing());
        assert_eq!(registry.get("capsule").unwrap().kind(), StyleKind::Growing);
        assert_eq!(registry.len(), 6);
        assert!(!registry.list().iter().find(|i| i.id == "capsule").unwrap().builtin);
    }
}
