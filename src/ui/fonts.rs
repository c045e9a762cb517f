//! Maps configured font family names onto egui font families.
//!
//! egui does not enumerate system fonts, so a family is either one of the
//! two built-in families or a font file that gets loaded into the font set.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::types::TextStyle;
use eframe::egui::{FontData, FontDefinitions, FontFamily, FontId};
use log::{info, warn};

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

/// Resolved family for every configured family name.
#[derive(Debug, Default)]
pub struct FontBook {
    families: HashMap<String, FontFamily>,
}

impl FontBook {
    /// Resolve `names`, registering any font files in `defs`. The caller
    /// installs `defs` with `Context::set_fonts`.
    pub fn build<'a>(
        defs: &mut FontDefinitions,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self> {
        let mut families = HashMap::new();
        for name in names {
            if families.contains_key(name) {
                continue;
            }
            let family = resolve(defs, name)?;
            families.insert(name.to_string(), family);
        }
        Ok(Self { families })
    }

    pub fn family(&self, name: &str) -> FontFamily {
        self.families
            .get(name)
            .cloned()
            .unwrap_or(FontFamily::Proportional)
    }

    pub fn font_id(&self, style: &TextStyle) -> FontId {
        FontId::new(style.size, self.family(&style.family))
    }
}

fn resolve(defs: &mut FontDefinitions, name: &str) -> Result<FontFamily> {
    match name.trim().to_ascii_lowercase().as_str() {
        "monospace" | "mono" => return Ok(FontFamily::Monospace),
        "proportional" | "sans" | "sans-serif" => return Ok(FontFamily::Proportional),
        _ => {}
    }

    let path = Path::new(name);
    let is_font_file = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| FONT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
    if !is_font_file {
        warn!("Font family {name:?} is not available, using the proportional default");
        return Ok(FontFamily::Proportional);
    }

    let bytes = std::fs::read(path).map_err(|source| AppError::Font {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Loaded font {} ({} bytes)", path.display(), bytes.len());

    defs.font_data
        .insert(name.to_string(), Arc::new(FontData::from_owned(bytes)));
    // Keep the built-in fonts behind the loaded one for missing glyphs.
    let mut chain = vec![name.to_string()];
    if let Some(fallback) = defs.families.get(&FontFamily::Proportional) {
        chain.extend(fallback.iter().cloned());
    }
    let family = FontFamily::Name(name.into());
    defs.families.insert(family.clone(), chain);
    Ok(family)
}
