// SPDX-License-Identifier: MPL-2.0
//! Translation tables keyed by locale code.
//!
//! Tables are Fluent (`.ftl`) resources named after their locale
//! (`en.ftl`, `fr.ftl`). The release build embeds `assets/i18n/`; a custom
//! directory can be loaded instead for translators testing new strings.
//! The catalog is built once at startup and never mutated afterwards.

use super::LocaleCode;
use crate::error::{CatalogError, Result};
use fluent_bundle::FluentResource;
use rust_embed::RustEmbed;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

const TABLE_EXTENSION: &str = "ftl";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Immutable mapping from locale code to its parsed message table.
#[derive(Default, Clone)]
pub struct TranslationCatalog {
    tables: BTreeMap<LocaleCode, Arc<FluentResource>>,
}

impl fmt::Debug for TranslationCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationCatalog")
            .field("locales", &self.tables.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl TranslationCatalog {
    /// Loads the tables compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let mut sources = Vec::new();
        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(code) = locale_from_filename(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                sources.push((code, String::from_utf8_lossy(content.data.as_ref()).into_owned()));
            }
        }
        Self::from_sources(sources)
    }

    /// Loads every `<locale>.ftl` file found directly inside `dir`.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut sources = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Some(code) = path
                .file_name()
                .and_then(|name| name.to_str())
                .and_then(locale_from_filename)
            else {
                continue;
            };
            sources.push((code, fs::read_to_string(&path)?));
        }
        tracing::debug!(dir = %dir.display(), tables = sources.len(), "loaded translation directory");
        Self::from_sources(sources)
    }

    /// Builds a catalog from `(locale code, Fluent source)` pairs.
    ///
    /// Codes that are not valid language identifiers are skipped. A source
    /// with syntax errors fails the whole catalog.
    pub fn from_sources<I, C, S>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, S)>,
        C: Into<String>,
        S: Into<String>,
    {
        let mut tables = BTreeMap::new();
        for (code, source) in sources {
            let code: String = code.into();
            if code.parse::<LanguageIdentifier>().is_err() {
                tracing::warn!(locale = %code, "skipping translation table with invalid locale code");
                continue;
            }
            let resource = FluentResource::try_new(source.into()).map_err(|(_, errors)| {
                CatalogError::Parse {
                    locale: code.clone(),
                    details: format!("{:?}", errors),
                }
            })?;
            tables.insert(LocaleCode::new(code), Arc::new(resource));
        }

        if tables.is_empty() {
            return Err(CatalogError::Empty.into());
        }
        Ok(Self { tables })
    }

    /// The supported locale set, sorted by code.
    #[must_use]
    pub fn supported_locales(&self) -> Vec<LocaleCode> {
        self.tables.keys().cloned().collect()
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.tables.contains_key(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub(crate) fn tables(&self) -> impl Iterator<Item = (&LocaleCode, &Arc<FluentResource>)> {
        self.tables.iter()
    }
}

fn locale_from_filename(filename: &str) -> Option<String> {
    let (stem, extension) = filename.rsplit_once('.')?;
    (extension == TABLE_EXTENSION && !stem.is_empty()).then(|| stem.to_string())
}
