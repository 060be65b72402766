use crate::catalog::reader::Catalog;
use crate::utils::{Result, TranslatorError};
use serde_json::{json, Map, Value};
use std::path::Path;

/// `stringUnit.state` written for every machine translation.
pub const TRANSLATED_STATE: &str = "translated";

impl Catalog {
    /// Replaces the `target_lang` localization of `key` in place.
    pub fn merge_translation(&mut self, key: &str, target_lang: &str, text: &str) -> Result<()> {
        let entry = self
            .strings_mut()
            .get_mut(key)
            .ok_or_else(|| {
                TranslatorError::CatalogFormat(format!("unknown catalog key: {}", key))
            })?;

        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }

        let localizations = entry
            .as_object_mut()
            .map(|obj| {
                obj.entry("localizations")
                    .or_insert_with(|| Value::Object(Map::new()))
            })
            .ok_or_else(|| {
                TranslatorError::CatalogFormat(format!("entry {} is not an object", key))
            })?;

        if !localizations.is_object() {
            *localizations = Value::Object(Map::new());
        }

        if let Some(localizations) = localizations.as_object_mut() {
            localizations.insert(
                target_lang.to_string(),
                json!({
                    "stringUnit": {
                        "state": TRANSLATED_STATE,
                        "value": text,
                    }
                }),
            );
        }

        Ok(())
    }

    /// Two-space indented JSON, the layout the catalog was read in.
    pub fn to_pretty_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.document())?)
    }

    pub async fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = self.to_pretty_string()?;
        tokio::fs::write(path.as_ref(), content).await?;
        tracing::debug!(path = %path.as_ref().display(), "Catalog written");
        Ok(())
    }
}
