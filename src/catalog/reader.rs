use crate::utils::{Result, TranslatorError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use std::str::FromStr;

/// One translatable string pulled out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub key: String,
    pub source_text: String,
}

impl Item {
    pub fn new(key: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            source_text: source_text.into(),
        }
    }
}

/// In-memory `.xcstrings` document.
///
/// The whole JSON tree is kept so that unknown fields (comments, variations,
/// `extractionState`, ...) survive the round trip. Entry order is the order
/// of the file.
#[derive(Debug, Clone)]
pub struct Catalog {
    document: Value,
}

impl Catalog {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = tokio::fs::read_to_string(path.as_ref()).await?;
        content.parse()
    }

    pub(crate) fn document(&self) -> &Value {
        &self.document
    }

    pub(crate) fn strings(&self) -> &Map<String, Value> {
        // Checked in `from_str`, the only constructor.
        match self.document.get("strings") {
            Some(Value::Object(strings)) => strings,
            _ => unreachable!("catalog validated on construction"),
        }
    }

    pub(crate) fn strings_mut(&mut self) -> &mut Map<String, Value> {
        match self.document.get_mut("strings") {
            Some(Value::Object(strings)) => strings,
            _ => unreachable!("catalog validated on construction"),
        }
    }

    pub fn len(&self) -> usize {
        self.strings().len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings().is_empty()
    }

    pub fn source_language(&self) -> Option<&str> {
        self.document.get("sourceLanguage").and_then(Value::as_str)
    }

    /// Collects every entry with a non-blank string value for `source_lang`.
    pub fn items(&self, source_lang: &str) -> Vec<Item> {
        self.strings()
            .iter()
            .filter_map(|(key, entry)| {
                let text = string_unit(entry, source_lang)?
                    .get("value")?
                    .as_str()?;
                if text.trim().is_empty() {
                    None
                } else {
                    Some(Item::new(key.clone(), text))
                }
            })
            .collect()
    }

    /// Current `stringUnit.value` for `key` in `lang`, if any.
    pub fn value(&self, key: &str, lang: &str) -> Option<&str> {
        string_unit(self.strings().get(key)?, lang)?
            .get("value")?
            .as_str()
    }

    /// Current `stringUnit.state` for `key` in `lang`, if any.
    pub fn state(&self, key: &str, lang: &str) -> Option<&str> {
        string_unit(self.strings().get(key)?, lang)?
            .get("state")?
            .as_str()
    }
}

impl FromStr for Catalog {
    type Err = TranslatorError;

    fn from_str(content: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(content).map_err(|e| {
            TranslatorError::CatalogFormat(format!("failed to parse catalog as JSON: {}", e))
        })?;

        if !matches!(document.get("strings"), Some(Value::Object(_))) {
            return Err(TranslatorError::CatalogFormat(
                "missing \"strings\" root object".to_string(),
            ));
        }

        Ok(Self { document })
    }
}

fn string_unit<'a>(entry: &'a Value, lang: &str) -> Option<&'a Value> {
    entry.get("localizations")?.get(lang)?.get("stringUnit")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "sourceLanguage": "en",
        "strings": {
            "zeta": {
                "localizations": {
                    "en": { "stringUnit": { "state": "translated", "value": "Last" } }
                }
            },
            "alpha": {
                "localizations": {
                    "en": { "stringUnit": { "state": "translated", "value": "First" } },
                    "fr": { "stringUnit": { "state": "translated", "value": "Premier" } }
                }
            },
            "blank": {
                "localizations": {
                    "en": { "stringUnit": { "state": "translated", "value": "   " } }
                }
            },
            "numeric": {
                "localizations": {
                    "en": { "stringUnit": { "state": "translated", "value": 42 } }
                }
            },
            "no_localizations": {},
            "other_language_only": {
                "localizations": {
                    "de": { "stringUnit": { "state": "translated", "value": "Nur Deutsch" } }
                }
            }
        },
        "version": "1.0"
    }"#;

    #[test]
    fn collects_items_in_file_order() {
        let catalog: Catalog = SAMPLE.parse().unwrap();
        let items = catalog.items("en");

        assert_eq!(
            items,
            vec![Item::new("zeta", "Last"), Item::new("alpha", "First")]
        );
    }

    #[test]
    fn skips_blank_missing_and_non_string_values() {
        let catalog: Catalog = SAMPLE.parse().unwrap();
        let keys: Vec<_> = catalog.items("en").into_iter().map(|i| i.key).collect();

        assert!(!keys.contains(&"blank".to_string()));
        assert!(!keys.contains(&"numeric".to_string()));
        assert!(!keys.contains(&"no_localizations".to_string()));
        assert!(!keys.contains(&"other_language_only".to_string()));
    }

    #[test]
    fn reads_existing_values() {
        let catalog: Catalog = SAMPLE.parse().unwrap();
        assert_eq!(catalog.value("alpha", "fr"), Some("Premier"));
        assert_eq!(catalog.state("alpha", "fr"), Some("translated"));
        assert_eq!(catalog.value("zeta", "fr"), None);
        assert_eq!(catalog.source_language(), Some("en"));
        assert_eq!(catalog.len(), 6);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn empty_strings_object_is_a_valid_catalog() {
        let catalog: Catalog = r#"{"strings": {}}"#.parse().unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.source_language(), None);
        assert!(catalog.items("en").is_empty());
    }

    #[test]
    fn rejects_invalid_json() {
        let err = "{ not json".parse::<Catalog>().unwrap_err();
        assert!(matches!(err, TranslatorError::CatalogFormat(_)));
    }

    #[test]
    fn rejects_missing_strings_object() {
        let err = r#"{"sourceLanguage": "en"}"#.parse::<Catalog>().unwrap_err();
        assert!(matches!(err, TranslatorError::CatalogFormat(_)));

        let err = r#"{"strings": []}"#.parse::<Catalog>().unwrap_err();
        assert!(matches!(err, TranslatorError::CatalogFormat(_)));
    }
}
