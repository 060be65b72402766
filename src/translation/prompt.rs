use crate::catalog::Item;

/// Builds the single instruction sent to every vendor for one chunk.
///
/// The source texts travel as one JSON array so the model can answer with a
/// positionally aligned array of the same length.
pub fn build_prompt(texts: &[&str], target_lang_name: &str, source_lang_name: &str) -> String {
    // Serializing a slice of &str cannot fail.
    let input_json = serde_json::to_string(texts).unwrap_or_else(|_| "[]".to_string());
    let expected_count = texts.len();

    let mut prompt = String::new();

    prompt.push_str(&format!(
        "You are a professional localization assistant. Translate each {} UI string to {}, positionally aligned.\n",
        source_lang_name, target_lang_name
    ));
    prompt.push_str("Rules:\n");
    prompt.push_str(
        "- Keep all placeholder tokens unchanged and in the exact position: %@, %1$@, %2$@, %lld, %@x, {name}, [count], etc.\n",
    );
    prompt.push_str("- Preserve punctuation, ellipses, newlines, quotes style, and spacing.\n");
    prompt.push_str(&format!(
        "- If the {} string is ALL CAPS, return {} also in ALL CAPS.\n",
        source_lang_name, target_lang_name
    ));
    prompt.push_str("- Maintain the same tone and formality level as the source.\n");
    prompt.push_str(
        "- For UI elements, keep translations concise and appropriate for interface constraints.\n",
    );
    prompt.push_str(&format!(
        "Return ONLY a valid JSON array of strings with exactly {} items, in the same order as the input. No code fences, no labels, no extra text.\n",
        expected_count
    ));
    prompt.push('\n');
    prompt.push_str("INPUT_JSON:\n");
    prompt.push_str(&input_json);

    prompt
}

pub fn build_item_prompt(items: &[Item], target_lang_name: &str, source_lang_name: &str) -> String {
    let texts: Vec<&str> = items.iter().map(|i| i.source_text.as_str()).collect();
    build_prompt(&texts, target_lang_name, source_lang_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_direction_and_count() {
        let prompt = build_prompt(&["Hello", "World"], "French", "English");

        assert!(prompt.contains("Translate each English UI string to French"));
        assert!(prompt.contains("exactly 2 items"));
        assert!(
            prompt.contains("If the English string is ALL CAPS, return French also in ALL CAPS.")
        );
    }

    #[test]
    fn ends_with_input_as_json_array() {
        let prompt = build_prompt(&["Say \"hi\"", "%1$@ of %lld"], "German", "English");

        let (_, input) = prompt.split_once("INPUT_JSON:\n").unwrap();
        let parsed: Vec<String> = serde_json::from_str(input).unwrap();
        assert_eq!(parsed, vec!["Say \"hi\"", "%1$@ of %lld"]);
    }

    #[test]
    fn lists_placeholder_rules() {
        let prompt = build_prompt(&["x"], "Japanese", "English");

        for token in ["%@", "%1$@", "%lld", "{name}", "[count]"] {
            assert!(prompt.contains(token), "missing {}", token);
        }
        assert!(prompt.contains("No code fences"));
    }

    #[test]
    fn item_prompt_uses_source_texts_in_order() {
        let items = vec![Item::new("b", "Second"), Item::new("a", "First")];
        let prompt = build_item_prompt(&items, "Spanish", "English");

        assert!(prompt.ends_with(r#"["Second","First"]"#));
    }
}
