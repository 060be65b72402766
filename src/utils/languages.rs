/// Language codes accepted on the command line, paired with the display name
/// used in prompts. Codes match the localization keys of `.xcstrings` files.
pub const LANGUAGES: &[(&str, &str)] = &[
    // European
    ("en", "English"),
    ("tr", "Turkish"),
    ("fr", "French"),
    ("de", "German"),
    ("es", "Spanish"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("pt-BR", "Portuguese (Brazil)"),
    ("ru", "Russian"),
    ("nl", "Dutch"),
    ("sv", "Swedish"),
    ("no", "Norwegian"),
    ("da", "Danish"),
    ("fi", "Finnish"),
    ("pl", "Polish"),
    ("cs", "Czech"),
    ("sk", "Slovak"),
    ("ro", "Romanian"),
    ("hu", "Hungarian"),
    ("el", "Greek"),
    ("bg", "Bulgarian"),
    ("hr", "Croatian"),
    ("sr", "Serbian"),
    ("sl", "Slovenian"),
    ("lv", "Latvian"),
    ("lt", "Lithuanian"),
    ("et", "Estonian"),
    ("mt", "Maltese"),
    ("is", "Icelandic"),
    // Middle East & Africa
    ("ar", "Arabic"),
    ("he", "Hebrew"),
    ("fa", "Persian/Farsi"),
    ("ur", "Urdu"),
    ("sw", "Swahili"),
    ("am", "Amharic"),
    // Asia
    ("zh", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("hi", "Hindi"),
    ("bn", "Bengali"),
    ("th", "Thai"),
    ("vi", "Vietnamese"),
    ("id", "Indonesian"),
    ("ms", "Malay"),
    ("tl", "Filipino/Tagalog"),
    ("km", "Khmer"),
    ("lo", "Lao"),
    ("my", "Myanmar/Burmese"),
    ("ne", "Nepali"),
    ("si", "Sinhala"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("ml", "Malayalam"),
    ("kn", "Kannada"),
    ("gu", "Gujarati"),
    ("pa", "Punjabi"),
    ("mr", "Marathi"),
    ("or", "Odia"),
    ("as", "Assamese"),
    // Eastern Europe & Central Asia
    ("uk", "Ukrainian"),
    ("be", "Belarusian"),
    ("ka", "Georgian"),
    ("hy", "Armenian"),
    ("az", "Azerbaijani"),
    ("kk", "Kazakh"),
    ("ky", "Kyrgyz"),
    ("uz", "Uzbek"),
    ("tj", "Tajik"),
    ("mn", "Mongolian"),
    // Americas
    ("es-MX", "Spanish (Mexico)"),
    ("es-AR", "Spanish (Argentina)"),
    ("fr-CA", "French (Canada)"),
    ("qu", "Quechua"),
    ("gn", "Guarani"),
    // Regional & constructed
    ("eu", "Basque"),
    ("ca", "Catalan"),
    ("gl", "Galician"),
    ("cy", "Welsh"),
    ("ga", "Irish"),
    ("gd", "Scottish Gaelic"),
    ("br", "Breton"),
    ("eo", "Esperanto"),
];

pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}
