//! English pluralization for table names.

/// Words whose plural is the same as the singular.
const UNCOUNTABLE: &[&str] = &[
    "audio",
    "data",
    "equipment",
    "feedback",
    "fish",
    "information",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
];

/// Singular/plural pairs that no suffix rule covers.
const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("mouse", "mice"),
    ("ox", "oxen"),
    ("person", "people"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

/// Pluralizes a lowercase English noun.
///
/// Only the last `_`-separated word is inflected, so `blog_category`
/// becomes `blog_categories`. The result depends on the input alone.
pub fn pluralize(word: &str) -> String {
    let (head, last) = match word.rfind('_') {
        Some(idx) => word.split_at(idx + 1),
        None => ("", word),
    };
    format!("{head}{}", pluralize_word(last))
}

fn pluralize_word(s: &str) -> String {
    if s.is_empty() || UNCOUNTABLE.contains(&s) {
        return s.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == s) {
        return (*plural).to_string();
    }

    if s.ends_with("quiz") {
        format!("{s}zes")
    } else if s.ends_with("sis") {
        format!("{}ses", &s[..s.len() - 3])
    } else if s.ends_with("sh")
        || s.ends_with("ch")
        || s.ends_with('s')
        || s.ends_with('x')
        || s.ends_with('z')
    {
        format!("{s}es")
    } else if s.ends_with('y') && s.len() > 1 && !is_vowel_before(s, 1) {
        format!("{}ies", &s[..s.len() - 1])
    } else if s.ends_with("fe") && !s.ends_with("ffe") {
        format!("{}ves", &s[..s.len() - 2])
    } else if s.ends_with("lf") || s.ends_with("rf") {
        format!("{}ves", &s[..s.len() - 1])
    } else {
        format!("{s}s")
    }
}

/// Whether the byte `offset` positions before the last one is a vowel.
fn is_vowel_before(s: &str, offset: usize) -> bool {
    let bytes = s.as_bytes();
    bytes.len() > offset
        && matches!(
            bytes[bytes.len() - 1 - offset],
            b'a' | b'e' | b'i' | b'o' | b'u'
        )
}
