//! Natural-language phrases turned into FTS5 match expressions.
//!
//! Words are matched independently and any one of them qualifies a row, the
//! way a natural-language full-text search behaves. Short words and common
//! stopwords carry no signal and are dropped before matching.

const MIN_TERM_LEN: usize = 3;

const STOPWORDS: &[&str] = &[
    "a", "about", "an", "are", "as", "at", "be", "by", "com", "de", "en", "for", "from", "how",
    "i", "in", "is", "it", "la", "of", "on", "or", "that", "the", "this", "to", "was", "what",
    "when", "where", "who", "will", "with", "und", "www",
];

/// Returns `None` when nothing in the phrase is searchable.
pub fn match_expression(phrase: &str) -> Option<String> {
    let mut terms: Vec<String> = Vec::new();

    for word in phrase.split(|c: char| !c.is_alphanumeric()) {
        let word = word.to_lowercase();
        if word.chars().count() < MIN_TERM_LEN
            || STOPWORDS.contains(&word.as_str())
            || terms.contains(&word)
        {
            continue;
        }
        terms.push(word);
    }

    if terms.is_empty() {
        return None;
    }

    // Quoting makes every term a plain string token, so operator words like
    // NOT or NEAR in user input stay literal.
    let quoted: Vec<String> = terms.iter().map(|term| format!("\"{term}\"")).collect();
    Some(quoted.join(" OR "))
}
