use once_cell::sync::Lazy;
use regex::Regex;

/// One field per match: a separator (comma, newline, or start of record)
/// followed by either a quoted field or a bare run of characters. Doubled
/// quotes inside a quoted field stand for one literal quote.
static FIELD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:,|\n|^)("(?:(?:"")*[^"]*)*"|[^",\n]*|(?:\n|$))"#)
        .expect("field pattern must compile")
});

/// Splits one logical CSV record into its fields, stripping enclosing quotes
/// and collapsing `""` escapes. A trailing comma yields a trailing empty
/// field, a leading comma a leading one.
pub fn tokenize_record(record: &str) -> Vec<String> {
    let mut fields = Vec::new();

    // The separator alternation consumes a record-leading comma outright, so
    // the empty field in front of it has to be seeded by hand.
    if record.starts_with(',') {
        fields.push(String::new());
    }

    for caps in FIELD_PATTERN.captures_iter(record) {
        let raw = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        fields.push(unquote(raw));
    }

    fields
}

fn unquote(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        raw[1..raw.len() - 1].replace("\"\"", "\"")
    } else {
        raw.to_string()
    }
}
