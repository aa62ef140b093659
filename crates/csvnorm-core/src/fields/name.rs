/// Uppercases the first character of each space-separated word, leaving the
/// rest of the word untouched. Consecutive spaces survive as empty words.
pub fn capitalize_name(value: &str) -> String {
    value
        .split(' ')
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
