//! String helpers for names and flavor text

/// Uppercase the first character, leave the rest untouched
pub fn capitalise_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turn an API slug such as `"thunder-shock"` into `"Thunder Shock"`.
///
/// Hyphens and whitespace both separate words; runs of separators collapse.
pub fn capitalise_words(sentence: &str) -> String {
    sentence
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(capitalise_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Clean up Gen 3 flavor text.
///
/// Every casing of `POKéMON`/`POKEMON` becomes `Pokémon`, then shouted ASCII
/// words of three or more letters (species names in old games) are title-cased.
pub fn normalize_description(description: &str) -> String {
    title_case_shouting(&replace_pokemon_word(description))
}

const POKEMON: &str = "Pokémon";
const POKEMON_LEN: usize = 7;

fn replace_pokemon_word(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if is_pokemon_at(&chars[i..]) {
            out.push_str(POKEMON);
            i += POKEMON_LEN;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

fn is_pokemon_at(chars: &[char]) -> bool {
    if chars.len() < POKEMON_LEN {
        return false;
    }
    let is = |c: char, expected: char| c.to_ascii_lowercase() == expected;

    is(chars[0], 'p')
        && is(chars[1], 'o')
        && is(chars[2], 'k')
        && matches!(chars[3], 'É' | 'é' | 'E' | 'e')
        && is(chars[4], 'm')
        && is(chars[5], 'o')
        && is(chars[6], 'n')
}

fn title_case_shouting(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word = String::new();

    for c in text.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            word.push(c);
        } else {
            flush_word(&mut out, &mut word);
            out.push(c);
        }
    }
    flush_word(&mut out, &mut word);
    out
}

fn flush_word(out: &mut String, word: &mut String) {
    if word.len() >= 3 && word.chars().all(|c| c.is_ascii_uppercase()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first);
        }
        out.extend(chars.map(|c| c.to_ascii_lowercase()));
    } else {
        out.push_str(word);
    }
    word.clear();
}
