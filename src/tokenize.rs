use crate::error::{CorpusError, CorpusResult};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::info;

const LETTERS: &str = "a-ząãéëłńòóôùżA-ZĄÃÉËŁŃÒÓÔÙŻ";

static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[{l}]+(?:['-][{l}]+)*", l = LETTERS)).expect("word pattern is valid")
});

/// Letters kept in the character stream (plus the space).
pub const KASHUBIAN_LETTERS: &str = "aąãbcćdeęéëfghijklłmnńoòóôprsśtuùvwyzźż";

/// Extracts lowercase word tokens. Embedded hyphens and apostrophes are kept
/// (`dlô-tegò`, `o'k`), leading or trailing ones are not.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Reduces raw text to the character stream used for letter statistics:
/// lowercase Kashubian letters and spaces, everything else dropped.
pub fn extract_characters(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| *c == ' ' || KASHUBIAN_LETTERS.contains(*c))
        .collect()
}

/// Reads a UTF-8 file, replacing invalid sequences instead of failing.
pub fn read_lossy<P: AsRef<Path>>(path: P) -> CorpusResult<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CorpusError::MissingInput(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Loads a token file and re-tokenizes it with the word pattern.
pub fn load_tokens<P: AsRef<Path>>(path: P) -> CorpusResult<Vec<String>> {
    let path = path.as_ref();
    let text = read_lossy(path)?;
    info!("📂 Loaded corpus: {} characters from {}", text.chars().count(), path.display());
    Ok(tokenize(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_keeps_diacritics_and_compounds() {
        let tokens = tokenize("Kaszëbë to je  pòmòrsczi-kraj, a 'cytat' 2024 r.");
        assert_eq!(
            tokens,
            vec!["kaszëbë", "to", "je", "pòmòrsczi-kraj", "a", "cytat", "r"]
        );
    }

    #[test]
    fn test_tokenize_one_per_line() {
        assert_eq!(tokenize("w\nhtml\nto\n"), vec!["w", "html", "to"]);
    }

    #[test]
    fn test_extract_characters() {
        assert_eq!(extract_characters("Òn, Je 7 Łôd!"), "òn je  łôd");
    }
}
