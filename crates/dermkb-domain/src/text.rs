//! Text normalization shared by index build and query time
//!
//! The index and the query engine must agree on one tokenization rule,
//! so it lives here in the domain layer and stays pure.

/// Minimum length for an indexable token
const MIN_TOKEN_LEN: usize = 2;

/// Tokenize free text into comparable terms
///
/// Lowercases, maps punctuation to spaces, splits on whitespace, and drops
/// tokens shorter than two characters. Deterministic: the same input always
/// yields the same tokens.
///
/// # Examples
///
/// ```
/// use dermkb_domain::tokenize;
///
/// let terms = tokenize("What causes eczema flare-ups?");
/// assert_eq!(terms, vec!["what", "causes", "eczema", "flare", "ups"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .map(|token| token.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        assert_eq!(
            tokenize("Is Psoriasis contagious?"),
            vec!["is", "psoriasis", "contagious"]
        );
    }

    #[test]
    fn test_short_tokens_dropped() {
        assert_eq!(tokenize("a B cd"), vec!["cd"]);
    }

    #[test]
    fn test_hyphen_splits() {
        assert_eq!(tokenize("flare-ups"), vec!["flare", "ups"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
        assert!(tokenize("!!! ??").is_empty());
    }

    #[test]
    fn test_numbers_kept() {
        assert_eq!(tokenize("6-12 weeks"), vec!["12", "weeks"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: tokenization is deterministic
        #[test]
        fn test_deterministic(text in ".{0,200}") {
            prop_assert_eq!(tokenize(&text), tokenize(&text));
        }

        /// Property: every token is lowercase, alphanumeric, and at least
        /// two characters long
        #[test]
        fn test_token_shape(text in ".{0,200}") {
            for token in tokenize(&text) {
                prop_assert!(token.chars().count() >= 2);
                prop_assert!(token.chars().all(char::is_alphanumeric));
                prop_assert_eq!(token.clone(), token.to_lowercase());
            }
        }

        /// Property: tokenizing already-tokenized output is a fixpoint
        #[test]
        fn test_fixpoint(text in "[a-zA-Z0-9 .,!?-]{0,200}") {
            let once = tokenize(&text).join(" ");
            let twice = tokenize(&once).join(" ");
            prop_assert_eq!(once, twice);
        }
    }
}
