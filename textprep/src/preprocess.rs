use regex::Regex;

const CONTRACTIONS: &[(&str, &str)] = &[
    ("can't", "cannot"),
    ("won't", "will not"),
    ("don't", "do not"),
    ("isn't", "is not"),
    ("aren't", "are not"),
    ("wasn't", "was not"),
    ("weren't", "were not"),
    ("haven't", "have not"),
    ("hasn't", "has not"),
    ("wouldn't", "would not"),
    ("shouldn't", "should not"),
    ("couldn't", "could not"),
];

/// Normalizes raw requirement text: lowercases, expands contractions,
/// strips punctuation other than `.,-`, and collapses whitespace.
#[must_use]
pub fn preprocess(text: &str) -> String {
    let mut cleaned = text.trim().to_lowercase();
    cleaned = cleaned.replace('&', "and");
    for (contraction, expansion) in CONTRACTIONS {
        cleaned = cleaned.replace(contraction, expansion);
    }
    let cleaned = Regex::new(r"[^\w\s.,\-!?]")
        .unwrap()
        .replace_all(&cleaned, "");
    Regex::new(r"\s+")
        .unwrap()
        .replace_all(cleaned.trim(), " ")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_collapses_whitespace() {
        let result = preprocess("The   Member\nClicks the Button.");
        assert_eq!(result, "the member clicks the button.");
    }

    #[test]
    fn expands_contractions_and_ampersand() {
        let result = preprocess("The user can't borrow books & journals");
        assert_eq!(result, "the user cannot borrow books and journals");
    }

    #[test]
    fn strips_stray_punctuation() {
        let result = preprocess("login (with password) @ the portal");
        assert_eq!(result, "login with password the portal");
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(preprocess("   "), "");
    }
}
