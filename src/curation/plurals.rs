use std::collections::HashSet;

const WORD_LEN: usize = 5;

/// Endings that look plural but usually are not (CHESS, FOCUS, OASIS, CHAOS,
/// ATLAS, BOXES).
const KEEP_SUFFIXES: &[&str] = &["SS", "US", "IS", "OS", "AS", "XES"];

/// Suffix-rule plural check for uppercase five-letter words.
///
/// Flags anything ending in `S` except the endings in [`KEEP_SUFFIXES`].
/// Approximate by nature: it also flags third-person verbs and keeps some
/// real plurals.
pub fn is_plural(word: &str) -> bool {
    if word.len() != WORD_LEN || !word.ends_with('S') {
        return false;
    }
    !KEEP_SUFFIXES.iter().any(|suffix| word.ends_with(suffix))
}

/// Singular forms a plural could have come from: -IES to -Y, -VES to -F/-FE,
/// -ES and -S stripped. Empty for the non-plural endings `SS`, `US`, `IS`, `OS`.
pub fn plural_roots(word: &str) -> Vec<String> {
    if ["SS", "US", "IS", "OS"].iter().any(|suffix| word.ends_with(suffix)) {
        return Vec::new();
    }

    let mut roots = Vec::new();
    if let Some(stem) = word.strip_suffix("IES").filter(|s| !s.is_empty()) {
        roots.push(format!("{stem}Y"));
    }
    if let Some(stem) = word.strip_suffix("VES").filter(|s| !s.is_empty()) {
        roots.push(format!("{stem}FE"));
        roots.push(format!("{stem}F"));
    }
    if let Some(stem) = word.strip_suffix("ES").filter(|s| !s.is_empty()) {
        roots.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('S').filter(|s| !s.is_empty()) {
        roots.push(stem.to_string());
    }
    roots
}

/// Base forms a past tense could have come from: -IED to -Y, then -ED minus
/// the `D` (RACED to RACE) and minus `ED` (FIXED to FIX).
pub fn past_tense_roots(word: &str) -> Vec<String> {
    let mut roots = Vec::new();
    if let Some(stem) = word.strip_suffix("IED").filter(|s| !s.is_empty()) {
        roots.push(format!("{stem}Y"));
    }
    if let Some(stem) = word.strip_suffix("ED").filter(|s| !s.is_empty()) {
        roots.push(format!("{stem}E"));
        roots.push(stem.to_string());
    }
    roots
}

/// A word whose singular root is itself listed.
pub fn is_listed_plural(word: &str, listed: &HashSet<String>) -> bool {
    plural_roots(word).iter().any(|root| listed.contains(root))
}

/// A word whose present-tense root is itself listed.
pub fn is_listed_past_tense(word: &str, listed: &HashSet<String>) -> bool {
    past_tense_roots(word).iter().any(|root| listed.contains(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_rule() {
        assert!(!is_plural("GLASS"));
        assert!(is_plural("DOGES"));
        assert!(is_plural("TREES"));
        assert!(!is_plural("CHESS"));
        assert!(!is_plural("FOCUS"));
        assert!(!is_plural("OASIS"));
        assert!(!is_plural("CHAOS"));
        assert!(!is_plural("ATLAS"));
        assert!(!is_plural("BOXES"));
        assert!(!is_plural("CRANE"));
        assert!(!is_plural("CATS"));
    }

    #[test]
    fn listed_root() {
        let listed: HashSet<String> = ["BOOK".to_string()].into_iter().collect();
        assert!(is_listed_plural("BOOKS", &listed));
        assert!(!is_listed_plural("LOOKS", &listed));
        assert!(!is_listed_plural("BOOK", &listed));
    }

    #[test]
    fn plural_root_candidates() {
        assert_eq!(plural_roots("TRIES"), vec!["TRY", "TRI", "TRIE"]);
        assert_eq!(plural_roots("LIVES"), vec!["LIFE", "LIF", "LIV", "LIVE"]);
        assert_eq!(plural_roots("BOXES"), vec!["BOX", "BOXE"]);
        assert!(plural_roots("GLASS").is_empty());
        assert!(plural_roots("FOCUS").is_empty());
        assert!(plural_roots("CRANE").is_empty());
    }

    #[test]
    fn past_tense_root_candidates() {
        assert_eq!(past_tense_roots("DRIED"), vec!["DRY", "DRIE", "DRI"]);
        assert_eq!(past_tense_roots("RACED"), vec!["RACE", "RAC"]);
        assert_eq!(past_tense_roots("FIXED"), vec!["FIXE", "FIX"]);
        assert!(past_tense_roots("CRANE").is_empty());
        assert!(past_tense_roots("ED").is_empty());
    }
}
