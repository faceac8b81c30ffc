use std::fs;

use daily_word::curation::{Blocklist, CurationOptions, Curator};
use tempfile::tempdir;

const INPUT: &[&str] = &[
    "crane", "BOOK", "books", "trees", "chess", "focus", "pepsi", "", "crane", "slate", "x-ray",
];

#[test]
fn normalisation_only_by_default() {
    let result = Curator::new(CurationOptions::default(), Blocklist::default()).curate(INPUT);
    assert_eq!(
        result.words,
        vec!["CRANE", "BOOKS", "TREES", "CHESS", "FOCUS", "PEPSI", "SLATE"]
    );
    assert_eq!(result.stats.normalize.blank_lines, 1);
    assert_eq!(result.stats.normalize.rejected_shape, 2);
    assert_eq!(result.stats.normalize.duplicates_removed, 1);
    assert_eq!(result.stats.kept, 7);
}

#[test]
fn suffix_rule_and_blocklist() {
    let options = CurationOptions {
        suffix_plurals: true,
        ..CurationOptions::default()
    };
    let blocklist = Blocklist::from_words(["Pepsi"]);
    let result = Curator::new(options, blocklist).curate(INPUT);

    assert_eq!(result.words, vec!["CRANE", "CHESS", "FOCUS", "SLATE"]);
    assert_eq!(result.stats.removed_suffix_plurals, 2);
    assert_eq!(result.stats.removed_blocklisted, 1);
    assert_eq!(result.stats.removed_listed_plurals, 0);
}

#[test]
fn listed_roots_only_catch_known_singulars() {
    let lines = ["BOOKS", "TREES", "TREE", "LOOKS", "SLATE"];
    let options = CurationOptions {
        listed_plurals: true,
        ..CurationOptions::default()
    };
    let result = Curator::new(options, Blocklist::default()).curate(&lines);

    // TREE only appears as a root; BOOK and LOOK never do.
    assert_eq!(result.words, vec!["BOOKS", "LOOKS", "SLATE"]);
    assert_eq!(result.stats.removed_listed_plurals, 1);
    assert_eq!(result.stats.normalize.rejected_shape, 1);
}

#[test]
fn past_tense_and_plural_roots_from_raw_input() {
    let lines = ["RACED", "RACE", "CITIES", "STORY", "STORIES", "FIXED", "FIX"];
    let plurals_only = CurationOptions {
        suffix_plurals: true,
        listed_plurals: true,
        ..CurationOptions::default()
    };
    let result = Curator::new(plurals_only, Blocklist::default()).curate(&lines);
    assert_eq!(result.words, vec!["RACED", "STORY", "FIXED"]);
    assert_eq!(result.stats.removed_past_tense, 0);

    let with_past_tense = CurationOptions {
        past_tense: true,
        ..plurals_only
    };
    let result = Curator::new(with_past_tense, Blocklist::default()).curate(&lines);
    assert_eq!(result.words, vec!["STORY"]);
    assert_eq!(result.stats.removed_past_tense, 2);
    assert_eq!(result.stats.kept, 1);
}

#[test]
fn listed_roots_follow_inflection_rules() {
    let lines = ["TRIES", "TRY", "LIVES", "LIFE", "BOXES", "BOX", "DRIED", "DRY", "SLATE"];
    let options = CurationOptions {
        listed_plurals: true,
        past_tense: true,
        ..CurationOptions::default()
    };
    let result = Curator::new(options, Blocklist::default()).curate(&lines);

    assert_eq!(result.words, vec!["SLATE"]);
    assert_eq!(result.stats.removed_listed_plurals, 3);
    assert_eq!(result.stats.removed_past_tense, 1);
}

#[test]
fn blocklist_file_ignores_comments() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("blocklist.txt");
    fs::write(&path, "# brand names\npepsi\n\n  Cisco \n").unwrap();

    let blocklist = Blocklist::load(&path).unwrap();
    assert_eq!(blocklist.len(), 2);
    assert!(blocklist.contains("PEPSI"));
    assert!(blocklist.contains("cisco"));
    assert!(!blocklist.contains("# BRAND NAMES"));
}
