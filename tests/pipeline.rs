use tagcloud::prelude::*;
use tagcloud::tokenizer::{tokenize, SEPARATORS};

fn words(cloud: &Cloud) -> Vec<&str> {
  cloud.entries.iter().map(|e| e.word.as_str()).collect()
}

fn text_from_counts(counts: &[(&str, usize)]) -> String {
  counts
    .iter()
    .flat_map(|(word, count)| std::iter::repeat(*word).take(*count))
    .collect::<Vec<_>>()
    .join(" ")
}

#[test]
fn test_sentence_scenario() {
  let text = "The cat sat. The cat ran!";
  assert_eq!(tokenize(text), vec!["the", "cat", "sat", "the", "cat", "ran"]);

  let table = FrequencyTable::from_tokens(tokenize(text));
  assert_eq!(table.get("the"), Some(2));
  assert_eq!(table.get("cat"), Some(2));
  assert_eq!(table.get("sat"), Some(1));
  assert_eq!(table.get("ran"), Some(1));

  let cloud = generate(text, 2);
  assert_eq!(words(&cloud), vec!["cat", "the"]);
  assert!(cloud.entries.iter().all(|e| e.font_size == 16));
}

#[test]
fn test_boundary_ties_resolved_alphabetically() {
  let text = text_from_counts(&[("fox", 3), ("elk", 5), ("dog", 5), ("cat", 5)]);
  let cloud = generate(&text, 2);
  assert_eq!(words(&cloud), vec!["cat", "dog"]);
}

#[test]
fn test_two_word_scale_endpoints() {
  let text = text_from_counts(&[("a", 1), ("b", 10)]);
  let cloud = generate(&text, 2);

  assert_eq!(cloud.entries[0].word, "a");
  assert_eq!(cloud.entries[0].font_size, 11);
  assert_eq!(cloud.entries[1].word, "b");
  assert_eq!(cloud.entries[1].font_size, 48);
}

#[test]
fn test_zero_limit_and_empty_input() {
  assert!(generate("plenty of words here", 0).is_empty());
  assert!(generate("", 10).is_empty());
  assert!(generate("12 34 ... !!", 10).is_empty());
}

#[test]
fn test_size_is_min_of_limit_and_distinct_words() {
  let text = "alpha beta gamma delta alpha beta alpha";
  for limit in 0..8 {
    let cloud = generate(text, limit);
    assert_eq!(cloud.len(), limit.min(4), "limit {limit}");
    assert_eq!(cloud.distinct_words, 4);
  }
}

#[test]
fn test_output_properties() {
  let text = "It was the best of times, it was the worst of times; it was the age of \
              wisdom, it was the age of foolishness. In 1859: 'The' [spring] of hope*";
  let cloud = generate(text, 6);

  for entry in &cloud.entries {
    assert!((11..=48).contains(&entry.font_size));
    assert!(!entry.word.is_empty());
    assert!(!entry.word.chars().any(|c| SEPARATORS.contains(&c) || c == ' '));
    assert_eq!(entry.word, entry.word.to_lowercase());
  }

  let listed = words(&cloud);
  let mut sorted = listed.clone();
  sorted.sort();
  assert_eq!(listed, sorted);
}

#[test]
fn test_flat_counts_use_default_size() {
  let cloud = generate("one two three four", 3);
  assert_eq!(cloud.len(), 3);
  assert!(cloud.entries.iter().all(|e| e.font_size == 16));

  let single = generate("lonely lonely lonely", 5);
  assert_eq!(single.entries[0].font_size, 16);
}

#[test]
fn test_runs_are_identical() {
  let text = "zeta eta theta zeta iota kappa eta zeta lambda mu nu";
  let first = generate(text, 4);
  let second = generate(text, 4);
  assert_eq!(first, second);
}

#[test]
fn test_reader_matches_text() {
  let text = "Line one has words.\nLine two has more words!\n";
  let from_text = generate(text, 10);
  let from_reader = TagCloud::new().generate_from_reader(text.as_bytes(), 10);
  assert_eq!(from_text.entries, from_reader.entries);
  assert!(from_reader.fault.is_none());
}

#[test]
fn test_only_spaces_and_separators_split() {
  let cloud = generate("tab\tjoined tab\tjoined plain", 5);
  assert_eq!(words(&cloud), vec!["plain", "tab\tjoined"]);
  assert_eq!(cloud.entries[1].count, 2);
}

#[test]
fn test_reader_survives_undecodable_bytes() {
  let bytes: &[u8] = b"na\xefve start\nlater words later\n";
  let cloud = TagCloud::new().generate_from_reader(bytes, 10);
  assert!(cloud.fault.is_none());
  assert_eq!(cloud.total_tokens, 5);
  assert_eq!(words(&cloud), vec!["later", "na\u{FFFD}ve", "start", "words"]);
}
