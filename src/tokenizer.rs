//! Text tokenization.
//!
//! Text is split line by line, and each line on single spaces. Every
//! character in [`SEPARATORS`] counts as a space. Digits are separators, so
//! numerals never survive inside a token. Other whitespace such as tabs is
//! not a boundary. The set is fixed; it is not a Unicode word-boundary rule.

use crate::error::SourceReadFault;
use crate::types::Token;
use std::io::BufRead;

/// Characters that split words, in addition to the space.
pub const SEPARATORS: [char; 23] = [
  '\'', '[', '-', '.', ';', '!', '?', '"', ',', '_', '0', '1', '2', '3', '4', '5', '6', '7', '8',
  '9', '*', ':', ']',
];

/// Returns `true` if `c` ends a word.
pub fn is_separator(c: char) -> bool {
  c == ' ' || SEPARATORS.contains(&c)
}

/// Tokenize text into lowercase words.
///
/// Line breaks (`\n` or `\r\n`) end words like a space does. Empty pieces
/// between adjacent separators are dropped, so no token is ever the empty
/// string.
pub fn tokenize(text: &str) -> Vec<Token> {
  let mut tokens = Vec::new();
  for line in text.lines() {
    push_tokens(line, &mut tokens);
  }
  tokens
}

fn push_tokens(text: &str, tokens: &mut Vec<Token>) {
  tokens.extend(
    text
      .split(is_separator)
      .filter(|piece| !piece.is_empty())
      .map(str::to_lowercase),
  );
}

/// Tokens read from a line-oriented source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
  /// Tokens in source order.
  pub tokens: Vec<Token>,
  /// Set when reading stopped early because of an I/O error.
  pub fault: Option<SourceReadFault>,
}

/// Tokenize a reader line by line.
///
/// Bytes that are not valid UTF-8 are decoded as U+FFFD rather than ending
/// the read. An I/O error does not fail the call: tokenizing stops at the
/// line that could not be read, the tokens collected so far are returned and
/// the fault is reported through [`TokenStream::fault`] and a `warn!` log
/// record.
pub fn tokenize_reader<R: BufRead>(mut reader: R) -> TokenStream {
  let mut stream = TokenStream::default();
  let mut buf = Vec::new();
  let mut line_number = 0;

  loop {
    buf.clear();
    line_number += 1;
    match reader.read_until(b'\n', &mut buf) {
      Ok(0) => break,
      Ok(_) => {
        let line = String::from_utf8_lossy(&buf);
        let line = line.strip_suffix('\n').unwrap_or(&line[..]);
        let line = line.strip_suffix('\r').unwrap_or(line);
        push_tokens(line, &mut stream.tokens);
      }
      Err(err) => {
        let fault = SourceReadFault::new(line_number, &err);
        log::warn!("{fault}");
        stream.fault = Some(fault);
        break;
      }
    }
  }

  log::debug!("tokenized {} words", stream.tokens.len());
  stream
}
