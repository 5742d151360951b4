//! Sentence and word tokenization
//!
//! Word boundaries come from the Unicode word segmentation rules (UAX #29).
//! On top of them the tokenizer follows the Penn Treebank conventions closely
//! enough for the tagger in [`crate::pos`]:
//!
//! - punctuation becomes its own token (runs such as `...` or `!!` stay together)
//! - clitics are split off (`wasn't` → `was` + `n't`, `it's` → `it` + `'s`)
//! - hyphenated and apostrophe-internal words stay whole (`air-fried`)
//!
//! Sentence boundaries are placed after terminal punctuation (`.`, `!`, `?`)
//! and every token records the sentence it belongs to.

use unicode_segmentation::UnicodeSegmentation;

/// Longest input, in characters, the tokenizer accepts.
pub const MAX_INPUT_CHARS: usize = 20_000;

/// Suffixes split off a word as separate tokens, longest first.
const CLITICS: &[&str] = &["n't", "'re", "'ve", "'ll", "'s", "'d", "'m"];

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TokenizeError {
    #[display("input of {len} characters exceeds the tokenizer limit of {max}")]
    InputTooLong { len: usize, max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum TokenKind {
    Word,
    Number,
    Clitic,
    Punctuation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    /// Zero-based index of the sentence containing this token.
    pub sentence: usize,
}

impl Token {
    #[must_use]
    pub fn is_sentence_terminal(&self) -> bool {
        self.kind.is_punctuation() && self.text.chars().all(|c| matches!(c, '.' | '!' | '?'))
    }
}

/// Splits text into tokens annotated with their sentence index.
///
/// Curly apostrophes are folded to `'` before splitting.
///
/// # Examples
///
/// ```
/// use surveylens_text::token::{self, TokenKind};
///
/// let tokens = token::tokenize("It wasn't dry. Loved it!").unwrap();
/// let texts = tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>();
/// assert_eq!(texts, ["It", "was", "n't", "dry", ".", "Loved", "it", "!"]);
/// assert_eq!(tokens[5].sentence, 1);
/// assert_eq!(tokens[2].kind, TokenKind::Clitic);
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, TokenizeError> {
    let len = text.chars().count();
    if len > MAX_INPUT_CHARS {
        return Err(TokenizeError::InputTooLong {
            len,
            max: MAX_INPUT_CHARS,
        });
    }

    let folded = text
        .chars()
        .map(|c| if matches!(c, '\u{2019}' | '\u{2018}') { '\'' } else { c })
        .collect::<String>();
    let segments = folded.split_word_bounds().collect::<Vec<_>>();

    let mut tokens = Vec::new();
    let mut sentence = 0;
    let mut i = 0;
    while i < segments.len() {
        let segment = segments[i];
        i += 1;
        if segment.chars().all(char::is_whitespace) {
            continue;
        }

        if is_word(segment) {
            // word bounds break at hyphens; compounds are rejoined
            let mut word = segment.to_owned();
            while segments.get(i) == Some(&"-")
                && segments.get(i + 1).is_some_and(|next| is_word(next))
            {
                word.push('-');
                word.push_str(segments[i + 1]);
                i += 2;
            }
            push_word(&mut tokens, word, sentence);
            continue;
        }

        let mut punct = segment.to_owned();
        while segments.get(i) == Some(&segment) {
            punct.push_str(segment);
            i += 1;
        }
        let token = Token {
            text: punct,
            kind: TokenKind::Punctuation,
            sentence,
        };
        let terminal = token.is_sentence_terminal();
        tokens.push(token);
        if terminal {
            sentence += 1;
        }
    }

    Ok(tokens)
}

/// Groups tokens by sentence, preserving order.
#[must_use]
pub fn sentences(tokens: &[Token]) -> Vec<&[Token]> {
    tokens
        .chunk_by(|a, b| a.sentence == b.sentence)
        .collect()
}

fn is_word(segment: &str) -> bool {
    segment.chars().any(char::is_alphanumeric)
}

fn push_word(tokens: &mut Vec<Token>, word: String, sentence: usize) {
    let lower = word.to_lowercase();
    for clitic in CLITICS {
        if lower.len() > clitic.len() && lower.ends_with(clitic) {
            let split = word.len() - clitic.len();
            let (stem, suffix) = word.split_at(split);
            tokens.push(word_token(stem.to_owned(), sentence));
            tokens.push(Token {
                text: suffix.to_owned(),
                kind: TokenKind::Clitic,
                sentence,
            });
            return;
        }
    }
    tokens.push(word_token(word, sentence));
}

fn word_token(text: String, sentence: usize) -> Token {
    let kind = if text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | ','))
    {
        TokenKind::Number
    } else {
        TokenKind::Word
    };
    Token {
        text,
        kind,
        sentence,
    }
}
