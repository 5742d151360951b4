//! Part-of-speech tagging
//!
//! A small rule-based tagger over the Penn Treebank tag set. Tagging happens in
//! three passes:
//!
//! 1. **Lookup**: closed-class and known words take their tag from the [`Lexicon`].
//! 2. **Guess**: unknown words are tagged from their shape and suffix
//!    (`-ous`/`-ful`/`-y` adjectives, `-ly` adverbs, `-ed` participles,
//!    comparatives of known adjectives, numbers, proper nouns).
//! 3. **Repair**: contextual rules fix the common ambiguities of review text,
//!    e.g. a participle after a copula or degree adverb (`was overdone`,
//!    `well cooked`) or in front of a noun (`smoked flavour`) is an adjective.
//!
//! Rules never look across sentence boundaries.

use crate::{
    lemma::Lemmatizer,
    lexicon::Lexicon,
    token::{self, Token, TokenKind},
};

/// Longest token sequence tagged in one call.
pub const MAX_TAGGED_TOKENS: usize = 4096;

/// Penn Treebank part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PosTag {
    #[display("CC")]
    Cc,
    #[display("CD")]
    Cd,
    #[display("DT")]
    Dt,
    #[display("EX")]
    Ex,
    #[display("IN")]
    In,
    #[display("JJ")]
    Jj,
    #[display("JJR")]
    Jjr,
    #[display("JJS")]
    Jjs,
    #[display("MD")]
    Md,
    #[display("NN")]
    Nn,
    #[display("NNS")]
    Nns,
    #[display("NNP")]
    Nnp,
    #[display("PDT")]
    Pdt,
    #[display("POS")]
    Pos,
    #[display("PRP")]
    Prp,
    #[display("PRP$")]
    PrpPossessive,
    #[display("RB")]
    Rb,
    #[display("RBR")]
    Rbr,
    #[display("RBS")]
    Rbs,
    #[display("RP")]
    Rp,
    #[display("TO")]
    To,
    #[display("UH")]
    Uh,
    #[display("VB")]
    Vb,
    #[display("VBD")]
    Vbd,
    #[display("VBG")]
    Vbg,
    #[display("VBN")]
    Vbn,
    #[display("VBP")]
    Vbp,
    #[display("VBZ")]
    Vbz,
    #[display("WDT")]
    Wdt,
    #[display("WP")]
    Wp,
    #[display("WRB")]
    Wrb,
    #[display(".")]
    Terminal,
    #[display(",")]
    Comma,
    #[display(":")]
    Colon,
    #[display("SYM")]
    Sym,
}

impl PosTag {
    /// Adjective, comparative adjective or superlative adjective.
    #[must_use]
    pub fn is_adjective(self) -> bool {
        matches!(self, Self::Jj | Self::Jjr | Self::Jjs)
    }

    #[must_use]
    pub fn is_noun(self) -> bool {
        matches!(self, Self::Nn | Self::Nns | Self::Nnp)
    }

    fn is_participle(self) -> bool {
        matches!(self, Self::Vbd | Self::Vbg | Self::Vbn)
    }

    fn is_modifier_slot(self) -> bool {
        matches!(self, Self::Dt | Self::PrpPossessive | Self::Pdt) || self.is_adjective()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TagError {
    #[display("{len} tokens exceed the tagger window of {max}")]
    WindowExceeded { len: usize, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub token: Token,
    pub tag: PosTag,
}

#[derive(Debug, Clone, Copy)]
pub struct Tagger<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> Tagger<'a> {
    #[must_use]
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Tags a token sequence produced by [`token::tokenize`].
    ///
    /// # Examples
    ///
    /// ```
    /// use surveylens_text::{lexicon::Lexicon, pos::{PosTag, Tagger}, token};
    ///
    /// let tagger = Tagger::new(Lexicon::shared());
    /// let tokens = token::tokenize("The sauce was too salty").unwrap();
    /// let tags = tagger.tag(&tokens).unwrap().iter().map(|t| t.tag).collect::<Vec<_>>();
    /// assert_eq!(tags, [PosTag::Dt, PosTag::Nn, PosTag::Vbd, PosTag::Rb, PosTag::Jj]);
    /// ```
    pub fn tag(&self, tokens: &[Token]) -> Result<Vec<TaggedToken>, TagError> {
        if tokens.len() > MAX_TAGGED_TOKENS {
            return Err(TagError::WindowExceeded {
                len: tokens.len(),
                max: MAX_TAGGED_TOKENS,
            });
        }

        let mut tagged = Vec::with_capacity(tokens.len());
        for sentence in token::sentences(tokens) {
            let mut tags = sentence
                .iter()
                .enumerate()
                .map(|(i, token)| {
                    let prev = i.checked_sub(1).and_then(|p| sentence.get(p));
                    self.initial_tag(token, i == 0, prev)
                })
                .collect::<Vec<_>>();
            self.repair(sentence, &mut tags);
            tagged.extend(
                sentence
                    .iter()
                    .cloned()
                    .zip(tags)
                    .map(|(token, tag)| TaggedToken { token, tag }),
            );
        }
        Ok(tagged)
    }

    fn initial_tag(&self, token: &Token, sentence_start: bool, prev: Option<&Token>) -> PosTag {
        match token.kind {
            TokenKind::Punctuation => return punctuation_tag(&token.text),
            TokenKind::Number => return PosTag::Cd,
            TokenKind::Clitic => return clitic_tag(&token.text, prev),
            TokenKind::Word => {}
        }

        let lower = token.text.to_lowercase();
        if let Some(tag) = self.lexicon.known_tag(&lower) {
            return tag;
        }
        self.guess_tag(&token.text, &lower, sentence_start)
    }

    fn guess_tag(&self, surface: &str, lower: &str, sentence_start: bool) -> PosTag {
        if lower.chars().any(|c| c.is_ascii_digit()) {
            return PosTag::Cd;
        }
        if !sentence_start && surface.chars().next().is_some_and(char::is_uppercase) {
            return PosTag::Nnp;
        }

        let lemmatizer = Lemmatizer::new(self.lexicon);
        if let Some(tag) = lemmatizer.comparative_degree(lower) {
            return tag;
        }

        if lower.ends_with("ly") {
            return PosTag::Rb;
        }
        if lower.ends_with("ing") && lower.len() > 4 {
            return PosTag::Vbg;
        }
        if lower.ends_with("ed") && lower.len() > 3 {
            return PosTag::Vbn;
        }
        if has_adjective_suffix(lower) {
            return PosTag::Jj;
        }
        if lower.ends_with('s') && !lower.ends_with("ss") && !lower.ends_with("us") && lower.len() > 3
        {
            return PosTag::Nns;
        }
        PosTag::Nn
    }

    fn repair(&self, sentence: &[Token], tags: &mut [PosTag]) {
        for i in 0..tags.len() {
            let word = sentence[i].text.to_lowercase();
            let prev_word = i
                .checked_sub(1)
                .map(|p| sentence[p].text.to_lowercase());
            let prev_tag = i.checked_sub(1).map(|p| tags[p]);
            let next_tag = tags.get(i + 1).copied();
            let prev_is_copula = prev_word
                .as_deref()
                .is_some_and(|w| self.lexicon.is_copula(w));
            let prev_is_degree = prev_word
                .as_deref()
                .is_some_and(|w| self.lexicon.is_degree_modifier(w));
            let next_is_noun = next_tag.is_some_and(PosTag::is_noun);

            let tag = tags[i];
            let repaired = match tag {
                // "the fries were overdone", "well cooked", "too overpowering"
                PosTag::Vbn | PosTag::Vbd if prev_is_copula || prev_is_degree => PosTag::Jj,
                PosTag::Vbg if prev_is_degree => PosTag::Jj,
                // "smoked flavour", "the fried chicken"
                t if t.is_participle()
                    && next_is_noun
                    && prev_tag.is_some_and(PosTag::is_modifier_slot) =>
                {
                    PosTag::Jj
                }
                // "was filling", "not very filling"
                PosTag::Nn
                    if (prev_is_copula || prev_is_degree)
                        && !next_is_noun
                        && self.lexicon.is_adjectival_noun(&word) =>
                {
                    PosTag::Jj
                }
                // "I like", "we liked"
                PosTag::In if word == "like" && prev_tag == Some(PosTag::Prp) => PosTag::Vbp,
                PosTag::Vbn if prev_tag == Some(PosTag::Prp) => PosTag::Vbd,
                PosTag::Nns if prev_tag == Some(PosTag::Prp) => PosTag::Vbz,
                // "pretty good", "a little dry"
                PosTag::Jj
                    if self.lexicon.is_degree_modifier(&word)
                        && next_tag.is_some_and(PosTag::is_adjective) =>
                {
                    PosTag::Rb
                }
                t => t,
            };
            tags[i] = repaired;
        }
    }
}

fn punctuation_tag(text: &str) -> PosTag {
    match text.chars().next() {
        Some('.' | '!' | '?') => PosTag::Terminal,
        Some(',') => PosTag::Comma,
        Some(':' | ';' | '-') => PosTag::Colon,
        _ => PosTag::Sym,
    }
}

fn clitic_tag(text: &str, prev: Option<&Token>) -> PosTag {
    match text.to_lowercase().as_str() {
        "n't" => PosTag::Rb,
        "'m" | "'re" | "'ve" => PosTag::Vbp,
        "'ll" | "'d" => PosTag::Md,
        _ => {
            let prev_is_pronoun = prev.is_some_and(|p| {
                matches!(
                    p.text.to_lowercase().as_str(),
                    "it" | "he" | "she" | "that" | "there" | "what" | "this"
                )
            });
            if prev_is_pronoun { PosTag::Vbz } else { PosTag::Pos }
        }
    }
}

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "less", "able", "ible", "ive", "ical", "ic", "ish", "ary", "esque",
];

fn has_adjective_suffix(lower: &str) -> bool {
    if ADJECTIVE_SUFFIXES
        .iter()
        .any(|suffix| lower.len() > suffix.len() + 2 && lower.ends_with(suffix))
    {
        return true;
    }
    // "-y" adjectives such as "smoky" or "crumbly", but not "-ity"/"-ey"/"-ay" nouns.
    lower.len() > 3
        && lower.ends_with('y')
        && !["ity", "ey", "ay", "oy", "ry"]
            .iter()
            .any(|suffix| lower.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<(String, PosTag)> {
        let tokens = token::tokenize(text).unwrap();
        Tagger::new(Lexicon::shared())
            .tag(&tokens)
            .unwrap()
            .into_iter()
            .map(|t| (t.token.text, t.tag))
            .collect()
    }

    fn tag_of(text: &str, word: &str) -> PosTag {
        tags(text)
            .into_iter()
            .find(|(w, _)| w == word)
            .map(|(_, t)| t)
            .unwrap()
    }

    #[test]
    fn test_adjective_predicates() {
        assert!(PosTag::Jj.is_adjective());
        assert!(PosTag::Jjr.is_adjective());
        assert!(PosTag::Jjs.is_adjective());
        assert!(!PosTag::Nn.is_adjective());
        assert!(!PosTag::Rb.is_adjective());
    }

    #[test]
    fn test_display_uses_treebank_names() {
        assert_eq!(PosTag::PrpPossessive.to_string(), "PRP$");
        assert_eq!(PosTag::Jjs.to_string(), "JJS");
        assert_eq!(PosTag::Terminal.to_string(), ".");
    }

    #[test]
    fn test_known_words() {
        let tagged = tags("The chicken was juicy and tender.");
        let expected = [
            ("The", PosTag::Dt),
            ("chicken", PosTag::Nn),
            ("was", PosTag::Vbd),
            ("juicy", PosTag::Jj),
            ("and", PosTag::Cc),
            ("tender", PosTag::Jj),
            (".", PosTag::Terminal),
        ];
        assert_eq!(tagged.len(), expected.len());
        for ((word, tag), (expected_word, expected_tag)) in tagged.iter().zip(expected) {
            assert_eq!(word, expected_word);
            assert_eq!(*tag, expected_tag, "tag of {word}");
        }
    }

    #[test]
    fn test_unknown_suffix_guesses() {
        assert_eq!(tag_of("it was zingy", "zingy"), PosTag::Jj);
        assert_eq!(tag_of("a marvellous bite", "marvellous"), PosTag::Jj);
        assert_eq!(tag_of("it arrived quickly", "quickly"), PosTag::Rb);
        assert_eq!(tag_of("some gherkins", "gherkins"), PosTag::Nns);
    }

    #[test]
    fn test_comparatives_of_known_adjectives() {
        assert_eq!(tag_of("B was juicier", "juicier"), PosTag::Jjr);
        assert_eq!(tag_of("the crispiest pastry", "crispiest"), PosTag::Jjs);
        assert_eq!(tag_of("needed more butter", "butter"), PosTag::Nn);
    }

    #[test]
    fn test_participles_become_adjectives_in_context() {
        assert_eq!(tag_of("the pastry was overbaked", "overbaked"), PosTag::Jj);
        assert_eq!(tag_of("it was well roasted", "roasted"), PosTag::Jj);
        assert_eq!(tag_of("a smoked flavour", "smoked"), PosTag::Jj);
        assert_eq!(tag_of("we roasted it", "roasted"), PosTag::Vbd);
    }

    #[test]
    fn test_adjectival_nouns() {
        assert_eq!(tag_of("it was not very filling", "filling"), PosTag::Jj);
        assert_eq!(tag_of("the filling was hot", "filling"), PosTag::Nn);
    }

    #[test]
    fn test_clitics() {
        assert_eq!(tag_of("it's tasty", "'s"), PosTag::Vbz);
        assert_eq!(tag_of("wasn't great", "n't"), PosTag::Rb);
        assert_eq!(tag_of("the kid's favourite", "'s"), PosTag::Pos);
    }

    #[test]
    fn test_proper_nouns_mid_sentence() {
        assert_eq!(tag_of("better than Greggs", "Greggs"), PosTag::Nnp);
    }

    #[test]
    fn test_window_limit() {
        let text = "dry ".repeat(MAX_TAGGED_TOKENS + 1);
        let tokens = token::tokenize(&text).unwrap();
        let err = Tagger::new(Lexicon::shared()).tag(&tokens).unwrap_err();
        assert_eq!(
            err,
            TagError::WindowExceeded {
                len: MAX_TAGGED_TOKENS + 1,
                max: MAX_TAGGED_TOKENS,
            }
        );
    }
}
