// Linguistic candidate extraction — entity spans and noun chunks.
//
// A lightweight stand-in for a full NLP pipeline: tokens are tagged from a
// TSV lexicon of function words, common modifiers, and a lowercase news
// gazetteer (queries are normalized to lowercase before they get here, so
// capitalization carries no signal). Unknown words default to NOUN, which
// is the right guess for the entity-heavy vocabulary of news queries.
//
// Noun chunks follow the pattern (DET)? (ADJ)* (NOUN|PROPN)+ with the
// determiner excluded from the span. Entities are gazetteer PROPN runs
// plus regex spans for dates, money, and percentages.
//
// The lexicon file is the "model": it is loaded once at process start and
// a missing or malformed file is a fatal startup error.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use regex_lite::Regex;

/// Part-of-speech tags the lexicon and tagger understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Det,
    Adj,
    Noun,
    Propn,
    Verb,
    Adv,
    Adp,
    Pron,
    Conj,
    Num,
}

impl PosTag {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "DET" => Some(Self::Det),
            "ADJ" => Some(Self::Adj),
            "NOUN" => Some(Self::Noun),
            "PROPN" => Some(Self::Propn),
            "VERB" => Some(Self::Verb),
            "ADV" => Some(Self::Adv),
            "ADP" => Some(Self::Adp),
            "PRON" => Some(Self::Pron),
            "CONJ" => Some(Self::Conj),
            "NUM" => Some(Self::Num),
            _ => None,
        }
    }
}

/// Suffixes that mark a word as an adjective when it isn't in the lexicon.
const ADJ_SUFFIXES: &[&str] = &["ous", "ful", "ive", "less", "able", "ible"];

/// Longest noun chunk to emit, in tokens.
const MAX_CHUNK_TOKENS: usize = 5;

/// Lexicon-backed tagger, chunker, and entity recognizer.
///
/// Built once at startup from the lexicon file and injected into the
/// hybrid extractor; holds no mutable state and is cheap to share.
#[derive(Debug)]
pub struct LinguisticPipeline {
    lexicon: HashMap<String, PosTag>,
    money: Regex,
    percent: Regex,
    date: Regex,
}

impl LinguisticPipeline {
    /// Load the pipeline from a TSV lexicon file (word<TAB>TAG per line,
    /// `#` comments allowed). Fails if the file is missing or malformed —
    /// callers treat that as fatal at startup.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read POS lexicon at {}", path.display()))?;
        Self::from_tsv(&raw)
            .with_context(|| format!("Malformed POS lexicon at {}", path.display()))
    }

    /// Parse a lexicon from TSV text.
    pub fn from_tsv(raw: &str) -> Result<Self> {
        let mut lexicon = HashMap::new();
        for (idx, line) in raw.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let (word, tag) = match (fields.next(), fields.next()) {
                (Some(word), Some(tag)) if !word.is_empty() => (word, tag),
                _ => anyhow::bail!("line {}: expected word<TAB>TAG, got {:?}", idx + 1, line),
            };
            let tag = PosTag::parse(tag.trim())
                .with_context(|| format!("line {}: unknown POS tag {:?}", idx + 1, tag))?;
            lexicon.insert(word.to_lowercase(), tag);
        }
        if lexicon.is_empty() {
            anyhow::bail!("lexicon contains no entries");
        }

        Ok(Self {
            lexicon,
            money: Regex::new(
                r"\$\s?\d+(?:[.,]\d+)*(?:\s?(?:million|billion|trillion))?|\d+(?:[.,]\d+)*\s?(?:usd|eur|gbp|dollars?|euros?|pounds?)",
            )
            .context("money pattern")?,
            percent: Regex::new(r"\d+(?:\.\d+)?\s?(?:%|percent)").context("percent pattern")?,
            date: Regex::new(
                r"(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s\d{1,2}(?:,?\s\d{4})?|\d{4}-\d{2}-\d{2}|\d{1,2}/\d{1,2}/\d{2,4}",
            )
            .context("date pattern")?,
        })
    }

    /// Tag a single token. Lexicon first, then numeric and suffix
    /// heuristics, defaulting to NOUN for unknown open-class words.
    pub fn tag(&self, token: &str) -> PosTag {
        if let Some(&tag) = self.lexicon.get(token) {
            return tag;
        }
        if token.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return PosTag::Num;
        }
        for suffix in ADJ_SUFFIXES {
            // Only match when at least a three-char stem remains.
            if token.len() > suffix.len() + 2 && token.ends_with(suffix) {
                return PosTag::Adj;
            }
        }
        if token.len() > 4 && token.ends_with("ly") {
            return PosTag::Adv;
        }
        PosTag::Noun
    }

    /// All linguistic candidates for a normalized query: entity spans
    /// first, then noun chunks, deduplicated preserving first occurrence.
    pub fn candidates(&self, text: &str) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut out = Vec::new();
        for candidate in self.entities(text).into_iter().chain(self.noun_chunks(text)) {
            if seen.insert(candidate.clone()) {
                out.push(candidate);
            }
        }
        out
    }

    /// Entity spans: gazetteer PROPN runs in token order, then date /
    /// money / percentage pattern matches.
    pub fn entities(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        let mut entities = Vec::new();

        // Consecutive gazetteer-tagged tokens form one entity span.
        let mut run: Vec<&str> = Vec::new();
        for token in &tokens {
            if self.lexicon.get(token.as_str()) == Some(&PosTag::Propn) {
                run.push(token);
            } else if !run.is_empty() {
                entities.push(run.join(" "));
                run.clear();
            }
        }
        if !run.is_empty() {
            entities.push(run.join(" "));
        }

        for pattern in [&self.date, &self.money, &self.percent] {
            for m in pattern.find_iter(text) {
                entities.push(m.as_str().trim().to_string());
            }
        }

        entities
    }

    /// Noun chunks: (DET)? (ADJ)* (NOUN|PROPN)+, determiner excluded,
    /// capped at MAX_CHUNK_TOKENS tokens.
    pub fn noun_chunks(&self, text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        let tags: Vec<PosTag> = tokens.iter().map(|t| self.tag(t)).collect();

        let mut chunks = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let mut j = i;
            if tags[j] == PosTag::Det {
                j += 1;
            }
            let span_start = j;
            while j < tokens.len() && tags[j] == PosTag::Adj {
                j += 1;
            }
            let noun_start = j;
            while j < tokens.len() && matches!(tags[j], PosTag::Noun | PosTag::Propn) {
                j += 1;
            }
            if j > noun_start && j - span_start <= MAX_CHUNK_TOKENS {
                chunks.push(tokens[span_start..j].join(" "));
            }
            // Advance past whatever we consumed, or one token when the
            // position couldn't start a chunk.
            i = if j > i { j } else { i + 1 };
        }
        chunks
    }
}

/// Whitespace tokenization with punctuation trimmed from token edges.
/// Interior punctuation (hyphens, apostrophes) is kept.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| raw.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|token| !token.is_empty())
        .collect()
}
