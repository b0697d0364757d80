// src/extractors/pattern.rs

// --- Imports ---
use crate::utils::error::PatternError;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

// --- Constants ---
const REGEX_CHAR: char = '/';

// `/body/flags` literal form. Flags follow the fixed `g i m y s` order.
static REGEX_LITERAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/(.*?)/(g?i?m?y?s?)$").expect("Failed to compile REGEX_LITERAL_RE")
});

/// Which field of a raw item the extraction regex is tested against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// No meta flag given; matches against the item's value.
    #[default]
    None,
    Text,
    Value,
}

impl Mode {
    /// Maps a lower-cased meta flag token to a mode. Unknown tokens are an error.
    pub fn from_meta_flag(token: &str) -> Result<Self, PatternError> {
        match token {
            "text" => Ok(Mode::Text),
            "value" => Ok(Mode::Value),
            "" => Ok(Mode::None),
            other => Err(PatternError::InvalidMetaFlag(other.to_string())),
        }
    }
}

/// A parsed extraction pattern: meta flag plus compiled regex.
#[derive(Debug, Clone)]
pub struct ExtractionPattern {
    mode: Mode,
    regex: Regex,
}

impl ExtractionPattern {
    /// Parses `pattern` into a mode and a regex.
    ///
    /// Patterns starting with `/` or containing no `/` at all have no meta flag.
    /// Otherwise everything before the first `/` is the flag and the rest is the regex.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let (mode, source) = match pattern.find(REGEX_CHAR) {
            None | Some(0) => (Mode::None, pattern),
            Some(idx) => {
                let meta = pattern[..idx].to_lowercase();
                (Mode::from_meta_flag(&meta)?, &pattern[idx..])
            }
        };

        tracing::debug!("Compiled extraction pattern '{}' with mode {:?}", pattern, mode);
        Ok(Self { mode, regex: string_to_regex(source)? })
    }

    /// Like [`compile`](Self::compile), but an empty pattern means "no pattern".
    pub fn compile_optional(pattern: &str) -> Result<Option<Self>, PatternError> {
        if pattern.is_empty() {
            return Ok(None);
        }
        Self::compile(pattern).map(Some)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }
}

/// Compiles a regex source. A leading `/` means `/body/flags` literal form;
/// anything else is compiled verbatim.
fn string_to_regex(source: &str) -> Result<Regex, PatternError> {
    if !source.starts_with(REGEX_CHAR) {
        return Ok(Regex::new(source)?);
    }

    let caps = REGEX_LITERAL_RE
        .captures(source)
        .ok_or_else(|| PatternError::InvalidRegexLiteral(source.to_string()))?;
    let body = caps.get(1).map_or("", |m| m.as_str());
    let flags = caps.get(2).map_or("", |m| m.as_str());

    // `g` and `y` carry no meaning here: scanning is always global.
    let regex = RegexBuilder::new(body)
        .case_insensitive(flags.contains('i'))
        .multi_line(flags.contains('m'))
        .dot_matches_new_line(flags.contains('s'))
        .build()?;
    Ok(regex)
}
