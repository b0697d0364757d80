// src/variable/models.rs
use serde::{Deserialize, Serialize};

// --- Sentinel Constants ---
pub const ALL_VARIABLE_TEXT: &str = "All";
pub const ALL_VARIABLE_VALUE: &str = "$__all";
pub const NONE_VARIABLE_TEXT: &str = "None";
pub const NONE_VARIABLE_VALUE: &str = "";

/// A scalar field of a raw query result: either a string or a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    /// Canonical string form used by every regex and comparison step.
    ///
    /// Numbers are treated as doubles and printed the way a dashboard client
    /// prints them: `1` not `1.0`, `1e+21` above the integer range, `1e-7`
    /// for tiny magnitudes.
    pub fn canonical(&self) -> String {
        match self {
            Scalar::Text(s) => s.clone(),
            Scalar::Number(n) => number_to_string(n.as_f64().unwrap_or_default()),
        }
    }
}

/// Shortest round-trip digits laid out with the `Number#toString` rules:
/// plain notation for decimal exponents in `-7 < e < 21`, exponent form otherwise.
fn number_to_string(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if f < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest digits, e.g. "1.2345678901234568e23".
    let sci = format!("{:e}", f.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exp.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{}.{}", int, frac)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let e_sign = if e >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, e_sign, e.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, e_sign, e.abs())
        }
    };
    format!("{}{}", sign, body)
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Number(value.into())
    }
}

impl From<u64> for Scalar {
    fn from(value: u64) -> Self {
        Scalar::Number(value.into())
    }
}

/// One row of a "metric find" response. Either field may be missing, in
/// which case it mirrors the other one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Scalar>,
}

impl RawItem {
    pub fn new(text: impl Into<Scalar>, value: impl Into<Scalar>) -> Self {
        Self { text: Some(text.into()), value: Some(value.into()) }
    }

    pub fn with_text(text: impl Into<Scalar>) -> Self {
        Self { text: Some(text.into()), value: None }
    }

    pub fn with_value(value: impl Into<Scalar>) -> Self {
        Self { text: None, value: Some(value.into()) }
    }

    /// Returns `(text, value)` after mutual fallback and numeric canonicalization.
    pub fn resolve(&self) -> (String, String) {
        let text = self.text.as_ref().or(self.value.as_ref());
        let value = self.value.as_ref().or(self.text.as_ref());
        (
            text.map(Scalar::canonical).unwrap_or_default(),
            value.map(Scalar::canonical).unwrap_or_default(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.value.is_none()
    }
}

/// A selectable entry of a query variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableOption {
    pub text: String,
    pub value: String,
    #[serde(default)]
    pub selected: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_none: bool,
}

impl VariableOption {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self { text: text.into(), value: value.into(), selected: false, is_none: false }
    }

    /// The "All" entry prepended when a variable includes all values.
    pub fn all() -> Self {
        Self::new(ALL_VARIABLE_TEXT, ALL_VARIABLE_VALUE)
    }

    /// The sentinel that stands in for an empty resolution.
    pub fn none() -> Self {
        Self { is_none: true, ..Self::new(NONE_VARIABLE_TEXT, NONE_VARIABLE_VALUE) }
    }
}

/// Persisted sort code of a query variable.
///
/// `0` disables sorting. For other codes `ceil(code / 2)` picks the strategy
/// (1 alphabetical, 2 numerical, 3 case-insensitive alphabetical) and even
/// codes are descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableSort(pub u32);

impl VariableSort {
    pub const DISABLED: Self = Self(0);
    pub const ALPHABETICAL_ASC: Self = Self(1);
    pub const ALPHABETICAL_DESC: Self = Self(2);
    pub const NUMERICAL_ASC: Self = Self(3);
    pub const NUMERICAL_DESC: Self = Self(4);
    pub const ALPHABETICAL_CASE_INSENSITIVE_ASC: Self = Self(5);
    pub const ALPHABETICAL_CASE_INSENSITIVE_DESC: Self = Self(6);

    pub fn is_disabled(self) -> bool {
        self.0 == 0
    }

    pub fn sort_type(self) -> u32 {
        self.0.div_ceil(2)
    }

    pub fn is_descending(self) -> bool {
        self.0 != 0 && self.0 % 2 == 0
    }
}

impl From<u32> for VariableSort {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// The part of a query variable's state that option resolution reads and writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryVariable {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub regex: String,
    #[serde(default)]
    pub sort: VariableSort,
    #[serde(default)]
    pub include_all: bool,
    #[serde(default)]
    pub options: Vec<VariableOption>,
}
