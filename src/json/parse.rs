//! Purpose: Provide the internal JSON decode entrypoint and stable failure categories.
//! Exports: `from_str`, `categorize_error`, `ParseFailureCategory`.
//! Role: Parser boundary that centralizes serde_json usage details.
//! Invariants: Category mapping is deterministic for a given parser error.
//! Notes: Error mapping to crate errors is done by callsites so domain context stays explicit.

use serde::de::DeserializeOwned;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ParseFailureCategory {
    Syntax,
    Truncated,
    Depth,
    NumericRange,
    Shape,
    Io,
}

impl ParseFailureCategory {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Truncated => "truncated",
            ParseFailureCategory::Depth => "depth",
            ParseFailureCategory::NumericRange => "numeric-range",
            ParseFailureCategory::Shape => "shape",
            ParseFailureCategory::Io => "io",
        }
    }
}

pub(crate) fn from_str<T: DeserializeOwned>(input: &str) -> Result<T, serde_json::Error> {
    serde_json::from_str(input)
}

pub(crate) fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    use serde_json::error::Category;

    let message = err.to_string();
    if message.contains("recursion limit") {
        return ParseFailureCategory::Depth;
    }
    if message.contains("number out of range") {
        return ParseFailureCategory::NumericRange;
    }
    match err.classify() {
        Category::Syntax => ParseFailureCategory::Syntax,
        Category::Eof => ParseFailureCategory::Truncated,
        Category::Data => ParseFailureCategory::Shape,
        Category::Io => ParseFailureCategory::Io,
    }
}
