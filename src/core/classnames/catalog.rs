//! Property families that accept a negative scale value.
//!
//! Each family is a regex fragment. The fragments are joined, in order, into a
//! single alternation so that one compiled pattern classifies every token.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// One recognized property-prefix family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixFamily {
    /// Display name, used in docs and the MCP config dump.
    pub name: &'static str,
    /// Regex fragment matching the family identifier (without surrounding dashes).
    pub pattern: &'static str,
}

const fn family(name: &'static str, pattern: &'static str) -> PrefixFamily {
    PrefixFamily { name, pattern }
}

/// Ordered catalog of families.
pub const PREFIX_CATALOG: &[PrefixFamily] = &[
    family("inset/scale", r"(?:inset|scale)(?:-(?:y|x))?"),
    family("top", "top"),
    family("right", "right"),
    family("bottom", "bottom"),
    family("left", "left"),
    family("z", "z"),
    family("order", "order"),
    family("margin", r"(?:scroll-)?m(?:y|x|t|r|l|b)?"),
    family("skew/space/translate", r"(?:skew|space|translate)-(?:y|x)"),
    family("rotate", "rotate"),
    family("tracking", "tracking"),
    family("indent", "indent"),
    family("hue-rotate", r"(?:backdrop-)?hue-rotate"),
];

/// Build the pattern source: `-<family>-[<arbitrary>]`, anchored on both ends.
pub fn pattern_source(catalog: &[PrefixFamily]) -> String {
    let families = catalog
        .iter()
        .map(|f| f.pattern)
        .collect::<Vec<_>>()
        .join("|");
    format!(r"^-(?:{})-\[.+\]$", families)
}

/// The compiled, process-wide classification pattern.
pub static PREFIX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(&pattern_source(PREFIX_CATALOG))
        .case_insensitive(true)
        .build()
        .unwrap()
});
