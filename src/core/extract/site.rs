//! Extraction sites and the extract → split → classify pipeline.

use std::fmt;

use swc_common::Span;

use super::value_source::{RawValue, ValueNode, extract_raw_values};
use crate::core::classnames::{classify, split_class_tokens};

/// What kind of node anchors a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteKind {
    /// Markup attribute such as `className`.
    Attribute(String),
    /// Call to an allow-listed function such as `clsx`.
    Call(String),
    /// Tagged template with an allow-listed tag.
    TaggedTemplate(String),
}

impl fmt::Display for SiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteKind::Attribute(name) => write!(f, "`{}` attribute", name),
            SiteKind::Call(name) => write!(f, "`{}()` call", name),
            SiteKind::TaggedTemplate(name) => write!(f, "`{}` tagged template", name),
        }
    }
}

/// The node a diagnostic is reported against.
#[derive(Debug, Clone)]
pub struct ExtractionSite<'n> {
    pub span: Span,
    pub kind: SiteKind,
    /// The site's own literal value, for attributes written as `class="..."`.
    pub literal: Option<&'n str>,
}

impl<'n> ExtractionSite<'n> {
    pub fn new(span: Span, kind: SiteKind) -> Self {
        Self {
            span,
            kind,
            literal: None,
        }
    }

    pub fn with_literal(mut self, literal: Option<&'n str>) -> Self {
        self.literal = literal;
        self
    }
}

/// One negative arbitrary value classname found at a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub span: Span,
    pub kind: SiteKind,
    pub classname: String,
}

/// Raw values for a site. `None` means the site's own literal value.
pub fn extract<'n>(site: &ExtractionSite<'n>, node: Option<ValueNode<'n>>) -> Vec<RawValue<'n>> {
    match node {
        Some(node) => extract_raw_values(node),
        None => site
            .literal
            .map(|literal| vec![RawValue::literal(literal)])
            .unwrap_or_default(),
    }
}

/// Run the whole pipeline for one site and return its diagnostics in source order.
pub fn check_site<'n>(
    site: &ExtractionSite<'n>,
    node: Option<ValueNode<'n>>,
    separator: &str,
) -> Vec<Diagnostic> {
    extract(site, node)
        .iter()
        .flat_map(|raw| classify(&split_class_tokens(raw, separator), separator))
        .map(|classname| Diagnostic {
            span: site.span,
            kind: site.kind.clone(),
            classname: classname.to_string(),
        })
        .collect()
}
