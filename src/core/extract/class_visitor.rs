//! AST traversal that finds class-bearing nodes and checks them.
//!
//! Three entry points feed the pipeline:
//! - JSX attributes whose name matches the class attribute regex
//! - calls to allow-listed functions (`clsx(...)`, `cva(...)`)
//! - templates tagged with allow-listed tags (`` tw`...` ``)
//!
//! Children are always visited, so an eligible call nested inside a class
//! attribute is reported at its own site.

use swc_common::Span;
use swc_ecma_ast::{
    CallExpr, Callee, Expr, ExprOrSpread, JSXAttr, JSXAttrName, JSXAttrValue, JSXExpr, MemberProp,
    Module, OptChainBase, OptChainExpr, TaggedTpl,
};
use swc_ecma_visit::{Visit, VisitWith};

use super::site::{Diagnostic, ExtractionSite, SiteKind, check_site};
use super::value_source::{ValueNode, unwrap_transparent};
use crate::core::settings::RuleSettings;

pub struct ClassNameVisitor<'a> {
    settings: &'a RuleSettings,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> ClassNameVisitor<'a> {
    pub fn new(settings: &'a RuleSettings) -> Self {
        Self {
            settings,
            diagnostics: Vec::new(),
        }
    }

    pub fn check(mut self, module: &Module) -> Vec<Diagnostic> {
        self.visit_module(module);
        self.diagnostics
    }

    fn check_site<'n>(&mut self, site: &ExtractionSite<'n>, node: Option<ValueNode<'n>>) {
        let found = check_site(site, node, &self.settings.separator);
        self.diagnostics.extend(found);
    }

    /// Check each argument of a call whose callee is allow-listed.
    fn check_call(&mut self, span: Span, callee: Option<String>, args: &[ExprOrSpread]) {
        if let Some(name) = callee
            && self.settings.is_callee(&name)
        {
            let site = ExtractionSite::new(span, SiteKind::Call(name));
            for arg in args {
                self.check_site(&site, Some(ValueNode::from_arg(arg)));
            }
        }
    }
}

impl Visit for ClassNameVisitor<'_> {
    fn visit_jsx_attr(&mut self, node: &JSXAttr) {
        let name = attr_name(&node.name);

        if self.settings.is_class_attribute(&name) {
            let site = ExtractionSite::new(node.span, SiteKind::Attribute(name));
            match &node.value {
                Some(JSXAttrValue::Str(s)) => {
                    self.check_site(&site.with_literal(s.value.as_str()), None);
                }
                Some(JSXAttrValue::JSXExprContainer(container)) => {
                    if let JSXExpr::Expr(expr) = &container.expr {
                        self.check_site(&site, Some(ValueNode::from_expr(expr)));
                    }
                }
                _ => {}
            }
        }

        node.visit_children_with(self);
    }

    fn visit_call_expr(&mut self, node: &CallExpr) {
        let name = match &node.callee {
            Callee::Expr(expr) => expr_callee_name(expr),
            _ => None,
        };
        self.check_call(node.span, name, &node.args);

        node.visit_children_with(self);
    }

    /// `clsx?.(...)` is an optional chain, not a `CallExpr`.
    fn visit_opt_chain_expr(&mut self, node: &OptChainExpr) {
        if let OptChainBase::Call(call) = &*node.base {
            self.check_call(node.span, expr_callee_name(&call.callee), &call.args);
        }

        node.visit_children_with(self);
    }

    fn visit_tagged_tpl(&mut self, node: &TaggedTpl) {
        if let Some(name) = tag_name(&node.tag)
            && self.settings.is_tag(name)
        {
            let site = ExtractionSite::new(node.span, SiteKind::TaggedTemplate(name.to_string()));
            self.check_site(&site, Some(ValueNode::Template(&node.tpl)));
        }

        node.visit_children_with(self);
    }
}

fn attr_name(name: &JSXAttrName) -> String {
    match name {
        JSXAttrName::Ident(ident) => ident.sym.to_string(),
        JSXAttrName::JSXNamespacedName(ns) => format!("{}:{}", ns.ns.sym, ns.name.sym),
    }
}

/// `clsx` for `clsx(...)`, `lib.cx` for `lib.cx(...)`.
fn expr_callee_name(expr: &Expr) -> Option<String> {
    match unwrap_transparent(expr) {
        Expr::Ident(ident) => Some(ident.sym.to_string()),
        Expr::Member(member) => match (&*member.obj, &member.prop) {
            (Expr::Ident(obj), MemberProp::Ident(prop)) => {
                Some(format!("{}.{}", obj.sym, prop.sym))
            }
            _ => None,
        },
        _ => None,
    }
}

/// `tw` for `` tw`...` ``, `styled` for `` styled.div`...` `` and `` styled(Button)`...` ``.
fn tag_name(tag: &Expr) -> Option<&str> {
    match unwrap_transparent(tag) {
        Expr::Ident(ident) => Some(&*ident.sym),
        Expr::Member(member) => match &*member.obj {
            Expr::Ident(obj) => Some(&*obj.sym),
            _ => None,
        },
        Expr::Call(call) => match &call.callee {
            Callee::Expr(callee) => match &**callee {
                Expr::Ident(ident) => Some(&*ident.sym),
                _ => None,
            },
            _ => None,
        },
        _ => None,
    }
}
