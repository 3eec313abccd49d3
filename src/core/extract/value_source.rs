//! Class value extraction from expression trees.
//!
//! Every expression that may carry class names is first viewed as a
//! [`ValueNode`], a closed set of shapes the extractor knows how to descend
//! into. [`extract_raw_values`] then walks that view and returns every string
//! leaf together with its trimming rule.
//!
//! # Examples
//!
//! ```ignore
//! "-top-[1px] flex"              → [literal("-top-[1px] flex")]
//! `a ${on ? "b" : "c"} d`        → [literal("b"), literal("c"), piece("a "), piece(" d")]
//! on && "-z-[2]"                 → [literal("-z-[2]")]
//! { "-top-[1px]": on, ...rest }  → [literal("-top-[1px]"), ...rest]
//! ```

use swc_ecma_ast::{
    ArrayLit, BinExpr, BinaryOp, CondExpr, Expr, ExprOrSpread, Lit, ObjectLit, Prop, PropName,
    PropOrSpread, Tpl, TplElement,
};

/// A string that may contain class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawValue<'a> {
    pub text: &'a str,
    /// Literal values are trimmed before splitting. Template pieces are not:
    /// their boundary whitespace belongs to the adjoining interpolation.
    pub must_trim: bool,
}

impl<'a> RawValue<'a> {
    pub fn literal(text: &'a str) -> Self {
        Self {
            text,
            must_trim: true,
        }
    }

    pub fn template_piece(text: &'a str) -> Self {
        Self {
            text,
            must_trim: false,
        }
    }
}

/// Borrowed view of an expression shape relevant to class extraction.
#[derive(Debug, Clone, Copy)]
pub enum ValueNode<'a> {
    /// `"a b c"`
    StringLiteral(&'a str),
    /// `` `a ${b} c` ``
    Template(&'a Tpl),
    /// One literal piece of a template.
    TemplatePiece(&'a TplElement),
    /// `test ? cons : alt`
    Conditional(&'a CondExpr),
    /// `guard && value`, `guard || value`, `guard ?? value`
    ShortCircuit(&'a BinExpr),
    /// `[a, b, ...c]`
    ArrayLiteral(&'a ArrayLit),
    /// `{ "a b": cond, ...rest }`
    ObjectLiteral(&'a ObjectLit),
    /// `...inner`
    Spread(&'a Expr),
    /// Key of an object property.
    PropertyKey(&'a PropName),
    /// Any shape that contributes no strings.
    Other,
}

impl<'a> ValueNode<'a> {
    pub fn from_expr(expr: &'a Expr) -> Self {
        match unwrap_transparent(expr) {
            Expr::Lit(Lit::Str(s)) => match s.value.as_str() {
                Some(value) => Self::StringLiteral(value),
                None => Self::Other,
            },
            Expr::Tpl(tpl) => Self::Template(tpl),
            Expr::Cond(cond) => Self::Conditional(cond),
            Expr::Bin(bin) if is_short_circuit(bin.op) => Self::ShortCircuit(bin),
            Expr::Array(array) => Self::ArrayLiteral(array),
            Expr::Object(object) => Self::ObjectLiteral(object),
            _ => Self::Other,
        }
    }

    /// View of a call argument or array element, which may be a spread.
    pub fn from_arg(arg: &'a ExprOrSpread) -> Self {
        if arg.spread.is_some() {
            Self::Spread(&arg.expr)
        } else {
            Self::from_expr(&arg.expr)
        }
    }

    /// View of an object member: the key for properties, the argument for spreads.
    pub fn from_prop(prop: &'a PropOrSpread) -> Self {
        match prop {
            PropOrSpread::Spread(spread) => Self::Spread(&spread.expr),
            PropOrSpread::Prop(prop) => match &**prop {
                Prop::KeyValue(kv) => Self::PropertyKey(&kv.key),
                Prop::Getter(getter) => Self::PropertyKey(&getter.key),
                Prop::Setter(setter) => Self::PropertyKey(&setter.key),
                Prop::Method(method) => Self::PropertyKey(&method.key),
                // Shorthand `{ active }` and assignment patterns carry no string key.
                Prop::Shorthand(_) | Prop::Assign(_) => Self::Other,
            },
        }
    }
}

/// Expression wrappers that do not change the runtime value.
pub fn unwrap_transparent(expr: &Expr) -> &Expr {
    match expr {
        Expr::Paren(paren) => unwrap_transparent(&paren.expr),
        Expr::TsAs(ts_as) => unwrap_transparent(&ts_as.expr),
        Expr::TsConstAssertion(ts_const) => unwrap_transparent(&ts_const.expr),
        Expr::TsSatisfies(ts_sat) => unwrap_transparent(&ts_sat.expr),
        Expr::TsNonNull(ts_non_null) => unwrap_transparent(&ts_non_null.expr),
        _ => expr,
    }
}

fn is_short_circuit(op: BinaryOp) -> bool {
    matches!(
        op,
        BinaryOp::LogicalAnd | BinaryOp::LogicalOr | BinaryOp::NullishCoalescing
    )
}

/// Collect every string leaf under `node`, in source order.
pub fn extract_raw_values(node: ValueNode<'_>) -> Vec<RawValue<'_>> {
    match node {
        ValueNode::StringLiteral(value) => vec![RawValue::literal(value)],
        ValueNode::Template(tpl) => {
            let interpolations = tpl
                .exprs
                .iter()
                .flat_map(|expr| extract_raw_values(ValueNode::from_expr(expr)));
            let pieces = tpl
                .quasis
                .iter()
                .flat_map(|quasi| extract_raw_values(ValueNode::TemplatePiece(quasi)));
            interpolations.chain(pieces).collect()
        }
        ValueNode::TemplatePiece(quasi) => {
            let raw: &str = &quasi.raw;
            if raw.is_empty() {
                Vec::new()
            } else {
                vec![RawValue::template_piece(raw)]
            }
        }
        ValueNode::Conditional(cond) => {
            let mut values = extract_raw_values(ValueNode::from_expr(&cond.cons));
            values.extend(extract_raw_values(ValueNode::from_expr(&cond.alt)));
            values
        }
        // The left operand is the guard, not a class value.
        ValueNode::ShortCircuit(bin) => extract_raw_values(ValueNode::from_expr(&bin.right)),
        ValueNode::ArrayLiteral(array) => array
            .elems
            .iter()
            .flatten()
            .flat_map(|elem| extract_raw_values(ValueNode::from_arg(elem)))
            .collect(),
        // Only keys: in class maps the values are the conditions.
        ValueNode::ObjectLiteral(object) => object
            .props
            .iter()
            .flat_map(|prop| extract_raw_values(ValueNode::from_prop(prop)))
            .collect(),
        ValueNode::Spread(inner) => extract_raw_values(ValueNode::from_expr(inner)),
        ValueNode::PropertyKey(key) => match key {
            PropName::Str(s) => s
                .value
                .as_str()
                .map(|value| vec![RawValue::literal(value)])
                .unwrap_or_default(),
            PropName::Computed(computed) => {
                extract_raw_values(ValueNode::from_expr(&computed.expr))
            }
            PropName::Ident(_) | PropName::Num(_) | PropName::BigInt(_) => Vec::new(),
        },
        ValueNode::Other => Vec::new(),
    }
}
