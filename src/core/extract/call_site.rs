//! Normalized call-site representation.
//!
//! swc's call shapes (`CallExpr`, optional `OptCall`, member callees, computed
//! members, parenthesized expressions) are normalized into a [`CallSite`]
//! before any matching happens, so classification in the walker only ever
//! sees this small tagged union.
//!
//! ```ignore
//! $t('Hello')              → CallSite { Identifier, "$t", [Str("Hello")] }
//! this.$t(`Hi`)            → CallSite { MemberTrailingProperty, "$t", [Template("Hi")] }
//! i18n.t(ok ? 'Y' : 'N')   → CallSite { MemberTrailingProperty, "t", [Conditional(Str, Str)] }
//! ```

use swc_ecma_ast::{
    CallExpr, Callee, Expr, ExprOrSpread, Lit, MemberExpr, MemberProp, ObjectLit, OptCall,
    OptChainBase, Prop, PropName, PropOrSpread, Tpl,
};

/// How the callee name was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalleeKind {
    /// `t(...)`
    Identifier,
    /// `this.$t(...)`, `i18n.t(...)`, `obj.prop.t(...)`: the final property name.
    MemberTrailingProperty,
}

/// A call argument, reduced to what key classification cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaggedArgument {
    /// `'text'` or `"text"`
    Str(String),
    /// `` `text` `` without interpolation; holds the raw text.
    Template(String),
    /// `` `Hello ${name}` ``: dynamic content, never a key.
    InterpolatedTemplate,
    /// `cond ? a : b`
    Conditional {
        consequent: Box<TaggedArgument>,
        alternate: Box<TaggedArgument>,
    },
    /// Object literal. `values` holds the property names of a nested
    /// `values: { ... }` object literal when present.
    Object { values: Option<Vec<String>> },
    /// Identifiers, numbers, calls, spreads, ...
    Other,
}

impl TaggedArgument {
    /// Normalize an argument expression.
    pub fn from_expr(expr: &Expr) -> Self {
        match expr {
            Expr::Paren(paren) => Self::from_expr(&paren.expr),
            Expr::Lit(Lit::Str(s)) => match s.value.as_str() {
                Some(value) => Self::Str(value.to_string()),
                None => Self::Other,
            },
            Expr::Tpl(tpl) => Self::from_template(tpl),
            Expr::Cond(cond) => Self::Conditional {
                consequent: Box::new(Self::from_expr(&cond.cons)),
                alternate: Box::new(Self::from_expr(&cond.alt)),
            },
            Expr::Object(object) => Self::Object {
                values: declared_values(object),
            },
            _ => Self::Other,
        }
    }

    fn from_arg(arg: &ExprOrSpread) -> Self {
        if arg.spread.is_some() {
            return Self::Other;
        }
        Self::from_expr(&arg.expr)
    }

    fn from_template(tpl: &Tpl) -> Self {
        if !tpl.exprs.is_empty() {
            return Self::InterpolatedTemplate;
        }
        let raw: String = tpl.quasis.iter().map(|q| q.raw.as_str()).collect();
        Self::Template(raw)
    }

    /// Parameter names declared through a `values` object, if any.
    pub fn declared_params(&self) -> Option<&[String]> {
        match self {
            Self::Object {
                values: Some(names),
            } if !names.is_empty() => Some(names),
            _ => None,
        }
    }
}

/// Property names of `{ values: { a, b: 1 } }`, or `None` if there is no such object.
fn declared_values(object: &ObjectLit) -> Option<Vec<String>> {
    object.props.iter().find_map(|prop| {
        let PropOrSpread::Prop(prop) = prop else {
            return None;
        };
        let Prop::KeyValue(kv) = &**prop else {
            return None;
        };
        if prop_name(&kv.key).as_deref() != Some("values") {
            return None;
        }
        let Expr::Object(values) = &*kv.value else {
            return None;
        };
        Some(
            values
                .props
                .iter()
                .filter_map(|p| match p {
                    PropOrSpread::Prop(p) => match &**p {
                        Prop::KeyValue(kv) => prop_name(&kv.key),
                        Prop::Shorthand(ident) => Some(ident.sym.to_string()),
                        _ => None,
                    },
                    PropOrSpread::Spread(_) => None,
                })
                .collect(),
        )
    })
}

fn prop_name(name: &PropName) -> Option<String> {
    match name {
        PropName::Ident(ident) => Some(ident.sym.to_string()),
        PropName::Str(s) => s.value.as_str().map(str::to_string),
        _ => None,
    }
}

/// A call expression normalized for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub callee_kind: CalleeKind,
    pub name: String,
    pub arguments: Vec<TaggedArgument>,
    /// Byte offset of the call's start within the parsed text.
    pub offset: usize,
}

impl CallSite {
    pub fn from_call(call: &CallExpr, offset: usize) -> Option<Self> {
        let Callee::Expr(callee) = &call.callee else {
            return None;
        };
        Self::build(callee, &call.args, offset)
    }

    /// `i18n.t?.('key')` / `fn?.('key')`
    pub fn from_opt_call(call: &OptCall, offset: usize) -> Option<Self> {
        Self::build(&call.callee, &call.args, offset)
    }

    fn build(callee: &Expr, args: &[ExprOrSpread], offset: usize) -> Option<Self> {
        let (callee_kind, name) = resolve_callee(callee)?;
        Some(Self {
            callee_kind,
            name,
            arguments: args.iter().map(TaggedArgument::from_arg).collect(),
            offset,
        })
    }
}

/// Resolve the name a call is made through.
pub fn resolve_callee(callee: &Expr) -> Option<(CalleeKind, String)> {
    match callee {
        Expr::Ident(ident) => Some((CalleeKind::Identifier, ident.sym.to_string())),
        Expr::Member(member) => trailing_property(member),
        Expr::OptChain(chain) => match &*chain.base {
            OptChainBase::Member(member) => trailing_property(member),
            OptChainBase::Call(_) => None,
        },
        Expr::Paren(paren) => resolve_callee(&paren.expr),
        _ => None,
    }
}

fn trailing_property(member: &MemberExpr) -> Option<(CalleeKind, String)> {
    let name = match &member.prop {
        MemberProp::Ident(ident) => ident.sym.to_string(),
        MemberProp::Computed(computed) => match &*computed.expr {
            Expr::Lit(Lit::Str(s)) => s.value.as_str()?.to_string(),
            _ => return None,
        },
        MemberProp::PrivateName(_) => return None,
    };
    Some((CalleeKind::MemberTrailingProperty, name))
}
