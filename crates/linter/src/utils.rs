//! Utility functions for lint rules

use oxc_ast::ast::{Argument, Expression, TemplateLiteral};

/// Name of a plain identifier expression
pub fn identifier_name<'a>(expr: &'a Expression<'_>) -> Option<&'a str> {
    match expr {
        Expression::Identifier(ident) => Some(ident.name.as_str()),
        _ => None,
    }
}

/// Object and property name of a `a.b` member expression
pub fn static_member<'a, 'b>(expr: &'b Expression<'a>) -> Option<(&'b Expression<'a>, &'b str)> {
    match expr {
        Expression::StaticMemberExpression(member) => {
            Some((&member.object, member.property.name.as_str()))
        }
        _ => None,
    }
}

/// Name of the function being called: `foo(...)` gives `foo`, `a.b.foo(...)` gives `foo`
pub fn callee_name<'a>(callee: &'a Expression<'_>) -> Option<&'a str> {
    identifier_name(callee).or_else(|| static_member(callee).map(|(_, property)| property))
}

/// Whether `expr` is one of `names`, either bare or as `window.<name>` / `globalThis.<name>`
pub fn is_global_reference(expr: &Expression<'_>, names: &[&str]) -> bool {
    if let Some(name) = identifier_name(expr) {
        return names.contains(&name);
    }
    match static_member(expr) {
        Some((object, property)) => {
            matches!(identifier_name(object), Some("window" | "globalThis" | "self"))
                && names.contains(&property)
        }
        None => false,
    }
}

/// Static string value of a string literal or a template literal without substitutions
pub fn static_string_value(expr: &Expression<'_>) -> Option<String> {
    match expr {
        Expression::StringLiteral(lit) => Some(lit.value.to_string()),
        Expression::TemplateLiteral(tpl) => template_static_value(tpl),
        _ => None,
    }
}

/// Text of a template literal that has no `${}` substitutions
pub fn template_static_value(tpl: &TemplateLiteral<'_>) -> Option<String> {
    if !tpl.expressions.is_empty() {
        return None;
    }
    tpl.quasis.first().map(|quasi| quasi.value.raw.to_string())
}

/// First argument of a call if it is a plain expression
pub fn first_argument<'a, 'b>(arguments: &'b [Argument<'a>]) -> Option<&'b Expression<'a>> {
    arguments.first().and_then(Argument::as_expression)
}

/// Simple check if a string looks like HTML
pub fn looks_like_html(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }
    // Check for HTML-like patterns: <tag>, &entity;, etc.
    trimmed.contains('<') && trimmed.contains('>')
}

/// Whether a URL string uses the `javascript:` scheme
pub fn is_script_url(s: &str) -> bool {
    let trimmed = s.trim_start();
    trimmed.len() >= "javascript:".len()
        && trimmed.as_bytes()[.."javascript:".len()].eq_ignore_ascii_case(b"javascript:")
}
