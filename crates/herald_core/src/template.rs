//! Placeholder substitution for topic templates.

use herald_error::{TemplateError, TemplateErrorKind};
use std::collections::BTreeMap;

/// Placeholder name to resolved value.
pub type Bindings = BTreeMap<String, String>;

/// Render `{name}` placeholders in `template` from `bindings`.
///
/// A placeholder is a brace pair around an identifier (`[A-Za-z][A-Za-z0-9_]*`).
/// Braces around anything else are copied through verbatim. A placeholder
/// without a binding is an error; partially rendered output is never returned.
///
/// # Examples
///
/// ```
/// use herald_core::{Bindings, render_template};
///
/// let mut bindings = Bindings::new();
/// bindings.insert("round".to_string(), "1100".to_string());
///
/// let title = render_template("제{round}회 당첨번호 분석", &bindings).unwrap();
/// assert_eq!(title, "제1100회 당첨번호 분석");
///
/// assert!(render_template("{missing}", &bindings).is_err());
/// ```
pub fn render_template(template: &str, bindings: &Bindings) -> Result<String, TemplateError> {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find('}') {
            Some(close) if is_placeholder_name(&after[..close]) => {
                let name = &after[..close];
                let value = bindings.get(name).ok_or_else(|| {
                    TemplateError::new(TemplateErrorKind::UnboundPlaceholder {
                        placeholder: name.to_string(),
                        template: template.to_string(),
                    })
                })?;
                rendered.push_str(value);
                rest = &after[close + 1..];
            }
            _ => {
                rendered.push('{');
                rest = after;
            }
        }
    }

    rendered.push_str(rest);
    Ok(rendered)
}

fn is_placeholder_name(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
