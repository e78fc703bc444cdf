//! `{{placeholder}}` substitution.

use std::collections::BTreeMap;

/// Variables supplied to a template, keyed by placeholder name.
pub type TemplateVars = BTreeMap<String, String>;

/// Replace every `{{name}}` whose `name` is a key of `vars` with its value.
///
/// Placeholders without a supplied key are left as written. Names are
/// matched exactly, so `{{ name }}` only matches the key `" name "`.
/// Substituted values are not scanned again.
///
/// # Examples
///
/// ```
/// use loresmith_generation::{TemplateVars, render_template};
///
/// let mut vars = TemplateVars::new();
/// vars.insert("name".into(), "Ysolde".into());
///
/// let out = render_template("{{name}} of {{place}}, called {{name}}", &vars);
/// assert_eq!(out, "Ysolde of {{place}}, called Ysolde");
/// ```
pub fn render_template(template: &str, vars: &TemplateVars) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after_open[..close];
        match vars.get(name) {
            Some(value) => {
                out.push_str(value);
                rest = &after_open[close + 2..];
            }
            None => {
                // Keep the braces and rescan from just past them so a
                // nested `{{{{x}}` still finds the inner placeholder.
                out.push_str("{{");
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}
