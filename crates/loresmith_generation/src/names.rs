//! Parsing of name lists returned by the model.

/// Names generated when a request doesn't ask for a count.
pub const DEFAULT_NAME_COUNT: usize = 10;
/// Largest count a request may ask for.
pub const MAX_NAME_COUNT: usize = 50;

/// Split a completion into at most `count` names.
///
/// One name per non-empty line. Leading list markers (`-`, `*`, `1.`, `1)`)
/// and surrounding quotes are stripped.
///
/// # Examples
///
/// ```
/// use loresmith_generation::parse_names;
///
/// let names = parse_names("1. \"Ysolde\"\n2) Brannoc\n\n- Ilse\n* Tamsin", 3);
/// assert_eq!(names, vec!["Ysolde", "Brannoc", "Ilse"]);
/// ```
pub fn parse_names(text: &str, count: usize) -> Vec<String> {
    text.lines()
        .map(clean_line)
        .filter(|name| !name.is_empty())
        .take(count)
        .map(str::to_string)
        .collect()
}

fn clean_line(line: &str) -> &str {
    let line = strip_marker(line.trim()).trim();
    strip_quotes(line).trim()
}

fn strip_marker(line: &str) -> &str {
    if let Some(rest) = line.strip_prefix('-').or_else(|| line.strip_prefix('*')) {
        return rest;
    }
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return rest;
        }
    }
    line
}

fn strip_quotes(name: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = name
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    name
}
