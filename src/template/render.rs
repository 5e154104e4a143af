//! Conditional command rendering
//!
//! This module implements the templating pass that turns literal fragments
//! and interpolated values into a single normalized command string. Flags
//! whose values are absent are removed together with their operands: one
//! token to the left of the interpolation point and one token to the right.

use crate::template::Value;
use regex::Regex;

/// Render a command template given its fragments and values
///
/// The inputs follow the tagged-template shape: `fragments` has one more
/// element than `values`, and the command reads
/// `fragments[0] values[0] fragments[1] ... fragments[n]`.
///
/// A template with a single fragment is returned unchanged, byte for byte.
/// Otherwise the result is whitespace-normalized: runs of spaces, tabs, and
/// newlines collapse to single spaces and the ends are trimmed.
///
/// Shape violations are tolerated rather than reported: a value slot past
/// the end of `values` counts as absent, and surplus values are ignored.
pub fn render(fragments: &[&str], values: &[Value]) -> String {
    if fragments.is_empty() {
        return String::new();
    }
    if fragments.len() == 1 {
        return fragments[0].to_string();
    }

    let absent = Value::Absent;
    let mut terms: Vec<String> = Vec::new();

    for i in 0..fragments.len() - 1 {
        // A prior omission may already have trimmed the fragment that
        // precedes this value, so re-read it from the accumulator.
        let start = match terms.pop() {
            Some(last) => last,
            None => fragments[i].to_string(),
        };
        let next = fragments[i + 1];
        let value = values.get(i).unwrap_or(&absent);

        if value.is_absent() {
            terms.push(cut_last(&start));
            terms.push(" ".to_string());
            terms.push(cut_first(next));
        } else {
            terms.push(start);
            terms.push(value.render());
            terms.push(next.to_string());
        }
    }

    normalize(&terms.concat())
}

/// Drop the last space-delimited token of a fragment
///
/// This removes the flag that introduced an absent value. A fragment
/// without a space is a single token and is consumed entirely; an empty
/// fragment stays empty.
fn cut_last(fragment: &str) -> String {
    match fragment.rsplit_once(' ') {
        Some((head, _)) => head.to_string(),
        None => String::new(),
    }
}

/// Drop the first space-delimited token of a fragment
///
/// This removes the operand left behind by an absent value, such as a
/// closing quote or a literal suffix glued to the interpolation point.
fn cut_first(fragment: &str) -> String {
    match fragment.split_once(' ') {
        Some((_, tail)) => tail.to_string(),
        None => String::new(),
    }
}

/// Collapse whitespace runs to single spaces and trim the ends
fn normalize(s: &str) -> String {
    let re = Regex::new(r"[ \t\n]+").unwrap();
    re.replace_all(s, " ").trim().to_string()
}

/// A command template under construction
///
/// `Template` keeps the tagged-template shape invariant, always one more
/// fragment than values, so it can be built incrementally by the `sh!` and
/// `resolve!` macros. Adjacent literals merge into one fragment; pushing a
/// value closes the current fragment and opens the next.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    fragments: Vec<String>,
    values: Vec<Value>,
}

impl Template {
    /// Create an empty template
    pub fn new() -> Self {
        Template {
            fragments: vec![String::new()],
            values: Vec::new(),
        }
    }

    /// Append literal text to the current fragment
    pub fn push_text(&mut self, text: &str) {
        if let Some(last) = self.fragments.last_mut() {
            last.push_str(text);
        }
    }

    /// Append an interpolated value and start the next fragment
    pub fn push_value(&mut self, value: Value) {
        self.values.push(value);
        self.fragments.push(String::new());
    }

    /// The literal fragments accumulated so far
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// The interpolated values accumulated so far
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Render this template to a command string
    pub fn render(&self) -> String {
        let fragments: Vec<&str> = self.fragments.iter().map(String::as_str).collect();
        render(&fragments, &self.values)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a command string from alternating literals and values
///
/// Literals are written as string literals and values in braces; values go
/// through [`Value::from`](crate::template::Value), so strings, numbers,
/// booleans, options, vectors, and paths all work. An absent value
/// (`None`, `false`, NaN) removes the flag token before it and the operand
/// token after it.
///
/// ```
/// let level = Some(3);
/// let quiet: Option<&str> = None;
/// let cmd = shtpl::sh!("build -O" {level} " --quiet=" {quiet} " all");
/// assert_eq!(cmd, "build -O3 all");
/// ```
#[macro_export]
macro_rules! sh {
    (@push $template:ident) => {};
    (@push $template:ident $fragment:literal $($rest:tt)*) => {
        $template.push_text($fragment);
        $crate::sh!(@push $template $($rest)*);
    };
    (@push $template:ident {$value:expr} $($rest:tt)*) => {
        $template.push_value($crate::template::Value::from($value));
        $crate::sh!(@push $template $($rest)*);
    };
    ($($tokens:tt)*) => {{
        let mut template = $crate::template::Template::new();
        $crate::sh!(@push template $($tokens)*);
        template.render()
    }};
}
