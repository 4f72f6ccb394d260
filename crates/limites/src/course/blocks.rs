//! Content blocks of a lesson page: callouts, formulas, lists and tables.
//!
//! Formulas are stored as TeX source and typeset by the browser. `Formula::check`
//! catches the authoring mistakes that would make the typesetter give up; the
//! page renderer never fails on them and shows the raw source instead.

use std::fmt;

/// Highlighted box kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalloutKind {
    Definition,
    History,
    Example,
}

impl CalloutKind {
    pub fn css_class(self) -> &'static str {
        match self {
            CalloutKind::Definition => "callout callout-definition",
            CalloutKind::History => "callout callout-history",
            CalloutKind::Example => "callout callout-example",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CalloutKind::Definition => "💡 Definición:",
            CalloutKind::History => "📜 Nota Histórica:",
            CalloutKind::Example => "✅ Ejemplo Resuelto:",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MathMode {
    Inline,
    Display,
}

/// Problems found in TeX source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormulaError {
    Empty,
    /// `}` without a matching `{` (char offset).
    UnexpectedClose { at: usize },
    /// `{` groups still open at the end.
    UnclosedGroup { open: usize },
    /// Trailing `\` with nothing to escape.
    DanglingBackslash,
    /// `\left` / `\right` counts differ.
    UnmatchedDelimiters { left: usize, right: usize },
    /// `\\name`: a doubled backslash in front of a command name.
    DoubledBackslash { at: usize },
}

impl fmt::Display for FormulaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormulaError::Empty => write!(f, "empty formula"),
            FormulaError::UnexpectedClose { at } => write!(f, "unexpected '}}' at {at}"),
            FormulaError::UnclosedGroup { open } => write!(f, "{open} unclosed '{{' group(s)"),
            FormulaError::DanglingBackslash => write!(f, "formula ends with a lone '\\'"),
            FormulaError::UnmatchedDelimiters { left, right } => {
                write!(f, "{left} \\left vs {right} \\right")
            }
            FormulaError::DoubledBackslash { at } => {
                write!(f, "doubled backslash before a command at {at}")
            }
        }
    }
}

impl std::error::Error for FormulaError {}

/// TeX source plus layout mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Formula {
    pub tex: String,
    pub mode: MathMode,
}

impl Formula {
    pub fn inline(tex: impl Into<String>) -> Self {
        Self {
            tex: tex.into(),
            mode: MathMode::Inline,
        }
    }

    pub fn display(tex: impl Into<String>) -> Self {
        Self {
            tex: tex.into(),
            mode: MathMode::Display,
        }
    }

    /// Structural check of the TeX source (groups, escapes, `\left`/`\right`).
    pub fn check(&self) -> Result<(), FormulaError> {
        let chars: Vec<char> = self.tex.chars().collect();
        if self.tex.trim().is_empty() {
            return Err(FormulaError::Empty);
        }
        let mut depth = 0usize;
        let (mut left, mut right) = (0usize, 0usize);
        let mut i = 0;
        while i < chars.len() {
            match chars[i] {
                '\\' => match chars.get(i + 1) {
                    None => return Err(FormulaError::DanglingBackslash),
                    Some('\\') => {
                        if chars.get(i + 2).is_some_and(|c| c.is_ascii_alphabetic()) {
                            return Err(FormulaError::DoubledBackslash { at: i });
                        }
                        i += 2;
                        continue;
                    }
                    Some(c) if c.is_ascii_alphabetic() => {
                        let end = chars[i + 1..]
                            .iter()
                            .position(|c| !c.is_ascii_alphabetic())
                            .map_or(chars.len(), |p| i + 1 + p);
                        let name: String = chars[i + 1..end].iter().collect();
                        match name.as_str() {
                            "left" => left += 1,
                            "right" => right += 1,
                            _ => {}
                        }
                        i = end;
                        continue;
                    }
                    Some(_) => {
                        i += 2;
                        continue;
                    }
                },
                '{' => depth += 1,
                '}' => {
                    if depth == 0 {
                        return Err(FormulaError::UnexpectedClose { at: i });
                    }
                    depth -= 1;
                }
                _ => {}
            }
            i += 1;
        }
        if depth > 0 {
            return Err(FormulaError::UnclosedGroup { open: depth });
        }
        if left != right {
            return Err(FormulaError::UnmatchedDelimiters { left, right });
        }
        Ok(())
    }
}

/// Run of inline content inside a paragraph or list item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Strong(String),
    Math(Formula),
}

/// Split `text` into plain runs, `**strong**` runs and `$tex$` inline math.
///
/// An unterminated marker is kept as literal text.
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut plain = String::new();
    let mut rest = text;
    while !rest.is_empty() {
        let next = [rest.find('$'), rest.find("**")]
            .into_iter()
            .flatten()
            .min();
        let Some(start) = next else {
            plain.push_str(rest);
            break;
        };
        let (marker, len) = if rest[start..].starts_with("**") {
            ("**", 2)
        } else {
            ("$", 1)
        };
        let body_start = start + len;
        let Some(close) = rest[body_start..].find(marker) else {
            plain.push_str(rest);
            break;
        };
        plain.push_str(&rest[..start]);
        if !plain.is_empty() {
            out.push(Inline::Text(std::mem::take(&mut plain)));
        }
        let body = &rest[body_start..body_start + close];
        out.push(if marker == "$" {
            Inline::Math(Formula::inline(body))
        } else {
            Inline::Strong(body.to_string())
        });
        rest = &rest[body_start + close + len..];
    }
    if !plain.is_empty() {
        out.push(Inline::Text(plain));
    }
    out
}

/// Page building blocks. Strings use the `parse_inline` syntax.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// Numbered sub-section title such as `1.1. Introducción`.
    Subheading(String),
    Paragraph(String),
    Callout { kind: CalloutKind, body: Vec<Block> },
    /// Display-mode formula in its own box.
    Formula(Formula),
    Bullets(Vec<String>),
    Steps(Vec<String>),
    /// Practice list under a small heading.
    Exercises { title: String, items: Vec<String> },
    /// Two-column table of TeX cells.
    EquivalenceTable {
        header: (String, String),
        rows: Vec<(String, String)>,
    },
    /// The interactive ε-δ chart.
    Visualizer,
}

impl Block {
    /// Every formula reachable from this block, inline ones included.
    pub fn formulas(&self) -> Vec<Formula> {
        fn from_text(s: &str) -> impl Iterator<Item = Formula> + '_ {
            parse_inline(s).into_iter().filter_map(|i| match i {
                Inline::Math(f) => Some(f),
                _ => None,
            })
        }
        match self {
            Block::Subheading(s) | Block::Paragraph(s) => from_text(s).collect(),
            Block::Callout { body, .. } => body.iter().flat_map(Block::formulas).collect(),
            Block::Formula(f) => vec![f.clone()],
            Block::Bullets(items) | Block::Steps(items) | Block::Exercises { items, .. } => {
                items.iter().flat_map(|s| from_text(s)).collect()
            }
            Block::EquivalenceTable { rows, .. } => rows
                .iter()
                .flat_map(|(a, b)| [Formula::inline(a.as_str()), Formula::inline(b.as_str())])
                .collect(),
            Block::Visualizer => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_formulas_pass() {
        for tex in [
            r"\lim_{x \to a} f(x) = L",
            r"\lim_{x \to a} [f(x)]^n = \left[ \lim_{x \to a} f(x) \right]^n",
            r"\delta = \min(1, \frac{\epsilon}{7})",
            r"\{ x : |x| < 1 \}",
            r"a \\ b",
        ] {
            assert_eq!(Formula::display(tex).check(), Ok(()), "{tex}");
        }
    }

    #[test]
    fn malformed_formulas_are_reported() {
        assert_eq!(Formula::inline("  ").check(), Err(FormulaError::Empty));
        assert_eq!(
            Formula::inline(r"\frac{1}{2").check(),
            Err(FormulaError::UnclosedGroup { open: 1 })
        );
        assert_eq!(
            Formula::inline("x}").check(),
            Err(FormulaError::UnexpectedClose { at: 1 })
        );
        assert_eq!(
            Formula::inline(r"x \").check(),
            Err(FormulaError::DanglingBackslash)
        );
        assert_eq!(
            Formula::inline(r"\left( x").check(),
            Err(FormulaError::UnmatchedDelimiters { left: 1, right: 0 })
        );
        assert_eq!(
            Formula::inline(r"= \\left[ x \\right]^n").check(),
            Err(FormulaError::DoubledBackslash { at: 2 })
        );
    }

    #[test]
    fn inline_syntax_splits_runs() {
        let runs = parse_inline("si **ε > 0** entonces $|f(x) - L| < \\epsilon$.");
        assert_eq!(
            runs,
            vec![
                Inline::Text("si ".into()),
                Inline::Strong("ε > 0".into()),
                Inline::Text(" entonces ".into()),
                Inline::Math(Formula::inline(r"|f(x) - L| < \epsilon")),
                Inline::Text(".".into()),
            ]
        );
    }

    #[test]
    fn unterminated_markers_stay_literal() {
        assert_eq!(
            parse_inline("cuesta $5 nada más"),
            vec![Inline::Text("cuesta $5 nada más".into())]
        );
        assert_eq!(parse_inline(""), Vec::<Inline>::new());
    }

    #[test]
    fn callout_formulas_are_collected() {
        let b = Block::Callout {
            kind: CalloutKind::Definition,
            body: vec![
                Block::Paragraph("$a$ y $b$".into()),
                Block::Formula(Formula::display("c")),
            ],
        };
        let tex: Vec<_> = b.formulas().into_iter().map(|f| f.tex).collect();
        assert_eq!(tex, vec!["a", "b", "c"]);
        assert_eq!(CalloutKind::History.label(), "📜 Nota Histórica:");
    }
}
