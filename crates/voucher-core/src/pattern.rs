use std::fmt::Display;

const NUMERIC_TOKEN: char = '#';
const ALPHANUMERIC_TOKEN: char = '*';
const VARIABLE_SUFFIX: char = '+';

/// Which alphabet a placeholder draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `#` and `#+`.
    Numeric,
    /// `*` and `*+`.
    Alphanumeric,
}

/// How many characters a placeholder expands to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    /// Exactly one character.
    Single,
    /// A run whose length is resolved at generation time.
    Variable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placeholder {
    pub class: CharClass,
    pub width: Width,
}

impl Placeholder {
    pub fn is_variable(&self) -> bool {
        self.width == Width::Variable
    }
}

/// A piece of a scanned pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Text copied verbatim into every code.
    Literal(String),
    Placeholder(Placeholder),
}

/// Number of placeholder occurrences per kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaceholderCounts {
    pub numeric: usize,
    pub alphanumeric: usize,
    pub numeric_variable: usize,
    pub alphanumeric_variable: usize,
}

impl PlaceholderCounts {
    pub fn variable(&self) -> usize {
        self.numeric_variable + self.alphanumeric_variable
    }

    pub fn fixed(&self) -> usize {
        self.numeric + self.alphanumeric
    }
}

/// A code pattern split into literal and placeholder segments.
///
/// Recognized tokens:
/// - `#` one numeric character
/// - `*` one alphanumeric character
/// - `#+` a numeric run of generated length
/// - `*+` an alphanumeric run of generated length
///
/// A `+` that does not directly follow `#` or `*` is a literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Scans `source` once from left to right. Never fails: a pattern without
    /// placeholders is a single literal.
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let segments = scan(&source);
        Self { source, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(placeholder) => Some(placeholder),
            Segment::Literal(_) => None,
        })
    }

    /// Variable placeholders in the order they appear.
    pub fn variable_placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.placeholders().filter(|p| p.is_variable())
    }

    pub fn counts(&self) -> PlaceholderCounts {
        self.placeholders().fold(PlaceholderCounts::default(), |mut counts, p| {
            match (p.class, p.width) {
                (CharClass::Numeric, Width::Single) => counts.numeric += 1,
                (CharClass::Alphanumeric, Width::Single) => counts.alphanumeric += 1,
                (CharClass::Numeric, Width::Variable) => counts.numeric_variable += 1,
                (CharClass::Alphanumeric, Width::Variable) => counts.alphanumeric_variable += 1,
            }
            counts
        })
    }

    pub fn has_variable_placeholder(&self) -> bool {
        self.placeholders().any(|p| p.is_variable())
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

fn scan(source: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        let class = match c {
            NUMERIC_TOKEN => CharClass::Numeric,
            ALPHANUMERIC_TOKEN => CharClass::Alphanumeric,
            _ => {
                literal.push(c);
                continue;
            }
        };

        // Variable tokens take precedence so `#+` is never read as `#` then `+`.
        let width = if chars.next_if_eq(&VARIABLE_SUFFIX).is_some() {
            Width::Variable
        } else {
            Width::Single
        };

        if !literal.is_empty() {
            segments.push(Segment::Literal(std::mem::take(&mut literal)));
        }
        segments.push(Segment::Placeholder(Placeholder { class, width }));
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(class: CharClass) -> Segment {
        Segment::Placeholder(Placeholder {
            class,
            width: Width::Single,
        })
    }

    fn variable(class: CharClass) -> Segment {
        Segment::Placeholder(Placeholder {
            class,
            width: Width::Variable,
        })
    }

    fn literal(s: &str) -> Segment {
        Segment::Literal(s.to_string())
    }

    #[test]
    fn scans_mixed_pattern() {
        let pattern = Pattern::parse("AB-##*-#+x*+");
        assert_eq!(
            pattern.segments(),
            &[
                literal("AB-"),
                single(CharClass::Numeric),
                single(CharClass::Numeric),
                single(CharClass::Alphanumeric),
                literal("-"),
                variable(CharClass::Numeric),
                literal("x"),
                variable(CharClass::Alphanumeric),
            ]
        );
    }

    #[test]
    fn no_placeholders_is_one_literal() {
        let pattern = Pattern::parse("FIXED");
        assert_eq!(pattern.segments(), &[literal("FIXED")]);
        assert_eq!(pattern.counts(), PlaceholderCounts::default());
        assert!(!pattern.has_variable_placeholder());
    }

    #[test]
    fn empty_pattern_has_no_segments() {
        assert!(Pattern::parse("").segments().is_empty());
    }

    #[test]
    fn lone_plus_is_literal() {
        let pattern = Pattern::parse("+1 #");
        assert_eq!(
            pattern.segments(),
            &[literal("+1 "), single(CharClass::Numeric)]
        );
    }

    #[test]
    fn plus_binds_only_once() {
        // `#++` is a numeric run followed by a literal `+`.
        let pattern = Pattern::parse("#++");
        assert_eq!(
            pattern.segments(),
            &[variable(CharClass::Numeric), literal("+")]
        );
    }

    #[test]
    fn counts_each_kind() {
        let counts = Pattern::parse("##*-#+-*+*+").counts();
        assert_eq!(
            counts,
            PlaceholderCounts {
                numeric: 2,
                alphanumeric: 1,
                numeric_variable: 1,
                alphanumeric_variable: 2,
            }
        );
        assert_eq!(counts.fixed(), 3);
        assert_eq!(counts.variable(), 3);
    }

    #[test]
    fn variable_placeholders_keep_order() {
        let pattern = Pattern::parse("*+-#-#+");
        let classes: Vec<CharClass> = pattern.variable_placeholders().map(|p| p.class).collect();
        assert_eq!(classes, vec![CharClass::Alphanumeric, CharClass::Numeric]);
        assert!(pattern.has_variable_placeholder());
    }

    #[test]
    fn display_returns_source() {
        assert_eq!(Pattern::from("V-#+").to_string(), "V-#+");
    }
}
