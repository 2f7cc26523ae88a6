//! Label templates
//!
//! Templates use `{placeholder}` substitution with `{{` and `}}` as literal
//! braces. A placeholder may carry a format spec after a colon,
//! `{key:[[fill]align][width][.precision]}`, e.g. `{side:<8}` or
//! `{name:*^20.10}`. Parsing validates every placeholder and spec up front
//! so a typo fails before any metadata file is read.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::TemplateError;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{|\}\}|\{([^{}]*)\}|[{}]").expect("Invalid template token regex")
});

static SPEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?P<fill>.)?(?P<align>[<>^]))?(?P<width>\d+)?(?:\.(?P<precision>\d+))?s?$")
        .expect("Invalid format spec regex")
});

/// A value that can be substituted into a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// Display name, falling back to the file stem
    Name,
    /// Deployment side, falling back to `unknown`
    Side,
    /// Base file name
    Filename,
    /// Parent directory relative to the project root
    Directory,
    /// File path relative to the project root
    Path,
    /// Absolute parent directory
    AbsoluteDirectory,
    /// Absolute file path
    AbsolutePath,
}

impl Placeholder {
    /// Every placeholder, in documentation order
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Side,
        Self::Filename,
        Self::Directory,
        Self::Path,
        Self::AbsoluteDirectory,
        Self::AbsolutePath,
    ];

    /// Key used between braces
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Side => "side",
            Self::Filename => "filename",
            Self::Directory => "directory",
            Self::Path => "path",
            Self::AbsoluteDirectory => "absolute_directory",
            Self::AbsolutePath => "absolute_path",
        }
    }

    fn known_keys() -> String {
        Self::ALL
            .iter()
            .map(|p| p.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Placeholder {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.key() == s)
            .ok_or_else(|| TemplateError::UnknownPlaceholder {
                name: s.to_string(),
                known: Self::known_keys(),
            })
    }
}

/// Horizontal alignment within the field width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
    Center,
}

/// Padding and truncation applied to a substituted value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec {
    pub fill: char,
    pub align: Align,
    pub width: Option<usize>,
    pub precision: Option<usize>,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            fill: ' ',
            align: Align::Left,
            width: None,
            precision: None,
        }
    }
}

impl FormatSpec {
    /// Parse the text after the colon of a placeholder
    pub fn parse(spec: &str) -> Option<Self> {
        let caps = SPEC.captures(spec)?;
        let number = |name: &str| caps.name(name).and_then(|m| m.as_str().parse().ok());

        let align = match caps.name("align").map(|m| m.as_str()) {
            Some(">") => Align::Right,
            Some("^") => Align::Center,
            _ => Align::Left,
        };
        let fill = caps
            .name("fill")
            .and_then(|m| m.as_str().chars().next())
            .unwrap_or(' ');

        Some(Self {
            fill,
            align,
            width: number("width"),
            precision: number("precision"),
        })
    }

    /// Truncate to the precision, then pad to the width (counted in chars)
    pub fn apply(&self, value: &str) -> String {
        let text: String = match self.precision {
            Some(max) => value.chars().take(max).collect(),
            None => value.to_string(),
        };

        let len = text.chars().count();
        let Some(pad) = self.width.map(|w| w.saturating_sub(len)).filter(|&p| p > 0) else {
            return text;
        };

        let (before, after) = match self.align {
            Align::Left => (0, pad),
            Align::Right => (pad, 0),
            Align::Center => (pad / 2, pad - pad / 2),
        };
        let fill = |n: usize| std::iter::repeat(self.fill).take(n).collect::<String>();
        format!("{}{text}{}", fill(before), fill(after))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Placeholder, FormatSpec),
}

/// A parsed label template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse and validate a template string
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut last = 0;

        for caps in TOKEN.captures_iter(source) {
            let Some(token) = caps.get(0) else { continue };
            literal.push_str(&source[last..token.start()]);
            last = token.end();

            match token.as_str() {
                "{{" => literal.push('{'),
                "}}" => literal.push('}'),
                lone @ ("{" | "}") => {
                    return Err(TemplateError::UnmatchedBrace {
                        brace: lone.chars().next().unwrap_or('{'),
                        position: token.start(),
                    })
                }
                _ => {
                    let body = caps.get(1).map_or("", |m| m.as_str());
                    let (key, spec) = body.split_once(':').unwrap_or((body, ""));
                    let placeholder = key.parse::<Placeholder>()?;
                    let spec =
                        FormatSpec::parse(spec).ok_or_else(|| TemplateError::InvalidFormatSpec {
                            name: key.to_string(),
                            spec: spec.to_string(),
                        })?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(placeholder, spec));
                }
            }
        }

        literal.push_str(&source[last..]);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Render the template, resolving each placeholder through `lookup`
    pub fn render<F>(&self, mut lookup: F) -> String
    where
        F: FnMut(Placeholder) -> String,
    {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(p, spec) => out.push_str(&spec.apply(&lookup(*p))),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_keys(template: &Template) -> String {
        template.render(|p| p.key().to_uppercase())
    }

    #[test]
    fn test_parse_all_placeholders() {
        for placeholder in Placeholder::ALL {
            let template = Template::parse(&format!("<{placeholder}>")).unwrap();
            assert_eq!(
                render_keys(&template),
                format!("<{}>", placeholder.key().to_uppercase())
            );
        }
    }

    #[test]
    fn test_render_mixed_text() {
        let template = Template::parse("{name} ({side})").unwrap();
        assert_eq!(render_keys(&template), "NAME (SIDE)");
    }

    #[test]
    fn test_escaped_braces() {
        let template = Template::parse("{{{name}}} {{literal}}").unwrap();
        assert_eq!(render_keys(&template), "{NAME} {literal}");
    }

    #[test]
    fn test_plain_text_template() {
        let template = Template::parse("no fields here").unwrap();
        assert_eq!(template.segments.len(), 1);
        assert_eq!(render_keys(&template), "no fields here");
    }

    #[test]
    fn test_empty_template() {
        let template = Template::parse("").unwrap();
        assert_eq!(render_keys(&template), "");
    }

    #[test]
    fn test_unknown_placeholder() {
        let err = Template::parse("{name} {version}").unwrap_err();
        match err {
            TemplateError::UnknownPlaceholder { name, known } => {
                assert_eq!(name, "version");
                assert!(known.contains("absolute_path"));
            }
            e => panic!("Expected UnknownPlaceholder, got: {e:?}"),
        }
    }

    #[test]
    fn test_empty_braces_are_unknown() {
        assert!(matches!(
            Template::parse("{}"),
            Err(TemplateError::UnknownPlaceholder { name, .. }) if name.is_empty()
        ));
    }

    #[test]
    fn test_unmatched_open_brace() {
        assert_eq!(
            Template::parse("abc {name").unwrap_err(),
            TemplateError::UnmatchedBrace {
                brace: '{',
                position: 4
            }
        );
    }

    #[test]
    fn test_unmatched_close_brace() {
        assert_eq!(
            Template::parse("name}").unwrap_err(),
            TemplateError::UnmatchedBrace {
                brace: '}',
                position: 4
            }
        );
    }

    #[test]
    fn test_aligned_columns() {
        let template = Template::parse("{side:<8}{name}").unwrap();
        let label = template.render(|p| match p {
            Placeholder::Side => "client".to_string(),
            _ => "Sodium".to_string(),
        });
        assert_eq!(label, "client  Sodium");
    }

    #[test]
    fn test_format_spec_alignment_and_fill() {
        let render = |source: &str| Template::parse(source).unwrap().render(|_| "abc".to_string());

        assert_eq!(render("[{name:6}]"), "[abc   ]");
        assert_eq!(render("[{name:>6}]"), "[   abc]");
        assert_eq!(render("[{name:*^7}]"), "[**abc**]");
        assert_eq!(render("[{name:-^6}]"), "[-abc--]");
        assert_eq!(render("[{name:2}]"), "[abc]");
        assert_eq!(render("[{name:}]"), "[abc]");
        assert_eq!(render("[{name:s}]"), "[abc]");
    }

    #[test]
    fn test_format_spec_precision_truncates() {
        let template = Template::parse("{name:.2}|{name:>5.1}").unwrap();
        assert_eq!(template.render(|_| "Sodium".to_string()), "So|    S");
    }

    #[test]
    fn test_format_spec_counts_chars() {
        let template = Template::parse("{name:>4}").unwrap();
        assert_eq!(template.render(|_| "né".to_string()), "  né");
    }

    #[test]
    fn test_invalid_format_spec() {
        assert_eq!(
            Template::parse("{name:d}").unwrap_err(),
            TemplateError::InvalidFormatSpec {
                name: "name".to_string(),
                spec: "d".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_key_with_spec() {
        match Template::parse("{version:<8}").unwrap_err() {
            TemplateError::UnknownPlaceholder { name, .. } => assert_eq!(name, "version"),
            e => panic!("Expected UnknownPlaceholder, got: {e:?}"),
        }
    }

    #[test]
    fn test_placeholder_from_str_round_trip() {
        for placeholder in Placeholder::ALL {
            assert_eq!(placeholder.key().parse::<Placeholder>().unwrap(), placeholder);
        }
    }
}
