//! Descriptor loading
//!
//! A descriptor is parsed as strict YAML first. If that fails on the syntax
//! level, the inline shorthand (`When: File Created`) is rewritten into the
//! canonical form and parsed once more.

use std::path::Path;

use serde_yaml::Value;
use tracing::debug;

use super::params::Parameters;
use crate::common::{Error, Result};

/// A parsed test case definition
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    /// The trigger block
    pub when: Parameters,
    /// The assertion block
    pub then: Parameters,
}

/// Why a strict parse failed
#[derive(Debug)]
enum ParseFailure {
    /// The text is not well-formed YAML
    Syntax(serde_yaml::Error),
    /// Well-formed YAML, but not a `When`/`Then` pair of mappings
    Structure(String),
}

impl From<ParseFailure> for Error {
    fn from(failure: ParseFailure) -> Self {
        match failure {
            ParseFailure::Syntax(e) => Error::DescriptorParseFailed(e.to_string()),
            ParseFailure::Structure(message) => Error::DescriptorParseFailed(message),
        }
    }
}

impl Descriptor {
    /// Read and parse the descriptor at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::DescriptorRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse descriptor text, accepting both the canonical and the shorthand form
    pub fn parse(content: &str) -> Result<Self> {
        match parse_strict(content) {
            Ok(descriptor) => Ok(descriptor),
            Err(ParseFailure::Syntax(original)) => {
                let normalized = normalize_shorthand(content);
                if normalized == content {
                    return Err(ParseFailure::Syntax(original).into());
                }
                debug!("Descriptor is not valid YAML ({original}), retrying with shorthand rewrite");
                Ok(parse_strict(&normalized)?)
            }
            Err(failure) => Err(failure.into()),
        }
    }
}

fn parse_strict(content: &str) -> std::result::Result<Descriptor, ParseFailure> {
    let document: Value = serde_yaml::from_str(content).map_err(ParseFailure::Syntax)?;
    let root = match document {
        Value::Mapping(mapping) => Parameters::new(mapping),
        _ => {
            return Err(ParseFailure::Structure(
                "descriptor must be a mapping with the sections When and Then".to_string(),
            ))
        }
    };

    let section = |key: &str| {
        root.get::<Parameters>(key)
            .map_err(|e| ParseFailure::Structure(e.to_string()))
    };

    Ok(Descriptor {
        when: section("When")?,
        then: section("Then")?,
    })
}

/// Rewrite inline section identifiers into explicit id keys
///
/// `When: <id>` becomes `When:` followed by `  trigger_id: <id>`, and
/// `Then: <id>` becomes `Then:` followed by `  assertion_id: <id>`. Every
/// other line, bare section headers included, is passed through verbatim,
/// so canonical text comes back unchanged.
pub fn normalize_shorthand(content: &str) -> String {
    let mut out = String::with_capacity(content.len() + 64);

    for raw in content.split_inclusive('\n') {
        let (line, ending) = split_line_ending(raw);
        let rewritten = rewrite_header(line, "When:", "trigger_id")
            .or_else(|| rewrite_header(line, "Then:", "assertion_id"));

        match rewritten {
            Some(lines) => {
                out.push_str(&lines);
                out.push_str(if ending.is_empty() { "\n" } else { ending });
            }
            None => out.push_str(raw),
        }
    }

    out
}

fn rewrite_header(line: &str, header: &str, id_key: &str) -> Option<String> {
    let identifier = line.strip_prefix(header)?.trim();
    if identifier.is_empty() {
        return None;
    }
    Some(format!("{header}\n  {id_key}: {identifier}"))
}

fn split_line_ending(raw: &str) -> (&str, &str) {
    if let Some(line) = raw.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw, "")
    }
}
