//! Finds the first line of a document that declares a named type.

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKeyword {
    Message,
    Enum,
}

/// The declaring occurrence of a type name.
///
/// `line` is 1-based; `column` is the 0-based character offset of the first
/// character of the *name* within that line, not of the keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub keyword: DeclarationKeyword,
    pub name: String,
    pub line: usize,
    pub column: usize,
}

/// A compiled search for one target name, reused across all tiers of a
/// resolution.
///
/// Matches `message <name>` or `enum <name>` at the start of a line (any
/// leading indentation allowed, so nested declarations match too). The
/// name is matched literally and must end at a word boundary: `Foo` does
/// not match `message FooBar`, and `Fo` does not match `message Foo`.
#[derive(Debug)]
pub struct DefinitionPattern {
    name: String,
    regex: Regex,
}

impl DefinitionPattern {
    pub fn new(name: &str) -> Self {
        let pattern = format!(r"(?m)^[ \t]*(message|enum)[ \t]+{}\b", regex::escape(name));
        // An escaped literal can't produce an invalid pattern.
        #[allow(clippy::unwrap_used)]
        let regex = Regex::new(&pattern).unwrap();
        Self {
            name: name.to_string(),
            regex,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// First match top-to-bottom, or `None` when this document does not
    /// declare the name — which simply sends the pipeline to its next tier.
    pub fn find_first(&self, text: &str) -> Option<Definition> {
        let captures = self.regex.captures(text)?;
        let matched = captures.get(0)?;
        let keyword = match captures.get(1)?.as_str() {
            "message" => DeclarationKeyword::Message,
            _ => DeclarationKeyword::Enum,
        };

        // `^` anchors the match at a line start, so everything before it
        // is whole lines.
        let line = text[..matched.start()].matches('\n').count() + 1;

        let line_text = match text[matched.start()..].split_once('\n') {
            Some((first, _)) => first,
            None => &text[matched.start()..],
        };
        // The name's offset is recomputed with a literal search within the
        // matched line; the regex offset is relative to the whole document.
        let byte_offset = line_text.find(&self.name)?;
        let column = line_text[..byte_offset].chars().count();

        Some(Definition {
            keyword,
            name: self.name.clone(),
            line,
            column,
        })
    }
}
