use super::captures::{Captures, SmallKvBuffer};
use super::error::RouterError;

use regex::{Regex, RegexBuilder};

const COLON: char = ':';

/// Matches one non-empty segment, never crossing a separator.
const SEGMENT: &str = "([^/]+)";

/// A compiled path pattern.
///
/// Literal text matches verbatim and case-insensitively. A `:name` token
/// (ascii word characters and hyphens) captures one non-empty segment.
/// The matcher is anchored to the whole path.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    names: Box<[Box<str>]>,
}

impl Pattern {
    pub fn compile(spec: &str) -> Result<Self, RouterError> {
        if spec.is_empty() {
            return Err(RouterError::InvalidPath);
        }

        let spec = spec.to_lowercase();
        let mut source = String::with_capacity(spec.len() + 16);
        let mut names: Vec<Box<str>> = Vec::new();

        source.push('^');

        let mut rest: &str = &spec;
        while let Some(pos) = rest.find(COLON) {
            let (literal, tail) = rest.split_at(pos);
            let tail = &tail[1..];
            let name_len = tail.find(|c: char| !is_name_char(c)).unwrap_or(tail.len());

            if name_len == 0 {
                // a bare colon is literal text
                source.push_str(&regex::escape(&rest[..=pos]));
                rest = tail;
                continue;
            }

            let name = &tail[..name_len];
            if names.iter().any(|n| **n == *name) {
                return Err(RouterError::DuplicateParam(name.to_owned()));
            }

            source.push_str(&regex::escape(literal));
            source.push_str(SEGMENT);
            names.push(name.into());
            rest = &tail[name_len..];
        }

        source.push_str(&regex::escape(rest));
        source.push('$');

        let regex = RegexBuilder::new(&source).case_insensitive(true).build()?;

        Ok(Self {
            regex,
            names: names.into(),
        })
    }

    /// Canonical form of the compiled matcher.
    ///
    /// Two patterns are structurally identical iff their canonical forms are equal,
    /// e.g. `/u/:id` and `/U/:name`.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(|n| &**n)
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    pub fn captures<'s, 'p>(&'s self, path: &'p str) -> Option<Captures<'p>>
    where
        's: 'p,
    {
        let mut captures = Captures::new();
        if self.captures_into(path, &mut captures.buf) {
            Some(captures)
        } else {
            None
        }
    }

    pub(super) fn captures_into<'s, 'p>(
        &'s self,
        path: &'p str,
        buf: &mut SmallKvBuffer<'p>,
    ) -> bool
    where
        's: 'p,
    {
        let caps = match self.regex.captures(path) {
            Some(c) => c,
            None => return false,
        };
        let groups = caps.iter().skip(1);
        for (name, group) in self.names.iter().zip(groups) {
            if let Some(m) = group {
                buf.push((&**name, m.as_str()));
            }
        }
        true
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

#[inline]
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}
