use crate::router::Captures;

use std::iter::FusedIterator;
use std::str::FromStr;

/// Path parameters captured for one matched request.
///
/// The dispatcher stores them in the request extensions before the handler runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    path: String,
    offset: Vec<(Box<str>, usize, usize)>, // (name, start, end)
}

impl Params {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.offset
            .iter()
            .find(|(n, _, _)| &**n == name)
            .map(|&(_, s, e)| &self.path[s..e])
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn len(&self) -> usize {
        self.offset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offset.is_empty()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            path: &self.path,
            offset: self.offset.iter(),
        }
    }
}

impl Params {
    pub(super) fn new<'a>(path: &'a str, caps: &Captures<'a>) -> Self {
        if caps.is_empty() {
            return Self::default();
        }
        let base = path.as_ptr() as usize;
        let offset = caps
            .iter()
            .map(|&(name, value)| {
                let start = (value.as_ptr() as usize) - base;
                (name.into(), start, start + value.len())
            })
            .collect();
        Self {
            path: path.to_owned(),
            offset,
        }
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

pub struct Iter<'a> {
    path: &'a str,
    offset: std::slice::Iter<'a, (Box<str>, usize, usize)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.path;
        let &(ref n, s, e) = self.offset.next()?;
        Some((&**n, &path[s..e]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.offset.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

/// Access to the [`Params`] the dispatcher attached to a request.
pub trait RequestExt {
    fn params(&self) -> Option<&Params>;
}

impl<B> RequestExt for http::Request<B> {
    fn params(&self) -> Option<&Params> {
        self.extensions().get::<Params>()
    }
}
