use super::captures::Captures;
use super::error::RouterError;
use super::pattern::Pattern;
use super::{Route, Router};

impl<T> Router<T> {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn clear(&mut self) {
        self.routes.clear();
    }

    pub fn find<'s, 'p, 't>(&'s self, path: &'p str) -> Option<(&'t T, Captures<'p>)>
    where
        's: 'p + 't,
    {
        let mut captures = Captures::new();
        let idx = self.find_index(path, &mut captures)?;
        Some((&self.routes[idx].data, captures))
    }

    pub fn find_mut<'s, 'p, 't>(&'s mut self, path: &'p str) -> Option<(&'t mut T, Captures<'p>)>
    where
        's: 'p + 't,
    {
        let mut captures = Captures::new();
        for Route { pattern, data } in self.routes.iter_mut() {
            if pattern.captures_into(path, &mut captures.buf) {
                return Some((data, captures));
            }
        }
        None
    }

    pub fn insert(&mut self, pattern: &str, data: T) -> &mut Self {
        if let Err(e) = self.try_insert(pattern, data) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    pub fn try_insert(&mut self, pattern: &str, data: T) -> Result<&mut Self, RouterError> {
        let compiled = Pattern::compile(pattern)?;
        if self.routes.iter().any(|r| r.pattern == compiled) {
            return Err(RouterError::DuplicatePath(pattern.to_owned()));
        }
        self.routes.push(Route {
            pattern: compiled,
            data,
        });
        Ok(self)
    }
}

impl<T> Router<T> {
    fn find_index<'s, 'p>(&'s self, path: &'p str, captures: &mut Captures<'p>) -> Option<usize>
    where
        's: 'p,
    {
        self.routes
            .iter()
            .position(|r| r.pattern.captures_into(path, &mut captures.buf))
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}
