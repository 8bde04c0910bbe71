use crate::router::{Captures, Router, RouterError};

use http::Method;

/// Methods a route can be registered for, in table order.
pub const METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

/// Route table with one ordered [`Router`] per supported method.
///
/// Method names are matched case-insensitively, so `"get"`, `"GET"` and
/// `Method::GET` all address the same table.
#[derive(Debug)]
pub struct HttpRouter<T> {
    tables: [Router<T>; 4],
}

impl<T> HttpRouter<T> {
    pub fn new() -> Self {
        Self {
            tables: [Router::new(), Router::new(), Router::new(), Router::new()],
        }
    }

    /// Looks up the first route registered for `method` that matches `path`.
    ///
    /// `Ok(None)` means no route matched. Errors are reserved for an
    /// unsupported method or an empty path.
    pub fn find<'s, 'p, 't>(
        &'s self,
        method: impl AsRef<str>,
        path: &'p str,
    ) -> Result<Option<(&'t T, Captures<'p>)>, RouterError>
    where
        's: 'p + 't,
    {
        let idx = method_index(method.as_ref())?;
        check_path(path)?;
        Ok(self.tables[idx].find(path))
    }

    pub fn find_mut<'s, 'p, 't>(
        &'s mut self,
        method: impl AsRef<str>,
        path: &'p str,
    ) -> Result<Option<(&'t mut T, Captures<'p>)>, RouterError>
    where
        's: 'p + 't,
    {
        let idx = method_index(method.as_ref())?;
        check_path(path)?;
        Ok(self.tables[idx].find_mut(path))
    }

    pub fn insert(&mut self, method: impl AsRef<str>, pattern: &str, data: T) -> &mut Self {
        if let Err(e) = self.try_insert(method, pattern, data) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    pub fn try_insert(
        &mut self,
        method: impl AsRef<str>,
        pattern: &str,
        data: T,
    ) -> Result<&mut Self, RouterError> {
        let idx = method_index(method.as_ref())?;
        self.tables[idx].try_insert(pattern, data)?;
        tracing::debug!(method = %METHODS[idx], pattern = %pattern, "route registered");
        Ok(self)
    }

    pub fn router(&self, method: impl AsRef<str>) -> Result<&Router<T>, RouterError> {
        let idx = method_index(method.as_ref())?;
        Ok(&self.tables[idx])
    }

    pub fn len(&self) -> usize {
        self.tables.iter().map(Router::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.iter().all(Router::is_empty)
    }
}

impl<T> Default for HttpRouter<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn method_index(method: &str) -> Result<usize, RouterError> {
    METHODS
        .iter()
        .position(|m| m.as_str().eq_ignore_ascii_case(method))
        .ok_or_else(|| RouterError::UnsupportedMethod(method.to_owned()))
}

#[inline]
fn check_path(path: &str) -> Result<(), RouterError> {
    if path.is_empty() {
        Err(RouterError::InvalidPath)
    } else {
        Ok(())
    }
}
