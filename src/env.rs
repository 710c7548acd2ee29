//! Environment lookups behind a seam.
//!
//! [`Env::real()`] reads the process environment. Unit tests build an
//! [`Env::mock()`] from fixed pairs instead of mutating process state.

use std::collections::HashMap;
use std::env::VarError;
use std::str::FromStr;

/// Source of environment variables for config and logging setup.
#[derive(Clone, Debug, Default)]
pub struct Env {
    fixed: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the process environment.
    pub fn real() -> Self {
        Self { fixed: None }
    }

    /// Read only from the given pairs.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        let fixed = vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { fixed: Some(fixed) }
    }

    pub fn var(&self, name: &str) -> Result<String, VarError> {
        match &self.fixed {
            Some(map) => map.get(name).cloned().ok_or(VarError::NotPresent),
            None => std::env::var(name),
        }
    }

    /// Look up `name` and parse its trimmed value.
    ///
    /// `None` when unset; `Some(Err(raw))` when set but unparseable, so the
    /// caller decides whether that is a warning or an error.
    pub fn parsed<T: FromStr>(&self, name: &str) -> Option<Result<T, String>> {
        let raw = self.var(name).ok()?;
        Some(raw.trim().parse::<T>().map_err(|_| raw))
    }
}
