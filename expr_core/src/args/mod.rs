//! Argument binding for built-in constructors
//!
//! Call arguments arrive as an ordered positional list plus a named mapping.
//! Binding maps them onto a constructor's parameter names; callers apply
//! their own defaults for anything left unbound.
//!
//! When a parameter is given both positionally and by name, the named value
//! wins. Named keys that are not parameters are kept so callers can decide
//! whether to reject them.

use crate::logging::codes;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("Takes at most {expected} positional arguments ({given} given)")]
    TooManyPositional { expected: usize, given: usize },
}

impl ArgumentError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            Self::TooManyPositional { .. } => codes::arguments::TOO_MANY_POSITIONAL,
        }
    }
}

/// Arguments of a single constructor call
#[derive(Debug, Clone, PartialEq)]
pub struct CallArgs<V> {
    pub positional: Vec<V>,
    pub named: BTreeMap<String, V>,
}

impl<V> Default for CallArgs<V> {
    fn default() -> Self {
        Self {
            positional: Vec::new(),
            named: BTreeMap::new(),
        }
    }
}

impl<V> CallArgs<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_positional(positional: Vec<V>) -> Self {
        Self {
            positional,
            named: BTreeMap::new(),
        }
    }

    pub fn from_named<K, I>(named: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            positional: Vec::new(),
            named: named.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn with_positional(mut self, value: impl Into<V>) -> Self {
        self.positional.push(value.into());
        self
    }

    pub fn with_named(mut self, name: impl Into<String>, value: impl Into<V>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

/// Parameter name to value, after binding
#[derive(Debug, Clone, PartialEq)]
pub struct BoundArgs<V> {
    values: BTreeMap<String, V>,
}

impl<V> Default for BoundArgs<V> {
    fn default() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }
}

impl<V> BoundArgs<V> {
    pub fn get(&self, name: &str) -> Option<&V> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Bound names that are not in `params`, in sorted order
    pub fn unknown_names<'a>(&'a self, params: &[&str]) -> Vec<&'a str> {
        self.names().filter(|name| !params.contains(name)).collect()
    }

    pub fn into_inner(self) -> BTreeMap<String, V> {
        self.values
    }
}

/// Bind positional values to the leading parameters
pub fn bind_positional<V>(positional: Vec<V>, params: &[&str]) -> Result<BoundArgs<V>, ArgumentError> {
    if positional.len() > params.len() {
        return Err(ArgumentError::TooManyPositional {
            expected: params.len(),
            given: positional.len(),
        });
    }

    let values = params
        .iter()
        .zip(positional)
        .map(|(name, value)| (name.to_string(), value))
        .collect();

    Ok(BoundArgs { values })
}

/// Named values bind to the parameter of the same name
pub fn bind_named<V>(named: BTreeMap<String, V>) -> BoundArgs<V> {
    BoundArgs { values: named }
}

/// Positional binding followed by named binding; named values overwrite
pub fn bind<V>(args: CallArgs<V>, params: &[&str]) -> Result<BoundArgs<V>, ArgumentError> {
    let mut bound = bind_positional(args.positional, params)?;
    bound.values.extend(bind_named(args.named).values);
    Ok(bound)
}
