//! Export targets: which function tables to read from which modules.
//!
//! On the command line a target is written `modulePath:ident[:ident...]`,
//! e.g. `text/template:builtins` or `html/template:funcMap:escapers`.

use std::fmt;

/// One export request unit: a module and the identifiers to read from it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Target {
    pub module_path: String,
    /// Identifiers in request order. Later identifiers win on shared keys.
    pub idents: Vec<String>,
}

impl Target {
    pub fn new<I, S>(module_path: impl Into<String>, idents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Target {
            module_path: module_path.into(),
            idents: idents.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a single `modulePath:ident[:ident...]` argument.
    pub fn parse(arg: &str) -> Result<Self, TargetParseError> {
        let mut parts = arg.split(':');
        let module_path = parts.next().unwrap_or_default();
        let idents: Vec<&str> = parts.collect();

        if module_path.is_empty() || idents.is_empty() {
            return Err(TargetParseError::InvalidTarget(arg.to_string()));
        }
        if idents.iter().any(|ident| ident.is_empty()) {
            return Err(TargetParseError::MissingIdentifier(arg.to_string()));
        }

        Ok(Target::new(module_path, idents))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.module_path)?;
        for ident in &self.idents {
            write!(f, ":{ident}")?;
        }
        Ok(())
    }
}

/// Ordered list of export targets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Targets(Vec<Target>);

impl Targets {
    pub fn new(targets: Vec<Target>) -> Self {
        Targets(targets)
    }

    /// Parse every argument; the first malformed one fails the whole list.
    pub fn parse<I>(args: I) -> Result<Self, TargetParseError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        args.into_iter()
            .map(|arg| Target::parse(arg.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Targets)
    }

    /// Requested module paths, in request order (duplicates kept).
    pub fn module_paths(&self) -> Vec<&str> {
        self.0.iter().map(|t| t.module_path.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Target> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Targets {
    type Item = &'a Target;
    type IntoIter = std::slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Vec<Target>> for Targets {
    fn from(targets: Vec<Target>) -> Self {
        Targets(targets)
    }
}

/// A malformed `modulePath:ident` argument.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TargetParseError {
    #[error("invalid package target: {0}")]
    InvalidTarget(String),
    #[error("missing identifier in package target: {0}")]
    MissingIdentifier(String),
}

#[cfg(test)]
mod tests;
