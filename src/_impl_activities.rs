use crate::{Activities, IgraphError};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

lazy_static! {
    /// Matches the compact string representation of a subspace, e.g. `10--1`.
    static ref SUBSPACE_STRING: Regex = Regex::new(r"^[01\-]*$").unwrap();
}

impl Activities {
    /// An empty assignment.
    pub fn new() -> Activities {
        Activities(BTreeMap::new())
    }

    /// Convert a compact subspace string into `Activities`.
    ///
    /// The string contains one character per variable, in the order given by `names`
    /// (for an `InteractionGraph`, this is the order of `InteractionGraph::variable_names`).
    /// Character `0` and `1` fix the value of the variable, `-` leaves it free.
    pub fn try_from_subspace_str(
        names: &[String],
        subspace: &str,
    ) -> Result<Activities, IgraphError> {
        let subspace = subspace.trim();
        if !SUBSPACE_STRING.is_match(subspace) {
            return Err(IgraphError::validation(format!(
                "Subspace `{}` may only contain `0`, `1` and `-`.",
                subspace
            )));
        }
        if subspace.len() != names.len() {
            return Err(IgraphError::validation(format!(
                "Subspace `{}` has {} values, but there are {} variables.",
                subspace,
                subspace.len(),
                names.len()
            )));
        }
        let mut result = Activities::new();
        for (name, value) in names.iter().zip(subspace.chars()) {
            match value {
                '0' => result.set(name, false),
                '1' => result.set(name, true),
                _ => (),
            }
        }
        Ok(result)
    }

    /// Fix the value of the given variable.
    pub fn set(&mut self, name: &str, value: bool) {
        self.0.insert(name.to_string(), value);
    }

    /// Remove the value of the given variable, returning it if it was set.
    pub fn unset(&mut self, name: &str) -> Option<bool> {
        self.0.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.0.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over all `(name, value)` pairs, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Activities {
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        Activities(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Display for Activities {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, u8::from(value))?;
        }
        write!(f, "}}")
    }
}
