use crate::Monotonicity::{Activation, Inhibition};
use crate::{Monotonicity, SignSet};
use std::fmt::{Display, Formatter};

impl SignSet {
    /// A sign set containing exactly one `Monotonicity` value.
    pub fn new(sign: Monotonicity) -> SignSet {
        SignSet {
            activation: sign == Activation,
            inhibition: sign == Inhibition,
        }
    }

    /// A sign set containing both `Activation` and `Inhibition`.
    pub fn ambivalent() -> SignSet {
        SignSet {
            activation: true,
            inhibition: true,
        }
    }

    /// Add a `Monotonicity` value to this set.
    pub fn insert(&mut self, sign: Monotonicity) {
        match sign {
            Activation => self.activation = true,
            Inhibition => self.inhibition = true,
        }
    }

    pub fn contains(&self, sign: Monotonicity) -> bool {
        match sign {
            Activation => self.activation,
            Inhibition => self.inhibition,
        }
    }

    /// True if the set contains both `Activation` and `Inhibition`.
    pub fn is_ambivalent(&self) -> bool {
        self.activation && self.inhibition
    }

    /// If the set contains only one value, return it.
    pub fn as_monotonicity(&self) -> Option<Monotonicity> {
        match (self.activation, self.inhibition) {
            (true, false) => Some(Activation),
            (false, true) => Some(Inhibition),
            _ => None,
        }
    }

    /// Iterate over the values in this set (activation first).
    pub fn iter(&self) -> impl Iterator<Item = Monotonicity> {
        let activation = self.activation.then_some(Activation);
        let inhibition = self.inhibition.then_some(Inhibition);
        activation.into_iter().chain(inhibition)
    }

    pub fn len(&self) -> usize {
        usize::from(self.activation) + usize::from(self.inhibition)
    }
}

impl From<Monotonicity> for SignSet {
    fn from(value: Monotonicity) -> Self {
        SignSet::new(value)
    }
}

impl Display for SignSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.as_monotonicity() {
            Some(Activation) => write!(f, "+"),
            Some(Inhibition) => write!(f, "-"),
            None => write!(f, "+/-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Monotonicity::{Activation, Inhibition};
    use crate::SignSet;

    #[test]
    fn sign_set_accumulation() {
        let mut signs = SignSet::new(Activation);
        assert!(!signs.is_ambivalent());
        assert_eq!(Some(Activation), signs.as_monotonicity());
        assert_eq!(1, signs.len());

        signs.insert(Activation);
        assert_eq!(1, signs.len());

        signs.insert(Inhibition);
        assert!(signs.is_ambivalent());
        assert_eq!(signs, SignSet::ambivalent());
        assert_eq!(None, signs.as_monotonicity());
        assert_eq!(vec![Activation, Inhibition], signs.iter().collect::<Vec<_>>());
        assert_eq!("+/-", signs.to_string());
        assert_eq!("-", SignSet::from(Inhibition).to_string());
    }
}
