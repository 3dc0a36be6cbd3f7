use crate::VariableId;
use std::fmt::{Display, Error, Formatter};

impl VariableId {
    /// Create a `VariableId` from a raw index. The index is not checked against any graph.
    pub fn from_index(index: usize) -> VariableId {
        VariableId(index)
    }

    /// Convert this id to the raw index of the variable.
    pub fn to_index(self) -> usize {
        self.0
    }
}

impl From<usize> for VariableId {
    fn from(val: usize) -> Self {
        VariableId(val)
    }
}

impl From<VariableId> for usize {
    fn from(value: VariableId) -> Self {
        value.0
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "IgVariable({})", self.0)
    }
}
