use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::ops::Deref;

use super::cnf::Lit;

/// Sequence of asserted literals, in the order the search chose them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment(Vec<Lit>);

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dimacs(values: &[i64]) -> Self {
        Self(values.iter().filter_map(|&v| Lit::from_dimacs(v)).collect())
    }

    pub fn to_dimacs(&self) -> Vec<i64> {
        self.0.iter().map(|l| l.to_dimacs()).collect()
    }

    /// Copy extended by one literal; the receiver is left as is so that the
    /// sibling branch can extend it independently.
    pub fn extended(&self, lit: Lit) -> Self {
        let mut lits = Vec::with_capacity(self.0.len() + 1);
        lits.extend_from_slice(&self.0);
        lits.push(lit);
        Self(lits)
    }

    pub fn push(&mut self, lit: Lit) {
        self.0.push(lit);
    }

    pub fn value_of(&self, var: u32) -> Option<bool> {
        self.0.iter().find(|l| l.var == var).map(|l| l.sign)
    }

    /// Value per assigned variable; a later literal overrides an earlier
    /// one for the same variable.
    pub fn value_map(&self) -> HashMap<u32, bool> {
        self.0.iter().map(|l| (l.var, l.sign)).collect()
    }

    /// Stable sort by variable index.
    pub fn sorted(mut self) -> Self {
        self.0.sort_by_key(|l| l.var);
        self
    }

    /// No variable is assigned twice.
    pub fn is_consistent(&self) -> bool {
        let mut vars = self.0.iter().map(|l| l.var).collect::<Vec<_>>();
        vars.sort_unstable();
        vars.windows(2).all(|w| w[0] != w[1])
    }

    pub fn into_lits(self) -> Vec<Lit> {
        self.0
    }
}

impl Deref for Assignment {
    type Target = [Lit];

    fn deref(&self) -> &[Lit] {
        &self.0
    }
}

impl From<Vec<Lit>> for Assignment {
    fn from(lits: Vec<Lit>) -> Self {
        Self(lits)
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for lit in &self.0 {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{lit}")?;
            first = false;
        }
        Ok(())
    }
}
