use std::fmt::{Display, Formatter};

use super::assignment::Assignment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lit {
    pub var: u32,
    pub sign: bool,
}

impl Lit {
    pub fn new(var: u32, sign: bool) -> Self {
        Self { var, sign }
    }

    pub fn neg(self) -> Self {
        Self {
            var: self.var,
            sign: !self.sign,
        }
    }

    /// Literal for a signed DIMACS integer. Zero is the clause terminator and
    /// has no literal.
    pub fn from_dimacs(value: i64) -> Option<Self> {
        if value == 0 {
            return None;
        }
        let var = u32::try_from(value.unsigned_abs()).ok()?;
        Some(Self::new(var, value > 0))
    }

    pub fn to_dimacs(self) -> i64 {
        let v = self.var as i64;
        if self.sign { v } else { -v }
    }
}

impl Display for Lit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}

pub type Clause = Vec<Lit>;

/// Conjunction of clauses.
///
/// Clause order is kept by every operation so that branch selection stays
/// deterministic; equality between fixpoint iterations goes through
/// [`ClauseSet::set_eq`], which ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseSet {
    pub clauses: Vec<Clause>,
}

impl ClauseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a clause set from signed DIMACS integers, skipping any zeros.
    pub fn from_dimacs(clauses: &[&[i64]]) -> Self {
        Self {
            clauses: clauses
                .iter()
                .map(|c| c.iter().filter_map(|&v| Lit::from_dimacs(v)).collect())
                .collect(),
        }
    }

    pub fn to_dimacs(&self) -> Vec<Vec<i64>> {
        self.clauses
            .iter()
            .map(|c| c.iter().map(|l| l.to_dimacs()).collect())
            .collect()
    }

    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Clause> {
        self.clauses.iter()
    }

    pub fn literals(&self) -> impl Iterator<Item = Lit> + '_ {
        self.clauses.iter().flatten().copied()
    }

    /// Largest variable index mentioned anywhere, 0 without literals.
    pub fn count_variables(&self) -> u32 {
        self.literals().map(|l| l.var).max().unwrap_or(0)
    }

    pub fn num_literals(&self) -> usize {
        self.clauses.iter().map(Vec::len).sum()
    }

    pub fn max_clause_width(&self) -> usize {
        self.clauses.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(Vec::is_empty)
    }

    /// First literal of the concatenation of all clauses.
    pub fn first_literal(&self) -> Option<Lit> {
        self.literals().next()
    }

    /// Copy of `self` with `lit` asserted: clauses containing `lit` are
    /// dropped, `-lit` is stripped from the rest. Clauses emptied by
    /// stripping stay in the result.
    pub fn reduce(&self, lit: Lit) -> ClauseSet {
        let mut out = self.clone();
        out.reduce_in_place(lit);
        out
    }

    pub fn reduce_all(&self, assignment: &[Lit]) -> ClauseSet {
        let mut out = self.clone();
        for &lit in assignment {
            out.reduce_in_place(lit);
        }
        out
    }

    pub(crate) fn reduce_in_place(&mut self, lit: Lit) {
        let neg = lit.neg();
        self.clauses.retain(|c| !c.contains(&lit));
        for clause in &mut self.clauses {
            clause.retain(|&l| l != neg);
        }
    }

    pub(crate) fn remove_satisfied(&mut self, lit: Lit) {
        self.clauses.retain(|c| !c.contains(&lit));
    }

    /// Sorted literals within each clause, sorted clauses.
    pub fn canonical(&self) -> Vec<Clause> {
        let mut out = self
            .clauses
            .iter()
            .map(|c| {
                let mut c = c.clone();
                c.sort_unstable();
                c
            })
            .collect::<Vec<_>>();
        out.sort_unstable();
        out
    }

    /// Order-independent equality: same multiset of clauses, each clause
    /// compared as a multiset of literals.
    pub fn set_eq(&self, other: &ClauseSet) -> bool {
        self.clauses.len() == other.clauses.len() && self.canonical() == other.canonical()
    }

    /// True when every clause contains a literal of `assignment`.
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        let values = assignment.value_map();
        self.clauses
            .iter()
            .all(|c| c.iter().any(|l| values.get(&l.var) == Some(&l.sign)))
    }
}

impl From<Vec<Clause>> for ClauseSet {
    fn from(clauses: Vec<Clause>) -> Self {
        Self { clauses }
    }
}

impl<'a> IntoIterator for &'a ClauseSet {
    type Item = &'a Clause;
    type IntoIter = std::slice::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}
