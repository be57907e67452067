use std::collections::BTreeMap;

use fnv::FnvHashMap;
use ptable::Element;

use super::Reaction;
use crate::formula::Formula;

/// Atoms per element on one side of a reaction. Elements that do not occur
/// have no entry.
pub type AtomTally = FnvHashMap<Element, u128>;

/// Totals `count * coefficient` for every element of every formula.
///
/// A single term is below 2^64, so neither a tally nor its `i128` difference
/// can overflow for any slice that fits in memory.
pub fn count_atoms(formulas: &[Formula]) -> AtomTally {
    let mut tally = FnvHashMap::default();
    for f in formulas.iter() {
        let coefficient = f.coefficient().max(1) as u128;
        for e in f.iter() {
            *tally.entry(e.element).or_insert(0) += e.count as u128 * coefficient;
        }
    }
    tally
}

/// Atom conservation: every element has the same total on both sides.
pub fn sides_balanced(reactants: &[Formula], products: &[Formula]) -> bool {
    count_atoms(reactants) == count_atoms(products)
}

impl Reaction {
    /// Recounts atoms and stores the outcome in `is_balanced`.
    pub fn check_balanced(&mut self) -> bool {
        self.is_balanced = sides_balanced(&self.reactants, &self.products);
        self.is_balanced
    }

    /// Only checks the current coefficients; nothing is solved for.
    pub fn balance(&mut self) -> bool {
        self.check_balanced()
    }

    /// Reactant side and product side tallies.
    pub fn atom_totals(&self) -> (AtomTally, AtomTally) {
        (count_atoms(&self.reactants), count_atoms(&self.products))
    }

    /// Elements whose totals differ, as `products - reactants`.
    pub fn imbalance(&self) -> BTreeMap<Element, i128> {
        let (reactants, products) = self.atom_totals();
        let mut diff = BTreeMap::new();
        for (e, n) in products.iter() {
            *diff.entry(*e).or_insert(0) += *n as i128;
        }
        for (e, n) in reactants.iter() {
            *diff.entry(*e).or_insert(0) -= *n as i128;
        }
        diff.retain(|_, d| *d != 0);
        diff
    }
}
