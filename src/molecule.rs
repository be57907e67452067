use std::collections::BTreeMap;

use ptable::Element;

use crate::consts::{MAX_ATOMS_PER_MOLECULE, MAX_BONDS_PER_MOLECULE};
use crate::error::{MoleculeError, ParseError};
use crate::formula::{BasicMolecule, Formula};
use crate::ion::Ion;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum BondKind {
    Single = 1,
    Double = 2,
    Triple = 3,
}

impl BondKind {
    /// Shared electron pairs.
    pub fn order(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Bond {
    pub a: usize,
    pub b: usize,
    pub k: BondKind
}

/// Share of a molecule's mass carried by one element.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Composition {
    pub element: Element,
    pub count: usize,
    pub mass_percent: f32,
}

/// A named structure of atoms and the bonds between them. Atom ids are their
/// insertion indices; each atom keeps the indices of its bonds. Atoms and
/// bonds only change through `add_atom` and `add_bond`, so every stored index
/// is in range.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    pub name: String,
    pub formula: String,
    atoms: Vec<(Ion, Vec<usize>)>,
    bonds: Vec<Bond>,
}

impl Molecule {
    pub fn new(name: &str) -> Molecule {
        Molecule { name: name.to_owned(), formula: String::new(), atoms: Vec::new(), bonds: Vec::new() }
    }

    /// Returns the id of the new atom.
    pub fn add_atom(&mut self, atom: Ion) -> Result<usize, MoleculeError> {
        if self.atoms.len() >= MAX_ATOMS_PER_MOLECULE {
            return Err(MoleculeError::TooManyAtoms(MAX_ATOMS_PER_MOLECULE));
        }
        self.atoms.push((atom, Vec::new()));
        Ok(self.atoms.len() - 1)
    }

    /// Returns the index of the new bond.
    pub fn add_bond(&mut self, a: usize, b: usize, k: BondKind) -> Result<usize, MoleculeError> {
        for id in [a, b] {
            if id >= self.atoms.len() {
                return Err(MoleculeError::AtomOutOfRange(id));
            }
        }
        if a == b {
            return Err(MoleculeError::SelfBond(a));
        }
        if self.bonds.len() >= MAX_BONDS_PER_MOLECULE {
            return Err(MoleculeError::TooManyBonds(MAX_BONDS_PER_MOLECULE));
        }
        let id = self.bonds.len();
        self.bonds.push(Bond { a, b, k });
        self.atoms[a].1.push(id);
        self.atoms[b].1.push(id);
        Ok(id)
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline(always)]
    pub fn atoms(&self) -> &[(Ion, Vec<usize>)] {
        &self.atoms
    }

    #[inline(always)]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn atom(&self, id: usize) -> Option<&Ion> {
        self.atoms.get(id).map(|(ion, _)| ion)
    }

    /// Indices into `bonds()` of the bonds touching `atom`.
    pub fn bonds_of(&self, atom: usize) -> Option<&[usize]> {
        self.atoms.get(atom).map(|(_, bonds)| bonds.as_slice())
    }

    /// Sum of the bond orders around an atom.
    pub fn bond_order_sum(&self, atom: usize) -> Option<u32> {
        let (_, bonds) = self.atoms.get(atom)?;
        Some(bonds
            .iter()
            .filter_map(|b| self.bonds.get(*b))
            .map(|b| b.k.order() as u32)
            .sum())
    }

    fn element_counts(&self) -> BTreeMap<Element, usize> {
        let mut counts = BTreeMap::new();
        for (ion, _) in self.atoms.iter() {
            *counts.entry(*ion.get_element()).or_insert(0) += 1;
        }
        counts
    }

    /// Element counts in first-seen atom order.
    pub fn empirical_formula(&self) -> Result<Formula, ParseError> {
        Formula::from_elements(self.atoms.iter().map(|(ion, _)| (*ion.get_element(), 1)), 1)
    }

    /// Per-element mass share, ordered by element.
    pub fn composition(&self) -> Vec<Composition> {
        let total = self.get_molecular_weight();
        self.element_counts()
            .into_iter()
            .map(|(element, count)| {
                let mass = element.get_atomic_mass() * count as f32;
                let mass_percent = if total > 0.0 { mass / total * 100.0 } else { 0.0 };
                Composition { element, count, mass_percent }
            })
            .collect()
    }

    fn build(name: &str, formula: &str, center: Element, ligand: Element, ligands: usize, k: BondKind)
        -> Result<Molecule, MoleculeError> {
        let mut m = Molecule::new(name);
        m.formula = formula.to_owned();
        let c = m.add_atom(Ion::from(center))?;
        for _ in 0..ligands {
            let l = m.add_atom(Ion::from(ligand))?;
            m.add_bond(c, l, k)?;
        }
        Ok(m)
    }

    pub fn water() -> Result<Molecule, MoleculeError> {
        Self::build("Water", "H2O", Element::Oxygen, Element::Hydrogen, 2, BondKind::Single)
    }

    pub fn carbon_dioxide() -> Result<Molecule, MoleculeError> {
        Self::build("Carbon Dioxide", "CO2", Element::Carbon, Element::Oxygen, 2, BondKind::Double)
    }

    pub fn methane() -> Result<Molecule, MoleculeError> {
        Self::build("Methane", "CH4", Element::Carbon, Element::Hydrogen, 4, BondKind::Single)
    }
}

impl BasicMolecule for Molecule {
    fn get_molecular_weight(&self) -> f32 {
        let mut weight = 0.0;
        for (e, _) in self.atoms.iter() {
            weight += e.get_element().get_atomic_mass();
        }
        weight
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::catalog::ElementProperties;

    #[test]
    fn fixed_molecules() {
        let water = Molecule::water().unwrap();
        assert_eq!(water.atom_count(), 3);
        assert_eq!(water.bond_count(), 2);
        assert_eq!(water.empirical_formula().unwrap(), Formula::from_string(&water.formula).unwrap());
        let co2 = Molecule::carbon_dioxide().unwrap();
        assert_eq!(co2.bond_order_sum(0), Some(4));
        assert_eq!(co2.bond_order_sum(0), Some(Element::Carbon.max_bonds() as u32));
        let methane = Molecule::methane().unwrap();
        assert_eq!(methane.bond_order_sum(0), Some(4));
        assert_eq!(methane.bond_order_sum(1), Some(1));
        assert_eq!(methane.bond_order_sum(9), None);
        assert_eq!(methane.empirical_formula().unwrap().to_string(), "CH4");
    }

    #[test]
    fn weight_matches_formula() {
        let water = Molecule::water().unwrap();
        let formula = Formula::from_string("H2O").unwrap();
        assert_relative_eq!(water.get_molecular_weight(), formula.get_molecular_weight(), epsilon = 1e-4);
    }

    #[test]
    fn composition() {
        let water = Molecule::water().unwrap();
        let c = water.composition();
        assert_eq!(c.len(), 2);
        let total: f32 = c.iter().map(|c| c.mass_percent).sum();
        assert_relative_eq!(total, 100.0, epsilon = 1e-3);
        let oxygen = c.iter().find(|c| c.element == Element::Oxygen).unwrap();
        assert_eq!(oxygen.count, 1);
        assert_relative_eq!(oxygen.mass_percent, 88.8, epsilon = 0.1);
        assert!(Molecule::new("empty").composition().is_empty());
    }

    #[test]
    fn bond_errors() {
        let mut m = Molecule::new("test");
        let a = m.add_atom(Ion::from(Element::Hydrogen)).unwrap();
        assert_eq!(m.add_bond(a, 1, BondKind::Single), Err(MoleculeError::AtomOutOfRange(1)));
        assert_eq!(m.add_bond(a, a, BondKind::Single), Err(MoleculeError::SelfBond(a)));
        let b = m.add_atom(Ion::from(Element::Hydrogen)).unwrap();
        assert_eq!(m.add_bond(a, b, BondKind::Single), Ok(0));
        assert_eq!(m.bonds_of(a), Some(&[0][..]));
        assert_eq!(m.bonds_of(b), Some(&[0][..]));
        assert_eq!(m.bonds_of(2), None);
        assert_eq!(m.bonds()[0], Bond { a, b, k: BondKind::Single });
        assert_eq!(m.atom(b), Some(&Ion::from(Element::Hydrogen)));
        assert_eq!(m.atoms().len(), 2);
        assert_eq!(Molecule::new("x").empirical_formula().unwrap_err(), ParseError::EmptyFormula);
    }

    #[test]
    fn caps() {
        let mut m = Molecule::new("chain");
        for _ in 0..MAX_ATOMS_PER_MOLECULE {
            m.add_atom(Ion::from(Element::Carbon)).unwrap();
        }
        assert_eq!(m.add_atom(Ion::from(Element::Carbon)), Err(MoleculeError::TooManyAtoms(MAX_ATOMS_PER_MOLECULE)));
        let mut added = 0;
        'outer: for a in 0..MAX_ATOMS_PER_MOLECULE {
            for b in (a + 1)..MAX_ATOMS_PER_MOLECULE {
                if added == MAX_BONDS_PER_MOLECULE {
                    break 'outer;
                }
                m.add_bond(a, b, BondKind::Single).unwrap();
                added += 1;
            }
        }
        assert_eq!(m.add_bond(0, 99, BondKind::Single), Err(MoleculeError::TooManyBonds(MAX_BONDS_PER_MOLECULE)));
    }

    #[test]
    fn bond_order_sum_does_not_wrap() {
        let mut m = Molecule::new("star");
        let c = m.add_atom(Ion::from(Element::Carbon)).unwrap();
        for _ in 1..MAX_ATOMS_PER_MOLECULE {
            let n = m.add_atom(Ion::from(Element::Nitrogen)).unwrap();
            m.add_bond(c, n, BondKind::Triple).unwrap();
        }
        assert_eq!(m.bond_count(), 99);
        assert_eq!(m.bond_order_sum(c), Some(297));
        assert_eq!(m.bond_order_sum(1), Some(3));
    }
}
