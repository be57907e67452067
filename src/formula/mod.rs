mod compare;
mod parse;

use std::fmt::{self, Display};
use std::ops::Index;
use std::slice;
use std::str::FromStr;

use ptable::Element;

use crate::consts::MAX_ELEMENTS_PER_FORMULA;
use crate::error::ParseError;

pub use compare::formulas_match_set;

pub trait BasicMolecule {
    fn get_molecular_weight(&self) -> f32;
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ElementCount {
    pub element: Element,
    pub count: u32,
}

/// A flat chemical formula: element counts in first-seen order and a leading
/// coefficient.
///
/// Every element appears at most once and a formula is never empty. Two
/// formulas compare equal when they hold the same element counts, whatever
/// their order or coefficient (`2H2O == H2O`).
#[derive(Debug, Clone)]
pub struct Formula {
    entries: Vec<ElementCount>,
    coefficient: u32,
}

impl Formula {
    fn with_capacity(coefficient: u32, capacity: usize) -> Formula {
        Formula { entries: Vec::with_capacity(capacity), coefficient: coefficient.max(1) }
    }

    /// Builds a formula from element counts, merging repeated elements the same
    /// way the parser does.
    pub fn from_elements<I>(elements: I, coefficient: u32) -> Result<Formula, ParseError>
    where
        I: IntoIterator<Item = (Element, u32)>,
    {
        let elements = elements.into_iter();
        let mut formula = Formula::with_capacity(coefficient, elements.size_hint().0);
        for (element, count) in elements {
            if count == 0 {
                return Err(ParseError::ZeroCount(element));
            }
            formula.add(element, count)?;
        }
        if formula.is_empty() {
            return Err(ParseError::EmptyFormula);
        }
        Ok(formula)
    }

    fn add(&mut self, element: Element, count: u32) -> Result<(), ParseError> {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.element == element) {
            entry.count = entry.count.checked_add(count).ok_or(ParseError::NumberOverflow)?;
            return Ok(());
        }
        if self.entries.len() >= MAX_ELEMENTS_PER_FORMULA {
            return Err(ParseError::TooManyElements(MAX_ELEMENTS_PER_FORMULA));
        }
        self.entries.push(ElementCount { element, count });
        Ok(())
    }

    #[inline(always)]
    pub fn coefficient(&self) -> u32 {
        self.coefficient
    }

    /// A coefficient of zero is stored as one.
    pub fn with_coefficient(mut self, coefficient: u32) -> Formula {
        self.coefficient = coefficient.max(1);
        self
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, ElementCount> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[ElementCount] {
        &self.entries
    }

    pub fn get(&self, i: usize) -> Option<&ElementCount> {
        self.entries.get(i)
    }

    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.entries.iter().map(|e| e.element)
    }

    pub fn contains(&self, element: Element) -> bool {
        self.entries.iter().any(|e| e.element == element)
    }

    /// Atoms of `element` in one formula unit, coefficient not applied.
    pub fn count_of(&self, element: Element) -> u32 {
        self.entries
            .iter()
            .find(|e| e.element == element)
            .map_or(0, |e| e.count)
    }

    /// Molar mass of the whole term, coefficient included.
    pub fn total_mass(&self) -> f32 {
        self.get_molecular_weight() * self.coefficient as f32
    }
}

impl BasicMolecule for Formula {
    fn get_molecular_weight(&self) -> f32 {
        let mut weight = 0.0;
        for e in self.entries.iter() {
            weight += e.element.get_atomic_mass() * e.count as f32;
        }
        weight
    }
}

impl Index<usize> for Formula {
    type Output = ElementCount;

    fn index(&self, i: usize) -> &Self::Output {
        &self.entries[i]
    }
}

impl<'a> IntoIterator for &'a Formula {
    type Item = &'a ElementCount;
    type IntoIter = slice::Iter<'a, ElementCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromStr for Formula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Formula, ParseError> {
        Formula::from_string(s)
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coefficient > 1 {
            write!(f, "{}", self.coefficient)?;
        }
        for e in self.entries.iter() {
            write!(f, "{}", e.element.get_symbol())?;
            if e.count > 1 {
                write!(f, "{}", e.count)?;
            }
        }
        Ok(())
    }
}
