mod table;

use std::fmt::{self, Display};

use ptable::{ElectronicConfiguration, Element, GroupBlock, StateOfMatter};

use table::COMMON_CHARGES;

pub const ELEMENT_COUNT: usize = 118;

/// State at room temperature. Superheavy elements report their expected state.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ElementState {
    Solid,
    Liquid,
    Gas,
}

impl From<StateOfMatter> for ElementState {
    fn from(state: StateOfMatter) -> ElementState {
        match state {
            StateOfMatter::Solid => ElementState::Solid,
            StateOfMatter::Liquid => ElementState::Liquid,
            StateOfMatter::Gas => ElementState::Gas,
        }
    }
}

impl Display for ElementState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementState::Solid => "Solid",
            ElementState::Liquid => "Liquid",
            ElementState::Gas => "Gas",
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ElementCategory {
    Nonmetal,
    NobleGas,
    AlkaliMetal,
    AlkalineEarthMetal,
    Metalloid,
    Halogen,
    TransitionMetal,
    PostTransitionMetal,
    Lanthanide,
    Actinide,
}

impl From<GroupBlock> for ElementCategory {
    fn from(group: GroupBlock) -> ElementCategory {
        match group {
            GroupBlock::NonMetal => ElementCategory::Nonmetal,
            GroupBlock::NobleGas => ElementCategory::NobleGas,
            GroupBlock::AlkaliMetal => ElementCategory::AlkaliMetal,
            GroupBlock::AlkalineEarthMetal => ElementCategory::AlkalineEarthMetal,
            GroupBlock::Metalloid => ElementCategory::Metalloid,
            GroupBlock::Halogen => ElementCategory::Halogen,
            GroupBlock::TransitionMetal => ElementCategory::TransitionMetal,
            GroupBlock::PostTransitionMetal => ElementCategory::PostTransitionMetal,
            GroupBlock::Lanthanide => ElementCategory::Lanthanide,
            GroupBlock::Actinide => ElementCategory::Actinide,
        }
    }
}

impl Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementCategory::Nonmetal => "Nonmetal",
            ElementCategory::NobleGas => "Noble Gas",
            ElementCategory::AlkaliMetal => "Alkali Metal",
            ElementCategory::AlkalineEarthMetal => "Alkaline Earth Metal",
            ElementCategory::Metalloid => "Metalloid",
            ElementCategory::Halogen => "Halogen",
            ElementCategory::TransitionMetal => "Transition Metal",
            ElementCategory::PostTransitionMetal => "Post-Transition Metal",
            ElementCategory::Lanthanide => "Lanthanide",
            ElementCategory::Actinide => "Actinide",
        })
    }
}

/// Electrons in the outermost occupied shell (its s and p subshells).
fn outer_shell_electrons(c: &ElectronicConfiguration) -> u8 {
    for n in (0..c.s.len()).rev() {
        let p = if n >= 1 { c.p[n - 1] } else { 0 };
        if c.s[n] > 0 || p > 0 {
            return c.s[n] + p;
        }
    }
    0
}

/// Chemistry-facing views of `ptable` data, plus the common ionic charges.
pub trait ElementProperties {
    /// Proton count, 1 for hydrogen.
    fn atomic_number(&self) -> usize;
    fn name(&self) -> &'static str;
    fn valence_electrons(&self) -> u8;
    /// Pauling electronegativity, `None` where it is not known (noble gases,
    /// some lanthanides, the superheavy elements).
    fn electronegativity(&self) -> Option<f32>;
    fn state(&self) -> ElementState;
    fn category(&self) -> ElementCategory;
    fn common_charges(&self) -> &'static [i8];

    /// Typical number of covalent bonds: valence electrons shared up to four,
    /// octet completion above that. Noble gases form none.
    fn max_bonds(&self) -> u8 {
        if self.category() == ElementCategory::NobleGas {
            return 0;
        }
        let valence = self.valence_electrons();
        if valence <= 4 {
            valence
        }
        else {
            8u8.saturating_sub(valence)
        }
    }
}

impl ElementProperties for Element {
    #[inline(always)]
    fn atomic_number(&self) -> usize {
        self.get_atomic_number()
    }

    #[inline(always)]
    fn name(&self) -> &'static str {
        self.get_name()
    }

    fn valence_electrons(&self) -> u8 {
        outer_shell_electrons(&self.get_electronic_configuration())
    }

    fn electronegativity(&self) -> Option<f32> {
        let en = self.get_electronegativity();
        if en > 0.0 {
            Some(en)
        }
        else {
            None
        }
    }

    #[inline(always)]
    fn state(&self) -> ElementState {
        self.get_standard_state().into()
    }

    #[inline(always)]
    fn category(&self) -> ElementCategory {
        self.get_group().into()
    }

    fn common_charges(&self) -> &'static [i8] {
        COMMON_CHARGES[self.get_id() as usize]
    }
}

// `ptable`'s sorted lookups underflow on terms that sort before their first
// entry, so those are answered here.
pub(crate) fn symbol_lookup(symbol: &str) -> Option<Element> {
    if symbol < "Ac" {
        return None;
    }
    Element::from_symbol(symbol)
}

fn name_lookup(lowercase: &str) -> Option<Element> {
    if lowercase < "actinium" {
        return None;
    }
    Element::from_name(lowercase)
}

pub fn element_by_number(atomic_number: usize) -> Option<Element> {
    Element::from_atomic_number(atomic_number)
}

/// Case-insensitive: `"na"`, `"NA"` and `"Na"` all resolve to sodium.
pub fn element_by_symbol(symbol: &str) -> Option<Element> {
    let symbol = symbol.trim();
    if symbol.is_empty() || symbol.len() > 3 || !symbol.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    let mut normalized = String::with_capacity(symbol.len());
    for (i, c) in symbol.chars().enumerate() {
        if i == 0 {
            normalized.push(c.to_ascii_uppercase());
        }
        else {
            normalized.push(c.to_ascii_lowercase());
        }
    }
    symbol_lookup(&normalized)
}

/// Case-insensitive lookup by full English name (`ptable` spelling, so
/// "Aluminum" and "Sulfur").
pub fn element_by_name(name: &str) -> Option<Element> {
    name_lookup(&name.trim().to_lowercase())
}
