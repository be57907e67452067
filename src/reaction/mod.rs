mod balance;
mod database;
mod seed;

use std::fmt::{self, Display};

use ptable::Element;

use crate::consts::{MAX_PRODUCTS, MAX_REACTANTS};
use crate::error::ReactionError;
use crate::formula::Formula;

pub use balance::{count_atoms, sides_balanced, AtomTally};
pub use database::ReactionDatabase;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ReactionCondition {
    /// Room temperature and pressure
    Normal,
    Heated,
    HighPressure,
    Catalyst,
    /// Photochemical
    Light,
    Electrolysis,
}

impl Display for ReactionCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReactionCondition::Normal => "Normal (STP)",
            ReactionCondition::Heated => "Heated",
            ReactionCondition::HighPressure => "High Pressure",
            ReactionCondition::Catalyst => "Catalyst Required",
            ReactionCondition::Light => "Light Required",
            ReactionCondition::Electrolysis => "Electrolysis",
        })
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ReactionType {
    /// A + B -> AB
    Synthesis,
    /// AB -> A + B
    Decomposition,
    /// A + BC -> AC + B
    SingleReplacement,
    /// AB + CD -> AD + CB
    DoubleReplacement,
    Combustion,
    AcidBase,
    Redox,
    Other,
}

impl Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReactionType::Synthesis => "Synthesis",
            ReactionType::Decomposition => "Decomposition",
            ReactionType::SingleReplacement => "Single Replacement",
            ReactionType::DoubleReplacement => "Double Replacement",
            ReactionType::Combustion => "Combustion",
            ReactionType::AcidBase => "Acid-Base",
            ReactionType::Redox => "Redox",
            ReactionType::Other => "Other",
        })
    }
}

/// Upper bounds on the number of formulas per side.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ReactionLimits {
    pub max_reactants: usize,
    pub max_products: usize,
}

impl Default for ReactionLimits {
    fn default() -> ReactionLimits {
        ReactionLimits { max_reactants: MAX_REACTANTS, max_products: MAX_PRODUCTS }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    reactants: Vec<Formula>,
    products: Vec<Formula>,
    condition: ReactionCondition,
    kind: ReactionType,
    description: String,
    is_balanced: bool,
    is_reversible: bool,
}

impl Reaction {
    pub fn builder() -> ReactionBuilder {
        ReactionBuilder::new(ReactionLimits::default())
    }

    pub fn reactants(&self) -> &[Formula] {
        &self.reactants
    }

    pub fn products(&self) -> &[Formula] {
        &self.products
    }

    pub fn condition(&self) -> ReactionCondition {
        self.condition
    }

    pub fn reaction_type(&self) -> ReactionType {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Result of the last atom count, see [`Reaction::check_balanced`].
    pub fn is_balanced(&self) -> bool {
        self.is_balanced
    }

    pub fn is_reversible(&self) -> bool {
        self.is_reversible
    }

    /// Whether `element` appears on either side.
    pub fn involves(&self, element: Element) -> bool {
        self.reactants.iter().chain(self.products.iter()).any(|f| f.contains(element))
    }

    pub fn reactant_mass(&self) -> f32 {
        self.reactants.iter().map(Formula::total_mass).sum()
    }

    pub fn product_mass(&self) -> f32 {
        self.products.iter().map(Formula::total_mass).sum()
    }
}

fn write_side(f: &mut fmt::Formatter<'_>, side: &[Formula]) -> fmt::Result {
    for (i, formula) in side.iter().enumerate() {
        if i > 0 {
            f.write_str(" + ")?;
        }
        write!(f, "{}", formula)?;
    }
    Ok(())
}

/// `CH4 + 2O2 -> CO2 + 2H2O`
impl Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_side(f, &self.reactants)?;
        f.write_str(" -> ")?;
        write_side(f, &self.products)
    }
}

/// Collects the parts of a [`Reaction`]. Sides are checked against the
/// limits as formulas are added; `build` counts atoms once everything is in.
#[derive(Debug, Clone)]
pub struct ReactionBuilder {
    limits: ReactionLimits,
    reaction: Reaction,
}

impl ReactionBuilder {
    pub fn new(limits: ReactionLimits) -> ReactionBuilder {
        ReactionBuilder {
            limits,
            reaction: Reaction {
                reactants: Vec::new(),
                products: Vec::new(),
                condition: ReactionCondition::Normal,
                kind: ReactionType::Other,
                description: String::new(),
                is_balanced: false,
                is_reversible: false,
            },
        }
    }

    fn parse(formula: &str) -> Result<Formula, ReactionError> {
        Formula::from_string(formula).map_err(|source| ReactionError::Formula { formula: formula.to_owned(), source })
    }

    pub fn reactant(self, formula: &str) -> Result<ReactionBuilder, ReactionError> {
        let formula = Self::parse(formula)?;
        self.reactant_formula(formula)
    }

    pub fn reactant_formula(mut self, formula: Formula) -> Result<ReactionBuilder, ReactionError> {
        if self.reaction.reactants.len() >= self.limits.max_reactants {
            return Err(ReactionError::TooManyReactants(self.limits.max_reactants));
        }
        self.reaction.reactants.push(formula);
        Ok(self)
    }

    pub fn product(self, formula: &str) -> Result<ReactionBuilder, ReactionError> {
        let formula = Self::parse(formula)?;
        self.product_formula(formula)
    }

    pub fn product_formula(mut self, formula: Formula) -> Result<ReactionBuilder, ReactionError> {
        if self.reaction.products.len() >= self.limits.max_products {
            return Err(ReactionError::TooManyProducts(self.limits.max_products));
        }
        self.reaction.products.push(formula);
        Ok(self)
    }

    pub fn condition(mut self, condition: ReactionCondition) -> ReactionBuilder {
        self.reaction.condition = condition;
        self
    }

    pub fn reaction_type(mut self, kind: ReactionType) -> ReactionBuilder {
        self.reaction.kind = kind;
        self
    }

    pub fn description(mut self, description: &str) -> ReactionBuilder {
        self.reaction.description = description.to_owned();
        self
    }

    pub fn reversible(mut self, is_reversible: bool) -> ReactionBuilder {
        self.reaction.is_reversible = is_reversible;
        self
    }

    pub fn build(self) -> Result<Reaction, ReactionError> {
        let mut reaction = self.reaction;
        if reaction.reactants.is_empty() {
            return Err(ReactionError::MissingReactants);
        }
        if reaction.products.is_empty() {
            return Err(ReactionError::MissingProducts);
        }
        reaction.check_balanced();
        Ok(reaction)
    }
}
