use std::slice;
use std::sync::OnceLock;

use log::{debug, trace};
use ptable::Element;

use super::seed::{SeedReaction, SEED_REACTIONS};
use super::{Reaction, ReactionBuilder, ReactionLimits};
use crate::error::ReactionError;
use crate::formula::{formulas_match_set, Formula};

static DATABASE: OnceLock<Result<ReactionDatabase, ReactionError>> = OnceLock::new();

/// The known reactions, in seed order. Built once and never modified.
#[derive(Debug, Clone)]
pub struct ReactionDatabase {
    reactions: Vec<Reaction>,
}

fn build_seed(seed: &SeedReaction, limits: ReactionLimits) -> Result<Reaction, ReactionError> {
    let mut builder = ReactionBuilder::new(limits)
        .reaction_type(seed.kind)
        .condition(seed.condition)
        .description(seed.description);
    for r in seed.reactants.iter() {
        builder = builder.reactant(r)?;
    }
    for p in seed.products.iter() {
        builder = builder.product(p)?;
    }
    builder.build()
}

impl ReactionDatabase {
    /// Builds the seed reactions. Any seed that fails to parse or exceeds the
    /// default limits is an error.
    pub fn new() -> Result<ReactionDatabase, ReactionError> {
        Self::with_limits(ReactionLimits::default())
    }

    pub fn with_limits(limits: ReactionLimits) -> Result<ReactionDatabase, ReactionError> {
        let mut reactions = Vec::with_capacity(SEED_REACTIONS.len());
        for seed in SEED_REACTIONS.iter() {
            let reaction = build_seed(seed, limits).map_err(|source| ReactionError::Seed {
                description: seed.description,
                source: Box::new(source),
            })?;
            reactions.push(reaction);
        }
        debug!("seeded reaction database with {} reactions, {} balanced",
            reactions.len(), reactions.iter().filter(|r| r.is_balanced()).count());
        Ok(ReactionDatabase { reactions })
    }

    /// The process-wide database, built on first use. Every call observes the
    /// same instance (or the same seeding error).
    pub fn global() -> Result<&'static ReactionDatabase, ReactionError> {
        match DATABASE.get_or_init(ReactionDatabase::new) {
            Ok(db) => Ok(db),
            Err(e) => Err(e.clone()),
        }
    }

    pub fn count(&self) -> usize {
        self.reactions.len()
    }

    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Reaction> {
        self.reactions.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, Reaction> {
        self.reactions.iter()
    }

    /// First reaction whose reactants have the same element sets as `reactants`,
    /// in any order. Counts and coefficients are not compared.
    pub fn find_by_reactant_set(&self, reactants: &[Formula]) -> Option<&Reaction> {
        let found = self.reactions.iter().find(|r| formulas_match_set(reactants, r.reactants()));
        if found.is_none() {
            trace!("no reaction for {} reactants", reactants.len());
        }
        found
    }

    /// Looks up `"C + O2"` style input. Tokens that do not parse are left out
    /// of the query instead of failing it.
    pub fn find_by_string(&self, reactants: &str) -> Option<&Reaction> {
        let mut formulas = Vec::new();
        for token in reactants.split('+') {
            let token = token.trim();
            match Formula::from_string(token) {
                Ok(f) => formulas.push(f),
                Err(e) => {
                    debug!("dropping reactant {:?}: {}", token, e);
                },
            }
        }
        self.find_by_reactant_set(&formulas)
    }

    /// Reactions with `element` among their reactants or products, in
    /// database order, at most `max_results` of them.
    pub fn find_by_element(&self, element: Element, max_results: usize) -> Vec<&Reaction> {
        self.reactions
            .iter()
            .filter(|r| r.involves(element))
            .take(max_results)
            .collect()
    }

    /// Products of the known reaction for these reactants.
    pub fn predict_products(&self, reactants: &[Formula]) -> Option<&[Formula]> {
        self.find_by_reactant_set(reactants).map(Reaction::products)
    }
}

impl<'a> IntoIterator for &'a ReactionDatabase {
    type Item = &'a Reaction;
    type IntoIter = slice::Iter<'a, Reaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.reactions.iter()
    }
}
