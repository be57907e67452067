//! Hard caps on the size of the domain objects. Exceeding one is an error.

pub const MAX_REACTANTS: usize = 10;
pub const MAX_PRODUCTS: usize = 10;

/// Distinct elements in a single formula.
pub const MAX_ELEMENTS_PER_FORMULA: usize = 100;

pub const MAX_ATOMS_PER_MOLECULE: usize = 100;
pub const MAX_BONDS_PER_MOLECULE: usize = 150;
