use ptable::Element;
use thiserror::Error;

/// Reasons a formula string (or a programmatic element list) is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("formula contains no elements")]
    EmptyFormula,

    /// Element symbols must begin with an uppercase ASCII letter.
    #[error("expected an element symbol at byte {position}, found {found:?}")]
    InvalidSymbolStart { position: usize, found: char },

    #[error("unknown element: {0}")]
    UnknownElement(String),

    #[error("number does not fit in 32 bits")]
    NumberOverflow,

    #[error("formula has more than {0} distinct elements")]
    TooManyElements(usize),

    #[error("zero count for {0:?}")]
    ZeroCount(Element),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReactionError {
    #[error("invalid formula {formula:?}: {source}")]
    Formula {
        formula: String,
        #[source]
        source: ParseError,
    },

    #[error("reaction has more than {0} reactants")]
    TooManyReactants(usize),

    #[error("reaction has more than {0} products")]
    TooManyProducts(usize),

    #[error("reaction has no reactants")]
    MissingReactants,

    #[error("reaction has no products")]
    MissingProducts,

    /// A reaction of the built-in seed list failed to build.
    #[error("seed reaction {description:?}: {source}")]
    Seed {
        description: &'static str,
        #[source]
        source: Box<ReactionError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoleculeError {
    #[error("molecule has more than {0} atoms")]
    TooManyAtoms(usize),

    #[error("molecule has more than {0} bonds")]
    TooManyBonds(usize),

    #[error("no atom with id {0}")]
    AtomOutOfRange(usize),

    #[error("atom {0} cannot bond to itself")]
    SelfBond(usize),
}
