pub use ptable::Element;

mod catalog;
mod error;
mod formula;
mod ion;
mod molecule;
pub mod consts;
pub mod reaction;

pub use catalog::*;
pub use error::*;
pub use formula::*;
pub use ion::*;
pub use molecule::*;
pub use reaction::{Reaction, ReactionBuilder, ReactionCondition, ReactionDatabase, ReactionLimits, ReactionType};

/// Splits a leading element symbol (an uppercase ASCII letter and at most one
/// lowercase one) off `string`, which must start with an uppercase ASCII letter.
fn parse_element(string: &str) -> (&str, Option<Element>, &str) {
    let bytes = string.as_bytes();
    let mut end = 1;
    if bytes.len() >= 2 && bytes[1].is_ascii_lowercase() {
        end += 1;
    }
    let (symbol, rest) = string.split_at(end);
    (symbol, catalog::symbol_lookup(symbol), rest)
}

/// Reads a leading run of decimal digits; 0 when there is none.
fn parse_number(string: &str) -> Result<(u32, &str), ParseError> {
    let end = string.bytes().take_while(|b| b.is_ascii_digit()).count();
    let mut result: u32 = 0;
    for d in string[..end].bytes() {
        result = result
            .checked_mul(10)
            .and_then(|r| r.checked_add((d - b'0') as u32))
            .ok_or(ParseError::NumberOverflow)?;
    }
    Ok((result, &string[end..]))
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn number_prefix() {
        assert_eq!(parse_number("12C").unwrap(), (12, "C"));
        assert_eq!(parse_number("C").unwrap(), (0, "C"));
        assert_eq!(parse_number("").unwrap(), (0, ""));
        assert_eq!(parse_number("4294967295").unwrap(), (u32::MAX, ""));
        assert_eq!(parse_number("4294967296"), Err(ParseError::NumberOverflow));
    }

    #[test]
    fn element_prefix() {
        let (symbol, e, rest) = parse_element("Cl2");
        assert_eq!((symbol, rest), ("Cl", "2"));
        assert_eq!(e, element_by_symbol("Cl"));
        let (symbol, e, rest) = parse_element("CO2");
        assert_eq!((symbol, e, rest), ("C", Some(ptable::Element::Carbon), "O2"));
        let (symbol, e, _) = parse_element("Xx");
        assert_eq!((symbol, e), ("Xx", None));
        let (symbol, e, rest) = parse_element("A2");
        assert_eq!((symbol, e, rest), ("A", None, "2"));
    }

    #[test]
    fn formula_table() {
        macro_rules! test {
            ($formula:expr, $empirical:expr) => { assert_eq!(
                Formula::from_string($formula).unwrap(),
                Formula::from_string($empirical).unwrap()) };
        }
        test!("H2O", "OH2"); // Aqua
        test!("H2O2", "HOOH"); // Hydrogen peroxide
        test!("H2SO4", "SO4H2"); // Sulfuric acid
        test!("C6H6", "H6C6"); // Benzene
        test!("CH3COOH", "H4C2O2"); // Acetic acid
        test!("CH3CH(OH)COOH", "C3H6O3"); // Lactic acid
        test!("CH2CC(N)COOCH2CH3", "C6H7NO2"); // Ethyl 2-cyanoacrylate
        test!("2NaCl", "ClNa"); // Table salt
    }

    #[test]
    fn lookup_to_balance() {
        let db = ReactionDatabase::global().unwrap();
        let reaction = db.find_by_string("CH4 + O2").unwrap();
        assert_eq!(reaction.to_string(), "CH4 + 2O2 -> CO2 + 2H2O");
        assert!(reaction.is_balanced());
        let methane = Molecule::methane().unwrap();
        assert_eq!(methane.empirical_formula().unwrap(), reaction.reactants()[0]);
    }
}
