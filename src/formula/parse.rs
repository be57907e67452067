use super::Formula;
use crate::error::ParseError;
use crate::{parse_element, parse_number};

fn skip_whitespace(string: &str) -> &str {
    string.trim_start_matches(|c: char| c.is_ascii_whitespace())
}

impl Formula {
    /// Parses formulas such as `H2O`, `2CO2` or `C6H12O6`.
    ///
    /// A leading number is the coefficient. Each element symbol may be followed
    /// by a count; repeated symbols are summed into one entry (`O2O3` is `O5`).
    /// Parentheses are accepted and skipped without grouping, and a number
    /// directly after `)` is rejected, so `Ca(OH)2` is an error while `Ca(OH)`
    /// reads as `CaOH`.
    pub fn from_string(string: &str) -> Result<Formula, ParseError> {
        let mut rest = skip_whitespace(string);
        let mut coefficient = 1;
        if rest.starts_with(|c: char| c.is_ascii_digit()) {
            let (c, s) = parse_number(rest)?;
            coefficient = c;
            rest = s;
        }
        let mut formula = Formula::with_capacity(coefficient, 4);
        loop {
            rest = skip_whitespace(rest);
            let c = match rest.chars().next() {
                Some(c) => c,
                None => break,
            };
            if c == '(' || c == ')' {
                rest = &rest[1..];
                continue;
            }
            if !c.is_ascii_uppercase() {
                return Err(ParseError::InvalidSymbolStart { position: string.len() - rest.len(), found: c });
            }
            let (symbol, element, s) = parse_element(rest);
            let element = match element {
                Some(e) => e,
                None => {
                    return Err(ParseError::UnknownElement(symbol.to_owned()));
                },
            };
            let (count, s) = parse_number(s)?;
            formula.add(element, count.max(1))?;
            rest = s;
        }
        if formula.is_empty() {
            return Err(ParseError::EmptyFormula);
        }
        Ok(formula)
    }
}

#[cfg(test)]
mod tests {
    use ptable::Element;

    use crate::*;

    fn counts(f: &Formula) -> Vec<(String, u32)> {
        f.iter().map(|e| (e.element.get_symbol().to_string(), e.count)).collect()
    }

    #[test]
    fn simple_formulas() {
        macro_rules! test {
            ($s:expr, $coefficient:expr, [$(($sym:expr, $n:expr)),*]) => {{
                let f = Formula::from_string($s).unwrap();
                assert_eq!(f.coefficient(), $coefficient, "{}", $s);
                assert_eq!(counts(&f), vec![$(($sym.to_string(), $n)),*], "{}", $s);
            }};
        }
        test!("H2O", 1, [("H", 2), ("O", 1)]);
        test!("C2H6", 1, [("C", 2), ("H", 6)]);
        test!("2H2O", 2, [("H", 2), ("O", 1)]);
        test!("12C", 12, [("C", 1)]);
        test!("NaCl", 1, [("Na", 1), ("Cl", 1)]);
        test!("CO", 1, [("C", 1), ("O", 1)]);
        test!("Co", 1, [("Co", 1)]);
        test!("C6H12O6", 1, [("C", 6), ("H", 12), ("O", 6)]);
        test!("H0", 1, [("H", 1)]);
        test!("0H2", 1, [("H", 2)]);
        test!("  2 H2 O ", 2, [("H", 2), ("O", 1)]);
    }

    #[test]
    fn repeated_symbols_merge() {
        let f = Formula::from_string("O2O3").unwrap();
        assert_eq!(f.len(), 1);
        assert_eq!(f.count_of(Element::Oxygen), 5);
        assert_eq!(Formula::from_string("CH3CH2OH").unwrap().to_string(), "C2H6O");
    }

    #[test]
    fn trailing_whitespace() {
        assert_eq!(Formula::from_string("H2O").unwrap(), Formula::from_string("H2O ").unwrap());
        assert_eq!(Formula::from_string("H2O").unwrap(), Formula::from_string("\tH2O\n").unwrap());
    }

    #[test]
    fn parentheses_are_skipped() {
        assert_eq!(Formula::from_string("(NH4)").unwrap().to_string(), "NH4");
        assert_eq!(Formula::from_string("Ca(OH)").unwrap().to_string(), "CaOH");
        assert_eq!(Formula::from_string("Ca(OH)2").unwrap_err(),
            ParseError::InvalidSymbolStart { position: 6, found: '2' });
    }

    #[test]
    fn errors() {
        assert_eq!(Formula::from_string("").unwrap_err(), ParseError::EmptyFormula);
        assert_eq!(Formula::from_string("   ").unwrap_err(), ParseError::EmptyFormula);
        assert_eq!(Formula::from_string("2").unwrap_err(), ParseError::EmptyFormula);
        assert_eq!(Formula::from_string("()").unwrap_err(), ParseError::EmptyFormula);
        assert_eq!(Formula::from_string("Xx2").unwrap_err(), ParseError::UnknownElement("Xx".to_owned()));
        assert_eq!(Formula::from_string("A2").unwrap_err(), ParseError::UnknownElement("A".to_owned()));
        assert_eq!(Formula::from_string("Aa").unwrap_err(), ParseError::UnknownElement("Aa".to_owned()));
        assert_eq!(Formula::from_string("h2o").unwrap_err(),
            ParseError::InvalidSymbolStart { position: 0, found: 'h' });
        assert_eq!(Formula::from_string("H2-O").unwrap_err(),
            ParseError::InvalidSymbolStart { position: 2, found: '-' });
        assert_eq!(Formula::from_string("H2é").unwrap_err(),
            ParseError::InvalidSymbolStart { position: 2, found: 'é' });
        assert_eq!(Formula::from_string("H99999999999").unwrap_err(), ParseError::NumberOverflow);
        assert_eq!(Formula::from_string("H4294967295H").unwrap_err(), ParseError::NumberOverflow);
    }

    #[test]
    fn known_elements() {
        let f = Formula::from_string("NaCl").unwrap();
        assert_eq!(f[0].element, element_by_symbol("Na").unwrap());
        assert_eq!(f[1].element, element_by_symbol("Cl").unwrap());
        let f = Formula::from_string("NH3").unwrap();
        assert_eq!(f[0].element, Element::Nitrogen);
    }

    #[test]
    fn round_trip() {
        for s in ["H2O", "2H2", "CO2", "C6H12O6", "3NaCl", "Fe2O3", "CH3COOH", "O2O3", "KMnO4"] {
            let f = Formula::from_string(s).unwrap();
            let again = Formula::from_string(&f.to_string()).unwrap();
            assert_eq!(f, again, "{}", s);
            assert_eq!(f.coefficient(), again.coefficient(), "{}", s);
        }
    }
}
