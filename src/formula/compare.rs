use super::Formula;

impl PartialEq for Formula {
    /// Same elements with the same counts. Order and coefficient are ignored.
    fn eq(&self, other: &Self) -> bool {
        if self.entries.len() != other.entries.len() {
            return false;
        }
        let mut used = vec![false; other.entries.len()];
        for e in self.entries.iter() {
            let mut exist = false;
            for (i, o) in other.entries.iter().enumerate() {
                if used[i] || o.element != e.element {
                    continue;
                }
                if o.count != e.count {
                    return false;
                }
                used[i] = true;
                exist = true;
                break;
            }
            if !exist {
                return false;
            }
        }
        true
    }
}

impl Eq for Formula {}

impl Formula {
    /// Same set of elements, counts and coefficients ignored: `H2O` and `H2O2`
    /// have the same elements.
    pub fn has_same_elements(&self, other: &Formula) -> bool {
        self.entries.len() == other.entries.len()
            && self.entries.iter().all(|e| other.contains(e.element))
    }
}

/// Whether two groups of formulas pair up one to one by element set.
///
/// Each formula of `a` claims the first unclaimed formula of `b` with the same
/// elements. Order within either group does not matter.
pub fn formulas_match_set(a: &[Formula], b: &[Formula]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut used = vec![false; b.len()];
    for f in a.iter() {
        match (0..b.len()).find(|&j| !used[j] && f.has_same_elements(&b[j])) {
            Some(j) => used[j] = true,
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(s: &str) -> Formula {
        Formula::from_string(s).unwrap()
    }

    #[test]
    fn equality_ignores_order_and_coefficient() {
        assert_eq!(f("H2O"), f("OH2"));
        assert_eq!(f("2H2O"), f("H2O"));
        assert_eq!(f("CH4"), f("H4C"));
        assert_ne!(f("H2O"), f("H2O2"));
        assert_ne!(f("CO"), f("CO2"));
        assert_ne!(f("NaCl"), f("Na"));
        assert_ne!(f("HCl"), f("HF"));
    }

    #[test]
    fn equality_is_symmetric() {
        let pairs = [("H2O", "OH2"), ("CO2", "CO"), ("NaCl", "ClNa"), ("C2H6", "C2H4")];
        for (a, b) in pairs.iter() {
            assert_eq!(f(a) == f(b), f(b) == f(a), "{} {}", a, b);
        }
    }

    #[test]
    fn same_elements() {
        assert!(f("H2O").has_same_elements(&f("H2O2")));
        assert!(f("CO").has_same_elements(&f("2CO2")));
        assert!(!f("CO").has_same_elements(&f("C")));
        assert!(!f("NaCl").has_same_elements(&f("NaOH")));
    }

    #[test]
    fn set_match() {
        let a = vec![f("C"), f("O2")];
        let b = vec![f("O2"), f("C")];
        assert!(formulas_match_set(&a, &b));
        assert!(formulas_match_set(&b, &a));
        assert!(formulas_match_set(&[f("2H2"), f("O2")], &[f("H2"), f("O")]));
        assert!(!formulas_match_set(&[f("C")], &[f("C"), f("O2")]));
        assert!(!formulas_match_set(&[f("C"), f("O2")], &[f("C"), f("CO2")]));
        assert!(formulas_match_set(&[], &[]));
    }

    #[test]
    fn set_match_does_not_reuse_entries() {
        // both O2 on the left would otherwise claim the single O2 on the right
        assert!(!formulas_match_set(&[f("O2"), f("O2")], &[f("O2"), f("C")]));
        assert!(formulas_match_set(&[f("O2"), f("O3")], &[f("O"), f("O2")]));
    }
}
