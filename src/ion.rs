use std::fmt::{self, Display};

use ptable::Element;

use crate::catalog::ElementProperties;

/// An element carrying an integer charge; neutral atoms have charge 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Ion {
    element: Element,
    charge: i8
}

impl Ion {
    pub fn new(element: Element, charge: i8) -> Ion {
        Ion { element, charge }
    }

    #[inline(always)]
    pub fn get_element(&self) -> &Element {
        &self.element
    }

    #[inline(always)]
    pub fn get_charge(&self) -> i8 {
        self.charge
    }

    #[inline(always)]
    pub fn set_charge(&mut self, charge: i8) {
        self.charge = charge;
    }

    pub fn is_neutral(&self) -> bool {
        self.charge == 0
    }

    /// Whether the charge is one the element usually takes. Neutral always is.
    pub fn is_common_charge(&self) -> bool {
        self.is_neutral() || self.element.common_charges().contains(&self.charge)
    }
}

impl From<Element> for Ion {
    fn from(e: Element) -> Ion {
        Ion::new(e, 0)
    }
}

impl AsRef<Element> for Ion {
    fn as_ref(&self) -> &Element {
        &self.element
    }
}

/// `Na`, `Na+`, `O2-`, `Fe3+`
impl Display for Ion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.element.get_symbol())?;
        let magnitude = self.charge.unsigned_abs();
        if magnitude > 1 {
            write!(f, "{}", magnitude)?;
        }
        if self.charge > 0 {
            f.write_str("+")?;
        }
        else if self.charge < 0 {
            f.write_str("-")?;
        }
        Ok(())
    }
}
