use super::{ReactionCondition, ReactionType};
use super::ReactionCondition::*;
use super::ReactionType::*;

pub(super) struct SeedReaction {
    pub reactants: &'static [&'static str],
    pub products: &'static [&'static str],
    pub kind: ReactionType,
    pub condition: ReactionCondition,
    pub description: &'static str,
}

macro_rules! seed {
    ([$($r:expr),+] -> [$($p:expr),+], $kind:expr, $condition:expr, $description:expr) => {
        SeedReaction {
            reactants: &[$($r),+],
            products: &[$($p),+],
            kind: $kind,
            condition: $condition,
            description: $description,
        }
    };
}

// Lookups return the first match, so earlier entries shadow later ones with
// the same reactant elements.
pub(super) static SEED_REACTIONS: [SeedReaction; 19] = [
    seed!(["C", "O2"] -> ["CO2"], Combustion, Heated, "Combustion of carbon"),
    seed!(["2H2", "O2"] -> ["2H2O"], Combustion, Heated, "Combustion of hydrogen"),
    seed!(["CH4", "2O2"] -> ["CO2", "2H2O"], Combustion, Heated, "Combustion of methane"),

    seed!(["2Na", "Cl2"] -> ["2NaCl"], Synthesis, Normal, "Formation of table salt"),
    seed!(["4Fe", "3O2"] -> ["2Fe2O3"], Synthesis, Normal, "Rusting of iron"),
    seed!(["N2", "3H2"] -> ["2NH3"], Synthesis, Catalyst, "Haber process for ammonia synthesis"),
    seed!(["S", "O2"] -> ["SO2"], Combustion, Heated, "Combustion of sulfur"),

    seed!(["2H2O"] -> ["2H2", "O2"], Decomposition, Electrolysis, "Electrolysis of water"),
    seed!(["2H2O2"] -> ["2H2O", "O2"], Decomposition, Catalyst, "Decomposition of hydrogen peroxide"),
    seed!(["CaCO3"] -> ["CaO", "CO2"], Decomposition, Heated, "Thermal decomposition of limestone"),

    seed!(["HCl", "NaOH"] -> ["NaCl", "H2O"], AcidBase, Normal, "Neutralization reaction"),
    seed!(["H2SO4", "2NaOH"] -> ["Na2SO4", "2H2O"], AcidBase, Normal, "Neutralization with sulfuric acid"),

    seed!(["Zn", "2HCl"] -> ["ZnCl2", "H2"], SingleReplacement, Normal, "Zinc displaces hydrogen from acid"),
    seed!(["Fe", "CuSO4"] -> ["FeSO4", "Cu"], SingleReplacement, Normal, "Iron displaces copper"),

    seed!(["AgNO3", "NaCl"] -> ["AgCl", "NaNO3"], DoubleReplacement, Normal, "Precipitation of silver chloride"),
    seed!(["BaCl2", "Na2SO4"] -> ["BaSO4", "2NaCl"], DoubleReplacement, Normal, "Precipitation of barium sulfate"),

    seed!(["6CO2", "6H2O"] -> ["C6H12O6", "6O2"], Other, Light, "Photosynthesis (simplified)"),
    seed!(["C6H12O6", "6O2"] -> ["6CO2", "6H2O"], Combustion, Normal, "Cellular respiration (simplified)"),
    seed!(["2Mg", "O2"] -> ["2MgO"], Synthesis, Heated, "Burning magnesium"),
];
