//! Símbolos de la tabla periódica usados para validar filtros por elemento.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Símbolos en orden de número atómico (Z = índice + 1).
pub const ELEMENT_SYMBOLS: [&str; 118] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", "K", "Ca",
    "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se", "Br", "Kr", "Rb", "Sr", "Y",
    "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce",
    "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir",
    "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm",
    "Bk", "Cf", "Es", "Fm", "Md", "No", "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh", "Fl", "Mc",
    "Lv", "Ts", "Og",
];

static ELEMENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| ELEMENT_SYMBOLS.iter().copied().collect());

/// `true` si `symbol` es un símbolo químico válido (sensible a mayúsculas).
pub fn is_element(symbol: &str) -> bool {
    ELEMENTS.contains(symbol)
}

/// Número atómico del símbolo, si existe.
pub fn atomic_number(symbol: &str) -> Option<u8> {
    ELEMENT_SYMBOLS.iter().position(|s| *s == symbol).map(|i| (i + 1) as u8)
}
