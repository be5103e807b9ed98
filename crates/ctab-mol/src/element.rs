//! Periodic-table lookups
//!
//! Backs the symbol handling of the molfile decoders: symbol to atomic number,
//! atomic number to standard atomic weight and back to the symbol.

use ahash::AHashMap;
use std::sync::OnceLock;

/// Static per-element data, indexed by atomic number.
struct ElementData {
    symbol: &'static str,
    weight: f64,
}

/// Number of table entries (index 0 is the wildcard/R-group pseudo-element).
pub const ELEMENT_COUNT: usize = 119;

#[rustfmt::skip]
static ELEMENTS: [ElementData; ELEMENT_COUNT] = [
    ElementData { symbol: "*",  weight: 0.0 },
    ElementData { symbol: "H",  weight: 1.008 },
    ElementData { symbol: "He", weight: 4.0026 },
    ElementData { symbol: "Li", weight: 6.94 },
    ElementData { symbol: "Be", weight: 9.0122 },
    ElementData { symbol: "B",  weight: 10.81 },
    ElementData { symbol: "C",  weight: 12.011 },
    ElementData { symbol: "N",  weight: 14.007 },
    ElementData { symbol: "O",  weight: 15.999 },
    ElementData { symbol: "F",  weight: 18.998 },
    ElementData { symbol: "Ne", weight: 20.180 },
    ElementData { symbol: "Na", weight: 22.990 },
    ElementData { symbol: "Mg", weight: 24.305 },
    ElementData { symbol: "Al", weight: 26.982 },
    ElementData { symbol: "Si", weight: 28.085 },
    ElementData { symbol: "P",  weight: 30.974 },
    ElementData { symbol: "S",  weight: 32.06 },
    ElementData { symbol: "Cl", weight: 35.45 },
    ElementData { symbol: "Ar", weight: 39.948 },
    ElementData { symbol: "K",  weight: 39.098 },
    ElementData { symbol: "Ca", weight: 40.078 },
    ElementData { symbol: "Sc", weight: 44.956 },
    ElementData { symbol: "Ti", weight: 47.867 },
    ElementData { symbol: "V",  weight: 50.942 },
    ElementData { symbol: "Cr", weight: 51.996 },
    ElementData { symbol: "Mn", weight: 54.938 },
    ElementData { symbol: "Fe", weight: 55.845 },
    ElementData { symbol: "Co", weight: 58.933 },
    ElementData { symbol: "Ni", weight: 58.693 },
    ElementData { symbol: "Cu", weight: 63.546 },
    ElementData { symbol: "Zn", weight: 65.38 },
    ElementData { symbol: "Ga", weight: 69.723 },
    ElementData { symbol: "Ge", weight: 72.630 },
    ElementData { symbol: "As", weight: 74.922 },
    ElementData { symbol: "Se", weight: 78.971 },
    ElementData { symbol: "Br", weight: 79.904 },
    ElementData { symbol: "Kr", weight: 83.798 },
    ElementData { symbol: "Rb", weight: 85.468 },
    ElementData { symbol: "Sr", weight: 87.62 },
    ElementData { symbol: "Y",  weight: 88.906 },
    ElementData { symbol: "Zr", weight: 91.224 },
    ElementData { symbol: "Nb", weight: 92.906 },
    ElementData { symbol: "Mo", weight: 95.95 },
    ElementData { symbol: "Tc", weight: 97.0 },
    ElementData { symbol: "Ru", weight: 101.07 },
    ElementData { symbol: "Rh", weight: 102.91 },
    ElementData { symbol: "Pd", weight: 106.42 },
    ElementData { symbol: "Ag", weight: 107.87 },
    ElementData { symbol: "Cd", weight: 112.41 },
    ElementData { symbol: "In", weight: 114.82 },
    ElementData { symbol: "Sn", weight: 118.71 },
    ElementData { symbol: "Sb", weight: 121.76 },
    ElementData { symbol: "Te", weight: 127.60 },
    ElementData { symbol: "I",  weight: 126.90 },
    ElementData { symbol: "Xe", weight: 131.29 },
    ElementData { symbol: "Cs", weight: 132.91 },
    ElementData { symbol: "Ba", weight: 137.33 },
    ElementData { symbol: "La", weight: 138.91 },
    ElementData { symbol: "Ce", weight: 140.12 },
    ElementData { symbol: "Pr", weight: 140.91 },
    ElementData { symbol: "Nd", weight: 144.24 },
    ElementData { symbol: "Pm", weight: 145.0 },
    ElementData { symbol: "Sm", weight: 150.36 },
    ElementData { symbol: "Eu", weight: 151.96 },
    ElementData { symbol: "Gd", weight: 157.25 },
    ElementData { symbol: "Tb", weight: 158.93 },
    ElementData { symbol: "Dy", weight: 162.50 },
    ElementData { symbol: "Ho", weight: 164.93 },
    ElementData { symbol: "Er", weight: 167.26 },
    ElementData { symbol: "Tm", weight: 168.93 },
    ElementData { symbol: "Yb", weight: 173.05 },
    ElementData { symbol: "Lu", weight: 174.97 },
    ElementData { symbol: "Hf", weight: 178.49 },
    ElementData { symbol: "Ta", weight: 180.95 },
    ElementData { symbol: "W",  weight: 183.84 },
    ElementData { symbol: "Re", weight: 186.21 },
    ElementData { symbol: "Os", weight: 190.23 },
    ElementData { symbol: "Ir", weight: 192.22 },
    ElementData { symbol: "Pt", weight: 195.08 },
    ElementData { symbol: "Au", weight: 196.97 },
    ElementData { symbol: "Hg", weight: 200.59 },
    ElementData { symbol: "Tl", weight: 204.38 },
    ElementData { symbol: "Pb", weight: 207.2 },
    ElementData { symbol: "Bi", weight: 208.98 },
    ElementData { symbol: "Po", weight: 209.0 },
    ElementData { symbol: "At", weight: 210.0 },
    ElementData { symbol: "Rn", weight: 222.0 },
    ElementData { symbol: "Fr", weight: 223.0 },
    ElementData { symbol: "Ra", weight: 226.0 },
    ElementData { symbol: "Ac", weight: 227.0 },
    ElementData { symbol: "Th", weight: 232.04 },
    ElementData { symbol: "Pa", weight: 231.04 },
    ElementData { symbol: "U",  weight: 238.03 },
    ElementData { symbol: "Np", weight: 237.0 },
    ElementData { symbol: "Pu", weight: 244.0 },
    ElementData { symbol: "Am", weight: 243.0 },
    ElementData { symbol: "Cm", weight: 247.0 },
    ElementData { symbol: "Bk", weight: 247.0 },
    ElementData { symbol: "Cf", weight: 251.0 },
    ElementData { symbol: "Es", weight: 252.0 },
    ElementData { symbol: "Fm", weight: 257.0 },
    ElementData { symbol: "Md", weight: 258.0 },
    ElementData { symbol: "No", weight: 259.0 },
    ElementData { symbol: "Lr", weight: 266.0 },
    ElementData { symbol: "Rf", weight: 267.0 },
    ElementData { symbol: "Db", weight: 268.0 },
    ElementData { symbol: "Sg", weight: 269.0 },
    ElementData { symbol: "Bh", weight: 270.0 },
    ElementData { symbol: "Hs", weight: 269.0 },
    ElementData { symbol: "Mt", weight: 278.0 },
    ElementData { symbol: "Ds", weight: 281.0 },
    ElementData { symbol: "Rg", weight: 282.0 },
    ElementData { symbol: "Cn", weight: 285.0 },
    ElementData { symbol: "Nh", weight: 286.0 },
    ElementData { symbol: "Fl", weight: 289.0 },
    ElementData { symbol: "Mc", weight: 290.0 },
    ElementData { symbol: "Lv", weight: 293.0 },
    ElementData { symbol: "Ts", weight: 294.0 },
    ElementData { symbol: "Og", weight: 294.0 },
];

static SYMBOL_MAP: OnceLock<AHashMap<&'static str, u8>> = OnceLock::new();

fn symbol_map() -> &'static AHashMap<&'static str, u8> {
    SYMBOL_MAP.get_or_init(|| {
        let mut map = AHashMap::with_capacity(ELEMENT_COUNT);
        for (z, data) in ELEMENTS.iter().enumerate() {
            map.insert(data.symbol, z as u8);
        }
        map
    })
}

/// Look up an atomic number by element symbol.
///
/// The lookup is case-tolerant ("CL" and "cl" both resolve to chlorine), since
/// molfiles in the wild are not consistent about symbol casing.
pub fn atomic_number(symbol: &str) -> Option<u8> {
    let symbol = symbol.trim();
    if symbol.is_empty() || symbol.len() > 2 {
        return None;
    }
    let mut titlecase = String::with_capacity(2);
    for (i, c) in symbol.chars().enumerate() {
        if i == 0 {
            titlecase.push(c.to_ascii_uppercase());
        } else {
            titlecase.push(c.to_ascii_lowercase());
        }
    }
    symbol_map().get(titlecase.as_str()).copied()
}

/// Standard atomic weight in Daltons; 0.0 for the pseudo-element and for
/// atomic numbers outside the table.
pub fn standard_weight(atomic_num: u8) -> f64 {
    ELEMENTS
        .get(atomic_num as usize)
        .map_or(0.0, |data| data.weight)
}

/// Element symbol for an atomic number; `"*"` for 0 or out-of-range values.
pub fn symbol(atomic_num: u8) -> &'static str {
    ELEMENTS
        .get(atomic_num as usize)
        .map_or("*", |data| data.symbol)
}

/// Default valence used by the strict valence check, `None` where no single
/// default applies (transition metals and the like).
pub fn default_valence(atomic_num: u8) -> Option<u8> {
    match atomic_num {
        1 | 9 | 17 | 35 | 53 => Some(1),
        8 | 16 | 34 | 52 => Some(2),
        5 | 7 | 13 | 15 | 33 | 51 => Some(3),
        6 | 14 | 32 | 50 => Some(4),
        2 | 10 | 18 | 36 | 54 => Some(0),
        3 | 11 | 19 | 37 | 55 => Some(1),
        4 | 12 | 20 | 38 | 56 => Some(2),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        assert_eq!(atomic_number("C"), Some(6));
        assert_eq!(atomic_number("Cl"), Some(17));
        assert_eq!(symbol(6), "C");
        assert_eq!(symbol(17), "Cl");
    }

    #[test]
    fn test_case_tolerance() {
        assert_eq!(atomic_number("CL"), Some(17));
        assert_eq!(atomic_number("br"), Some(35));
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(atomic_number(""), None);
        assert_eq!(atomic_number("Xx"), None);
        assert_eq!(atomic_number("Carbon"), None);
    }

    #[test]
    fn test_weights() {
        assert!((standard_weight(6) - 12.011).abs() < 1e-6);
        assert!((standard_weight(1) - 1.008).abs() < 1e-6);
        assert_eq!(standard_weight(0), 0.0);
        assert_eq!(standard_weight(200), 0.0);
    }

    #[test]
    fn test_wildcard_entry() {
        assert_eq!(atomic_number("*"), Some(0));
        assert_eq!(symbol(0), "*");
    }

    #[test]
    fn test_default_valence() {
        assert_eq!(default_valence(6), Some(4));
        assert_eq!(default_valence(7), Some(3));
        assert_eq!(default_valence(8), Some(2));
        assert_eq!(default_valence(26), None);
    }
}
