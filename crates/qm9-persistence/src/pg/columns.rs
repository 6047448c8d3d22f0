//! Registros de columnas filtrables.
//!
//! Cada registro asocia el nombre público de una columna con una función que
//! agrega el predicado tipado correspondiente a la consulta en construcción.
//! Se construyen una sola vez; un nombre ausente del registro es un filtro que
//! se ignora (los clientes pueden enviar columnas que esta versión no conoce).

use std::collections::HashMap;

use diesel::prelude::*;
use once_cell::sync::Lazy;

use crate::pg::snapshots::SnapshotQuery;
use crate::schema::{formula, molecule, snapshot};

pub type ElementPredicate = fn(SnapshotQuery, i32) -> SnapshotQuery;
pub type RangePredicate = fn(SnapshotQuery, f64, f64) -> SnapshotQuery;
pub type ClassPredicate = fn(SnapshotQuery, Vec<String>) -> SnapshotQuery;
pub type BoolPredicate = fn(SnapshotQuery, bool) -> SnapshotQuery;

/// Tabla dueña de una columna de rango.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnScope {
    Formula,
    Molecule,
    Snapshot,
}

// conteo negativo = "presente"
macro_rules! element_column {
    ($col:expr) => {
        (|query: SnapshotQuery, count: i32| -> SnapshotQuery {
            if count < 0 {
                query.filter($col.gt(0))
            } else {
                query.filter($col.eq(count))
            }
        }) as ElementPredicate
    };
}

macro_rules! float_range {
    ($col:expr) => {
        (|query: SnapshotQuery, min: f64, max: f64| -> SnapshotQuery {
            query.filter($col.ge(min)).filter($col.le(max))
        }) as RangePredicate
    };
}

macro_rules! int_range {
    ($col:expr) => {
        (|query: SnapshotQuery, min: f64, max: f64| -> SnapshotQuery {
            let (lo, hi) = integer_bounds(min, max);
            query.filter($col.ge(lo)).filter($col.le(hi))
        }) as RangePredicate
    };
}

macro_rules! class_column {
    ($col:expr) => {
        (|query: SnapshotQuery, values: Vec<String>| -> SnapshotQuery { query.filter($col.eq_any(values)) })
            as ClassPredicate
    };
}

macro_rules! bool_column {
    ($col:expr) => {
        (|query: SnapshotQuery, value: bool| -> SnapshotQuery { query.filter($col.eq(value)) }) as BoolPredicate
    };
}

/// Convierte un rango real a cotas enteras equivalentes para columnas
/// enteras: `x >= min` ⇔ `x >= ceil(min)` y `x <= max` ⇔ `x <= floor(max)`.
/// Postgres ordena NaN por encima de cualquier número.
pub(crate) fn integer_bounds(min: f64, max: f64) -> (i32, i32) {
    let lo = if min.is_nan() { i32::MAX } else { min.ceil() as i32 };
    let hi = if max.is_nan() { i32::MIN } else { max.floor() as i32 };
    (lo, hi)
}

static ELEMENT_COLUMNS: Lazy<HashMap<&'static str, ElementPredicate>> = Lazy::new(|| {
    HashMap::from([("H", element_column!(formula::h)),
                   ("He", element_column!(formula::he)),
                   ("Li", element_column!(formula::li)),
                   ("Be", element_column!(formula::be)),
                   ("B", element_column!(formula::b)),
                   ("C", element_column!(formula::c)),
                   ("N", element_column!(formula::n)),
                   ("O", element_column!(formula::o)),
                   ("F", element_column!(formula::f)),
                   ("Ne", element_column!(formula::ne)),
                   ("Na", element_column!(formula::na)),
                   ("Mg", element_column!(formula::mg)),
                   ("Al", element_column!(formula::al)),
                   ("Si", element_column!(formula::si)),
                   ("P", element_column!(formula::p)),
                   ("S", element_column!(formula::s)),
                   ("Cl", element_column!(formula::cl)),
                   ("Ar", element_column!(formula::ar)),
                   ("K", element_column!(formula::k)),
                   ("Ca", element_column!(formula::ca)),
                   ("Sc", element_column!(formula::sc)),
                   ("Ti", element_column!(formula::ti)),
                   ("V", element_column!(formula::v)),
                   ("Cr", element_column!(formula::cr)),
                   ("Mn", element_column!(formula::mn)),
                   ("Fe", element_column!(formula::fe)),
                   ("Co", element_column!(formula::co)),
                   ("Ni", element_column!(formula::ni)),
                   ("Cu", element_column!(formula::cu)),
                   ("Zn", element_column!(formula::zn)),
                   ("Ga", element_column!(formula::ga)),
                   ("Ge", element_column!(formula::ge)),
                   ("As", element_column!(formula::as_)),
                   ("Se", element_column!(formula::se)),
                   ("Br", element_column!(formula::br)),
                   ("Kr", element_column!(formula::kr))])
});

fn formula_ranges() -> Vec<(&'static str, RangePredicate)> {
    vec![("atom_number", int_range!(formula::atom_number)), ("molwt", float_range!(formula::molwt))]
}

fn molecule_ranges() -> Vec<(&'static str, RangePredicate)> {
    vec![("atom_number", int_range!(molecule::atom_number)),
         ("total_charge", int_range!(molecule::total_charge)),
         ("total_multiplicity", int_range!(molecule::total_multiplicity)),
         ("qed", float_range!(molecule::qed)),
         ("logp", float_range!(molecule::logp))]
}

fn snapshot_ranges() -> Vec<(&'static str, RangePredicate)> {
    vec![("temperature", float_range!(snapshot::temperature)),
         ("single_point_energy", float_range!(snapshot::single_point_energy)),
         ("zpve", float_range!(snapshot::zpve)),
         ("energy_correction", float_range!(snapshot::energy_correction)),
         ("enthalpy_correction", float_range!(snapshot::enthalpy_correction)),
         ("gibbs_free_energy_correction", float_range!(snapshot::gibbs_free_energy_correction)),
         ("U_0", float_range!(snapshot::u_0)),
         ("U_T", float_range!(snapshot::u_t)),
         ("H_T", float_range!(snapshot::h_t)),
         ("G_T", float_range!(snapshot::g_t)),
         ("S", float_range!(snapshot::s)),
         ("Cv", float_range!(snapshot::cv)),
         ("isotropic_polarizability", float_range!(snapshot::isotropic_polarizability)),
         ("electronic_spatial_extent", float_range!(snapshot::electronic_spatial_extent)),
         ("alpha_homo", float_range!(snapshot::alpha_homo)),
         ("alpha_lumo", float_range!(snapshot::alpha_lumo)),
         ("alpha_gap", float_range!(snapshot::alpha_gap)),
         ("beta_homo", float_range!(snapshot::beta_homo)),
         ("beta_lumo", float_range!(snapshot::beta_lumo)),
         ("beta_gap", float_range!(snapshot::beta_gap)),
         ("first_frequency", float_range!(snapshot::first_frequency)),
         ("second_frequency", float_range!(snapshot::second_frequency)),
         ("spin_quantum_number", float_range!(snapshot::spin_quantum_number)),
         ("spin_square", float_range!(snapshot::spin_square))]
}

// Las particiones se recorren en orden y la primera que declara un nombre se
// queda con él: `atom_number` resuelve a `formula`.
static RANGE_COLUMNS: Lazy<HashMap<&'static str, (ColumnScope, RangePredicate)>> = Lazy::new(|| {
    let partitions = [(ColumnScope::Formula, formula_ranges()),
                      (ColumnScope::Molecule, molecule_ranges()),
                      (ColumnScope::Snapshot, snapshot_ranges())];
    let mut map = HashMap::new();
    for (scope, entries) in partitions {
        for (name, predicate) in entries {
            map.entry(name).or_insert((scope, predicate));
        }
    }
    map
});

static CLASS_COLUMNS: Lazy<HashMap<&'static str, ClassPredicate>> = Lazy::new(|| {
    HashMap::from([("hash_token", class_column!(snapshot::hash_token)),
                   ("functional", class_column!(snapshot::functional)),
                   ("basis_set", class_column!(snapshot::basis_set)),
                   ("solvation", class_column!(snapshot::solvation)),
                   ("species", class_column!(snapshot::species))])
});

static BOOL_COLUMNS: Lazy<HashMap<&'static str, BoolPredicate>> = Lazy::new(|| {
    HashMap::from([("is_optimized", bool_column!(snapshot::is_optimized)),
                   ("is_normal_termination", bool_column!(snapshot::is_normal_termination)),
                   ("has_imaginary_frequency", bool_column!(snapshot::has_imaginary_frequency)),
                   ("is_ts", bool_column!(snapshot::is_ts))])
});

/// Predicado de conteo para un símbolo con columna en `formula`.
pub fn element_predicate(symbol: &str) -> Option<ElementPredicate> {
    ELEMENT_COLUMNS.get(symbol).copied()
}

pub fn range_predicate(column: &str) -> Option<(ColumnScope, RangePredicate)> {
    RANGE_COLUMNS.get(column).copied()
}

pub fn class_predicate(column: &str) -> Option<ClassPredicate> {
    CLASS_COLUMNS.get(column).copied()
}

pub fn bool_predicate(column: &str) -> Option<BoolPredicate> {
    BOOL_COLUMNS.get(column).copied()
}

/// Símbolos con columna de conteo en `formula`.
pub fn element_symbols() -> impl Iterator<Item = &'static str> {
    ELEMENT_COLUMNS.keys().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qm9_domain::periodic_table::{atomic_number, is_element};

    #[test]
    fn element_columns_cover_periods_one_to_four() {
        assert_eq!(element_symbols().count(), 36);
        for symbol in element_symbols() {
            assert!(is_element(symbol), "{symbol} no es un elemento");
            assert!(atomic_number(symbol).unwrap() <= 36);
        }
        assert!(element_predicate("I").is_none());
        assert!(element_predicate("h").is_none());
    }

    #[test]
    fn atom_number_routes_to_formula() {
        let (scope, _) = range_predicate("atom_number").unwrap();
        assert_eq!(scope, ColumnScope::Formula);
        assert_eq!(range_predicate("molwt").unwrap().0, ColumnScope::Formula);
        assert_eq!(range_predicate("logp").unwrap().0, ColumnScope::Molecule);
        assert_eq!(range_predicate("total_multiplicity").unwrap().0, ColumnScope::Molecule);
        assert_eq!(range_predicate("U_0").unwrap().0, ColumnScope::Snapshot);
    }

    #[test]
    fn range_registry_size() {
        // 2 formula + 5 molecule (atom_number repetida) + 24 snapshot
        assert_eq!(RANGE_COLUMNS.len(), 30);
        assert!(range_predicate("u_0").is_none());
        assert!(range_predicate("id").is_none());
        assert!(range_predicate("hash_token").is_none());
    }

    #[test]
    fn class_and_bool_registries_are_snapshot_columns() {
        assert!(class_predicate("species").is_some());
        assert!(class_predicate("hash_token").is_some());
        assert!(class_predicate("smiles").is_none());
        assert!(bool_predicate("is_ts").is_some());
        assert!(bool_predicate("species").is_none());
    }

    #[test]
    fn integer_bounds_match_real_comparison() {
        assert_eq!(integer_bounds(1.5, 3.7), (2, 3));
        assert_eq!(integer_bounds(-1.5, -0.2), (-1, -1));
        assert_eq!(integer_bounds(2.0, 2.0), (2, 2));
        assert_eq!(integer_bounds(f64::NEG_INFINITY, f64::INFINITY), (i32::MIN, i32::MAX));
        assert_eq!(integer_bounds(f64::NAN, 1.0).0, i32::MAX);
        assert_eq!(integer_bounds(0.0, f64::NAN).1, i32::MIN);
    }
}
