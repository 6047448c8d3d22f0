//! Filas mapeadas de las tablas `snapshot`, `molecule` y `formula`.
//!
//! Solo lectura: no hay structs `Insertable`. Las huellas moleculares y los
//! conteos por elemento no se cargan en las filas; se usan únicamente como
//! columnas de filtro y orden.

use diesel::prelude::*;
use serde::Serialize;

use crate::schema::{formula, molecule, snapshot};

/// Fila mapeada de la tabla `snapshot`: un estado calculado de una molécula.
///
/// Los campos numéricos son `None` cuando la propiedad no fue calculada. Al
/// serializar se usan los nombres de columna originales (`U_0`, `Cv`, ...),
/// que son los mismos que aceptan los filtros numéricos.
#[derive(Queryable, Selectable, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = snapshot)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Snapshot {
    pub id: i32,
    pub molecule_id: i32,
    pub hash_token: String,
    pub temperature: Option<f64>,
    pub single_point_energy: Option<f64>,
    pub zpve: Option<f64>,
    pub energy_correction: Option<f64>,
    pub enthalpy_correction: Option<f64>,
    pub gibbs_free_energy_correction: Option<f64>,
    #[serde(rename = "U_0")]
    pub u_0: Option<f64>,
    #[serde(rename = "U_T")]
    pub u_t: Option<f64>,
    #[serde(rename = "H_T")]
    pub h_t: Option<f64>,
    #[serde(rename = "G_T")]
    pub g_t: Option<f64>,
    #[serde(rename = "S")]
    pub s: Option<f64>,
    #[serde(rename = "Cv")]
    pub cv: Option<f64>,
    pub isotropic_polarizability: Option<f64>,
    pub electronic_spatial_extent: Option<f64>,
    pub alpha_homo: Option<f64>,
    pub alpha_lumo: Option<f64>,
    pub alpha_gap: Option<f64>,
    pub beta_homo: Option<f64>,
    pub beta_lumo: Option<f64>,
    pub beta_gap: Option<f64>,
    pub first_frequency: Option<f64>,
    pub second_frequency: Option<f64>,
    pub spin_quantum_number: Option<f64>,
    pub spin_square: Option<f64>,
    pub functional: Option<String>,
    pub basis_set: Option<String>,
    pub solvation: Option<String>,
    pub species: Option<String>,
    pub is_optimized: bool,
    pub is_normal_termination: bool,
    pub has_imaginary_frequency: bool,
    pub is_ts: bool,
}

/// Descriptores escalares de `molecule` (sin las columnas de huella).
#[derive(Queryable, Selectable, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = molecule)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Molecule {
    pub id: i32,
    pub formula_id: i32,
    pub smiles: String,
    pub total_charge: i32,
    pub total_multiplicity: i32,
    pub atom_number: i32,
    pub qed: Option<f64>,
    pub logp: Option<f64>,
}

/// Totales de `formula` (sin los conteos por elemento).
#[derive(Queryable, Selectable, Serialize, Debug, Clone, PartialEq)]
#[diesel(table_name = formula)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Formula {
    pub id: i32,
    pub formula_string: String,
    pub atom_number: i32,
    pub molwt: f64,
}

/// Snapshot junto con su molécula y fórmula.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SnapshotDetail {
    pub snapshot: Snapshot,
    pub molecule: Molecule,
    pub formula: Formula,
}
