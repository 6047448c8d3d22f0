//! Esquema Diesel de las tablas de snapshots (declarado a mano, coincide con
//! la base poblada por la ingesta; esta capa no migra ni escribe).

diesel::table! {
    use diesel::sql_types::*;
    use pgvector::sql_types::Vector;

    molecule (id) {
        id -> Integer,
        formula_id -> Integer,
        smiles -> Text,
        total_charge -> Integer,
        total_multiplicity -> Integer,
        atom_number -> Integer,
        qed -> Nullable<Double>,
        logp -> Nullable<Double>,
        morgan_fp3_1024 -> Vector,
        rdkit_fp_1024 -> Vector,
        atompair_fp_1024 -> Vector,
        topological_torsion_fp_1024 -> Vector,
    }
}

// Una columna por elemento (periodos 1-4), nombrada por su símbolo.
diesel::table! {
    formula (id) {
        id -> Integer,
        formula_string -> Text,
        atom_number -> Integer,
        molwt -> Double,
        #[sql_name = "H"] h -> Integer,
        #[sql_name = "He"] he -> Integer,
        #[sql_name = "Li"] li -> Integer,
        #[sql_name = "Be"] be -> Integer,
        #[sql_name = "B"] b -> Integer,
        #[sql_name = "C"] c -> Integer,
        #[sql_name = "N"] n -> Integer,
        #[sql_name = "O"] o -> Integer,
        #[sql_name = "F"] f -> Integer,
        #[sql_name = "Ne"] ne -> Integer,
        #[sql_name = "Na"] na -> Integer,
        #[sql_name = "Mg"] mg -> Integer,
        #[sql_name = "Al"] al -> Integer,
        #[sql_name = "Si"] si -> Integer,
        #[sql_name = "P"] p -> Integer,
        #[sql_name = "S"] s -> Integer,
        #[sql_name = "Cl"] cl -> Integer,
        #[sql_name = "Ar"] ar -> Integer,
        #[sql_name = "K"] k -> Integer,
        #[sql_name = "Ca"] ca -> Integer,
        #[sql_name = "Sc"] sc -> Integer,
        #[sql_name = "Ti"] ti -> Integer,
        #[sql_name = "V"] v -> Integer,
        #[sql_name = "Cr"] cr -> Integer,
        #[sql_name = "Mn"] mn -> Integer,
        #[sql_name = "Fe"] fe -> Integer,
        #[sql_name = "Co"] co -> Integer,
        #[sql_name = "Ni"] ni -> Integer,
        #[sql_name = "Cu"] cu -> Integer,
        #[sql_name = "Zn"] zn -> Integer,
        #[sql_name = "Ga"] ga -> Integer,
        #[sql_name = "Ge"] ge -> Integer,
        #[sql_name = "As"] as_ -> Integer,
        #[sql_name = "Se"] se -> Integer,
        #[sql_name = "Br"] br -> Integer,
        #[sql_name = "Kr"] kr -> Integer,
    }
}

diesel::table! {
    snapshot (id) {
        id -> Integer,
        molecule_id -> Integer,
        hash_token -> Text,
        temperature -> Nullable<Double>,
        single_point_energy -> Nullable<Double>,
        zpve -> Nullable<Double>,
        energy_correction -> Nullable<Double>,
        enthalpy_correction -> Nullable<Double>,
        gibbs_free_energy_correction -> Nullable<Double>,
        #[sql_name = "U_0"] u_0 -> Nullable<Double>,
        #[sql_name = "U_T"] u_t -> Nullable<Double>,
        #[sql_name = "H_T"] h_t -> Nullable<Double>,
        #[sql_name = "G_T"] g_t -> Nullable<Double>,
        #[sql_name = "S"] s -> Nullable<Double>,
        #[sql_name = "Cv"] cv -> Nullable<Double>,
        isotropic_polarizability -> Nullable<Double>,
        electronic_spatial_extent -> Nullable<Double>,
        alpha_homo -> Nullable<Double>,
        alpha_lumo -> Nullable<Double>,
        alpha_gap -> Nullable<Double>,
        beta_homo -> Nullable<Double>,
        beta_lumo -> Nullable<Double>,
        beta_gap -> Nullable<Double>,
        first_frequency -> Nullable<Double>,
        second_frequency -> Nullable<Double>,
        spin_quantum_number -> Nullable<Double>,
        spin_square -> Nullable<Double>,
        functional -> Nullable<Text>,
        basis_set -> Nullable<Text>,
        solvation -> Nullable<Text>,
        species -> Nullable<Text>,
        is_optimized -> Bool,
        is_normal_termination -> Bool,
        has_imaginary_frequency -> Bool,
        is_ts -> Bool,
    }
}

diesel::joinable!(snapshot -> molecule (molecule_id));
diesel::joinable!(molecule -> formula (formula_id));

diesel::allow_tables_to_appear_in_same_query!(
    snapshot,
    molecule,
    formula,
);
