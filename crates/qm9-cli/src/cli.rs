use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use qm9_domain::Page;
use qm9_persistence::pg::snapshots::{DEFAULT_CHARGE, DEFAULT_MULTIPLICITY};

/// Consultas de solo lectura sobre la base de snapshots QM9star.
///
/// La conexión se toma de DATABASE_URL (se lee también desde .env).
#[derive(Parser, Debug)]
#[command(version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Aumenta el nivel de log (-v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Silencia todo el log
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Imprime el JSON con indentación
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lista todos los ids de snapshot.
    Ids,
    /// Obtiene un snapshot por id.
    Get {
        id: i32,
    },
    /// Busca el snapshot de un SMILES con un token de integridad dado.
    Find {
        #[arg(long)]
        smiles: String,
        #[arg(long)]
        hash: String,
    },
    /// Búsqueda filtrada y paginada.
    Search(SearchArgs),
    /// Número total de snapshots.
    Count,
    /// Snapshots con una carga y multiplicidad dadas (sin paginar).
    ChargeMulti {
        #[arg(long, default_value_t = DEFAULT_CHARGE, allow_negative_numbers = true)]
        charge: i32,
        #[arg(long, default_value_t = DEFAULT_MULTIPLICITY)]
        multiplicity: i32,
    },
    /// Snapshot junto con su molécula y fórmula.
    Show {
        id: i32,
    },
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Archivo JSON con un SnapshotFilter
    #[arg(short, long, value_name = "PATH")]
    pub filter: Option<PathBuf>,

    /// SMILES de consulta para ordenar por similitud (reemplaza el del archivo)
    #[arg(long)]
    pub smiles: Option<String>,

    /// Método de huella: morgan, rdk, atompair, torsion
    #[arg(long, requires = "smiles")]
    pub method: Option<String>,

    /// Distancia: l2, inner_product, cosine
    #[arg(long, requires = "smiles")]
    pub distance: Option<String>,

    #[arg(long, default_value_t = 0)]
    pub skip: i64,

    #[arg(long, default_value_t = Page::DEFAULT_LIMIT)]
    pub limit: i64,
}
