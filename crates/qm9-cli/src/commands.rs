use std::fs;

use qm9_domain::{Page, SnapshotFilter};
use qm9_persistence::pg::snapshots as queries;
use qm9_persistence::{ConnectionProvider, PoolProvider};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{Commands, SearchArgs};
use crate::error::{CliError, Result};
use crate::toolkit::LazyRdkit;

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out = if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    println!("{out}");
    Ok(())
}

/// Arma el filtro desde el archivo (si hay) y aplica las opciones de
/// similitud de la línea de comandos encima.
fn load_filter(args: &SearchArgs) -> Result<Option<SnapshotFilter>> {
    let mut filter = match &args.filter {
        Some(path) => {
            let raw = fs::read_to_string(path).map_err(|source| CliError::Io { path: path.display().to_string(), source })?;
            Some(SnapshotFilter::from_json(&raw)?)
        }
        None => None,
    };
    if let Some(smiles) = &args.smiles {
        let f = filter.get_or_insert_with(SnapshotFilter::default);
        f.smiles = Some(smiles.clone());
        if let Some(method) = &args.method {
            f.method = method.clone();
        }
        if let Some(distance) = &args.distance {
            f.distance = distance.clone();
        }
    }
    Ok(filter)
}

pub fn run(command: Commands, pretty: bool) -> Result<()> {
    let provider = PoolProvider { pool: qm9_persistence::build_pool_from_env()? };
    let mut conn = provider.connection()?;
    let toolkit = LazyRdkit::default();

    match command {
        Commands::Ids => print_json(&queries::get_snapshot_ids(&mut conn)?, pretty),
        Commands::Get { id } => print_json(&queries::get_snapshot_by_id(&mut conn, id)?, pretty),
        Commands::Find { smiles, hash } => {
            print_json(&queries::get_snapshot_by_smiles_hash(&mut conn, &toolkit, &smiles, &hash)?, pretty)
        }
        Commands::Search(args) => {
            let filter = load_filter(&args)?;
            let page = Page::new(args.skip, args.limit);
            debug!("search filter={:?} page={:?}", filter, page);
            let rows = queries::get_snapshots_by_conditions(&mut conn, &toolkit, filter.as_ref(), page)?;
            info!("{} snapshots", rows.len());
            print_json(&rows, pretty)
        }
        Commands::Count => print_json(&queries::get_snapshot_count(&mut conn)?, pretty),
        Commands::ChargeMulti { charge, multiplicity } => {
            print_json(&queries::get_snapshots_by_charge_multi(&mut conn, charge, multiplicity)?, pretty)
        }
        Commands::Show { id } => print_json(&queries::get_snapshot_detail(&mut conn, id)?, pretty),
    }
}
