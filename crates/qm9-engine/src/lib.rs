use indexmap::IndexMap;
use pyo3::PyErr;
use thiserror::Error;
pub mod core;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Error inicializando Python/RDKit: {0}")]
    Init(PyErr),
    #[error("Error calculando la fórmula: {0}")]
    Formula(PyErr),
    #[error("Error calculando la huella: {0}")]
    Fingerprint(PyErr),
}

/// Acceso a RDKit. Construirlo garantiza que el wrapper de Python está cargado.
pub struct ChemEngine {
    _private: (),
}

impl ChemEngine {
    pub fn init() -> Result<Self, EngineError> {
        core::init_python().map_err(EngineError::Init)?;
        Ok(Self { _private: () })
    }
    pub fn formula_counts(&self, smiles: &str) -> Result<IndexMap<String, u32>, EngineError> {
        core::formula_counts(smiles).map_err(EngineError::Formula)
    }
    pub fn fingerprint(&self, smiles: &str, method: &str) -> Result<Vec<f32>, EngineError> {
        core::fingerprint(smiles, method).map_err(EngineError::Fingerprint)
    }
}
