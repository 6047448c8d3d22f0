//! Contrato con las utilidades químicas externas: conversión de SMILES a
//! composición elemental y a huella molecular.

use indexmap::IndexMap;

use crate::embedding::EmbeddingMethod;
use crate::DomainError;

/// Conteo de átomos por símbolo, en el orden que devuelve el toolkit.
pub type ElementCounts = IndexMap<String, u32>;

/// Servicio químico opaco que la capa de consultas invoca.
pub trait StructureToolkit {
    /// Composición elemental (hidrógenos explícitos incluidos) del SMILES.
    fn formula_counts(&self, smiles: &str) -> Result<ElementCounts, DomainError>;

    /// Huella de longitud fija del SMILES según `method`.
    fn fingerprint(&self, smiles: &str, method: EmbeddingMethod) -> Result<Vec<f32>, DomainError>;
}

impl<T: StructureToolkit + ?Sized> StructureToolkit for &T {
    fn formula_counts(&self, smiles: &str) -> Result<ElementCounts, DomainError> {
        (**self).formula_counts(smiles)
    }

    fn fingerprint(&self, smiles: &str, method: EmbeddingMethod) -> Result<Vec<f32>, DomainError> {
        (**self).fingerprint(smiles, method)
    }
}

/// Concatena `Símbolo + conteo` respetando el orden del mapa. Los conteos de
/// 1 se escriben explícitamente (`C2H6O1`), igual que `formula.formula_string`.
pub fn formula_string(counts: &ElementCounts) -> String {
    counts.iter().map(|(symbol, count)| format!("{symbol}{count}")).collect()
}

/// Toolkit respaldado por RDKit a través de `qm9-engine`.
#[cfg(feature = "rdkit")]
pub struct RdkitToolkit {
    engine: qm9_engine::ChemEngine,
}

#[cfg(feature = "rdkit")]
impl RdkitToolkit {
    /// Inicializa el intérprete embebido y el módulo wrapper de RDKit.
    pub fn init() -> Result<Self, DomainError> {
        Ok(Self { engine: qm9_engine::ChemEngine::init()? })
    }
}

#[cfg(feature = "rdkit")]
impl StructureToolkit for RdkitToolkit {
    fn formula_counts(&self, smiles: &str) -> Result<ElementCounts, DomainError> {
        Ok(self.engine.formula_counts(smiles)?)
    }

    fn fingerprint(&self, smiles: &str, method: EmbeddingMethod) -> Result<Vec<f32>, DomainError> {
        Ok(self.engine.fingerprint(smiles, method.as_str())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formula_string_keeps_map_order_and_unit_counts() {
        let mut counts = ElementCounts::new();
        counts.insert("C".into(), 2);
        counts.insert("H".into(), 6);
        counts.insert("O".into(), 1);
        assert_eq!(formula_string(&counts), "C2H6O1");
    }

    #[test]
    fn formula_string_empty() {
        assert_eq!(formula_string(&ElementCounts::new()), "");
    }
}
