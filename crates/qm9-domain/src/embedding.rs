//! Selectores cerrados para la búsqueda por similitud: método de embedding
//! (qué huella molecular comparar) y métrica de distancia (cómo ordenar).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::DomainError;

/// Método de huella molecular. Cada variante corresponde a una columna de
/// huella precalculada en la tabla `molecule`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingMethod {
    /// Huella circular (Morgan, radio 3, 1024 bits).
    Morgan,
    /// Huella de caminos de RDKit.
    Rdk,
    AtomPair,
    Torsion,
}

impl EmbeddingMethod {
    pub const ALL: [EmbeddingMethod; 4] = [Self::Morgan, Self::Rdk, Self::AtomPair, Self::Torsion];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morgan => "morgan",
            Self::Rdk => "rdk",
            Self::AtomPair => "atompair",
            Self::Torsion => "torsion",
        }
    }
}

impl FromStr for EmbeddingMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter()
                 .find(|m| m.as_str() == s)
                 .ok_or_else(|| DomainError::InvalidArgument(format!("Invalid embedding method: {s}")))
    }
}

impl fmt::Display for EmbeddingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Métrica con la que se ordena el resultado frente a la huella de consulta.
///
/// `InnerProduct` es una similitud: el operador de pgvector devuelve el
/// producto interno negado, por lo que el orden ascendente ya coloca primero
/// a los más similares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    L2,
    InnerProduct,
    Cosine,
}

impl DistanceMetric {
    pub const ALL: [DistanceMetric; 3] = [Self::L2, Self::InnerProduct, Self::Cosine];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L2 => "l2",
            Self::InnerProduct => "inner_product",
            Self::Cosine => "cosine",
        }
    }

    /// Interpreta el nombre recibido en el filtro. Un nombre desconocido no es
    /// un error: la búsqueda simplemente no se reordena.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
