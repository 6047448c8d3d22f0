//! Objetos de valor que describen una búsqueda de snapshots.
//!
//! Los filtros llegan como JSON desde clientes que pueden ser más nuevos que
//! este servicio; por eso todos los grupos son opcionales y la capa de
//! consultas ignora columnas o elementos que no reconoce.

use serde::{Deserialize, Serialize};

use crate::embedding::{DistanceMetric, EmbeddingMethod};
use crate::DomainError;

/// Número de átomos requerido de un elemento. Un `count` negativo significa
/// "el elemento está presente" (count > 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementFilter {
    pub element: String,
    pub count: i32,
}

/// Rango cerrado `[min, max]` sobre una columna numérica.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericFilter {
    pub column: String,
    pub min: f64,
    pub max: f64,
}

/// Pertenencia de una columna categórica a un conjunto de valores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFilter {
    pub column: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoolFilter {
    pub column: String,
    pub value: bool,
}

fn default_method() -> String {
    EmbeddingMethod::Morgan.as_str().to_string()
}

fn default_distance() -> String {
    DistanceMetric::L2.as_str().to_string()
}

/// Conjunto completo de criterios de búsqueda.
///
/// `method` y `distance` se guardan como texto tal como llegan: el método se
/// valida al construir la consulta (un método desconocido aborta la
/// búsqueda) y una distancia desconocida simplemente no reordena.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotFilter {
    #[serde(default)]
    pub element_filters: Vec<ElementFilter>,
    #[serde(default)]
    pub numeric_filters: Vec<NumericFilter>,
    #[serde(default)]
    pub class_filters: Vec<ClassFilter>,
    #[serde(default)]
    pub bool_filters: Vec<BoolFilter>,
    /// SMILES de consulta para ordenar por similitud.
    #[serde(default)]
    pub smiles: Option<String>,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default = "default_distance")]
    pub distance: String,
}

impl Default for SnapshotFilter {
    fn default() -> Self {
        Self { element_filters: Vec::new(),
               numeric_filters: Vec::new(),
               class_filters: Vec::new(),
               bool_filters: Vec::new(),
               smiles: None,
               method: default_method(),
               distance: default_distance() }
    }
}

impl SnapshotFilter {
    pub fn with_element(mut self, element: &str, count: i32) -> Self {
        self.element_filters.push(ElementFilter { element: element.to_string(), count });
        self
    }

    pub fn with_range(mut self, column: &str, min: f64, max: f64) -> Self {
        self.numeric_filters.push(NumericFilter { column: column.to_string(), min, max });
        self
    }

    pub fn with_class<I, S>(mut self, column: &str, values: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.class_filters.push(ClassFilter { column: column.to_string(),
                                              values: values.into_iter().map(Into::into).collect() });
        self
    }

    pub fn with_bool(mut self, column: &str, value: bool) -> Self {
        self.bool_filters.push(BoolFilter { column: column.to_string(), value });
        self
    }

    pub fn with_similarity(mut self, smiles: &str, method: &str, distance: &str) -> Self {
        self.smiles = Some(smiles.to_string());
        self.method = method.to_string();
        self.distance = distance.to_string();
        self
    }

    /// Método de embedding solicitado; error `InvalidArgument` si no es uno de
    /// los soportados.
    pub fn embedding_method(&self) -> Result<EmbeddingMethod, DomainError> {
        self.method.parse()
    }

    pub fn distance_metric(&self) -> Option<DistanceMetric> {
        DistanceMetric::parse(&self.distance)
    }

    /// Lee un filtro desde JSON.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Ventana de paginación (`OFFSET skip LIMIT limit`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub skip: i64,
    pub limit: i64,
}

impl Page {
    pub const DEFAULT_LIMIT: i64 = 100;

    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }

    /// Página siguiente con el mismo tamaño.
    pub fn next(&self) -> Self {
        Self { skip: self.skip.saturating_add(self.limit), limit: self.limit }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self { skip: 0, limit: Self::DEFAULT_LIMIT }
    }
}

/// Conteo agregado de filas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCount {
    pub count: i64,
}
