// qm9-domain library entry point
pub mod embedding;
pub mod error;
pub mod filter;
pub mod periodic_table;
pub mod toolkit;
pub use embedding::{DistanceMetric, EmbeddingMethod};
pub use error::DomainError;
pub use filter::{BoolFilter, ClassFilter, ElementFilter, ItemCount, NumericFilter, Page, SnapshotFilter};
#[cfg(feature = "rdkit")]
pub use toolkit::RdkitToolkit;
pub use toolkit::{formula_string, ElementCounts, StructureToolkit};
