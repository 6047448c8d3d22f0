use once_cell::unsync::OnceCell;
use qm9_domain::{DomainError, ElementCounts, EmbeddingMethod, RdkitToolkit, StructureToolkit};
use tracing::info;

/// Inicializa RDKit solo si una consulta llega a necesitarlo.
#[derive(Default)]
pub struct LazyRdkit {
    inner: OnceCell<RdkitToolkit>,
}

impl LazyRdkit {
    fn get(&self) -> Result<&RdkitToolkit, DomainError> {
        self.inner.get_or_try_init(|| {
                      info!("Inicializando RDKit");
                      RdkitToolkit::init()
                  })
    }
}

impl StructureToolkit for LazyRdkit {
    fn formula_counts(&self, smiles: &str) -> Result<ElementCounts, DomainError> {
        self.get()?.formula_counts(smiles)
    }

    fn fingerprint(&self, smiles: &str, method: EmbeddingMethod) -> Result<Vec<f32>, DomainError> {
        self.get()?.fingerprint(smiles, method)
    }
}
