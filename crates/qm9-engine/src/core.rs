use indexmap::IndexMap;
use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyModule};
use std::ffi::CString;
use std::sync::OnceLock;

static RDKIT_MODULE: OnceLock<Py<PyModule>> = OnceLock::new();
pub fn init_python() -> PyResult<()> {
    if RDKIT_MODULE.get().is_some() {
        return Ok(());
    }
    Python::attach(|py| {
        let code = CString::new(include_str!("../python/rdkit_wrapper.py"))?;
        let module = PyModule::from_code(py, code.as_c_str(), c_str!("rdkit_wrapper.py"), c_str!("rdkit_wrapper"))?;
        // Guardamos el módulo en el OnceLock como Py<PyModule>
        RDKIT_MODULE.set(module.unbind()).ok();
        Ok(())
    })
}

fn get_module(py: Python<'_>) -> PyResult<Py<PyModule>> {
    RDKIT_MODULE.get().map(|module| module.clone_ref(py)).ok_or_else(|| {
                                                             PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(
            "init_python() debe llamarse antes de usar el wrapper de RDKit"
        )
                                                         })
}

/// Conteo de átomos por símbolo en orden de Hill, tal como lo devuelve el
/// wrapper (el dict de Python conserva el orden de inserción).
pub fn formula_counts(smiles: &str) -> PyResult<IndexMap<String, u32>> {
    Python::attach(|py| {
        let rdkit_py = get_module(py)?;
        let rdkit = rdkit_py.bind(py);
        let binding = rdkit.getattr("formula_counts")?.call1((smiles,))?;
        let counts = binding.downcast::<PyDict>()?;
        let json_str: String = py.import("json")?.call_method1("dumps", (counts,))?.extract()?;
        let parsed: IndexMap<String, u32> = serde_json::from_str(&json_str).map_err(|e| {
                                                PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Deserialization error: {}", e))
                                            })?;
        Ok(parsed)
    })
}

pub fn fingerprint(smiles: &str, method: &str) -> PyResult<Vec<f32>> {
    Python::attach(|py| {
        let rdkit_py = get_module(py)?;
        let rdkit = rdkit_py.bind(py);
        rdkit.getattr("fingerprint")?.call1((smiles, method))?.extract()
    })
}
