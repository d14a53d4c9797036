//! Python bindings for tribloom using PyO3

use crate::bloom::BloomFilter;
use pyo3::prelude::*;

/// Python wrapper for BloomFilter
#[pyclass(name = "BloomFilter")]
struct PyBloomFilter {
    inner: BloomFilter,
}

#[pymethods]
impl PyBloomFilter {
    /// Sizes arrive as Python ints, so negatives go through the signed path
    #[new]
    fn new(size: i64) -> PyResult<Self> {
        let filter = BloomFilter::try_from(size)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;

        Ok(PyBloomFilter { inner: filter })
    }

    fn add(&mut self, key: &str) {
        self.inner.add(key);
    }

    fn contains(&self, key: &str) -> bool {
        self.inner.contains(key)
    }

    fn __contains__(&self, key: &str) -> bool {
        self.inner.contains(key)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn positions(&self, key: &str) -> Vec<u32> {
        self.inner.positions(key).to_vec()
    }

    fn count_ones(&self) -> usize {
        self.inner.count_ones()
    }

    fn load_factor(&self) -> f64 {
        self.inner.load_factor()
    }

    fn estimated_fpr(&self) -> f64 {
        self.inner.estimated_fpr()
    }

    fn __len__(&self) -> usize {
        self.inner.size() as usize
    }

    fn __repr__(&self) -> String {
        format!(
            "BloomFilter(size={}, bits_set={})",
            self.inner.size(),
            self.inner.count_ones()
        )
    }

    fn __str__(&self) -> String {
        self.inner.stats().to_string()
    }
}

/// FNV-style hash of a string
#[pyfunction]
fn fnv_hash(key: &str) -> u32 {
    crate::hash::fnv_hash(key)
}

/// Murmur3-style hash of a string
#[pyfunction]
fn murmur_hash3(key: &str) -> u32 {
    crate::hash::murmur_hash3(key)
}

/// Python module definition
#[pymodule]
fn tribloom(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyBloomFilter>()?;

    m.add_function(wrap_pyfunction!(fnv_hash, m)?)?;
    m.add_function(wrap_pyfunction!(murmur_hash3, m)?)?;

    // Add module constants
    m.add("NUM_POSITIONS", crate::bloom::NUM_POSITIONS)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
