//! Core type bindings for Python.

use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;

use crate::effects::{EffectDefinition, EffectId, EffectKey};
use crate::error::LookupError;
use crate::images::EffectImages;
use crate::resolver::ResolvedEffect;

impl From<LookupError> for PyErr {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::InvalidArgument { .. } => PyTypeError::new_err(err.to_string()),
            LookupError::MalformedInput(_) => PyValueError::new_err(err.to_string()),
        }
    }
}

/// Accept a numeric id, a numeric string, or a name.
///
/// `None` for numbers that can never be ids, such as `-1` or `1.5`.
pub(crate) fn effect_key(effect: &Bound<'_, PyAny>) -> PyResult<Option<EffectKey>> {
    if let Ok(id) = effect.extract::<u32>() {
        return Ok(Some(EffectKey::from(id)));
    }
    if let Ok(n) = effect.extract::<f64>() {
        return Ok(EffectId::from_number(n).map(EffectKey::Id));
    }
    if let Ok(name) = effect.extract::<String>() {
        return Ok(Some(EffectKey::from(name)));
    }
    Err(PyTypeError::new_err("expected an effect id or name"))
}

/// Python wrapper for EffectDefinition.
#[pyclass(name = "Effect", frozen)]
#[derive(Clone, Debug)]
pub struct PyEffect(pub EffectDefinition);

#[pymethods]
impl PyEffect {
    #[getter]
    fn id(&self) -> u32 {
        self.0.id.raw()
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    /// "cosmetic", "weapon" or "taunt".
    #[getter]
    fn r#type(&self) -> &'static str {
        self.0.effect_type.as_str()
    }

    #[getter]
    fn series(&self) -> String {
        self.0.series.clone()
    }

    #[getter]
    fn released(&self) -> Option<String> {
        self.0.metadata.released.clone()
    }

    fn __repr__(&self) -> String {
        format!("Effect(id={}, name={:?})", self.0.id.raw(), self.0.name)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.id.raw())
    }
}

/// Python wrapper for EffectImages.
#[pyclass(name = "EffectImages", frozen)]
#[derive(Clone, Debug)]
pub struct PyEffectImages(pub EffectImages);

#[pymethods]
impl PyEffectImages {
    #[getter]
    fn id(&self) -> u32 {
        self.0.id.raw()
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    #[getter]
    fn small(&self) -> String {
        self.0.images.small.clone()
    }

    #[getter]
    fn medium(&self) -> String {
        self.0.images.medium.clone()
    }

    #[getter]
    fn large(&self) -> String {
        self.0.images.large.clone()
    }

    fn __repr__(&self) -> String {
        format!("EffectImages(id={}, name={:?})", self.0.id.raw(), self.0.name)
    }
}

/// Python wrapper for ResolvedEffect.
#[pyclass(name = "ResolvedEffect", frozen)]
#[derive(Clone, Debug)]
pub struct PyResolvedEffect(pub ResolvedEffect);

#[pymethods]
impl PyResolvedEffect {
    #[getter]
    fn id(&self) -> u32 {
        self.0.id.raw()
    }

    #[getter]
    fn name(&self) -> String {
        self.0.name.clone()
    }

    #[getter]
    fn standardized_name(&self) -> String {
        self.0.standardized_name.clone()
    }

    #[getter]
    fn images(&self) -> PyEffectImages {
        PyEffectImages(EffectImages {
            id: self.0.id,
            name: self.0.name.clone(),
            images: self.0.images.clone(),
        })
    }

    fn __repr__(&self) -> String {
        format!(
            "ResolvedEffect(id={}, standardized_name={:?})",
            self.0.id.raw(),
            self.0.standardized_name
        )
    }
}
