//! Python bindings for unusual-effects.
//!
//! # Quick Start
//!
//! ```python
//! import unusual_effects as ue
//!
//! ue.find_effect_by_name("Sunbeams")      # 17
//! ue.find_effect_by_name("Showstopper")   # [3001, 3002]
//! ue.find_effect_by_id(14)                # "Scorching Flames"
//! ue.get_effect_images("Nebula").medium   # ".../99_188x188.png"
//!
//! effect = ue.get_effect_from_json(json.dumps(item))
//! ```

use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;

use crate::effects::{EffectCatalog, EffectId, EffectIds, EffectType};
use crate::resolver::EffectResolver;

mod py_core;

pub use py_core::*;

fn catalog() -> &'static EffectCatalog {
    EffectCatalog::bundled()
}

/// True if the id or name is a known Unusual effect.
#[pyfunction]
fn is_unusual(effect: &Bound<'_, PyAny>) -> PyResult<bool> {
    Ok(effect_key(effect)?.is_some_and(|key| catalog().is_unusual(key)))
}

/// Effect id for a name, a list of ids for team variants, or None.
#[pyfunction]
fn find_effect_by_name(py: Python<'_>, name: &Bound<'_, PyAny>) -> PyResult<Option<PyObject>> {
    let name: String = name
        .extract()
        .map_err(|_| PyTypeError::new_err("expected an effect name"))?;
    Ok(catalog().find_effect_by_name(&name).map(|ids| match ids {
        EffectIds::Single(id) => id.raw().into_py(py),
        EffectIds::Variants(ids) => ids
            .iter()
            .map(EffectId::raw)
            .collect::<Vec<_>>()
            .into_py(py),
    }))
}

/// Effect name for an id (number or numeric string), or None.
///
/// Numbers that can never be ids (negative, fractional, too large) give None.
#[pyfunction]
fn find_effect_by_id(id: &Bound<'_, PyAny>) -> PyResult<Option<String>> {
    let id: Option<EffectId> = if let Ok(id) = id.extract::<u32>() {
        Some(EffectId::new(id))
    } else if let Ok(n) = id.extract::<f64>() {
        EffectId::from_number(n)
    } else {
        let text: String = id
            .extract()
            .map_err(|_| PyTypeError::new_err("expected an effect id"))?;
        EffectId::from_text(&text)?
    };
    Ok(id
        .and_then(|id| catalog().find_effect_by_id(id))
        .map(str::to_string))
}

/// Particle image URLs for an id or name, or None.
#[pyfunction]
fn get_effect_images(effect: &Bound<'_, PyAny>) -> PyResult<Option<PyEffectImages>> {
    let resolver = EffectResolver::new(catalog());
    Ok(effect_key(effect)?
        .and_then(|key| resolver.build_image_set(key))
        .map(PyEffectImages))
}

/// Effect on an economy item serialized as JSON, or None.
#[pyfunction]
fn get_effect_from_json(item_json: &str) -> PyResult<Option<PyResolvedEffect>> {
    let item: serde_json::Value =
        serde_json::from_str(item_json).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let resolved = EffectResolver::new(catalog()).extract_effect_from_value(&item)?;
    Ok(resolved.map(PyResolvedEffect))
}

#[pyfunction]
fn get_all_effects() -> Vec<PyEffect> {
    catalog().iter().cloned().map(PyEffect).collect()
}

#[pyfunction]
fn get_effects_by_type(effect_type: &str) -> PyResult<Vec<PyEffect>> {
    let effect_type: EffectType = effect_type.parse()?;
    Ok(catalog()
        .effects_by_type(effect_type)
        .cloned()
        .map(PyEffect)
        .collect())
}

#[pyfunction]
fn get_effects_by_series(series: &str) -> Vec<PyEffect> {
    catalog()
        .effects_by_series(series)
        .cloned()
        .map(PyEffect)
        .collect()
}

/// unusual_effects: Team Fortress 2 Unusual effect lookups.
#[pymodule]
fn unusual_effects(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEffect>()?;
    m.add_class::<PyEffectImages>()?;
    m.add_class::<PyResolvedEffect>()?;

    m.add_function(wrap_pyfunction!(is_unusual, m)?)?;
    m.add_function(wrap_pyfunction!(find_effect_by_name, m)?)?;
    m.add_function(wrap_pyfunction!(find_effect_by_id, m)?)?;
    m.add_function(wrap_pyfunction!(get_effect_images, m)?)?;
    m.add_function(wrap_pyfunction!(get_effect_from_json, m)?)?;
    m.add_function(wrap_pyfunction!(get_all_effects, m)?)?;
    m.add_function(wrap_pyfunction!(get_effects_by_type, m)?)?;
    m.add_function(wrap_pyfunction!(get_effects_by_series, m)?)?;

    Ok(())
}
