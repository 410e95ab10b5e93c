use crate::{
    catalog::catalog,
    cleanup::clean,
    options::{CleaningOptions, TextCase},
    report::{CleanupResult, MatchRecord},
    visualize::visualize as render_markers,
};
use pyo3::prelude::*;

#[pyclass(name = "MatchRecord", get_all)]
#[derive(Clone)]
struct PyMatchRecord {
    codepoint: String,
    label: String,
    hex_code: String,
    occurrence_count: usize,
}

impl From<&MatchRecord> for PyMatchRecord {
    fn from(m: &MatchRecord) -> Self {
        Self {
            codepoint: m.codepoint.to_string(),
            label: m.label.to_string(),
            hex_code: m.hex_code.clone(),
            occurrence_count: m.occurrence_count,
        }
    }
}

#[pyclass(name = "CleanupResult", get_all)]
#[derive(Clone)]
struct PyCleanupResult {
    cleaned_text: String,
    matches: Vec<PyMatchRecord>,
    total_removed: usize,
}

impl From<CleanupResult> for PyCleanupResult {
    fn from(r: CleanupResult) -> Self {
        Self {
            matches: r.matches.iter().map(PyMatchRecord::from).collect(),
            cleaned_text: r.cleaned_text,
            total_removed: r.total_removed,
        }
    }
}

fn parse_case(case: &str) -> PyResult<TextCase> {
    match case {
        "original" => Ok(TextCase::Original),
        "lowercase" => Ok(TextCase::Lowercase),
        "uppercase" => Ok(TextCase::Uppercase),
        "sentence" | "sentence_case" => Ok(TextCase::SentenceCase),
        other => Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "unknown text case '{other}'"
        ))),
    }
}

#[pyfunction(name = "clean")]
#[pyo3(signature = (
    text,
    text_case="original",
    remove_extra_spaces=true,
    remove_all_spaces=false,
    remove_line_breaks=false,
    normalize_line_breaks=false,
    remove_numbers=false,
    remove_punctuation=false,
    remove_special_chars=false,
    remove_non_ascii=false,
))]
#[allow(clippy::too_many_arguments)]
fn py_clean(
    py: Python<'_>,
    text: &str,
    text_case: &str,
    remove_extra_spaces: bool,
    remove_all_spaces: bool,
    remove_line_breaks: bool,
    normalize_line_breaks: bool,
    remove_numbers: bool,
    remove_punctuation: bool,
    remove_special_chars: bool,
    remove_non_ascii: bool,
) -> PyResult<PyCleanupResult> {
    let options = CleaningOptions {
        text_case: parse_case(text_case)?,
        remove_extra_spaces,
        remove_all_spaces,
        remove_line_breaks,
        normalize_line_breaks,
        remove_numbers,
        remove_punctuation,
        remove_special_chars,
        remove_non_ascii,
    };
    let text = text.to_owned();
    let result = py.allow_threads(move || clean(&text, &options));
    Ok(result.into())
}

#[pyfunction]
fn visualize(text: &str) -> String {
    render_markers(text)
}

#[pyfunction(name = "catalog")]
fn py_catalog() -> Vec<(String, String, String)> {
    catalog()
        .iter()
        .map(|e| (e.hex_code(), e.label.to_string(), e.abbreviation.to_string()))
        .collect()
}

#[pymodule]
fn _uncloak(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatchRecord>()?;
    m.add_class::<PyCleanupResult>()?;
    m.add_function(wrap_pyfunction!(py_clean, m)?)?;
    m.add_function(wrap_pyfunction!(visualize, m)?)?;
    m.add_function(wrap_pyfunction!(py_catalog, m)?)?;

    Ok(())
}
