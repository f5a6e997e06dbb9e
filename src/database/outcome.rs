//! Interpretation of the messages returned by mutating stored functions.
//!
//! The `_ufs`/`_uft` functions report success or failure as a Spanish
//! sentence ("Estudiante registrado exitosamente", "La cédula ya existe",
//! ...). The service layer turns that sentence into an [`Outcome`] by
//! substring matching on a normalized copy of it.

use serde::Serialize;

/// Result category of a stored-function message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Success,
    NotFound,
    Forbidden,
    Conflict,
    InvalidState,
    Rejected,
}

const NOT_FOUND_MARKERS: &[&str] = &["no existe", "no encontrad"];
const FORBIDDEN_MARKERS: &[&str] = &["no pertenece", "no autorizad", "sin permiso"];
const CONFLICT_MARKERS: &[&str] = &["ya existe", "ya esta registrad", "duplicad", "ya tiene"];
const INVALID_STATE_MARKERS: &[&str] = &[
    "no se puede",
    "no puede",
    "no permitid",
    "ya fue",
    "ya se encuentra",
];
const SUCCESS_MARKERS: &[&str] = &["exitosamente", "correctamente", "con exito"];

/// Classify a function message. Failure markers win over success markers.
pub fn classify(message: &str) -> Outcome {
    let normalized = normalize(message);
    let has = |markers: &[&str]| markers.iter().any(|m| normalized.contains(m));

    if has(NOT_FOUND_MARKERS) {
        Outcome::NotFound
    } else if has(FORBIDDEN_MARKERS) {
        Outcome::Forbidden
    } else if has(CONFLICT_MARKERS) {
        Outcome::Conflict
    } else if has(INVALID_STATE_MARKERS) {
        Outcome::InvalidState
    } else if has(SUCCESS_MARKERS) {
        Outcome::Success
    } else {
        Outcome::Rejected
    }
}

/// Lower-case, strip Spanish accents and collapse whitespace.
fn normalize(message: &str) -> String {
    let folded: String = message
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' => 'a',
            'é' | 'è' | 'ë' => 'e',
            'í' | 'ì' | 'ï' => 'i',
            'ó' | 'ò' | 'ö' => 'o',
            'ú' | 'ù' | 'ü' => 'u',
            other => other,
        })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
