use crate::error::MarkerError;
use std::collections::HashMap;
use std::path::Path;

/// Generate a Rust identifier from a marker file path
/// (e.g., `markers/sticky-note.png` → `STICKY_NOTE`).
pub fn generate_identifier(path: &Path) -> Result<String, MarkerError> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| MarkerError::Validation {
            path: path.to_path_buf(),
            message: "invalid filename".to_string(),
        })?;

    Ok(sanitize_to_rust_ident(stem).to_uppercase())
}

/// Check a list of source paths for identifier collisions.
///
/// Returns `Ok(())` if no collisions, or `Err(IdentifierCollision)` with
/// the first collision found.
pub fn check_collisions(paths: &[&Path]) -> Result<(), MarkerError> {
    let mut seen: HashMap<String, &Path> = HashMap::new();

    for &path in paths {
        let ident = generate_identifier(path)?;
        if let Some(&previous) = seen.get(&ident) {
            return Err(MarkerError::IdentifierCollision {
                identifier: ident,
                path_a: previous.to_path_buf(),
                path_b: path.to_path_buf(),
            });
        }
        seen.insert(ident, path);
    }

    Ok(())
}

/// Sanitize a string to a valid Rust identifier component.
fn sanitize_to_rust_ident(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for (i, ch) in s.chars().enumerate() {
        if i == 0 {
            if ch.is_alphabetic() || ch == '_' {
                result.push(ch);
            } else if ch.is_numeric() {
                result.push('_');
                result.push(ch);
            } else {
                result.push('_');
            }
        } else if ch.is_alphanumeric() || ch == '_' {
            result.push(ch);
        } else {
            result.push('_');
        }
    }

    if result.is_empty() {
        result.push_str("MARKER");
    }

    result
}
