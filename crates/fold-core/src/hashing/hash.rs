use fold_domain::JobDocument;
use sha2::{Digest, Sha256};

use super::canonical_json::to_canonical_json;
use crate::errors::CoreError;

/// SHA-256 en hex.
pub fn hash_str(input: &str) -> String {
    format!("{:x}", Sha256::digest(input.as_bytes()))
}

/// Huella del documento: SHA-256 de su JSON canónico. No depende del orden de
/// claves ni de la indentación.
pub fn document_fingerprint(doc: &JobDocument) -> Result<String, CoreError> {
    let value = serde_json::to_value(doc)?;
    Ok(hash_str(&to_canonical_json(&value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_str_is_sha256_hex() {
        assert_eq!(hash_str("abc"), "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
    }

    #[test]
    fn test_fingerprint_changes_with_content() {
        let a = JobDocument::new("a", vec![1], vec![]);
        let b = JobDocument::new("a", vec![2], vec![]);
        assert_eq!(document_fingerprint(&a).unwrap(), document_fingerprint(&a.clone()).unwrap());
        assert_ne!(document_fingerprint(&a).unwrap(), document_fingerprint(&b).unwrap());
    }
}
