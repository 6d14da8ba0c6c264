//! Shared key generation for storage backends.
//!
//! Key format: `documents/{company_id}/{token}.{ext}` where the token is a
//! fresh UUID and the extension comes from the submitted filename.

use uuid::Uuid;

/// Derive a unique storage key for a document of the given company.
///
/// The original filename only contributes its extension; the key itself is
/// collision-free thanks to the random token.
pub fn document_key(company_id: Uuid, filename: &str) -> String {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| "bin".to_string());
    format!("documents/{}/{}.{}", company_id, Uuid::new_v4(), extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_key_scopes_by_company_and_keeps_extension() {
        let company_id = Uuid::new_v4();
        let key = document_key(company_id, "Invoice.PDF");
        assert!(key.starts_with(&format!("documents/{}/", company_id)));
        assert!(key.ends_with(".pdf"));
    }

    #[test]
    fn test_document_key_defaults_extension() {
        let key = document_key(Uuid::new_v4(), "no-extension");
        assert!(key.ends_with(".bin"));
    }

    #[test]
    fn test_document_key_is_unique_per_call() {
        let company_id = Uuid::new_v4();
        assert_ne!(
            document_key(company_id, "a.pdf"),
            document_key(company_id, "a.pdf")
        );
    }
}
