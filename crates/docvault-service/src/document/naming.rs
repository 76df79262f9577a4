//! File name sanitization and the storage path scheme.

use docvault_core::types::OwnerId;

/// Sanitize an uploaded file name for storage.
///
/// Every character outside `[A-Za-z0-9_.-]` becomes `_`, so the result is
/// always safe as a path segment regardless of what the browser sent.
/// Characters are replaced, never dropped, which keeps the name length
/// recognizable to the uploader.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Build the byte-store key for a new upload:
/// `<category>/<owner_id>/<timestamp_micros>_<display_name>`.
///
/// The creation timestamp prefix keeps repeated uploads of identically
/// named files from colliding; microsecond resolution covers back-to-back
/// uploads by the same owner.
pub fn storage_path(
    category: &str,
    owner_id: OwnerId,
    timestamp_micros: i64,
    display_name: &str,
) -> String {
    format!("{category}/{owner_id}/{timestamp_micros}_{display_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_keeps_allowed_characters() {
        assert_eq!(sanitize_file_name("report-2024_v2.pdf"), "report-2024_v2.pdf");
        assert_eq!(sanitize_file_name("ABC.xyz"), "ABC.xyz");
    }

    #[test]
    fn test_sanitize_replaces_disallowed_characters() {
        assert_eq!(sanitize_file_name("annual report.pdf"), "annual_report.pdf");
        assert_eq!(sanitize_file_name("cv (final).doc"), "cv__final_.doc");
        assert_eq!(sanitize_file_name("a/b\\c.txt"), "a_b_c.txt");
        assert_eq!(sanitize_file_name("naïve.txt"), "na_ve.txt");
    }

    #[test]
    fn test_sanitize_preserves_length() {
        let input = "résumé §1.pdf";
        assert_eq!(sanitize_file_name(input).chars().count(), input.chars().count());
    }

    #[test]
    fn test_storage_path_layout() {
        let owner = OwnerId::new();
        let path = storage_path("cv", owner, 1_700_000_000_000_000, "cv.pdf");
        assert_eq!(path, format!("cv/{owner}/1700000000000000_cv.pdf"));
    }
}
