//! Canonicalization of vendor-prefixed relationship-type codes.

/// Strips a vendor prefix from a relationship-type code.
///
/// Vendor codes encode the canonical type as a suffix after the last
/// underscore (`PR_FS` reduces to `FS`); codes without a separator pass
/// through unchanged, as does an empty string. The expected vocabulary is
/// FS, SS, FF, SF, but membership is not enforced here: any trailing token
/// is returned, and consumers treat unrecognized types as advisory.
pub fn canonical_rel_type(raw: &str) -> &str {
    match raw.rsplit_once('_') {
        Some((_, suffix)) => suffix,
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_vendor_prefix() {
        assert_eq!(canonical_rel_type("PR_FS"), "FS");
        assert_eq!(canonical_rel_type("PRED_SS"), "SS");
    }

    #[test]
    fn unprefixed_codes_are_unchanged() {
        assert_eq!(canonical_rel_type("FS"), "FS");
        assert_eq!(canonical_rel_type(""), "");
    }

    #[test]
    fn only_the_last_separator_counts() {
        assert_eq!(canonical_rel_type("VENDOR_PR_FF"), "FF");
    }

    #[test]
    fn unrecognized_suffixes_pass_through() {
        assert_eq!(canonical_rel_type("PR_XX"), "XX");
    }
}
