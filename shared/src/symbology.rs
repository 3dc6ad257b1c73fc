use serde::{Deserialize, Serialize};

/// A barcode encoding scheme with its own alphabet and length rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbology {
    Ean8,
    Ean13,
    Ean5,
    QrCode,
}

impl Symbology {
    pub fn key(self) -> &'static str {
        self.descriptor().key
    }

    pub fn descriptor(self) -> &'static SymbologyDescriptor {
        // DESCRIPTORS is ordered to match the enum; keep a lookup anyway so
        // reordering the table stays harmless.
        DESCRIPTORS
            .iter()
            .find(|d| d.symbology == self)
            .unwrap_or(&DESCRIPTORS[0])
    }
}

impl std::fmt::Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Character set a symbology accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    /// Only `0-9`; everything else is stripped during normalization.
    Digits,
    /// Arbitrary text, passed through unchanged.
    FreeText,
}

/// Registry entry describing a symbology's validation and rendering
/// requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbologyDescriptor {
    pub symbology: Symbology,
    pub key: &'static str,
    pub alphabet: Alphabet,
    /// Normalization target for symbologies whose payload is always exactly
    /// N digits. EAN-8/EAN-13 deliberately carry `None`: their 7-vs-8 and
    /// 12-vs-13 digit semantics are the encoder's call, so a short code
    /// surfaces as a render failure instead of being silently padded.
    pub fixed_length: Option<usize>,
    /// Payload used when the request carries no code at all.
    pub default_code: &'static str,
}

const DESCRIPTORS: &[SymbologyDescriptor] = &[
    SymbologyDescriptor {
        symbology: Symbology::Ean8,
        key: "ean8",
        alphabet: Alphabet::Digits,
        fixed_length: None,
        default_code: "1234567",
    },
    SymbologyDescriptor {
        symbology: Symbology::Ean13,
        key: "ean13",
        alphabet: Alphabet::Digits,
        fixed_length: None,
        default_code: "123456789012",
    },
    SymbologyDescriptor {
        symbology: Symbology::Ean5,
        key: "ean5",
        alphabet: Alphabet::Digits,
        fixed_length: Some(5),
        default_code: "12345",
    },
    SymbologyDescriptor {
        symbology: Symbology::QrCode,
        key: "qrcode",
        alphabet: Alphabet::FreeText,
        fixed_length: None,
        default_code: "1234567",
    },
];

/// Read-only map from `code_type` keys to symbology descriptors.
///
/// Built once at startup; unknown keys resolve to the configured default
/// rather than failing, so a bad `code_type` by itself never rejects a
/// request.
#[derive(Debug, Clone)]
pub struct SymbologyRegistry {
    default: Symbology,
}

impl SymbologyRegistry {
    pub fn new() -> Self {
        Self {
            default: Symbology::Ean8,
        }
    }

    pub fn with_default(key: &str) -> Self {
        let default = lookup(key).map_or(Symbology::Ean8, |d| d.symbology);
        Self { default }
    }

    /// Default symbology from `BARCODE_DEFAULT_SYMBOLOGY`, falling back to
    /// EAN-8 when unset or unknown.
    pub fn from_env() -> Self {
        match std::env::var("BARCODE_DEFAULT_SYMBOLOGY") {
            Ok(key) => Self::with_default(&key),
            Err(_) => Self::new(),
        }
    }

    pub fn default_key(&self) -> &'static str {
        self.default.key()
    }

    pub fn resolve(&self, code_type: Option<&str>) -> &'static SymbologyDescriptor {
        code_type
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .and_then(|key| lookup(&key.to_ascii_lowercase()))
            .unwrap_or_else(|| self.default.descriptor())
    }

    pub fn keys() -> impl Iterator<Item = &'static str> {
        DESCRIPTORS.iter().map(|d| d.key)
    }
}

impl Default for SymbologyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup(key: &str) -> Option<&'static SymbologyDescriptor> {
    DESCRIPTORS.iter().find(|d| d.key == key)
}

/// Per-symbology payload cleanup.
///
/// Digit symbologies drop every non-digit character; fixed-length ones are
/// then left-padded with zeros and truncated to their last N characters, so
/// oversupplied codes keep the low-order digits. Free-text payloads pass
/// through unchanged. An absent or empty code uses the descriptor default.
pub fn normalize_code(descriptor: &SymbologyDescriptor, raw: Option<&str>) -> String {
    let raw = raw
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .unwrap_or(descriptor.default_code);

    match descriptor.alphabet {
        Alphabet::FreeText => raw.to_string(),
        Alphabet::Digits => {
            let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
            match descriptor.fixed_length {
                None => digits,
                Some(len) => {
                    let padded = format!("{digits:0>len$}");
                    padded[padded.len() - len..].to_string()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_knows_all_symbology_keys() {
        let keys: Vec<_> = SymbologyRegistry::keys().collect();
        assert_eq!(keys, ["ean8", "ean13", "ean5", "qrcode"]);
    }

    #[test]
    fn known_keys_resolve() {
        let registry = SymbologyRegistry::new();
        assert_eq!(
            registry.resolve(Some("ean13")).symbology,
            Symbology::Ean13
        );
        assert_eq!(
            registry.resolve(Some("qrcode")).symbology,
            Symbology::QrCode
        );
    }

    #[test]
    fn unknown_and_missing_keys_fall_back_to_default() {
        let registry = SymbologyRegistry::new();
        assert_eq!(registry.resolve(None).symbology, Symbology::Ean8);
        assert_eq!(registry.resolve(Some("")).symbology, Symbology::Ean8);
        assert_eq!(
            registry.resolve(Some("datamatrix")).symbology,
            Symbology::Ean8
        );
    }

    #[test]
    fn resolution_is_case_insensitive() {
        let registry = SymbologyRegistry::new();
        assert_eq!(registry.resolve(Some("EAN13")).symbology, Symbology::Ean13);
    }

    #[test]
    fn configured_default_wins() {
        let registry = SymbologyRegistry::with_default("qrcode");
        assert_eq!(registry.resolve(None).symbology, Symbology::QrCode);
        assert_eq!(registry.resolve(Some("nope")).symbology, Symbology::QrCode);
    }

    #[test]
    fn bad_configured_default_falls_back_to_ean8() {
        let registry = SymbologyRegistry::with_default("pdf417");
        assert_eq!(registry.resolve(None).symbology, Symbology::Ean8);
    }

    #[test]
    fn digit_normalization_strips_non_digits() {
        let desc = Symbology::Ean8.descriptor();
        assert_eq!(normalize_code(desc, Some("12-34 56a7")), "1234567");
        assert_eq!(normalize_code(desc, Some("abc")), "");
    }

    #[test]
    fn fixed_length_pads_short_codes_with_leading_zeros() {
        let desc = Symbology::Ean5.descriptor();
        assert_eq!(normalize_code(desc, Some("123")), "00123");
    }

    #[test]
    fn fixed_length_keeps_low_order_digits_of_long_codes() {
        let desc = Symbology::Ean5.descriptor();
        assert_eq!(normalize_code(desc, Some("1234567")), "34567");
    }

    #[test]
    fn free_text_passes_through() {
        let desc = Symbology::QrCode.descriptor();
        assert_eq!(
            normalize_code(desc, Some("https://example.com?a=1")),
            "https://example.com?a=1"
        );
    }

    #[test]
    fn missing_code_uses_descriptor_default() {
        assert_eq!(
            normalize_code(Symbology::Ean8.descriptor(), None),
            "1234567"
        );
        assert_eq!(normalize_code(Symbology::Ean8.descriptor(), Some("  ")), "1234567");
    }
}
