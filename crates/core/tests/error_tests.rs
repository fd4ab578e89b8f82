// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use metal_worth_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn invalid_karat() {
        let err = CoreError::InvalidKarat(30.0);
        assert_eq!(err.to_string(), "Please enter a karat between 1 and 24.");
    }

    #[test]
    fn invalid_grams() {
        let err = CoreError::InvalidGrams(0.0);
        assert_eq!(err.to_string(), "Please enter grams > 0.");
    }

    #[test]
    fn invalid_edit_is_generic() {
        assert_eq!(CoreError::InvalidEdit.to_string(), "Invalid edit. No changes saved.");
    }

    #[test]
    fn unknown_metal() {
        let err = CoreError::UnknownMetal("Tin".into());
        assert_eq!(
            err.to_string(),
            "Unknown metal: Tin. Supported: Gold, Silver, Platinum, Palladium"
        );
    }

    #[test]
    fn serialization() {
        let err = CoreError::Serialization("mw_items_v1: key must be a string".into());
        assert_eq!(
            err.to_string(),
            "Serialization error: mw_items_v1: key must be a string"
        );
    }

    #[test]
    fn item_not_found() {
        assert_eq!(
            CoreError::ItemNotFound(4).to_string(),
            "Item not found at position 4"
        );
    }

    #[test]
    fn api() {
        let err = CoreError::Api {
            provider: "metalpriceapi.com".into(),
            message: "API error".into(),
        };
        assert_eq!(err.to_string(), "API error (metalpriceapi.com): API error");
    }

    #[test]
    fn missing_api_key() {
        let err = CoreError::MissingApiKey("metalpriceapi.com".into());
        assert_eq!(err.to_string(), "No API key configured for metalpriceapi.com");
    }

    #[test]
    fn rate_not_available() {
        let err = CoreError::RateNotAvailable {
            provider: "p".into(),
            symbol: "USDXAU".into(),
        };
        assert_eq!(err.to_string(), "Rate USDXAU not available from p");
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CoreError = io.into();
        assert!(matches!(err, CoreError::Storage(ref m) if m.contains("denied")));
    }

    #[test]
    fn from_serde_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }
}
