//! Request-time verification of signed asset URLs.

use super::{signature::SigningKey, signer::{unix_now, UrlSigner}};
use crate::{Error, Result};

/// Verify the `expires` / `signature` query parameters for an asset path.
///
/// The canonical input must match issuance exactly: the public asset path
/// as requested under `/hls/`, concatenated with the decimal expiry.
pub fn verify_request(
    key: &SigningKey,
    asset_path: &str,
    expires: Option<&str>,
    signature: Option<&str>,
) -> Result<()> {
    verify_request_at(key, asset_path, expires, signature, unix_now())
}

/// Verification with an injected clock.
pub fn verify_request_at(
    key: &SigningKey,
    asset_path: &str,
    expires: Option<&str>,
    signature: Option<&str>,
    now: u64,
) -> Result<()> {
    let (Some(expires), Some(signature)) = (expires, signature) else {
        return Err(Error::MissingParameters);
    };

    let Ok(expires_at) = expires.parse::<u64>() else {
        return Err(Error::MissingParameters);
    };

    if now > expires_at {
        tracing::warn!(path = asset_path, expires = expires_at, "signed URL expired");
        return Err(Error::Expired);
    }

    let canonical = UrlSigner::canonical(asset_path, expires_at);
    if !key.verify(&canonical, signature) {
        tracing::warn!(path = asset_path, "signature mismatch");
        return Err(Error::InvalidSignature);
    }

    tracing::debug!(path = asset_path, expires = expires_at, "signed URL verified");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_700_000_000;

    fn signed(key: &SigningKey, path: &str, expires: u64) -> String {
        key.sign(&UrlSigner::canonical(path, expires))
    }

    #[test]
    fn test_valid_url_verifies() {
        let key = SigningKey::test_key();
        let sig = signed(&key, "g/segment1.ts", NOW + 3600);

        let result = verify_request_at(
            &key,
            "g/segment1.ts",
            Some(&(NOW + 3600).to_string()),
            Some(&sig),
            NOW,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_missing_parameters() {
        let key = SigningKey::test_key();

        assert!(matches!(
            verify_request_at(&key, "a.ts", None, Some("sig"), NOW),
            Err(Error::MissingParameters)
        ));
        assert!(matches!(
            verify_request_at(&key, "a.ts", Some("123"), None, NOW),
            Err(Error::MissingParameters)
        ));
    }

    #[test]
    fn test_non_numeric_expiry() {
        let key = SigningKey::test_key();

        assert!(matches!(
            verify_request_at(&key, "a.ts", Some("soon"), Some("sig"), NOW),
            Err(Error::MissingParameters)
        ));
    }

    #[test]
    fn test_expired_url() {
        let key = SigningKey::test_key();
        let sig = signed(&key, "g/segment1.ts", NOW - 1);

        let result = verify_request_at(
            &key,
            "g/segment1.ts",
            Some(&(NOW - 1).to_string()),
            Some(&sig),
            NOW,
        );
        assert!(matches!(result, Err(Error::Expired)));
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let key = SigningKey::test_key();
        let sig = signed(&key, "g/segment1.ts", NOW);

        // now == expires is still valid; only now > expires rejects.
        let result = verify_request_at(
            &key,
            "g/segment1.ts",
            Some(&NOW.to_string()),
            Some(&sig),
            NOW,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_tampered_expiry() {
        let key = SigningKey::test_key();
        let sig = signed(&key, "g/segment1.ts", NOW + 3600);

        let result = verify_request_at(
            &key,
            "g/segment1.ts",
            Some(&(NOW + 3601).to_string()),
            Some(&sig),
            NOW,
        );
        assert!(matches!(result, Err(Error::InvalidSignature)));
    }

    #[test]
    fn test_signature_for_other_path() {
        let key = SigningKey::test_key();
        let sig = signed(&key, "g/segment1.ts", NOW + 3600);

        let result = verify_request_at(
            &key,
            "g/segment2.ts",
            Some(&(NOW + 3600).to_string()),
            Some(&sig),
            NOW,
        );
        assert!(matches!(result, Err(Error::InvalidSignature)));
    }

    #[test]
    fn test_verification_is_repeatable() {
        let key = SigningKey::test_key();
        let sig = signed(&key, "g/segment1.ts", NOW + 3600);
        let expires = (NOW + 3600).to_string();

        for _ in 0..3 {
            assert!(verify_request_at(
                &key,
                "g/segment1.ts",
                Some(&expires),
                Some(&sig),
                NOW
            )
            .is_ok());
        }
    }
}
