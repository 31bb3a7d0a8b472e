/// Shared admin secret verification
///
/// Admin endpoints are authorized by a single static secret compared against
/// the `x-admin-key` request header. There are no sessions or expiry.
///
/// # Example
///
/// ```
/// use spiceflow_shared::auth::admin::{AdminKey, AdminKeyError};
///
/// let key = AdminKey::new("s3cret");
/// assert!(key.verify(Some("s3cret")).is_ok());
/// assert_eq!(key.verify(Some("nope")), Err(AdminKeyError::Mismatch));
/// assert_eq!(AdminKey::new("").verify(Some("")), Err(AdminKeyError::NotConfigured));
/// ```

use sha2::{Digest, Sha256};

/// Header carrying the admin secret
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Why an admin request was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AdminKeyError {
    /// No secret configured on the server; every admin request is refused
    #[error("admin access is not configured")]
    NotConfigured,

    /// Header absent
    #[error("admin key required")]
    Missing,

    /// Header present but different from the configured secret
    #[error("invalid admin key")]
    Mismatch,
}

/// Configured admin secret
///
/// Only the SHA-256 digest is kept, and candidates are compared digest to
/// digest.
#[derive(Clone)]
pub struct AdminKey {
    digest: Option<[u8; 32]>,
}

impl AdminKey {
    /// Wraps the configured secret; an empty string disables admin access
    pub fn new(secret: &str) -> Self {
        let digest = (!secret.is_empty()).then(|| Sha256::digest(secret.as_bytes()).into());
        Self { digest }
    }

    /// Whether a non-empty secret was configured
    pub fn is_configured(&self) -> bool {
        self.digest.is_some()
    }

    /// Checks a header value against the configured secret
    pub fn verify(&self, provided: Option<&str>) -> Result<(), AdminKeyError> {
        let expected = self.digest.ok_or(AdminKeyError::NotConfigured)?;
        let provided = provided.ok_or(AdminKeyError::Missing)?;

        let candidate: [u8; 32] = Sha256::digest(provided.as_bytes()).into();

        let diff = expected
            .iter()
            .zip(candidate.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b));

        if diff == 0 {
            Ok(())
        } else {
            Err(AdminKeyError::Mismatch)
        }
    }
}

impl std::fmt::Debug for AdminKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminKey")
            .field("configured", &self.is_configured())
            .finish()
    }
}
