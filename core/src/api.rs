use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing key.
///
/// Signers must check [`SigningCredential::is_valid`] before computing a
/// signature, so that an empty secret never produces a silent signature.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is able to sign a request.
    fn is_valid(&self) -> bool;
}
