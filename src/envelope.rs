use alloc::vec::Vec;

use crate::error::StegoError;

/// Wraps a plaintext into the opaque payload that gets embedded, and back.
///
/// The engine imposes no structure on the payload beyond its length.
/// Encrypting envelopes (symmetric key, IV, signature, ...) live outside
/// this crate and plug in here. Integrity checks, if wanted, belong in the
/// envelope since the embedded frame carries none.
pub trait Envelope {
    fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, StegoError>;

    fn open(&self, payload: &[u8]) -> Result<Vec<u8>, StegoError>;
}

/// Identity envelope: the payload is the plaintext.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Plaintext;

impl Envelope for Plaintext {
    fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, StegoError> {
        Ok(plaintext.to_vec())
    }

    fn open(&self, payload: &[u8]) -> Result<Vec<u8>, StegoError> {
        Ok(payload.to_vec())
    }
}

impl<E: Envelope + ?Sized> Envelope for &E {
    fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, StegoError> {
        (**self).seal(plaintext)
    }

    fn open(&self, payload: &[u8]) -> Result<Vec<u8>, StegoError> {
        (**self).open(payload)
    }
}
