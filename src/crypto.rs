//! Homomorphic encryption capabilities used by the hit-detection protocol.
//!
//! The game only needs four operations: encode a scalar, encrypt it, multiply
//! a ciphertext by a plaintext, and decrypt the first slot. They are split in
//! two traits. [`Evaluator`] carries public material only and is what the
//! arbiter gets to use; [`KeyPair`] owns the secret key and stays with its
//! player.

use core::fmt;
use std::sync::Arc;

use anyhow::anyhow;
use fhe::bfv::{
    BfvParameters, BfvParametersBuilder, Ciphertext, Encoding, Plaintext, PublicKey, SecretKey,
};
use fhe_traits::{FheDecoder, FheDecrypter, FheEncoder, FheEncrypter};
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::BfvConfig;

/// Public homomorphic operations.
pub trait Evaluator {
    type Plaintext;
    type Ciphertext;

    /// Encode `value` into the first slot of a plaintext. Deterministic.
    fn encode(&self, value: u64) -> anyhow::Result<Self::Plaintext>;

    /// Homomorphic `Enc(v) * r -> Enc(r * v)`.
    fn multiply_plain(
        &self,
        ciphertext: &Self::Ciphertext,
        plaintext: &Self::Plaintext,
    ) -> anyhow::Result<Self::Ciphertext>;
}

/// A player's key material.
pub trait KeyPair {
    type Evaluator: Evaluator;

    /// Public evaluation capability matching this key pair.
    fn evaluator(&self) -> &Self::Evaluator;

    fn encrypt(
        &mut self,
        plaintext: &<Self::Evaluator as Evaluator>::Plaintext,
    ) -> anyhow::Result<<Self::Evaluator as Evaluator>::Ciphertext>;

    fn decrypt(
        &self,
        ciphertext: &<Self::Evaluator as Evaluator>::Ciphertext,
    ) -> anyhow::Result<<Self::Evaluator as Evaluator>::Plaintext>;

    fn decode_first_slot(
        &self,
        plaintext: &<Self::Evaluator as Evaluator>::Plaintext,
    ) -> anyhow::Result<u64>;
}

/// Plaintext type of a key pair's evaluator.
pub type PlaintextOf<K> = <<K as KeyPair>::Evaluator as Evaluator>::Plaintext;
/// Ciphertext type of a key pair's evaluator.
pub type CiphertextOf<K> = <<K as KeyPair>::Evaluator as Evaluator>::Ciphertext;

/// BFV evaluation context: the parameter set, nothing secret.
#[derive(Clone)]
pub struct BfvEvaluator {
    params: Arc<BfvParameters>,
}

impl BfvEvaluator {
    pub fn params(&self) -> &Arc<BfvParameters> {
        &self.params
    }
}

impl Evaluator for BfvEvaluator {
    type Plaintext = Plaintext;
    type Ciphertext = Ciphertext;

    fn encode(&self, value: u64) -> anyhow::Result<Plaintext> {
        let slots: &[u64] = &[value];
        Ok(Plaintext::try_encode(slots, Encoding::simd(), &self.params)?)
    }

    fn multiply_plain(&self, ciphertext: &Ciphertext, plaintext: &Plaintext) -> anyhow::Result<Ciphertext> {
        Ok(ciphertext * plaintext)
    }
}

impl fmt::Debug for BfvEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BfvEvaluator")
            .field("degree", &self.params.degree())
            .field("plaintext_modulus", &self.params.plaintext())
            .finish()
    }
}

/// BFV key pair backed by the `fhe` crate.
pub struct BfvKeyPair {
    evaluator: BfvEvaluator,
    secret_key: SecretKey,
    public_key: PublicKey,
    rng: ChaCha8Rng,
}

impl BfvKeyPair {
    /// Build parameters from `config` and generate a fresh key pair.
    ///
    /// `seed` drives key generation and encryption noise. Pass OS entropy for
    /// real games; a fixed seed gives reproducible ciphertexts.
    pub fn new(config: &BfvConfig, seed: [u8; 32]) -> anyhow::Result<Self> {
        let params = BfvParametersBuilder::new()
            .set_degree(config.degree)
            .set_moduli(&config.moduli)
            .set_plaintext_modulus(config.plaintext_modulus)
            .build_arc()?;
        let mut rng = ChaCha8Rng::from_seed(seed);
        let secret_key = SecretKey::random(&params, &mut rng);
        let public_key = PublicKey::new(&secret_key, &mut rng);
        Ok(Self {
            evaluator: BfvEvaluator { params },
            secret_key,
            public_key,
            rng,
        })
    }
}

impl KeyPair for BfvKeyPair {
    type Evaluator = BfvEvaluator;

    fn evaluator(&self) -> &BfvEvaluator {
        &self.evaluator
    }

    fn encrypt(&mut self, plaintext: &Plaintext) -> anyhow::Result<Ciphertext> {
        Ok(self.public_key.try_encrypt(plaintext, &mut self.rng)?)
    }

    fn decrypt(&self, ciphertext: &Ciphertext) -> anyhow::Result<Plaintext> {
        Ok(self.secret_key.try_decrypt(ciphertext)?)
    }

    fn decode_first_slot(&self, plaintext: &Plaintext) -> anyhow::Result<u64> {
        let slots = Vec::<u64>::try_decode(plaintext, Encoding::simd())?;
        slots
            .first()
            .copied()
            .ok_or_else(|| anyhow!("decoded plaintext has no slots"))
    }
}

impl fmt::Debug for BfvKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BfvKeyPair")
            .field("evaluator", &self.evaluator)
            .finish_non_exhaustive()
    }
}
