use crate::layout::ElementId;
use rand::{Rng, rngs::ThreadRng, thread_rng};

/// Token length of generated element identifiers.
pub const ELEMENT_ID_LENGTH: usize = 7;

/// Alphabet generated element identifiers are drawn from.
pub const ELEMENT_ID_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Defines the contract for tagging freshly built elements with identifiers.
///
/// The converter calls [`next_id`](IdProvider::next_id) once per produced
/// element: sections, columns and widgets each receive their own token.
pub trait IdProvider {
    fn next_id(&mut self) -> ElementId;
}

/// Draws fixed-length tokens uniformly and independently from a configured
/// alphabet.
///
/// No uniqueness bookkeeping is done; at the default 7 characters over 36
/// symbols the collision probability within one conversion run is accepted
/// as negligible. The backing RNG is thread-local, so instantiate one
/// provider per conversion thread.
pub struct RandomIdProvider {
    length: usize,
    alphabet: Vec<char>,
    rng: ThreadRng,
}

impl RandomIdProvider {
    /// Creates a provider emitting tokens of `length` symbols drawn from
    /// `alphabet`.
    ///
    /// # Panics
    ///
    /// Panics if `alphabet` is empty.
    pub fn new(length: usize, alphabet: &str) -> Self {
        let alphabet: Vec<char> = alphabet.chars().collect();
        assert!(!alphabet.is_empty(), "identifier alphabet must not be empty");
        Self {
            length,
            alphabet,
            rng: thread_rng(),
        }
    }
}

impl Default for RandomIdProvider {
    fn default() -> Self {
        Self::new(ELEMENT_ID_LENGTH, ELEMENT_ID_ALPHABET)
    }
}

impl IdProvider for RandomIdProvider {
    fn next_id(&mut self) -> ElementId {
        let token: String = (0..self.length)
            .map(|_| self.alphabet[self.rng.gen_range(0..self.alphabet.len())])
            .collect();
        ElementId::new(token)
    }
}
