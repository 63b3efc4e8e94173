//! Entropy section - keyspace approximation quantized to whole bits.

use secrecy::{ExposeSecret, SecretString};

use super::variety::character_variety_section;

/// Estimates password entropy in bits.
///
/// Every position is charged `bit_length(pool)` bits, where `pool` is the
/// summed size of the character classes present anywhere in the password.
/// The quantization to whole bits is deliberate; this is not a continuous
/// log2 and not Shannon entropy.
pub fn entropy_section(password: &SecretString) -> f64 {
    let pool = character_variety_section(password).pool_size();
    if pool == 0 {
        return 0.0;
    }

    let bits_per_char = pool.ilog2() + 1;
    let length = password.expose_secret().chars().count();
    length as f64 * f64::from(bits_per_char)
}
