use super::model::SERIAL_SPACE;

/// Largest prime below 1,000,000 that is congruent to 3 mod 4.
pub const PRIME: u32 = 999_983;

/// Bijection over `0..1_000_000` built from quadratic residues.
///
/// For a prime `p ≡ 3 (mod 4)`, `x ↦ x² mod p` on `x <= p/2` and
/// `x ↦ p − (x² mod p)` above it visits every value of `0..p` once. The tail
/// `p..1_000_000` maps to itself.
pub fn permute(x: u32) -> u32 {
    debug_assert!(x < SERIAL_SPACE);
    if x >= PRIME {
        return x;
    }
    let residue = ((u64::from(x) * u64::from(x)) % u64::from(PRIME)) as u32;
    if x <= PRIME / 2 {
        residue
    } else {
        PRIME - residue
    }
}
