//! Short deterministic fingerprints and the pure identifier function.
//!
//! The fold must stay bit-for-bit compatible with identifiers that were
//! exported earlier, so the arithmetic is pinned down exactly:
//!
//! ```text
//! hash = 0
//! for unit in utf16(input):
//!     hash = wrapping_i32(hash * 31 + unit)
//! base36(|hash|)[..6]
//! ```
//!
//! Collisions between unrelated inputs are tolerated; uniqueness comes from
//! the composite key, not from the hash.

use crate::types::normalize_alias;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const HASH_LEN: usize = 6;

/// Fingerprint `input` into at most six lowercase base-36 characters.
pub fn short_hash(input: &str) -> String {
    let hash = input
        .encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)));
    // |i32::MIN| does not fit in i32, but does in u32.
    let mut encoded = to_base36(u64::from(hash.unsigned_abs()));
    encoded.truncate(HASH_LEN);
    encoded
}

/// Lowercase base-36 rendering; `"0"` for zero.
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // Only ASCII digits were pushed.
    digits.into_iter().map(char::from).collect()
}

/// The public identifier for `(component, alias, render_index)`.
///
/// Pure: identical inputs always give the identical output. Shared by the
/// runtime registry and the static scanner.
pub fn ghost_id_for(component: &str, alias: Option<&str>, render_index: u32) -> String {
    let alias = normalize_alias(alias);
    let id_string = format!("{component}-{}-{render_index}", alias.unwrap_or(""));
    let hash = short_hash(&id_string);
    match alias {
        Some(alias) => format!("gh-{component}-{alias}-{hash}"),
        None => format!("gh-{component}-{hash}"),
    }
}
