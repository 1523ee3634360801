//! Record Identifiers
//!
//! Ids are a random part followed by a millisecond timestamp, both base 36.
//! Unique enough for one browser profile; not suitable for anything secret.

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Digits kept from the random fraction
const RANDOM_DIGITS: u32 = 10;

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(ALPHABET[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Build an id from a random fraction in `[0, 1)` and a Unix time in ms
pub fn compose_id(random: f64, now_ms: u64) -> String {
    let scale = 36u64.pow(RANDOM_DIGITS);
    let fraction = if random.is_finite() { random.clamp(0.0, 1.0) } else { 0.0 };
    let random_part = ((fraction * scale as f64) as u64).min(scale - 1);
    format!(
        "{:0>width$}{}",
        to_base36(random_part),
        to_base36(now_ms),
        width = RANDOM_DIGITS as usize
    )
}
