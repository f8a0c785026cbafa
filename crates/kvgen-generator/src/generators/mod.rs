//! Field generators for the `residents` and `countries` rows.
//!
//! Each generator draws from the sampler and the reference pools only; none
//! of them touch the store.

pub mod address;
pub mod country;
pub mod identity;
pub mod phone;
pub mod vehicle;

/// Numeric value of an ASCII digit string. Non-digits are skipped.
pub(crate) fn digit_value(digits: &str) -> i64 {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0, |acc, b| acc * 10 + i64::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_value() {
        assert_eq!(digit_value("00042"), 42);
        assert_eq!(digit_value("123456789"), 123_456_789);
        assert_eq!(digit_value(""), 0);
    }
}
