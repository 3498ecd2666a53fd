//! Short code generation
//!
//! A code is the base-36 rendering of a random fraction in [0, 1), read
//! digit by digit after the radix point. Zero digits are kept, so every
//! code has exactly the requested length.

/// Base-36 digit alphabet, lowest digit first
pub const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Source of candidate short codes
///
/// Implementations only produce candidates; uniqueness is decided by the
/// store when the code is inserted.
pub trait CodeGenerator: Send + Sync + 'static {
    fn generate(&self) -> String;
}

/// Default generator backed by the thread-local RNG
#[derive(Debug, Clone, Copy)]
pub struct RandomBase36 {
    length: usize,
}

impl RandomBase36 {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl CodeGenerator for RandomBase36 {
    fn generate(&self) -> String {
        generate_short_code(self.length)
    }
}

/// Render the fractional part of `value` as `len` base-36 digits
pub fn fraction_to_base36(value: f64, len: usize) -> String {
    let mut frac = value.fract().abs();
    let mut out = String::with_capacity(len);

    for _ in 0..len {
        frac *= 36.0;
        let digit = (frac.floor() as usize).min(35);
        out.push(BASE36_ALPHABET[digit] as char);
        frac -= digit as f64;
    }

    out
}

/// 生成随机短码
pub fn generate_short_code(len: usize) -> String {
    fraction_to_base36(rand::random::<f64>(), len)
}

/// Check that `code` is exactly `len` characters of `[0-9a-z]`
pub fn is_base36_code(code: &str, len: usize) -> bool {
    code.len() == len
        && code
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
}

/// 拼接跳转链接
pub fn build_generated_link(redirect_base: &str, code: &str) -> String {
    format!("{}{}", redirect_base, code)
}
