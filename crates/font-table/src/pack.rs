//! Row-to-byte bit packing and token rendering.
//!
//! A binarized pixel row (0 = black, 255 = white) is packed into 8-bit
//! groups, MSB first, in strict left-to-right order. Each packed byte is
//! rendered as an 8-character token with `X` for set bits and `_` for
//! clear bits.

/// Render one packed byte as its `X`/`_` bit-mask token, bit 7 first.
pub fn byte_to_token(byte: u8) -> String {
    (0..8)
        .rev()
        .map(|i| if byte & (1 << i) != 0 { 'X' } else { '_' })
        .collect()
}

/// Pack one row of binarized pixel values into byte-group tokens.
///
/// A black pixel (value 0) becomes a set bit. A new group starts every 8
/// pixels; a trailing partial group is shifted left so the padding zeros
/// occupy the low-order bits, which keeps the glyph anchored to the left
/// edge when the width is not a multiple of 8. The output always holds
/// exactly `ceil(row.len() / 8)` tokens.
pub fn pack_row(row: &[u8]) -> Vec<String> {
    let mut tokens = Vec::with_capacity(row.len().div_ceil(8));
    let mut byte: u8 = 0;
    let mut bit_count: u8 = 0;

    for &pixel in row {
        let bit = u8::from(pixel == 0);
        byte = (byte << 1) | bit;
        bit_count += 1;

        if bit_count == 8 {
            tokens.push(byte_to_token(byte));
            byte = 0;
            bit_count = 0;
        }
    }

    if bit_count > 0 {
        byte <<= 8 - bit_count;
        tokens.push(byte_to_token(byte));
    }

    tokens
}
