//! EAN-family encoders (EAN-8, EAN-13, EAN-5 add-on).
//!
//! Module patterns follow the GS1 general specification: each digit is seven
//! modules wide in one of three parity sets (L, G, R), framed by guard
//! patterns. Digit counts are enforced here, not in request validation,
//! because only the symbology itself knows whether a checksum digit is
//! present.

use super::{parse_digits, DrawOptions, EncodeError, SymbologyEncoder};
use crate::drawing::Drawing;

/// L-set patterns, seven modules per digit, leftmost module first.
/// R is the bitwise complement of L; G is R reversed.
const L_CODES: [u8; 10] = [
    0b0001101, 0b0011001, 0b0010011, 0b0111101, 0b0100011,
    0b0110001, 0b0101111, 0b0111011, 0b0110111, 0b0001011,
];

/// EAN-13 left-half parity by leading digit (false = L, true = G).
const EAN13_PARITY: [[bool; 6]; 10] = [
    [false, false, false, false, false, false],
    [false, false, true, false, true, true],
    [false, false, true, true, false, true],
    [false, false, true, true, true, false],
    [false, true, false, false, true, true],
    [false, true, true, false, false, true],
    [false, true, true, true, false, false],
    [false, true, false, true, false, true],
    [false, true, false, true, true, false],
    [false, true, true, false, true, false],
];

/// EAN-5 digit parity by checksum value (false = L, true = G).
const EAN5_PARITY: [[bool; 5]; 10] = [
    [true, true, false, false, false],
    [true, false, true, false, false],
    [true, false, false, true, false],
    [true, false, false, false, true],
    [false, true, true, false, false],
    [false, false, true, true, false],
    [false, false, false, true, true],
    [false, true, false, true, false],
    [false, true, false, false, true],
    [false, false, true, false, true],
];

fn l_code(digit: u8) -> u8 {
    L_CODES[digit as usize]
}

fn r_code(digit: u8) -> u8 {
    !l_code(digit) & 0x7f
}

fn g_code(digit: u8) -> u8 {
    let r = r_code(digit);
    let mut out = 0u8;
    for i in 0..7 {
        if r >> i & 1 == 1 {
            out |= 1 << (6 - i);
        }
    }
    out
}

/// Append `len` modules, most significant bit first.
fn push_pattern(modules: &mut Vec<bool>, bits: u8, len: u8) {
    for i in (0..len).rev() {
        modules.push(bits >> i & 1 == 1);
    }
}

/// Standard EAN check digit: weight 3 on the rightmost payload digit,
/// alternating 3/1 moving left.
pub(crate) fn ean_checksum(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// EAN-5 add-on checksum: odd positions weighted 3, even positions 9.
pub(crate) fn ean5_checksum(digits: &[u8]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * if i % 2 == 0 { 3 } else { 9 })
        .sum();
    (sum % 10) as u8
}

pub struct Ean8Encoder;

impl SymbologyEncoder for Ean8Encoder {
    fn draw(&self, code: &str, opts: &DrawOptions) -> Result<Drawing, EncodeError> {
        let mut digits = parse_digits(code, "EAN-8")?;
        match digits.len() {
            7 => digits.push(ean_checksum(&digits)),
            8 => {}
            n => {
                return Err(EncodeError::new(format!(
                    "EAN-8 requires 7 or 8 digits, got {n}"
                )))
            }
        }

        // 3 + 4*7 + 5 + 4*7 + 3 = 67 modules
        let mut modules = Vec::with_capacity(67);
        push_pattern(&mut modules, 0b101, 3);
        for &d in &digits[..4] {
            push_pattern(&mut modules, l_code(d), 7);
        }
        push_pattern(&mut modules, 0b01010, 5);
        for &d in &digits[4..] {
            push_pattern(&mut modules, r_code(d), 7);
        }
        push_pattern(&mut modules, 0b101, 3);

        let mut drawing = opts.drawing();
        drawing.push_bar_pattern(&modules);
        Ok(drawing)
    }
}

pub struct Ean13Encoder;

impl SymbologyEncoder for Ean13Encoder {
    fn draw(&self, code: &str, opts: &DrawOptions) -> Result<Drawing, EncodeError> {
        let mut digits = parse_digits(code, "EAN-13")?;
        match digits.len() {
            12 => digits.push(ean_checksum(&digits)),
            13 => {}
            n => {
                return Err(EncodeError::new(format!(
                    "EAN-13 requires 12 or 13 digits, got {n}"
                )))
            }
        }

        // The leading digit is encoded as the parity pattern of the left half.
        let parity = EAN13_PARITY[digits[0] as usize];

        // 3 + 6*7 + 5 + 6*7 + 3 = 95 modules
        let mut modules = Vec::with_capacity(95);
        push_pattern(&mut modules, 0b101, 3);
        for (i, &d) in digits[1..7].iter().enumerate() {
            let pattern = if parity[i] { g_code(d) } else { l_code(d) };
            push_pattern(&mut modules, pattern, 7);
        }
        push_pattern(&mut modules, 0b01010, 5);
        for &d in &digits[7..] {
            push_pattern(&mut modules, r_code(d), 7);
        }
        push_pattern(&mut modules, 0b101, 3);

        let mut drawing = opts.drawing();
        drawing.push_bar_pattern(&modules);
        Ok(drawing)
    }
}

pub struct Ean5Encoder;

impl SymbologyEncoder for Ean5Encoder {
    fn draw(&self, code: &str, opts: &DrawOptions) -> Result<Drawing, EncodeError> {
        let digits = parse_digits(code, "EAN-5")?;
        if digits.len() != 5 {
            return Err(EncodeError::new(format!(
                "EAN-5 requires exactly 5 digits, got {}",
                digits.len()
            )));
        }

        // The checksum is not drawn as a digit; it selects the parity pattern.
        let parity = EAN5_PARITY[ean5_checksum(&digits) as usize];

        // 5 + 5*7 + 4*2 = 48 modules
        let mut modules = Vec::with_capacity(48);
        push_pattern(&mut modules, 0b01011, 5);
        for (i, &d) in digits.iter().enumerate() {
            if i > 0 {
                push_pattern(&mut modules, 0b01, 2);
            }
            let pattern = if parity[i] { g_code(d) } else { l_code(d) };
            push_pattern(&mut modules, pattern, 7);
        }

        let mut drawing = opts.drawing();
        drawing.push_bar_pattern(&modules);
        Ok(drawing)
    }
}
