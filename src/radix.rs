use crate::error::CalcError;

/// One number rendered in the four bases the base-conversion panel
/// shows. Negative values render as a sign followed by the magnitude.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseForms {
    pub decimal: i64,
    pub binary: String,
    pub octal: String,
    pub hex: String,
}

/// Parse `text` as an integer in `from_base` and render it in decimal,
/// binary, octal and hexadecimal.
pub fn convert_base(
    text: &str,
    from_base: u32,
) -> Result<BaseForms, CalcError> {
    if from_base < 2 || from_base > 36 {
        return Err(CalcError::UnknownBase(from_base));
    }
    let text = text.trim();
    let digits = text.strip_prefix('-')
        .or_else(|| text.strip_prefix('+'))
        .unwrap_or(text);
    if digits.is_empty() {
        return Err(CalcError::UnexpectedEndOfInput);
    }
    for c in digits.chars() {
        match c.to_digit(36) {
            Some(d) if d < from_base => (),
            _ => {
                return Err(CalcError::InvalidDigit {
                    digit: c,
                    base: from_base,
                })
            }
        }
    }
    // Digits are pre-validated, so the only failure left is overflow
    let decimal = i64::from_str_radix(text, from_base)?;
    let magnitude = decimal.unsigned_abs();
    let sign = if decimal < 0 { "-" } else { "" };
    Ok(BaseForms {
        decimal,
        binary: format!("{}{:b}", sign, magnitude),
        octal: format!("{}{:o}", sign, magnitude),
        hex: format!("{}{:X}", sign, magnitude),
    })
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BitOp {
    And,
    Or,
    Xor,
    Shl,
    Shr,
}

/// Binary bitwise operation over 64-bit integers. Shift amounts must
/// fit the word.
pub fn bitwise(a: i64, op: BitOp, b: i64) -> Result<i64, CalcError> {
    match op {
        BitOp::And => Ok(a & b),
        BitOp::Or => Ok(a | b),
        BitOp::Xor => Ok(a ^ b),
        BitOp::Shl | BitOp::Shr => {
            if b < 0 || b >= 64 {
                return Err(CalcError::InvalidInput(
                    "shift amount must be in 0..64",
                ));
            }
            if let BitOp::Shl = op {
                Ok(a << b)
            } else {
                Ok(a >> b)
            }
        }
    }
}

pub fn bitwise_not(a: i64) -> i64 {
    !a
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    And,
    Or,
    Xor,
    Nand,
    Nor,
}

impl Gate {
    fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Gate::And => a && b,
            Gate::Or => a || b,
            Gate::Xor => a != b,
            Gate::Nand => !(a && b),
            Gate::Nor => !(a || b),
        }
    }
}

/// The four `(a, b, out)` rows of a two-input gate, in 00, 01, 10, 11
/// order.
pub fn truth_table(gate: Gate) -> [(bool, bool, bool); 4] {
    let mut rows = [(false, false, false); 4];
    for (i, row) in rows.iter_mut().enumerate() {
        let a = i & 2 != 0;
        let b = i & 1 != 0;
        *row = (a, b, gate.apply(a, b));
    }
    rows
}
