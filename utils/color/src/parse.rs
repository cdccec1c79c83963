use crate::HexColorError;

const fn hex_digit(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

const fn from_hex_byte(s: &[u8], i: usize) -> u8 {
    (hex_digit(s[i]) << 4) | hex_digit(s[i + 1])
}

const fn prefix_len(bytes: &[u8]) -> usize {
    if !bytes.is_empty() && bytes[0] == b'#' {
        1
    } else if bytes.len() >= 2 && bytes[0] == b'0' && (bytes[1] == b'x' || bytes[1] == b'X') {
        2
    } else {
        0
    }
}

/// Compile-time parser for `#RRGGBB` / `0xRRGGBB` / `RRGGBB`.
pub const fn parse_hex_color(s: &str) -> (u8, u8, u8) {
    let bytes = s.as_bytes();
    let i = prefix_len(bytes);

    if bytes.len() - i == 6 {
        (
            from_hex_byte(bytes, i),
            from_hex_byte(bytes, i + 2),
            from_hex_byte(bytes, i + 4),
        )
    } else {
        panic!("expected 6 hex digits");
    }
}

const fn parse_runtime_hex_digit(b: u8, index: usize) -> Result<u8, HexColorError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(HexColorError::InvalidDigit(index)),
    }
}

fn parse_runtime_hex_byte(bytes: &[u8], index: usize) -> Result<u8, HexColorError> {
    let hi = parse_runtime_hex_digit(bytes[index], index)?;
    let lo = parse_runtime_hex_digit(bytes[index + 1], index + 1)?;
    Ok((hi << 4) | lo)
}

/// Runtime parser accepting six (`RRGGBB`) or eight (`RRGGBBAA`) digits.
pub fn parse_hex_color_runtime(s: &str) -> Result<([u8; 3], Option<u8>), HexColorError> {
    let bytes = s.as_bytes();
    let offset = prefix_len(bytes);
    let digits = bytes.len().saturating_sub(offset);
    if digits != 6 && digits != 8 {
        return Err(HexColorError::InvalidLength);
    }

    let rgb = [
        parse_runtime_hex_byte(bytes, offset)?,
        parse_runtime_hex_byte(bytes, offset + 2)?,
        parse_runtime_hex_byte(bytes, offset + 4)?,
    ];
    let alpha = if digits == 8 {
        Some(parse_runtime_hex_byte(bytes, offset + 6)?)
    } else {
        None
    };
    Ok((rgb, alpha))
}
