/// 8-bit RGBA, the unit every host draw call takes.
pub type Rgba = [u8; 4];

pub const WHITE: Rgba = [255, 255, 255, 255];

/// Accepts "#rgb", "#rgba", "#rrggbb", "#rrggbbaa" (or without '#').
/// Panics on invalid input; use only with trusted literals.
/// Evaluated at COMPILE TIME if assigned to a const/static.
pub const fn rgba_hex(s: &str) -> Rgba {
    match parse_hex_bytes(s.as_bytes()) {
        Some(c) => c,
        None => panic!("color hex string must be 3, 4, 6, or 8 hex digits"),
    }
}

const fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(10 + (b - b'a')),
        b'A'..=b'F' => Some(10 + (b - b'A')),
        _ => None,
    }
}

const fn parse_hex_bytes(bytes: &[u8]) -> Option<Rgba> {
    // Handle optional '#' by offsetting start index
    let bytes = if !bytes.is_empty() && bytes[0] == b'#' {
        bytes.split_at(1).1
    } else {
        bytes
    };

    let mut nibbles = [0u8; 8];
    let mut i = 0;
    while i < bytes.len() {
        if i >= 8 {
            return None;
        }
        nibbles[i] = match hex_val(bytes[i]) {
            Some(v) => v,
            None => return None,
        };
        i += 1;
    }

    // Expand 4-bit color to 8-bit (e.g. F -> FF)
    const fn rep(n: u8) -> u8 {
        (n << 4) | n
    }
    const fn pair(h: u8, l: u8) -> u8 {
        (h << 4) | l
    }
    let n = nibbles;
    match bytes.len() {
        3 => Some([rep(n[0]), rep(n[1]), rep(n[2]), 0xFF]),
        4 => Some([rep(n[0]), rep(n[1]), rep(n[2]), rep(n[3])]),
        6 => Some([pair(n[0], n[1]), pair(n[2], n[3]), pair(n[4], n[5]), 0xFF]),
        8 => Some([
            pair(n[0], n[1]),
            pair(n[2], n[3]),
            pair(n[4], n[5]),
            pair(n[6], n[7]),
        ]),
        _ => None,
    }
}

/// Runtime color parser for config values: hex forms as in [`rgba_hex`], or a
/// comma separated `r,g,b[,a]` list of 0-255 components.
pub fn parse_rgba(s: &str) -> Option<Rgba> {
    let s = s.trim();
    if !s.contains(',') {
        return parse_hex_bytes(s.as_bytes());
    }

    let mut out = [0u8, 0, 0, 0xFF];
    let mut count = 0;
    for part in s.split(',') {
        if count >= 4 {
            return None;
        }
        out[count] = part.trim().parse::<u8>().ok()?;
        count += 1;
    }
    (count >= 3).then_some(out)
}

#[inline(always)]
pub const fn with_alpha(c: Rgba, a: u8) -> Rgba {
    [c[0], c[1], c[2], a]
}

#[cfg(test)]
mod tests {
    use super::{parse_rgba, rgba_hex, with_alpha};

    #[test]
    fn hex_forms_expand() {
        assert_eq!(rgba_hex("#fff"), [255, 255, 255, 255]);
        assert_eq!(rgba_hex("265CB4F5"), [38, 92, 180, 245]);
        assert_eq!(rgba_hex("#1a1a1a"), [26, 26, 26, 255]);
        assert_eq!(rgba_hex("#0008"), [0, 0, 0, 0x88]);
    }

    #[test]
    fn config_values_parse() {
        assert_eq!(parse_rgba("26, 26, 26, 195"), Some([26, 26, 26, 195]));
        assert_eq!(parse_rgba("10,10,10"), Some([10, 10, 10, 255]));
        assert_eq!(parse_rgba("#FAFAFAF5"), Some([250, 250, 250, 245]));
        assert_eq!(parse_rgba("300,0,0,0"), None, "components are 0-255");
        assert_eq!(parse_rgba("1,2,3,4,5"), None);
        assert_eq!(parse_rgba("#12345"), None);
        assert_eq!(parse_rgba("zz"), None);
    }

    #[test]
    fn alpha_override_keeps_rgb() {
        assert_eq!(with_alpha([38, 92, 180, 245], 210), [38, 92, 180, 210]);
    }
}
