//! Alignment Alphabet
//!
//! Residues are encoded as `u8` codes in the order
//! `A R N D C Q E G H I L K M F P S T W Y V -`. Code 20 is shared by the gap
//! symbol and by every character outside the alphabet.

/// Symbols in code order: the position of a symbol is its code.
pub const MSA_ALPHABET: [char; 21] = [
    'A', 'R', 'N', 'D', 'C', 'Q', 'E', 'G', 'H', 'I', 'L', 'K', 'M', 'F', 'P', 'S', 'T', 'W', 'Y',
    'V', '-',
];

/// Code of the gap symbol and of anything unrecognised.
pub const GAP: u8 = 20;

#[rustfmt::skip]
fn symbol_code(symbol: char) -> Option<u8> {
    match symbol {
        'A' => Some(0),  'R' => Some(1),  'N' => Some(2),
        'D' => Some(3),  'C' => Some(4),  'Q' => Some(5),
        'E' => Some(6),  'G' => Some(7),  'H' => Some(8),
        'I' => Some(9),  'L' => Some(10), 'K' => Some(11),
        'M' => Some(12), 'F' => Some(13), 'P' => Some(14),
        'S' => Some(15), 'T' => Some(16), 'W' => Some(17),
        'Y' => Some(18), 'V' => Some(19), '-' => Some(20),
        _   => None,
    }
}

/// Encode one alignment character.
///
/// Alphabet symbols take their alphabet index. Any other character keeps its
/// raw character code, and the result is then clamped so that every code
/// above [`GAP`] becomes [`GAP`]. Raw codes at or below 20 (ASCII control
/// characters) survive the clamp unchanged.
pub fn encode_residue(symbol: char) -> u8 {
    let raw = symbol_code(symbol).map_or(u32::from(symbol), u32::from);
    // clamp
    raw.min(u32::from(GAP)) as u8
}

/// Decode a code back to its alphabet symbol. Codes above 20 have none.
pub fn decode_residue(code: u8) -> Option<char> {
    MSA_ALPHABET.get(code as usize).copied()
}
