/// Number of literals per line in a generated array initializer.
pub const HEX_LINE_WIDTH: usize = 20;

/// `0x`-prefixed lower-case hex without padding: `0x0`, `0x7f`, `0xff`.
pub fn hex_literal(byte: u8) -> String {
    format!("{:#x}", byte)
}

/// Splits `data` into lines of at most [`HEX_LINE_WIDTH`] literals,
/// keeping the original element order. Literals within a line are joined
/// with `", "`; the caller decides how lines are joined.
pub fn hex_lines(data: &[u8]) -> Vec<String> {
    data.chunks(HEX_LINE_WIDTH)
        .map(|chunk| {
            chunk
                .iter()
                .map(|&byte| hex_literal(byte))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect()
}
