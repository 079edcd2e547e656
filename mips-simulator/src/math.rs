/// Add unsigned and signed 32-bit numbers. Overflows will wrap.
pub fn add_unsigned(a: u32, b: i32) -> u32 {
    if b < 0 {
        a.wrapping_sub(b.unsigned_abs())
    } else {
        a.wrapping_add(b as u32)
    }
}

/// Resolve a base register value plus a signed offset to an address
pub fn effective_address(base: i32, offset: i16) -> u32 {
    add_unsigned(base as u32, offset as i32)
}
