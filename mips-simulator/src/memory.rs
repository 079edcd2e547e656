use std::collections::HashMap;
use std::fmt;
use std::fmt::{Debug, Formatter};

/// Sparse byte-addressable memory.
/// Only addresses which have been written hold a value; reading any other
/// address yields `None`.
#[derive(Default)]
pub struct Memory {
    bytes: HashMap<u32, u8>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the byte at the address
    pub fn get(&self, address: u32) -> Option<u8> {
        self.bytes.get(&address).copied()
    }

    /// Get the little-endian word (4 bytes) at the address.
    /// Returns `Err` with the first unmapped address if any byte is missing.
    pub fn get_word(&self, address: u32) -> Result<u32, u32> {
        let mut bytes = [0; 4];

        for (i, byte) in bytes.iter_mut().enumerate() {
            let byte_address = address.wrapping_add(i as u32);
            *byte = self.get(byte_address).ok_or(byte_address)?;
        }

        Ok(u32::from_le_bytes(bytes))
    }

    /// Get the bytes of a null-terminated string starting from the address,
    /// not including the terminator.
    /// Returns `Err` with the first unmapped address if the string runs off
    /// the end of mapped memory.
    pub fn get_str(&self, address: u32) -> Result<Vec<u8>, u32> {
        let mut bytes = Vec::new();
        let mut current = address;

        loop {
            let byte = self.get(current).ok_or(current)?;

            if byte == 0 {
                return Ok(bytes);
            }

            bytes.push(byte);
            current = current.wrapping_add(1);
        }
    }

    /// Set a byte at the address
    pub fn set(&mut self, address: u32, value: u8) {
        self.bytes.insert(address, value);
    }

    /// Set a little-endian word (4 bytes) at the address
    pub fn set_word(&mut self, address: u32, value: u32) {
        for (i, byte) in value.to_le_bytes().iter().enumerate() {
            self.set(address.wrapping_add(i as u32), *byte);
        }
    }

    /// Lay out words consecutively from the offset
    pub fn load_words(&mut self, words: &[u32], offset: u32) {
        for (i, word) in words.iter().enumerate() {
            self.set_word(offset.wrapping_add(4 * i as u32), *word);
        }
    }

    /// True if the address has a value
    pub fn is_mapped(&self, address: u32) -> bool {
        self.bytes.contains_key(&address)
    }

    /// The number of mapped bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Debug for Memory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Memory({} bytes mapped)", self.bytes.len())
    }
}
