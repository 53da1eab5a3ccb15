//! # Composition Table
//!
//! Neutron counts for atomic numbers 1..=118, stored as four packed
//! 256-bit words (one byte per atom, most significant byte first, last
//! word zero-padded) and decoded once at construction.

use super::assets::{
    ATOMS_IN_ARRAY, ATOM_COUNT, BYTE_LENGTH_IN_BIT, END_ATOMS_IDS, START_ATOMS_IDS,
};
use super::errors::CompositionError;
use serde::{Deserialize, Serialize};
use shared_types::U256;

/// Packed neutron words as published.
pub const ATOMS_NEUTRON: [[u8; 32]; 4] = [
    decode_word("00020405060607080a0a0c0c0e0e101012161414181a1c1c1e1e201f23232729"),
    decode_word("2a2d2d3030323233343637393a3c3d404245474c4a4d4e51525252545458595d"),
    decode_word("5e6162636467686a6c6e6f72737576797b7d7e7e7d86888a8a8e8c9290969497"),
    decode_word("9699999d9d9d9f9d9da09da99fa1a1adabafadb0b1b000000000000000000000"),
];

const fn decode_word(hex: &str) -> [u8; 32] {
    let digits = hex.as_bytes();
    assert!(digits.len() == 64, "packed word must be 64 hex digits");

    let mut word = [0u8; 32];
    let mut i = 0;
    while i < 32 {
        word[i] = (nibble(digits[2 * i]) << 4) | nibble(digits[2 * i + 1]);
        i += 1;
    }
    word
}

const fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => panic!("invalid hex digit"),
    }
}

/// Neutron count and energy cost of one atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyNeutron {
    pub neutron: u64,
    pub energy: U256,
}

/// Immutable neutron lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionTable {
    neutrons: [u8; ATOM_COUNT],
}

impl Default for CompositionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositionTable {
    /// Decode the packed words.
    pub fn new() -> Self {
        let words = ATOMS_NEUTRON.map(|bytes| U256::from_big_endian(&bytes));

        let mut neutrons = [0u8; ATOM_COUNT];
        for (index, slot) in neutrons.iter_mut().enumerate() {
            let word = words[index / ATOMS_IN_ARRAY];
            let shift = (ATOMS_IN_ARRAY - 1 - index % ATOMS_IN_ARRAY) * BYTE_LENGTH_IN_BIT;
            *slot = ((word >> shift).low_u32() & 0xff) as u8;
        }

        Self { neutrons }
    }

    /// One of the four packed words, `None` past the end.
    pub fn atoms_neutron(&self, index: usize) -> Option<U256> {
        ATOMS_NEUTRON
            .get(index)
            .map(|bytes| U256::from_big_endian(bytes))
    }

    /// Neutron count of `atomic_number` (1..=118).
    pub fn neutron_count(&self, atomic_number: u64) -> Result<u64, CompositionError> {
        atomic_number
            .checked_sub(1)
            .and_then(|index| self.neutrons.get(index as usize))
            .map(|n| u64::from(*n))
            .ok_or(CompositionError::OutOfRange { atomic_number })
    }

    /// Atomic number of an atom id.
    pub fn atomic_number(&self, atom_id: &U256) -> Result<u64, CompositionError> {
        if *atom_id < U256::from(START_ATOMS_IDS) || *atom_id >= U256::from(END_ATOMS_IDS) {
            return Err(CompositionError::NotAnAtom { id: *atom_id });
        }
        Ok(atom_id.low_u64() - START_ATOMS_IDS + 1)
    }

    /// `base + atomicNumber * 2 * neutronCount`.
    pub fn energy_cost(
        &self,
        base: U256,
        atom_id: &U256,
    ) -> Result<EnergyNeutron, CompositionError> {
        let atomic_number = self.atomic_number(atom_id)?;
        let neutron = self.neutron_count(atomic_number)?;

        // Both factors are tiny; only the base can overflow
        let energy = base
            .checked_add(U256::from(atomic_number * 2 * neutron))
            .ok_or(CompositionError::Overflow("energy cost"))?;

        Ok(EnergyNeutron { neutron, energy })
    }
}
