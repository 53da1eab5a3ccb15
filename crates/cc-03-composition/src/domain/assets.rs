//! # Asset Ids
//!
//! Ids 0..3 are the raw materials, `START_ATOMS_IDS..END_ATOMS_IDS` are the
//! 118 atoms in atomic-number order.

use serde::{Deserialize, Serialize};
use shared_types::U256;
use std::fmt;

pub const NEUTRON: u64 = 0;
pub const PROTON: u64 = 1;
pub const ELECTRON: u64 = 2;

/// First atom id (hydrogen).
pub const START_ATOMS_IDS: u64 = 3;
/// One past the last atom id.
pub const END_ATOMS_IDS: u64 = 121;
/// Number of atoms in the table.
pub const ATOM_COUNT: usize = (END_ATOMS_IDS - START_ATOMS_IDS) as usize;

pub const BASE_ENERGY_MINT_ATOM: u64 = 100;
pub const BASE_ENERGY_BURN_ATOM: u64 = 70;

/// Neutron counts packed per 256-bit word.
pub const ATOMS_IN_ARRAY: usize = 32;
pub const BYTE_LENGTH_IN_BIT: usize = 8;

pub const VERSION_NAME: &str = "Atoms";

/// A raw material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Neutron,
    Proton,
    Electron,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::Neutron, Material::Proton, Material::Electron];

    pub fn id(self) -> U256 {
        U256::from(self.raw_id())
    }

    pub fn raw_id(self) -> u64 {
        match self {
            Material::Neutron => NEUTRON,
            Material::Proton => PROTON,
            Material::Electron => ELECTRON,
        }
    }

    /// `None` unless `id` is 0, 1 or 2.
    pub fn from_id(id: &U256) -> Option<Self> {
        if *id > U256::from(ELECTRON) {
            return None;
        }
        match id.low_u64() {
            NEUTRON => Some(Material::Neutron),
            PROTON => Some(Material::Proton),
            ELECTRON => Some(Material::Electron),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Material::Neutron => "neutron",
            Material::Proton => "proton",
            Material::Electron => "electron",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn is_mat(id: &U256) -> bool {
    Material::from_id(id).is_some()
}

pub fn is_atom(id: &U256) -> bool {
    *id >= U256::from(START_ATOMS_IDS) && *id < U256::from(END_ATOMS_IDS)
}
