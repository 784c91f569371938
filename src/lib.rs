//! Low-level register access and reset control primitives for the Power
//! and Reset Management (PRM) block of OMAP2/3 SoCs.
//!
//! The crate keeps the register calling convention and the sequencing
//! constraints of the PRM in Rust so that higher-level power-domain and
//! clock-management drivers can avoid hard-coded offsets and fragile
//! open-coded register sequences. Those drivers decide *when* to idle or
//! reset a module; this layer only knows *how*:
//!
//! - raw and read-modify-write access to module registers, with the
//!   read-modify-write window serialized per instance;
//! - hardreset line sequencing, including the bounded busy-wait for the
//!   hardware completion acknowledgment;
//! - the voltage-processor / adaptive-body-bias transaction-done status
//!   protocol shared by the voltage rails;
//! - routed register access for the board variant whose PRCM space spans
//!   several base regions.
//!
//! All real state lives in the hardware registers; the crate caches
//! nothing and owns no policy.

#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

use core::ptr::NonNull;

mod config;
mod err;
mod osal;
mod registers;
mod reset;
mod router;
#[cfg(test)]
mod testutil;
mod vp;

pub use config::*;
pub use err::*;
pub use osal::*;
pub use registers::*;
pub use router::*;

/// One PRM instance: the register view plus the chip-variant
/// configuration resolved at construction.
///
/// The hardreset and transaction-status operations live in their own
/// modules; the inherent methods here expose the raw accessor layer.
pub struct Prm<IO, O> {
    regs: PrmRegisters<IO>,
    config: PrmConfig,
    osal: O,
}

impl<IO: RegisterIo, O: Osal> Prm<IO, O> {
    /// Create a PRM interface over an arbitrary register backend.
    pub const fn new(regs: PrmRegisters<IO>, config: PrmConfig, osal: O) -> Self {
        Self { regs, config, osal }
    }

    /// Chip generation this instance was configured for.
    pub fn generation(&self) -> ChipGeneration {
        self.config.generation
    }

    /// Direct access to the underlying register accessor.
    pub fn registers(&self) -> &PrmRegisters<IO> {
        &self.regs
    }

    /// Read a register in a PRM module.
    pub fn read_mod_reg(&self, module: i16, idx: u16) -> u32 {
        self.regs.read_mod_reg(module, idx)
    }

    /// Write a register in a PRM module.
    pub fn write_mod_reg(&self, value: u32, module: i16, idx: u16) {
        self.regs.write_mod_reg(value, module, idx);
    }

    /// Read-modify-write a register in a PRM module; see
    /// [`PrmRegisters::rmw_mod_reg_bits`].
    pub fn rmw_mod_reg_bits(&self, mask: u32, bits: u32, module: i16, idx: u16) -> u32 {
        self.regs.rmw_mod_reg_bits(mask, bits, module, idx)
    }

    /// Set `bits` in a module register, leaving the rest unchanged.
    pub fn set_mod_reg_bits(&self, bits: u32, module: i16, idx: u16) -> u32 {
        self.regs.set_mod_reg_bits(bits, module, idx)
    }

    /// Clear `bits` in a module register, leaving the rest unchanged.
    pub fn clear_mod_reg_bits(&self, bits: u32, module: i16, idx: u16) -> u32 {
        self.regs.clear_mod_reg_bits(bits, module, idx)
    }

    /// Read a module register, mask it, and shift the field down to bit 0.
    pub fn read_mod_bits_shift(&self, domain: i16, idx: u16, mask: u32) -> u32 {
        self.regs.read_mod_bits_shift(domain, idx, mask)
    }
}

impl<O: Osal> Prm<MmioSpace, O> {
    /// Create a PRM interface from the raw MMIO base address.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `base` is the correctly mapped and
    /// aligned address of the PRM instance register file and that it
    /// remains valid for the lifetime of the returned structure.
    pub unsafe fn from_mmio(base: NonNull<u8>, config: PrmConfig, osal: O) -> Self {
        Self::new(
            PrmRegisters::new(unsafe { MmioSpace::new(base) }),
            config,
            osal,
        )
    }
}
