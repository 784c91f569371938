//! Voltage processor and adaptive-body-bias transaction status handling.
//!
//! When a VP finishes moving a rail to a new voltage it raises a
//! TRANXDONE status bit in the shared PRM_IRQSTATUS_MPU register; the
//! voltage scaling code polls and acknowledges it through this layer. The
//! per-rail masks come from the [`PrmConfig`](crate::PrmConfig) table
//! resolved at construction.

use crate::config::VddRail;
use crate::osal::Osal;
use crate::registers::consts::{OCP_MOD, OMAP3430_GR_MOD, OMAP3_PRM_IRQSTATUS_MPU_OFFSET};
use crate::registers::RegisterIo;
use crate::Prm;

impl<IO: RegisterIo, O: Osal> Prm<IO, O> {
    /// Whether the rail's voltage processor has signalled transaction
    /// completion.
    ///
    /// Rails on generations without a VP carry a zero mask and always
    /// report `false`.
    pub fn vp_check_txdone(&self, rail: VddRail) -> bool {
        let irq = &self.config.irqs[rail as usize];
        let irqstatus = self
            .regs
            .read_mod_reg(OCP_MOD, OMAP3_PRM_IRQSTATUS_MPU_OFFSET);

        irqstatus & irq.vp_tranxdone_status != 0
    }

    /// Acknowledge the rail's VP transaction-done status
    /// (write-1-to-clear).
    pub fn vp_clear_txdone(&self, rail: VddRail) {
        let irq = &self.config.irqs[rail as usize];
        self.regs.write_mod_reg(
            irq.vp_tranxdone_status,
            OCP_MOD,
            OMAP3_PRM_IRQSTATUS_MPU_OFFSET,
        );
    }

    /// Whether the rail's ABB LDO has signalled transaction completion.
    ///
    /// Only meaningful where
    /// [`ChipGeneration::has_abb`](crate::ChipGeneration::has_abb) holds
    /// and the rail carries an ABB mask; elsewhere the mask is zero and
    /// this reports `false` unconditionally.
    pub fn abb_check_txdone(&self, rail: VddRail) -> bool {
        let irq = &self.config.irqs[rail as usize];
        let irqstatus = self
            .regs
            .read_mod_reg(OCP_MOD, OMAP3_PRM_IRQSTATUS_MPU_OFFSET);

        irqstatus & irq.abb_tranxdone_status != 0
    }

    /// Acknowledge the rail's ABB transaction-done status
    /// (write-1-to-clear). A hardware no-op on rails without ABB.
    pub fn abb_clear_txdone(&self, rail: VddRail) {
        let irq = &self.config.irqs[rail as usize];
        self.regs.write_mod_reg(
            irq.abb_tranxdone_status,
            OCP_MOD,
            OMAP3_PRM_IRQSTATUS_MPU_OFFSET,
        );
    }

    /// Read a register in the voltage controller / voltage processor
    /// group.
    pub fn vcvp_read(&self, offset: u16) -> u32 {
        self.regs.read_mod_reg(OMAP3430_GR_MOD, offset)
    }

    /// Write a register in the voltage controller / voltage processor
    /// group.
    pub fn vcvp_write(&self, value: u32, offset: u16) {
        self.regs.write_mod_reg(value, OMAP3430_GR_MOD, offset);
    }

    /// Read-modify-write a register in the voltage controller / voltage
    /// processor group.
    pub fn vcvp_rmw(&self, mask: u32, bits: u32, offset: u16) -> u32 {
        self.regs.rmw_mod_reg_bits(mask, bits, OMAP3430_GR_MOD, offset)
    }
}
