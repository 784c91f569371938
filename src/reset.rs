//! Hardreset control for PRM submodules.
//!
//! IPs such as the DSP or IVA contain processors behind dedicated
//! hardware reset lines, possibly several per IP, each resetting a
//! different submodule of the block. Releasing one is a sequenced
//! operation against the owning module's RM_RSTCTRL/RM_RSTST register
//! pair.

use crate::osal::{test_timeout, Osal};
use crate::registers::consts::{MAX_MODULE_HARDRESET_WAIT, OMAP2_RM_RSTCTRL, OMAP2_RM_RSTST};
use crate::registers::RegisterIo;
use crate::{Prm, PrmError};

impl<IO: RegisterIo, O: Osal> Prm<IO, O> {
    fn ensure_hardreset_layout(&self) -> Result<(), PrmError> {
        if self.config.generation.has_module_hardreset() {
            Ok(())
        } else {
            Err(PrmError::InvalidChip)
        }
    }

    /// Read the state of a submodule hardreset line.
    ///
    /// Returns `true` while the line is asserted, i.e. the submodule is
    /// held in reset.
    pub fn is_hardreset_asserted(&self, prm_mod: i16, shift: u8) -> Result<bool, PrmError> {
        self.ensure_hardreset_layout()?;

        Ok(self
            .regs
            .read_mod_bits_shift(prm_mod, OMAP2_RM_RSTCTRL, 1 << shift)
            != 0)
    }

    /// Place a submodule into reset by asserting its hardreset line.
    ///
    /// Assertion takes effect immediately; there is nothing to wait for.
    pub fn assert_hardreset(&self, prm_mod: i16, shift: u8) -> Result<(), PrmError> {
        self.ensure_hardreset_layout()?;

        let mask = 1 << shift;
        self.regs
            .rmw_mod_reg_bits(mask, mask, prm_mod, OMAP2_RM_RSTCTRL);

        Ok(())
    }

    /// Take a submodule out of reset and wait until the PRM indicates
    /// that the reset sequence completed.
    ///
    /// The stale completion status is acknowledged *before* the control
    /// bit is cleared: the status bit latches only on a fresh
    /// reset-to-running transition, and clearing it afterwards would race
    /// the hardware setting it.
    ///
    /// Fails with [`PrmError::AlreadyDeasserted`] if the line is not
    /// currently asserted (nothing is written in that case), and with
    /// [`PrmError::Timeout`] if the submodule does not signal completion
    /// within [`MAX_MODULE_HARDRESET_WAIT`] microseconds. On timeout the
    /// control line has still been deasserted; the write is not revoked.
    pub fn deassert_hardreset(
        &self,
        prm_mod: i16,
        rst_shift: u8,
        st_shift: u8,
    ) -> Result<(), PrmError> {
        self.ensure_hardreset_layout()?;

        let rst: u32 = 1 << rst_shift;
        let st: u32 = 1 << st_shift;

        // Check the current state to avoid de-asserting the line twice.
        if self
            .regs
            .read_mod_bits_shift(prm_mod, OMAP2_RM_RSTCTRL, rst)
            == 0
        {
            return Err(PrmError::AlreadyDeasserted);
        }

        // Acknowledge any stale completion status, then release the line
        // and wait for the fresh status to latch.
        self.regs
            .rmw_mod_reg_bits(0xffff_ffff, st, prm_mod, OMAP2_RM_RSTST);
        self.regs.rmw_mod_reg_bits(rst, 0, prm_mod, OMAP2_RM_RSTCTRL);

        let done = test_timeout(&self.osal, MAX_MODULE_HARDRESET_WAIT, || {
            self.regs.read_mod_bits_shift(prm_mod, OMAP2_RM_RSTST, st) != 0
        });

        if done {
            Ok(())
        } else {
            error!(
                "PRM: submodule in module {:#x} did not leave reset within {} us",
                prm_mod, MAX_MODULE_HARDRESET_WAIT
            );
            Err(PrmError::Timeout)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::registers::consts::{CORE_MOD, OMAP2_RM_RSTCTRL, OMAP2_RM_RSTST};
    use crate::testutil::{FakeSpace, LatchingDelay};
    use crate::{ChipGeneration, Prm, PrmConfig, PrmError, PrmRegisters};

    const RST_SHIFT: u8 = 1;
    const ST_SHIFT: u8 = 2;
    const RSTCTRL: isize = CORE_MOD as isize + OMAP2_RM_RSTCTRL as isize;
    const RSTST: isize = CORE_MOD as isize + OMAP2_RM_RSTST as isize;

    fn prm<'a>(
        space: &'a FakeSpace,
        generation: ChipGeneration,
        latch_after_us: Option<u32>,
    ) -> Prm<&'a FakeSpace, LatchingDelay<'a>> {
        space.mark_w1c(RSTST);
        let osal = LatchingDelay::new(space, RSTST, 1 << ST_SHIFT, latch_after_us);
        Prm::new(PrmRegisters::new(space), PrmConfig::new(generation), osal)
    }

    #[test]
    fn query_reflects_the_control_bit() {
        let space = FakeSpace::new();
        let prm = prm(&space, ChipGeneration::Omap3430, None);

        assert_eq!(prm.is_hardreset_asserted(CORE_MOD, RST_SHIFT), Ok(false));
        prm.assert_hardreset(CORE_MOD, RST_SHIFT).unwrap();
        assert_eq!(prm.is_hardreset_asserted(CORE_MOD, RST_SHIFT), Ok(true));
        assert_eq!(space.word(RSTCTRL), 1 << RST_SHIFT);
    }

    #[test]
    fn deassert_when_already_released_writes_nothing() {
        let space = FakeSpace::new();
        let prm = prm(&space, ChipGeneration::Omap2420, None);

        assert_eq!(
            prm.deassert_hardreset(CORE_MOD, RST_SHIFT, ST_SHIFT),
            Err(PrmError::AlreadyDeasserted)
        );
        assert_eq!(space.write_count(), 0);
    }

    #[test]
    fn deassert_clears_status_before_control_and_waits_for_completion() {
        let space = FakeSpace::new();
        // Stale completion status from an earlier cycle.
        space.set_word(RSTST, 1 << ST_SHIFT);
        space.set_word(RSTCTRL, 1 << RST_SHIFT);
        let prm = prm(&space, ChipGeneration::Omap3630, Some(3));

        assert_eq!(prm.deassert_hardreset(CORE_MOD, RST_SHIFT, ST_SHIFT), Ok(()));

        // The control bit was released and the hardware's completion latch
        // was observed after the scripted 3 us.
        assert_eq!(space.word(RSTCTRL), 0);
        assert_eq!(prm.osal.elapsed_us(), 3);

        // Ordering: the status acknowledge must hit the bus before the
        // control deassert.
        let writes = space.writes();
        assert_eq!(writes[0].offset, RSTST);
        assert_eq!(writes[0].value, 1 << ST_SHIFT);
        assert_eq!(writes[1].offset, RSTCTRL);
        assert_eq!(writes[1].value & (1 << RST_SHIFT), 0);
    }

    #[test]
    fn deassert_times_out_but_leaves_the_line_released() {
        let space = FakeSpace::new();
        space.set_word(RSTCTRL, 1 << RST_SHIFT);
        let prm = prm(&space, ChipGeneration::Omap3430, None);

        assert_eq!(
            prm.deassert_hardreset(CORE_MOD, RST_SHIFT, ST_SHIFT),
            Err(PrmError::Timeout)
        );
        assert_eq!(space.word(RSTCTRL), 0);
    }

    #[test]
    fn unsupported_generation_is_rejected_before_any_access() {
        let space = FakeSpace::new();
        space.set_word(RSTCTRL, 1 << RST_SHIFT);
        let prm = prm(&space, ChipGeneration::Omap4430, None);

        assert_eq!(
            prm.is_hardreset_asserted(CORE_MOD, RST_SHIFT),
            Err(PrmError::InvalidChip)
        );
        assert_eq!(
            prm.assert_hardreset(CORE_MOD, RST_SHIFT),
            Err(PrmError::InvalidChip)
        );
        assert_eq!(
            prm.deassert_hardreset(CORE_MOD, RST_SHIFT, ST_SHIFT),
            Err(PrmError::InvalidChip)
        );
        assert_eq!(space.write_count(), 0);
    }
}
