//! Register routing across split PRCM base regions.
//!
//! One board variant spreads the clock-management register space over
//! several independently mapped regions. Accesses carry a base selector
//! in the upper bits of the module offset; the router decodes it and
//! dispatches the raw access to the matching region. A selector backed by
//! no region is a typed error rather than a silent no-op, so callers see
//! failed routing instead of losing writes.

use crate::registers::RegisterIo;
use crate::PrmError;

/// Selector for the default (CM) base region.
pub const DEFAULT_BASE: u8 = 0x0;
/// Selector for the PRM base region.
pub const PRM_BASE: u8 = 0x1;
/// Selector defined by the encoding but backed by no region here; routing
/// to it fails with [`PrmError::UnknownBase`].
pub const PRCM_MPU_BASE: u8 = 0x2;
/// Selector for the secondary CM base region.
pub const CM2_BASE: u8 = 0x3;

/// Bit position of the base selector within an encoded module offset.
pub const BASE_ID_SHIFT: u32 = 13;
/// Width mask of the base selector.
pub const BASE_ID_MASK: u16 = 0x3;
/// Mask selecting the true module offset below the selector.
pub const MOD_MASK: u16 = 0x1fff;

/// Encode a module offset for a given base region.
pub const fn encode_mod(base: u8, module: u16) -> i16 {
    ((((base as u16) & BASE_ID_MASK) << BASE_ID_SHIFT) | (module & MOD_MASK)) as i16
}

/// Routes module register accesses to the base region encoded in the
/// module offset argument.
pub struct PrcmRouter<IO> {
    cm: IO,
    prm: IO,
    cm2: IO,
}

impl<IO: RegisterIo> PrcmRouter<IO> {
    pub const fn new(cm: IO, prm: IO, cm2: IO) -> Self {
        Self { cm, prm, cm2 }
    }

    /// The selector rides in the magnitude so that plain signed module
    /// offsets decode to the default region.
    fn decode(module: i16) -> (u8, isize) {
        let base = (module.unsigned_abs() >> BASE_ID_SHIFT) as u8;
        let module = ((module as u16) & MOD_MASK) as isize;

        (base, module)
    }

    fn region(&self, base: u8) -> Result<&IO, PrmError> {
        match base {
            PRM_BASE => Ok(&self.prm),
            CM2_BASE => Ok(&self.cm2),
            DEFAULT_BASE => Ok(&self.cm),
            _ => {
                error!("unknown PRCM submodule base {:#x}", base);
                Err(PrmError::UnknownBase(base))
            }
        }
    }

    /// Read a register in a routed CM module.
    pub fn read_mod_reg(&self, module: i16, idx: u16) -> Result<u32, PrmError> {
        let (base, module) = Self::decode(module);

        Ok(self.region(base)?.read(module + idx as isize))
    }

    /// Write a register in a routed CM module.
    pub fn write_mod_reg(&self, value: u32, module: i16, idx: u16) -> Result<(), PrmError> {
        let (base, module) = Self::decode(module);

        self.region(base)?.write(module + idx as isize, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::consts::CORE_MOD;
    use crate::testutil::FakeSpace;

    fn router<'a>(
        cm: &'a FakeSpace,
        prm: &'a FakeSpace,
        cm2: &'a FakeSpace,
    ) -> PrcmRouter<&'a FakeSpace> {
        PrcmRouter::new(cm, prm, cm2)
    }

    #[test]
    fn plain_module_offsets_hit_the_default_region() {
        let (cm, prm, cm2) = (FakeSpace::new(), FakeSpace::new(), FakeSpace::new());
        let router = router(&cm, &prm, &cm2);

        router.write_mod_reg(0xaa55, CORE_MOD, 0x10).unwrap();

        assert_eq!(cm.word(CORE_MOD as isize + 0x10), 0xaa55);
        assert_eq!(prm.write_count() + cm2.write_count(), 0);
        assert_eq!(router.read_mod_reg(CORE_MOD, 0x10), Ok(0xaa55));
    }

    #[test]
    fn encoded_selectors_dispatch_to_their_region() {
        let (cm, prm, cm2) = (FakeSpace::new(), FakeSpace::new(), FakeSpace::new());
        let router = router(&cm, &prm, &cm2);

        let prm_core = encode_mod(PRM_BASE, CORE_MOD as u16);
        let cm2_core = encode_mod(CM2_BASE, CORE_MOD as u16);

        router.write_mod_reg(1, prm_core, 0x10).unwrap();
        router.write_mod_reg(2, cm2_core, 0x10).unwrap();

        assert_eq!(prm.word(CORE_MOD as isize + 0x10), 1);
        assert_eq!(cm2.word(CORE_MOD as isize + 0x10), 2);
        assert_eq!(cm.write_count(), 0);
        assert_eq!(router.read_mod_reg(prm_core, 0x10), Ok(1));
        assert_eq!(router.read_mod_reg(cm2_core, 0x10), Ok(2));
    }

    #[test]
    fn unknown_selector_is_a_typed_error_and_mutates_nothing() {
        let (cm, prm, cm2) = (FakeSpace::new(), FakeSpace::new(), FakeSpace::new());
        let router = router(&cm, &prm, &cm2);

        let unmapped = encode_mod(PRCM_MPU_BASE, CORE_MOD as u16);

        assert_eq!(
            router.write_mod_reg(0xdead, unmapped, 0x10),
            Err(PrmError::UnknownBase(PRCM_MPU_BASE))
        );
        assert_eq!(
            router.read_mod_reg(unmapped, 0x10),
            Err(PrmError::UnknownBase(PRCM_MPU_BASE))
        );
        assert_eq!(cm.write_count() + prm.write_count() + cm2.write_count(), 0);
    }
}
