//! Chip-variant configuration for the PRM layer.
//!
//! Generation-specific behavior is resolved once, at construction, into a
//! [`PrmConfig`] descriptor that the accessors consult, instead of being
//! queried from the platform on every call.

use static_assertions::const_assert;

use crate::registers::consts::{
    OMAP3430_VP1_TRANXDONE_ST_MASK, OMAP3430_VP2_TRANXDONE_ST_MASK,
    OMAP3630_ABB_LDO_TRANXDONE_ST_MASK,
};

/// SoC generations the platform identification step can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChipGeneration {
    Omap2420,
    Omap2430,
    Omap3430,
    Omap3630,
    /// Next-generation PRM with an incompatible instance layout. Recognized
    /// so that misdirected calls fail with
    /// [`PrmError::InvalidChip`](crate::PrmError::InvalidChip) instead of
    /// touching the wrong registers.
    Omap4430,
}

impl ChipGeneration {
    /// Whether the shared OMAP2/3 RM_RSTCTRL/RM_RSTST module layout
    /// applies to this generation.
    pub const fn has_module_hardreset(self) -> bool {
        matches!(
            self,
            Self::Omap2420 | Self::Omap2430 | Self::Omap3430 | Self::Omap3630
        )
    }

    /// Voltage processors exist from OMAP3430 on.
    pub const fn has_vp(self) -> bool {
        matches!(self, Self::Omap3430 | Self::Omap3630)
    }

    /// Adaptive body bias is an OMAP3630 addition, on the MPU rail only.
    pub const fn has_abb(self) -> bool {
        matches!(self, Self::Omap3630)
    }
}

/// Identifiers for the independently regulated voltage rails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum VddRail {
    Mpu = 0,
    Core = 1,
}

/// Number of rails with a slot in the PRM interrupt status register.
pub const VDD_RAIL_COUNT: usize = 2;

/// Transaction-done status masks for one voltage rail, as laid out in
/// PRM_IRQSTATUS_MPU.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrmIrq {
    /// VP_TRANXDONE_ST bitmask for the rail's voltage processor.
    pub vp_tranxdone_status: u32,
    /// ABB_TRANXDONE_ST bitmask; zero on rails and generations without
    /// adaptive body bias.
    pub abb_tranxdone_status: u32,
}

const OMAP3430_PRM_IRQS: [PrmIrq; VDD_RAIL_COUNT] = [
    PrmIrq {
        vp_tranxdone_status: OMAP3430_VP1_TRANXDONE_ST_MASK,
        abb_tranxdone_status: 0,
    },
    PrmIrq {
        vp_tranxdone_status: OMAP3430_VP2_TRANXDONE_ST_MASK,
        abb_tranxdone_status: 0,
    },
];

const OMAP3630_PRM_IRQS: [PrmIrq; VDD_RAIL_COUNT] = [
    PrmIrq {
        vp_tranxdone_status: OMAP3430_VP1_TRANXDONE_ST_MASK,
        abb_tranxdone_status: OMAP3630_ABB_LDO_TRANXDONE_ST_MASK,
    },
    // no abb for core
    PrmIrq {
        vp_tranxdone_status: OMAP3430_VP2_TRANXDONE_ST_MASK,
        abb_tranxdone_status: 0,
    },
];

// The rails share one status register; their masks must not overlap.
const_assert!(OMAP3430_VP1_TRANXDONE_ST_MASK & OMAP3430_VP2_TRANXDONE_ST_MASK == 0);
const_assert!(
    OMAP3630_ABB_LDO_TRANXDONE_ST_MASK
        & (OMAP3430_VP1_TRANXDONE_ST_MASK | OMAP3430_VP2_TRANXDONE_ST_MASK)
        == 0
);

/// PRM instance configuration, resolved once at construction.
#[derive(Debug, Clone)]
pub struct PrmConfig {
    pub generation: ChipGeneration,
    /// Per-rail transaction status masks, indexed by [`VddRail`].
    pub irqs: [PrmIrq; VDD_RAIL_COUNT],
}

impl PrmConfig {
    pub fn new(generation: ChipGeneration) -> Self {
        let irqs = match generation {
            ChipGeneration::Omap3430 => OMAP3430_PRM_IRQS,
            ChipGeneration::Omap3630 => OMAP3630_PRM_IRQS,
            // No voltage processors; lookups stay valid and report
            // "transaction not done".
            ChipGeneration::Omap2420 | ChipGeneration::Omap2430 | ChipGeneration::Omap4430 => {
                [PrmIrq::default(); VDD_RAIL_COUNT]
            }
        };

        Self { generation, irqs }
    }
}
