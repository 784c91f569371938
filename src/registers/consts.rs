//! Module offsets, register indexes and bitmasks for the OMAP2/3 PRM and
//! CM instances. Names follow the TRM register set.

/// Module offsets shared by the PRM and CM instances on both generations.
pub const OCP_MOD: i16 = 0x000;
pub const MPU_MOD: i16 = 0x100;
pub const CORE_MOD: i16 = 0x200;
pub const GFX_MOD: i16 = 0x300;
pub const WKUP_MOD: i16 = 0x400;
pub const PLL_MOD: i16 = 0x500;

/// OMAP24xx-specific module offsets.
pub const OMAP24XX_GR_MOD: i16 = OCP_MOD;
pub const OMAP24XX_DSP_MOD: i16 = 0x800;
pub const OMAP2430_MDM_MOD: i16 = 0xc00;

/// OMAP3430-specific module offsets. IVA2 sits below the PRM base, which
/// is why module offsets are signed throughout this crate.
pub const OMAP3430_IVA2_MOD: i16 = -0x800;
pub const OMAP3430_DSS_MOD: i16 = 0x600;
pub const OMAP3430_CAM_MOD: i16 = 0x700;
pub const OMAP3430_PER_MOD: i16 = 0x800;
pub const OMAP3430_EMU_MOD: i16 = 0x900;
pub const OMAP3430_GR_MOD: i16 = 0xa00;
pub const OMAP3430_NEON_MOD: i16 = 0xb00;
pub const OMAP3430_USBHOST_MOD: i16 = 0xc00;

/// Per-module reset control register, one bit per hardreset line.
pub const OMAP2_RM_RSTCTRL: u16 = 0x50;
/// Per-module reset timing register.
pub const OMAP2_RM_RSTTIME: u16 = 0x54;
/// Per-module reset status register; bits latch on reset-to-running
/// transitions and are cleared by writing 1.
pub const OMAP2_RM_RSTST: u16 = 0x58;

/// PRM_IRQSTATUS_MPU register index within the OCP module.
pub const OMAP3_PRM_IRQSTATUS_MPU_OFFSET: u16 = 0x18;

/// VP1 (MPU rail) transaction-done status bit in PRM_IRQSTATUS_MPU.
pub const OMAP3430_VP1_TRANXDONE_ST_MASK: u32 = 1 << 15;
/// VP2 (CORE rail) transaction-done status bit in PRM_IRQSTATUS_MPU.
pub const OMAP3430_VP2_TRANXDONE_ST_MASK: u32 = 1 << 21;
/// ABB LDO transaction-done status bit; implemented on OMAP3630 only.
pub const OMAP3630_ABB_LDO_TRANXDONE_ST_MASK: u32 = 1 << 26;

/// Budget, in microseconds, for a submodule to signal that it left reset
/// after its hardreset line is deasserted.
pub const MAX_MODULE_HARDRESET_WAIT: u32 = 10_000;
