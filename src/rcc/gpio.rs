//! GPIO port clock gating
//!
//! GPIO clocks hang off the `IOPENR` register; each bit gates one port.

use crate::ral;

/// Port masks, per the `IOPENR` bit assignment
pub mod port {
    /// Port A
    pub const A: u32 = 1 << 0;
    /// Port B
    pub const B: u32 = 1 << 1;
    /// Port C
    pub const C: u32 = 1 << 2;
    /// Port D
    pub const D: u32 = 1 << 3;
    /// Port E
    pub const E: u32 = 1 << 4;
    /// Port H
    pub const H: u32 = 1 << 7;
}

/// Enable clocks for the GPIO ports set in `ports`
///
/// ORs `ports` into `IOPENR`. Ports that are already clocked stay clocked,
/// whether or not they appear in `ports`. Bits with no port behind them are
/// written through as-is; what the hardware does with a reserved bit is the
/// hardware's business.
///
/// # Safety
///
/// This could be called by anyone who can address the RCC register block,
/// from any execution context. Two overlapping calls race on the
/// read-modify-write and one caller's bits can be lost. Consider the
/// [`Handle`](crate::rcc::Handle) API, which requires exclusive access.
pub unsafe fn enable(rcc: *const ral::rcc::RegisterBlock, ports: u32) {
    ral::modify_reg!(crate::ral::rcc, rcc, IOPENR, |iopenr| iopenr | ports);
}

#[cfg(test)]
mod tests {
    use crate::rcc::tests::zeroed_rcc;

    #[test]
    fn masks_accumulate() {
        let rcc = zeroed_rcc();
        unsafe {
            super::enable(&rcc, super::port::A);
            super::enable(&rcc, super::port::C | super::port::H);
        }
        assert_eq!(
            rcc.IOPENR.read(),
            super::port::A | super::port::C | super::port::H
        );
    }

    #[test]
    fn zero_mask_changes_nothing() {
        let rcc = zeroed_rcc();
        unsafe {
            super::enable(&rcc, super::port::B);
            super::enable(&rcc, 0);
        }
        assert_eq!(rcc.IOPENR.read(), super::port::B);
    }

    #[test]
    fn reenabling_a_port_is_idempotent() {
        let rcc = zeroed_rcc();
        unsafe {
            super::enable(&rcc, super::port::A);
            super::enable(&rcc, super::port::A);
        }
        assert_eq!(rcc.IOPENR.read(), super::port::A);
    }
}
