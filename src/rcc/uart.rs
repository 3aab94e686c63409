//! UART clock gating
//!
//! The high-speed USART sits on the APB2 bus, so its clock gate lives in
//! `APB2ENR`. The low-power UARTs on APB1 are not part of this crate.

use crate::ral;

/// USART1 mask, per the `APB2ENR` bit assignment
pub const USART1: u32 = 1 << 14;

/// Enable clocks for the UART peripherals set in `uarts`
///
/// ORs `uarts` into `APB2ENR`. Peripherals that are already clocked stay
/// clocked, whether or not they appear in `uarts`. That includes non-UART
/// peripherals whose gates share the register.
///
/// # Safety
///
/// This could be called by anyone who can address the RCC register block,
/// from any execution context. Two overlapping calls race on the
/// read-modify-write and one caller's bits can be lost. Consider the
/// [`Handle`](crate::rcc::Handle) API, which requires exclusive access.
pub unsafe fn enable(rcc: *const ral::rcc::RegisterBlock, uarts: u32) {
    ral::modify_reg!(crate::ral::rcc, rcc, APB2ENR, |apb2enr| apb2enr | uarts);
}

#[cfg(test)]
mod tests {
    use crate::rcc::tests::zeroed_rcc;

    #[test]
    fn masks_accumulate() {
        let rcc = zeroed_rcc();
        unsafe {
            super::enable(&rcc, super::USART1);
            super::enable(&rcc, 1 << 0);
        }
        assert_eq!(rcc.APB2ENR.read(), super::USART1 | 1);
    }

    #[test]
    fn other_gates_in_the_register_survive() {
        // A bit another caller set earlier, e.g. SYSCFGEN
        let rcc = zeroed_rcc();
        rcc.APB2ENR.write(1 << 0);

        unsafe { super::enable(&rcc, super::USART1) };
        assert_eq!(rcc.APB2ENR.read(), super::USART1 | 1);
    }
}
