//! Reset and clock control (RCC)
//!
//! The `rcc` module turns peripheral clock gates on; turning them back off
//! is not exposed. Construct a [`Handle`] early in initialization, since the
//! peripheral drivers depend on their clocks before touching their own
//! registers:
//!
//! ```no_run
//! use stm32l0_rcc::{ral, rcc};
//!
//! let mut rcc = ral::rcc::Instance::take().map(rcc::Handle::new).unwrap();
//! rcc.enable_gpio_clocks(rcc::gpio::port::B);
//! ```
//!
//! A clock-enable register is shared state: every call reads the register,
//! ORs in the caller's mask, and writes it back. [`Handle`] takes
//! `&mut self` so that read-modify-write cannot interleave with another
//! caller through the safe API. The `unsafe` free functions
//! ([`gpio::enable`], [`uart::enable`]) make no such guarantee.

#[cfg(feature = "gpio")]
#[cfg_attr(docsrs, doc(cfg(feature = "gpio")))]
pub mod gpio;
#[cfg(feature = "uart")]
#[cfg_attr(docsrs, doc(cfg(feature = "uart")))]
pub mod uart;

use crate::ral;

/// Handle to the RCC register block
///
/// The handle owns the clock-enable registers. An enable call has no
/// observable success or failure at this layer; the peripheral answering on
/// its own registers afterwards is the only confirmation, and checking for
/// it belongs to the peripheral's driver.
pub struct Handle(pub(crate) ral::rcc::Instance);

impl Handle {
    /// Construct the handle from the RAL's RCC instance
    pub const fn new(rcc: ral::rcc::Instance) -> Self {
        Handle(rcc)
    }

    /// Enable clocks for the GPIO ports set in `ports`
    ///
    /// Each set bit clocks one port, per the `IOPENR` bit assignment; the
    /// [`gpio::port`] constants name it. Ports that are already clocked stay
    /// clocked, whether or not they appear in `ports`.
    #[cfg(feature = "gpio")]
    #[cfg_attr(docsrs, doc(cfg(feature = "gpio")))]
    pub fn enable_gpio_clocks(&mut self, ports: u32) {
        unsafe { gpio::enable(&*self.0, ports) }
    }

    /// Enable clocks for the UART peripherals set in `uarts`
    ///
    /// Each set bit clocks one peripheral, per the `APB2ENR` bit assignment
    /// ([`uart::USART1`] names the one USART hosted there). Peripherals that
    /// are already clocked stay clocked, whether or not they appear in
    /// `uarts`.
    #[cfg(feature = "uart")]
    #[cfg_attr(docsrs, doc(cfg(feature = "uart")))]
    pub fn enable_uart_clocks(&mut self, uarts: u32) {
        unsafe { uart::enable(&*self.0, uarts) }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::ral::rcc::RegisterBlock;
    use core::mem::MaybeUninit;

    /// An in-memory register block in its reset state; the enable registers
    /// reset to zero on this part.
    pub(crate) fn zeroed_rcc() -> RegisterBlock {
        unsafe { MaybeUninit::zeroed().assume_init() }
    }

    #[cfg(all(feature = "gpio", feature = "uart"))]
    #[test]
    fn enables_target_their_own_register() {
        let rcc = zeroed_rcc();

        unsafe { super::gpio::enable(&rcc, 0x01) };
        assert_eq!(rcc.IOPENR.read(), 0x01);
        assert_eq!(rcc.APB2ENR.read(), 0x00);

        unsafe { super::uart::enable(&rcc, 0x04) };
        assert_eq!(rcc.APB2ENR.read(), 0x04);
        assert_eq!(rcc.IOPENR.read(), 0x01);

        unsafe { super::gpio::enable(&rcc, 0x02) };
        assert_eq!(rcc.IOPENR.read(), 0x03);
        assert_eq!(rcc.APB2ENR.read(), 0x04);
    }

    #[cfg(all(feature = "gpio", feature = "uart"))]
    #[test]
    fn neighboring_registers_are_untouched() {
        let rcc = zeroed_rcc();

        unsafe {
            super::gpio::enable(&rcc, 0xFFFF_FFFF);
            super::uart::enable(&rcc, 0xFFFF_FFFF);
        }

        assert_eq!(rcc.IOPRSTR.read(), 0);
        assert_eq!(rcc.APB2RSTR.read(), 0);
        assert_eq!(rcc.AHBENR.read(), 0);
        assert_eq!(rcc.APB1ENR.read(), 0);
    }
}
