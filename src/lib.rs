//! Peripheral clock gating for STM32L0 microcontrollers
//!
//! `stm32l0-rcc` wraps the RCC (reset and clock control) register block and
//! exposes the registers that gate peripheral clocks. Peripheral drivers call
//! into this crate during their own setup: a GPIO port's or USART's
//! configuration registers are only safe to touch once its clock gate is on.
//!
//! Acquire the RCC instance once, early in initialization, then enable the
//! clocks your drivers need:
//!
//! ```no_run
//! use stm32l0_rcc::{ral, rcc};
//!
//! let mut rcc = ral::rcc::Instance::take().map(rcc::Handle::new).unwrap();
//!
//! // Clock the ports driving the LED and the button
//! rcc.enable_gpio_clocks(rcc::gpio::port::A | rcc::gpio::port::C);
//! // Clock USART1 before configuring its baud rate
//! rcc.enable_uart_clocks(rcc::uart::USART1);
//! ```
//!
//! Enabling is cumulative: each call ORs its mask into the enable register,
//! so peripherals that are already clocked stay clocked. Nothing in this
//! crate turns a clock gate back off.
//!
//! # Concurrency
//!
//! The RCC is processor-wide hardware state, and this crate adds no locking
//! on top of it. Exclusive access is expressed through ownership instead:
//! [`Instance`](ral::rcc::Instance) is handed out once, it is neither `Send`
//! nor `Sync`, and the safe [`Handle`](rcc::Handle) methods take `&mut self`.
//! The `unsafe` free functions bypass that discipline; see their safety
//! documentation before reaching for them.
//!
//! # Feature flags
//!
//! Each clock-gated peripheral class has its own feature, enabled by
//! default. Disable the crate's default features and pick the ones you
//! need:
//!
//! | Feature  | Gates              | Register  |
//! | -------- | ------------------ | --------- |
//! | `"gpio"` | GPIO ports A..H    | `IOPENR`  |
//! | `"uart"` | APB2-hosted USART  | `APB2ENR` |
//!
//! ## License
//!
//! Licensed under either of
//!
//! - [Apache License, Version 2.0](http://www.apache.org/licenses/LICENSE-2.0)
//! - [MIT License](http://opensource.org/licenses/MIT)
//!
//! at your option.
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted
//! for inclusion in the work by you, as defined in the Apache-2.0 license, shall be
//! dual licensed as above, without any additional terms or conditions.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod ral;
pub mod rcc;

/// A `once` sentinel, since it doesn't exist in `core::sync`.
///
/// Backs `Instance::take`: the hardware register block exists exactly once,
/// so the owned view onto it is handed out exactly once.
mod once {
    use core::sync::atomic::{AtomicBool, Ordering};
    pub struct Once(AtomicBool);
    pub const fn new() -> Once {
        Once(AtomicBool::new(false))
    }
    impl Once {
        pub fn call<R, F: FnOnce() -> R>(&self, f: F) -> Option<R> {
            let already_called = self.0.swap(true, Ordering::SeqCst);
            if already_called {
                None
            } else {
                Some(f())
            }
        }
    }
}
