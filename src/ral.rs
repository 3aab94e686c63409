//! Register access layer for the RCC
//!
//! The register map follows the STM32L0 reference manual. The block sits at
//! a fixed address that never changes at runtime; [`rcc::Instance::take`]
//! hands out the hardware view exactly once.
//!
//! Register access goes through the `ral-registers` cells and macros,
//! re-exported here. A register write is a single aligned volatile store;
//! no fences or atomics are layered on top of what the bus provides.

pub use ral_registers::{modify_reg, read_reg, write_reg, RWRegister};

pub mod rcc {
    //! RCC register block and instance

    use core::ops::Deref;

    use ral_registers::RWRegister;

    /// RCC register map, through the peripheral clock-enable registers
    ///
    /// The view stops after `APB1ENR`; the sleep-mode enables and the
    /// control/status register that follow are never touched by this crate.
    #[allow(non_snake_case)]
    #[repr(C)]
    pub struct RegisterBlock {
        /// Clock control register (offset 0x00)
        pub CR: RWRegister<u32>,
        /// Internal clock sources calibration register (0x04)
        pub ICSCR: RWRegister<u32>,
        /// Clock recovery RC register (0x08)
        pub CRRCR: RWRegister<u32>,
        /// Clock configuration register (0x0C)
        pub CFGR: RWRegister<u32>,
        /// Clock interrupt enable register (0x10)
        pub CIER: RWRegister<u32>,
        /// Clock interrupt flag register (0x14)
        pub CIFR: RWRegister<u32>,
        /// Clock interrupt clear register (0x18)
        pub CICR: RWRegister<u32>,
        /// GPIO reset register (0x1C)
        pub IOPRSTR: RWRegister<u32>,
        /// AHB peripheral reset register (0x20)
        pub AHBRSTR: RWRegister<u32>,
        /// APB2 peripheral reset register (0x24)
        pub APB2RSTR: RWRegister<u32>,
        /// APB1 peripheral reset register (0x28)
        pub APB1RSTR: RWRegister<u32>,
        /// GPIO clock enable register (0x2C)
        pub IOPENR: RWRegister<u32>,
        /// AHB peripheral clock enable register (0x30)
        pub AHBENR: RWRegister<u32>,
        /// APB2 peripheral clock enable register (0x34)
        pub APB2ENR: RWRegister<u32>,
        /// APB1 peripheral clock enable register (0x38)
        pub APB1ENR: RWRegister<u32>,
    }

    /// The RCC register block at its documented base address
    pub const RCC: *const RegisterBlock = 0x4002_1000 as *const RegisterBlock;

    /// An owned view onto the RCC register block
    ///
    /// `Instance` is neither `Send` nor `Sync`. Clock-enable calls from more
    /// than one execution context can race on the shared enable registers,
    /// so keep the instance in a single initialization context.
    pub struct Instance {
        addr: *const RegisterBlock,
    }

    impl Deref for Instance {
        type Target = RegisterBlock;
        fn deref(&self) -> &RegisterBlock {
            // Safety: the address is the hardware register block, valid
            // for the life of the process
            unsafe { &*self.addr }
        }
    }

    static TAKEN: crate::once::Once = crate::once::new();

    impl Instance {
        /// Acquire the RCC instance, if it hasn't already been taken
        pub fn take() -> Option<Instance> {
            TAKEN.call(|| Instance { addr: RCC })
        }

        /// Acquire the RCC instance without consulting [`take`](Instance::take)
        ///
        /// # Safety
        ///
        /// This may alias an `Instance` that `take` already handed out. The
        /// caller is responsible for making sure only one context performs
        /// read-modify-write sequences on the register block.
        pub const unsafe fn steal() -> Instance {
            Instance { addr: RCC }
        }
    }
}
