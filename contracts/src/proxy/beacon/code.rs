//! Creation code of a minimal EVM beacon proxy.
//!
//! The proxy is plain EVM bytecode, independent of any Stylus program, so it
//! can be deployed with a raw `CREATE` and needs no activation. Its runtime:
//!
//! 1. `STATICCALL`s `implementation()` on the beacon embedded in the code.
//!    A failing beacon call bubbles its revert data up.
//! 2. `DELEGATECALL`s the whole calldata to the returned address.
//! 3. Returns or reverts with the delegate's return data.
//!
//! The beacon lives in the code rather than in a storage slot, so every slot
//! of the proxy belongs to the implementation.
use alloc::vec::Vec;

use alloy_primitives::Address;

/// Selector of `implementation()`.
pub const IMPLEMENTATION_SELECTOR: [u8; 4] = [0x5c, 0x60, 0xda, 0x1b];

/// Offset of the beacon address inside [`RUNTIME`].
const BEACON_OFFSET: usize = 0x14;

const ADDRESS_BYTES: usize = 20;

/// Runtime code, with a zeroed placeholder where the beacon goes.
#[rustfmt::skip]
const RUNTIME: [u8; 0x5b] = [
    // mstore(0, shl(0xe0, IMPLEMENTATION_SELECTOR))
    0x63, 0x5c, 0x60, 0xda, 0x1b,
    0x60, 0xe0,
    0x1b,
    0x60, 0x00,
    0x52,
    // staticcall(gas, beacon, 0, 4, 0, 0x20)
    0x60, 0x20,
    0x60, 0x00,
    0x60, 0x04,
    0x60, 0x00,
    0x73,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x5a,
    0xfa,
    // if iszero(success) { jump(bubble) }
    0x15,
    0x60, 0x51,
    0x57,
    // implementation := mload(0)
    0x60, 0x00,
    0x51,
    // calldatacopy(0, 0, calldatasize)
    0x36,
    0x60, 0x00,
    0x80,
    0x37,
    // delegatecall(gas, implementation, 0, calldatasize, 0, 0)
    0x60, 0x00,
    0x60, 0x00,
    0x36,
    0x60, 0x00,
    0x84,
    0x5a,
    0xf4,
    // returndatacopy(0, 0, returndatasize)
    0x3d,
    0x60, 0x00,
    0x80,
    0x3e,
    // if success { jump(ok) }
    0x60, 0x4c,
    0x57,
    // revert(0, returndatasize)
    0x3d,
    0x60, 0x00,
    0xfd,
    // ok: return(0, returndatasize)
    0x5b,
    0x3d,
    0x60, 0x00,
    0xf3,
    // bubble: returndatacopy(0, 0, returndatasize) revert(0, returndatasize)
    0x5b,
    0x3d,
    0x60, 0x00,
    0x80,
    0x3e,
    0x3d,
    0x60, 0x00,
    0xfd,
];

/// Constructor code, copying [`RUNTIME`] (appended right after it) into
/// memory and returning it.
#[rustfmt::skip]
const CONSTRUCTOR: [u8; 0x0b] = [
    // codecopy(0, CONSTRUCTOR.len(), RUNTIME.len())
    0x60, 0x5b,
    0x80,
    0x60, 0x0b,
    0x60, 0x00,
    0x39,
    // return(0, RUNTIME.len())
    0x60, 0x00,
    0xf3,
];

/// Bytecode of a beacon proxy bound to a single beacon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeaconProxyCode {
    beacon: Address,
}

impl BeaconProxyCode {
    /// Creates the code of a proxy delegating through `beacon`.
    #[must_use]
    pub const fn new(beacon: Address) -> Self {
        Self { beacon }
    }

    /// The beacon the proxy asks for its implementation.
    #[must_use]
    pub const fn beacon(&self) -> Address {
        self.beacon
    }

    /// Runtime code left at the proxy address after deployment.
    #[must_use]
    pub fn runtime_code(&self) -> Vec<u8> {
        let mut code = RUNTIME.to_vec();
        code[BEACON_OFFSET..BEACON_OFFSET + ADDRESS_BYTES]
            .copy_from_slice(self.beacon.as_slice());
        code
    }

    /// Creation code, to be passed to `CREATE`.
    #[must_use]
    pub fn init_code(&self) -> Vec<u8> {
        let mut code = Vec::with_capacity(CONSTRUCTOR.len() + RUNTIME.len());
        code.extend_from_slice(&CONSTRUCTOR);
        code.extend_from_slice(&self.runtime_code());
        code
    }
}
