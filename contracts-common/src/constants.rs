//! Constants describing the on-chain layout of the contracts the scripts
//! administer

use alloy_primitives::{b256, B256};

/// The storage slot containing the implementation contract address in an
/// upgradeable proxy.
///
/// This is specified in EIP1967: https://eips.ethereum.org/EIPS/eip-1967#implementation-address
pub const PROXY_IMPLEMENTATION_STORAGE_SLOT: B256 =
    b256!("0x360894a13ba1a3210667c828492db98dca3e2076cc3735a920a3ca505d382bbc");

/// The storage slot containing the proxy admin contract address in an
/// upgradeable proxy.
///
/// This is specified in EIP1967: https://eips.ethereum.org/EIPS/eip-1967#admin-address
pub const PROXY_ADMIN_STORAGE_SLOT: B256 =
    b256!("0xb53127684a568b3173ae13b9f8a6016e243e63b6e8ee1178d6a717850b5d6103");

/// The number of bytes stored in a single storage slot
pub const NUM_BYTES_STORAGE_SLOT: usize = 32;

/// The number of bytes in an Ethereum address
pub const NUM_BYTES_ADDRESS: usize = 20;

/// The number of bytes in a function selector
pub const NUM_BYTES_SELECTOR: usize = 4;

/// The number of bytes in an ECDSA signature as the Safe contract expects it,
/// the concatenation of `r`, `s`, and a 1-byte `v`
pub const NUM_BYTES_SIGNATURE: usize = 65;
