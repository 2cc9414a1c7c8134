//! Helpers for routing one-off migration calls through a Gnosis Safe

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use contracts_common::constants::{NUM_BYTES_ADDRESS, NUM_BYTES_SIGNATURE};

use crate::solidity::{IERC20, IHolder};

/// The offset of the owner address within the signature's `r` component
const OWNER_OFFSET: usize = 12;

/// The `operation` value for a plain CALL in a Safe transaction
pub const SAFE_OPERATION_CALL: u8 = 0;

/// The Safe signature bytes for a transaction submitted by an owner: the
/// owner address left-padded to 32 bytes as `r`, 32 zero bytes as `s`, and a
/// final `v` byte of `0x01` marking a pre-validated signature.
pub fn prevalidated_signature(owner: Address) -> Bytes {
    let mut sig = [0_u8; NUM_BYTES_SIGNATURE];
    sig[OWNER_OFFSET..OWNER_OFFSET + NUM_BYTES_ADDRESS].copy_from_slice(owner.as_slice());
    sig[NUM_BYTES_SIGNATURE - 1] = 1;

    Bytes::copy_from_slice(&sig)
}

/// Calldata for an ERC20 transfer, used when the Safe itself holds the
/// tokens
pub(crate) fn erc20_transfer_calldata(receiver: Address, amount: U256) -> Bytes {
    IERC20::transferCall {
        to: receiver,
        amount,
    }
    .abi_encode()
    .into()
}

/// Calldata for a holder contract's sweep entrypoint, used when a Safe-owned
/// holder contract holds the tokens
pub(crate) fn holder_sweep_calldata(token: Address, receiver: Address) -> Bytes {
    IHolder::sweepCall { token, receiver }.abi_encode().into()
}

/// Unit tests for the Safe call encodings
#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, U256};
    use contracts_common::constants::{NUM_BYTES_SELECTOR, NUM_BYTES_SIGNATURE};

    use crate::diamond::function_selector;

    use super::{erc20_transfer_calldata, holder_sweep_calldata, prevalidated_signature};

    /// Tests the r/s/v layout of a pre-validated owner signature
    #[test]
    fn test_prevalidated_signature_layout() {
        let owner = Address::repeat_byte(0xab);
        let sig = prevalidated_signature(owner);

        assert_eq!(sig.len(), NUM_BYTES_SIGNATURE);
        // r: the owner address left-padded to a word
        assert!(sig[..12].iter().all(|b| *b == 0));
        assert_eq!(&sig[12..32], owner.as_slice());
        // s: zero
        assert!(sig[32..64].iter().all(|b| *b == 0));
        // v: the pre-validated marker
        assert_eq!(sig[64], 1);
    }

    /// Tests the selector & length of the direct transfer calldata
    #[test]
    fn test_erc20_transfer_calldata() {
        let calldata = erc20_transfer_calldata(Address::with_last_byte(7), U256::from(1000));

        // Selector plus two ABI words
        assert_eq!(calldata.len(), NUM_BYTES_SELECTOR + 64);
        assert_eq!(
            &calldata[..NUM_BYTES_SELECTOR],
            function_selector("transfer(address,uint256)").as_slice(),
        );
    }

    /// Tests the selector & length of the holder sweep calldata
    #[test]
    fn test_holder_sweep_calldata() {
        let calldata =
            holder_sweep_calldata(Address::with_last_byte(1), Address::with_last_byte(2));

        assert_eq!(calldata.len(), NUM_BYTES_SELECTOR + 64);
        assert_eq!(
            &calldata[..NUM_BYTES_SELECTOR],
            function_selector("sweep(address,address)").as_slice(),
        );
    }
}
