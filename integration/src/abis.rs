//! Contract bindings used by the integration tests
#![allow(missing_docs, clippy::missing_docs_in_private_items)]

use alloy::sol;

// All types referenced by an interface must live in the same macro
// invocation, so the test bindings are grouped here.
sol! {
    #[sol(rpc)]
    interface IVault {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function totalSupply() external view returns (uint256);
        function underlyingToken() external view returns (address);
        function pricePerFullShare() external view returns (uint256);
    }

    #[sol(rpc)]
    interface IProxyAdmin {
        function upgradeAndCall(address proxy, address implementation, bytes memory data) external payable;
    }

    #[sol(rpc)]
    interface IPriceOracle {
        function getPriceFeed(address token) external view returns (address);
        function setPriceFeeds(address[] calldata tokens, address[] calldata feeds) external;
    }

    #[sol(rpc)]
    interface IDiamondLoupe {
        struct Facet {
            address facetAddress;
            bytes4[] functionSelectors;
        }

        function facets() external view returns (Facet[] memory);
    }

    #[sol(rpc)]
    interface IDiamondCut {
        enum FacetCutAction {
            Add,
            Replace,
            Remove
        }

        struct FacetCut {
            address facetAddress;
            FacetCutAction action;
            bytes4[] functionSelectors;
        }

        function diamondCut(FacetCut[] calldata cuts, address init, bytes calldata initCalldata) external;
    }

    #[allow(clippy::too_many_arguments)]
    #[sol(rpc)]
    interface IGnosisSafe {
        function execTransaction(
            address to,
            uint256 value,
            bytes calldata data,
            uint8 operation,
            uint256 safeTxGas,
            uint256 baseGas,
            uint256 gasPrice,
            address gasToken,
            address payable refundReceiver,
            bytes memory signatures
        ) external payable returns (bool success);
    }

    #[sol(rpc)]
    interface ERC20Mock {
        function mint(address account, uint256 amount) external;
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}
