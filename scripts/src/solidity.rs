//! Definitions of Solidity types & functions called by the scripts
#![allow(missing_docs, clippy::missing_docs_in_private_items)]

use alloy::sol;

// We keep all of the suite's interfaces in a single macro invocation as the
// sol macro requires all referenced types to be present in the same
// invocation.
sol! {
    /// The initializer of the vault implementation, encoded into the
    /// proxy's constructor calldata
    function initialize(address underlying, address registry, string name, string symbol) external;

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
    interface IRegistry {
        struct Step {
            address pool;
            address outputToken;
            bool isBorrow;
        }

        function setVaultStrategy(address vault, Step[] calldata steps) external;
        function vaultStrategyHash(address vault) external view returns (bytes32);
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
        function getOwners() external view returns (address[] memory);

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

    /// A Safe-owned contract holding tokens that can be swept to a receiver
    #[sol(rpc)]
    interface IHolder {
        function sweep(address token, address receiver) external;
    }

    #[sol(rpc)]
    interface IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}
