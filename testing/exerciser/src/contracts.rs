//! `sol!` bindings for the contracts the exerciser drives.
//!
//! Declared as interfaces only; calldata is ABI-encoded with [`SolCall`]
//! and submitted through [`ChainClient`](crate::ChainClient), so no
//! bytecode or deployment artifacts are carried here.
//!
//! [`SolCall`]: alloy_sol_types::SolCall

use alloy_sol_types::sol;

sol! {
    /// Subset of the Autonity protocol contract exercised by the token and
    /// staking tasks. The protocol contract doubles as the NTN ERC-20.
    interface IAutonity {
        function decimals() external view returns (uint8);
        function getValidators() external view returns (address[] memory);
        function transfer(address recipient, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
        function bond(address validator, uint256 amount) external;
        function unbond(address validator, uint256 amount) external;
        function changeCommissionRate(address validator, uint256 rate) external;
        function pauseValidator(address validator) external;
        function activateValidator(address validator) external;
    }

    /// Minimal ERC-20 surface used by the AMM tasks.
    interface IERC20 {
        function decimals() external view returns (uint8);
        function balanceOf(address owner) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }

    /// UniswapV2 router entry points for swaps and liquidity management.
    interface IUniswapV2Router02 {
        function swapExactTokensForTokens(
            uint256 amountIn,
            uint256 amountOutMin,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external returns (uint256[] memory amounts);

        function addLiquidity(
            address tokenA,
            address tokenB,
            uint256 amountADesired,
            uint256 amountBDesired,
            uint256 amountAMin,
            uint256 amountBMin,
            address to,
            uint256 deadline
        ) external returns (uint256 amountA, uint256 amountB, uint256 liquidity);

        function removeLiquidity(
            address tokenA,
            address tokenB,
            uint256 liquidity,
            uint256 amountAMin,
            uint256 amountBMin,
            address to,
            uint256 deadline
        ) external returns (uint256 amountA, uint256 amountB);
    }
}
