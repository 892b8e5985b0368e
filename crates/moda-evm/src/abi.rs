//! Profile contract ABI definitions using alloy's `sol!` macro.

use alloy::sol;

sol! {
    /// Artist profile contract and the registry events it emits.
    #[sol(rpc)]
    interface IProfile {
        function name() external view returns (string);

        event ProfileChangedFor(address indexed kontract, address indexed caller);
    }
}
