//! DSA v2 account ABI: the `cast` entry point and its `LogCast` event.

use alloy_sol_types::sol;

sol! {
    #![sol(all_derives)]

    interface IDSAv2 {
        event LogCast(
            address indexed origin,
            address indexed sender,
            uint256 value,
            string[] targetsNames,
            address[] targets,
            string[] eventNames,
            bytes[] eventParams
        );

        function cast(string[] targetNames, bytes[] datas, address origin)
            external payable returns (bytes32);
    }
}

pub use IDSAv2::{castCall, LogCast};
