//! Client bindings of the deployed contracts.
#![allow(missing_docs)]
use alloy::sol;

sol!(
    #[sol(rpc)]
    contract CounterFactory {
        function implementation() external view returns (address implementation);
        function update(address newImplementation) external;
        function create(string calldata name) external returns (address proxy);
        function getCounter(uint256 index) external view returns (address counter);
        function counterCount() external view returns (uint256 count);
    }
);

sol!(
    #[sol(rpc)]
    contract CounterV1 {
        function value() external view returns (uint256 value);
        function up() external;
    }
);

sol!(
    #[sol(rpc)]
    contract CounterV2 {
        function value() external view returns (uint256 value);
        function reset() external;
    }
);
