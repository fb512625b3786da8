#![allow(dead_code)]
use alloy::sol;

sol!(
    #[sol(rpc)]
    contract CounterFactory {
        function implementation() external view returns (address implementation);
        function owner() external view returns (address owner);
        function update(address newImplementation) external;
        function create(string calldata name) external returns (address proxy);
        function getCounter(uint256 index) external view returns (address counter);
        function counterCount() external view returns (uint256 count);
        function transferOwnership(address newOwner) external;
        function renounceOwnership() external;

        error BeaconInvalidImplementation(address implementation);
        error CounterIndexOutOfBounds(uint256 index, uint256 length);
        error ProxyDeploymentFailed();
        error ProxyInitializationFailed(address proxy);
        error OwnableUnauthorizedAccount(address account);
        error OwnableInvalidOwner(address owner);

        #[derive(Debug, PartialEq)]
        event ProxyCreated(address proxy);
        #[derive(Debug, PartialEq)]
        event ImplementationChanged(address indexed implementation);
        #[derive(Debug, PartialEq)]
        event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);
    }
);

sol!(
    #[sol(rpc)]
    contract CounterV1 {
        function initialize(string calldata name, address owner) external;
        function owner() external view returns (address owner);
        function name() external view returns (string memory name);
        function value() external view returns (uint256 value);
        function up() external;
        function down() external;

        error NotOwner(address caller);
        error Down();
        error ValueOverflow();
        error NewOwnerCannotBeAddressZero();
        error AlreadyInitialized();

        #[derive(Debug, PartialEq)]
        event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);
    }
);

sol!(
    #[sol(rpc)]
    contract CounterV2 {
        function initialize(string calldata name, address owner) external;
        function owner() external view returns (address owner);
        function name() external view returns (string memory name);
        function value() external view returns (uint256 value);
        function up() external;
        function down() external;
        function reset() external;
        function transferOwnership(address newOwner) external;
        function renounceOwnership() external;

        error NotOwner(address caller);
        error Down();
        error Reset();
        error ValueOverflow();
        error NewOwnerCannotBeAddressZero();
        error AlreadyInitialized();

        #[derive(Debug, PartialEq)]
        event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);
    }
);
