use alloy::primitives::{Address, U256};

/// Constructor data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constructor {
    /// Constructor signature.
    pub signature: String,
    /// Constructor arguments.
    pub args: Vec<String>,
}

/// Helper trait to convert values to string representation
pub trait AbiTypeToString {
    /// Stringify ABI type.
    fn abi_type_to_string(&self) -> String;
}

macro_rules! impl_to_arg_string {
    ($($abi_type:ident),* $(,)?) => {$(
        impl AbiTypeToString for $abi_type {
            fn abi_type_to_string(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_to_arg_string!(U256, u64, String, Address, bool);

/// Builds the [`Constructor`] of a contract from its arguments.
///
/// The signature is derived from the Solidity type of each argument.
#[macro_export]
macro_rules! constructor {
    () => {{
        $crate::Constructor {
            signature: "constructor()".to_string(),
            args: vec![],
        }
    }};

    ($first:expr $(, $rest:expr)* $(,)?) => {{
        fn get_abi_str<T: $crate::stylus_sdk::abi::AbiType>(
            _: &T,
        ) -> &'static str {
            <T as $crate::stylus_sdk::abi::AbiType>::ABI.as_str()
        }

        let first = &$first;
        let mut params = vec![get_abi_str(first)];
        let mut args = vec![$crate::AbiTypeToString::abi_type_to_string(first)];
        $(
            let arg = &$rest;
            params.push(get_abi_str(arg));
            args.push($crate::AbiTypeToString::abi_type_to_string(arg));
        )*

        $crate::Constructor {
            signature: format!("constructor({})", params.join(",")),
            args,
        }
    }};
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, uint};

    #[test]
    fn empty_constructor() {
        let ctor = constructor!();
        assert_eq!(ctor.signature, "constructor()");
        assert!(ctor.args.is_empty());
    }

    #[test]
    fn signature_follows_argument_types() {
        let implementation =
            address!("0x000000000000000000000000000000000000beac");
        let ctor = constructor!(implementation, uint!(10_U256));

        assert_eq!(ctor.signature, "constructor(address,uint256)");
        assert_eq!(
            ctor.args,
            vec![implementation.to_string(), "10".to_string()]
        );
        // Arguments are borrowed, not consumed.
        assert!(!implementation.is_zero());
    }
}
