//! Procedural macros for end-to-end tests of Stylus contracts.
use proc_macro::TokenStream;


/// Defines an end-to-end stylus contract test that provides test accounts'
/// injection from arguments.
///
/// Every argument must be of a type with an `async fn new() ->
/// eyre::Result<Self>` constructor, in practice `e2e::Account`. The test
/// runs on the `tokio` runtime.
///
/// # Examples
///
/// ```rust,ignore
/// #[e2e::test]
/// async fn counts_up(alice: Account) -> eyre::Result<()> {
///     let factory = deploy_factory(&alice).await?;
///     let proxy = create_counter(&factory, &alice, "MyCounter").await?;
///     let counter = CounterV1::new(proxy, &alice.wallet);
///
///     watch!(counter.up())?;
///     assert_eq!(counter.value().call().await?, U256::from(1));
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn test(attr: TokenStream, input: TokenStream) -> TokenStream {
    test::test(&attr, input)
}
