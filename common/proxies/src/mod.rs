pub mod liquidity_pool_proxy;
pub mod native_pool_proxy;
pub mod stablecoin_pool_proxy;
pub mod swap_mock_proxy;
pub mod target_mock_proxy;
pub mod wegld_proxy;
