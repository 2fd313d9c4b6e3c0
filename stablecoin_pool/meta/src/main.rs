fn main() {
    multiversx_sc_meta_lib::cli_main::<stablecoin_pool::AbiProvider>();
}
