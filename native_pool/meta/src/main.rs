fn main() {
    multiversx_sc_meta_lib::cli_main::<native_pool::AbiProvider>();
}
