fn main() {
    multiversx_sc_meta_lib::cli_main::<target_mock::AbiProvider>();
}
