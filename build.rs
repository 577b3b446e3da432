fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Prefer a system protoc when one is configured.
    if std::env::var_os("PROTOC").is_none() {
        std::env::set_var("PROTOC", protoc_bin_vendored::protoc_bin_path()?);
    }

    println!("cargo:rerun-if-changed=proto/eslintmessage.proto");

    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_protos(&["proto/eslintmessage.proto"], &["proto"])?;

    Ok(())
}
