use xshell::{cmd, Shell};

fn main() {
    // When run locally, results may differ from actual CI runs
    // - Official CI runs latest stable
    // - Local runs use whatever the default Rust is locally
    let sh = Shell::new().expect("Could not create a shell.");

    // See if any code needs to be formatted
    cmd!(sh, "cargo fmt --all -- --check")
        .run()
        .expect("Please run `cargo fmt --all` to format your code.");

    // See if clippy has any complaints, including in tests and benches.
    cmd!(sh, "cargo clippy --workspace --all-targets -- -D warnings")
        .run()
        .expect("Please fix `cargo clippy` errors.");

    // Unit tests, integration tests and doc tests
    cmd!(sh, "cargo test --workspace")
        .run()
        .expect("Please fix failing tests.");

    // Documentation must build without broken intra-doc links
    cmd!(sh, "cargo doc --workspace --no-deps")
        .env("RUSTDOCFLAGS", "-D warnings")
        .run()
        .expect("Please fix doc warnings.");
}
