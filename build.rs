// Mon Oct 19 2026 - Alex

use std::env;
use std::path::PathBuf;

// fuse_file_info layout comes from the installed libfuse 3 header so the
// direct_io bit is whatever the platform compiler decides.
const FUSE_WRAPPER: &str = "#define FUSE_USE_VERSION 31\n#include <fuse3/fuse.h>\n";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let bindings = bindgen::Builder::default()
        .header_contents("fuse_wrapper.h", FUSE_WRAPPER)
        .allowlist_type("fuse_file_info")
        .derive_default(true)
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        .generate()
        .expect("Unable to generate fuse_file_info bindings (is libfuse3-dev installed?)");

    let out_path = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    bindings
        .write_to_file(out_path.join("fuse_bindings.rs"))
        .expect("Couldn't write fuse_file_info bindings!");
}
