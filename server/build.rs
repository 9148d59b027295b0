use std::fs;
use std::path::Path;

use fs_extra::dir::{copy, CopyOptions};

/// Bundles the trunk output (`frontend/dist`) into `static/dist`, which
/// `include_dir!` embeds. The directory always exists so the server builds
/// before the front end has been compiled.
fn main() {
    let bundle = Path::new("static/dist");
    let trunk_dist = Path::new("../frontend/dist");

    let _ = fs::remove_dir_all(bundle);
    fs::create_dir_all(bundle).expect("create static/dist");

    if trunk_dist.is_dir() {
        let options = CopyOptions::new().overwrite(true).content_only(true);
        copy(trunk_dist, bundle, &options).expect("copy frontend/dist into static/dist");
    } else {
        println!("cargo:warning=frontend/dist no existe; se embebe un front end vacío");
    }

    println!("cargo:rerun-if-changed=../frontend/dist");
}
