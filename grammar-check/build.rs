use anyhow::Result;
use vergen::EmitBuilder;

pub fn main() -> Result<()> {
    let mut builder = EmitBuilder::builder();
    builder.all_build();

    // Git info is only available when building from a checkout, crates.io
    // tarballs don't ship a .git directory.
    if std::path::Path::new("../.git").exists() {
        builder.all_git();
    } else {
        println!("cargo:rustc-env=VERGEN_GIT_DESCRIBE=unknown");
        println!("cargo:rustc-env=VERGEN_GIT_SHA=unknown");
        println!("cargo:rustc-env=VERGEN_GIT_COMMIT_DATE=unknown");
    }

    builder.emit()?;
    Ok(())
}
