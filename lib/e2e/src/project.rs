use std::{
    env,
    ffi::OsStr,
    path::{Path, PathBuf},
};

use eyre::{bail, Context};
use toml::Table;

/// Information about the crate subject of an integration test.
pub(crate) struct Crate {
    /// Path to the compiled wasm binary.
    pub wasm: PathBuf,
}

impl Crate {
    /// Describes the crate of the running test, or the workspace member
    /// named `name` when given.
    pub(crate) fn new(name: Option<&str>) -> eyre::Result<Self> {
        let manifest_dir = env::current_dir()?;
        let name = match name {
            Some(name) => name.to_owned(),
            None => read_pkg_name(&manifest_dir)?,
        };
        let wasm = get_wasm(&name)?;

        Ok(Self { wasm })
    }
}

/// Reads and parses the package name from a manifest in `path`.
fn read_pkg_name<P: AsRef<Path>>(path: P) -> eyre::Result<String> {
    let cargo_toml = path.as_ref().join("Cargo.toml");
    let buffer = std::fs::read_to_string(&cargo_toml)
        .wrap_err(format!("failed to read {}", cargo_toml.display()))?;

    let table = buffer.parse::<Table>()?;
    let name = table
        .get("package")
        .and_then(|package| package.get("name"))
        .and_then(toml::Value::as_str);

    match name {
        Some(x) => Ok(x.to_owned()),
        None => Err(eyre::eyre!("unable to find package name in toml")),
    }
}

/// Returns the path to the compiled wasm binary with name `name`.
///
/// Note that this function works for both workspaces and standalone crates.
fn get_wasm(name: &str) -> eyre::Result<PathBuf> {
    let name = name.replace('-', "_");
    // Looks like
    // "beacon-counter-stylus/target/debug/deps/factory-15764c2c9a33bee7".
    let mut target_dir = env::current_exe()?;
    // Recursively find a `target` directory.
    loop {
        let Some(parent) = target_dir.parent() else {
            // We've found `/`.
            bail!("output directory is not 'target'");
        };

        let Some(leaf) = parent.file_name() else {
            bail!("output directory is not 'target'");
        };

        if leaf == OsStr::new("target") {
            target_dir = parent.to_path_buf();
            break;
        }

        target_dir = parent.to_path_buf();
    }

    Ok(wasm_path(&target_dir, &name))
}

fn wasm_path(target_dir: &Path, name: &str) -> PathBuf {
    target_dir
        .join("wasm32-unknown-unknown")
        .join("release")
        .join(format!("{name}.wasm"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasm_lives_in_release_wasm_target() {
        let wasm = wasm_path(Path::new("/repo/target"), "counter_v1");
        assert_eq!(
            wasm,
            PathBuf::from(
                "/repo/target/wasm32-unknown-unknown/release/counter_v1.wasm"
            )
        );
    }

    #[test]
    fn reads_package_name_of_this_crate() {
        let name = read_pkg_name(env!("CARGO_MANIFEST_DIR"))
            .expect("should read own manifest");
        assert_eq!(name, "e2e");
    }
}
