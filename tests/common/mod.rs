use assert_cmd::Command;
use std::path::Path;

pub fn wtrack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wtrack").unwrap();
    cmd.env_remove("WTRACK_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Command running inside an initialized data directory
#[allow(dead_code)]
pub fn wtrack_in(dir: &Path) -> Command {
    let mut cmd = wtrack_cmd();
    cmd.current_dir(dir);
    cmd
}

#[allow(dead_code)]
pub fn init_dir(dir: &Path, unit: &str) {
    wtrack_cmd()
        .arg("init")
        .arg(dir)
        .arg("--unit")
        .arg(unit)
        .assert()
        .success();
}
