use assert_cmd::Command;

#[test]
fn cli_help_smoke() {
    let mut cmd = Command::cargo_bin("classifier-performance").unwrap();
    cmd.arg("--help");
    cmd.assert().success();
}

#[test]
fn cli_requires_target() {
    let mut cmd = Command::cargo_bin("classifier-performance").unwrap();
    cmd.assert().failure();
}
