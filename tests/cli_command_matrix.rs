use assert_cmd::Command;

fn run_help(bin: &str) {
    Command::cargo_bin(bin)
        .expect("binary built")
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn every_binary_has_a_help_path() {
    run_help("date");
    run_help("false");
    run_help("md5sum");
    run_help("yes");
}

#[test]
fn argument_parsing_binaries_report_a_version() {
    for bin in ["date", "md5sum", "yes"] {
        Command::cargo_bin(bin)
            .expect("binary built")
            .arg("--version")
            .assert()
            .success();
    }
}
