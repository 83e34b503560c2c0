use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

#[test]
fn echoes_input_into_out_siso() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let root = temp.child("root");
    root.child("out/siso").create_dir_all()?;
    let f1 = temp.child("f1.txt");
    f1.write_str("hello")?;

    let mut cmd = cargo_bin_cmd!("echo-inputs");
    cmd.arg("--out-dir")
        .arg(root.path())
        .arg(f1.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    root.child("out/siso/f1.txt").assert("hello");
    Ok(())
}

#[test]
fn several_inputs_and_rerun_overwrites() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child("out/siso").create_dir_all()?;
    let a = temp.child("src/a.txt");
    let b = temp.child("gen/b.dat");
    a.write_str("first version of a, quite long")?;
    b.write_binary(b"\x00\x01\x02")?;

    cargo_bin_cmd!("echo-inputs")
        .arg("--out-dir")
        .arg(temp.path())
        .arg(a.path())
        .arg(b.path())
        .assert()
        .success();
    temp.child("out/siso/a.txt").assert("first version of a, quite long");
    temp.child("out/siso/b.dat").assert(predicate::path::eq_file(b.path()));

    a.write_str("short")?;
    cargo_bin_cmd!("echo-inputs")
        .arg("--out-dir")
        .arg(temp.path())
        .arg(a.path())
        .assert()
        .success();
    temp.child("out/siso/a.txt").assert("short");
    Ok(())
}

#[test]
fn relative_out_dir_is_normalised() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child("work/out/siso").create_dir_all()?;
    temp.child("work/sub").create_dir_all()?;
    temp.child("in.txt").write_str("data")?;

    cargo_bin_cmd!("echo-inputs")
        .current_dir(temp.path())
        .args(["--out-dir", "work//sub/..", "in.txt"])
        .assert()
        .success();
    temp.child("work/out/siso/in.txt").assert("data");
    Ok(())
}

#[test]
fn missing_out_siso_fails_without_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let root = temp.child("root");
    root.create_dir_all()?;
    let f1 = temp.child("f1.txt");
    f1.write_str("hello")?;

    cargo_bin_cmd!("echo-inputs")
        .arg("--out-dir")
        .arg(root.path())
        .arg(f1.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("output directory not found"));
    root.child("out").assert(predicate::path::missing());
    Ok(())
}

#[test]
fn missing_input_fails_before_any_write() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child("out/siso").create_dir_all()?;
    let good = temp.child("good.txt");
    good.write_str("ok")?;

    cargo_bin_cmd!("echo-inputs")
        .arg("--out-dir")
        .arg(temp.path())
        .arg(good.path())
        .arg(temp.child("absent.txt").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.txt"));
    temp.child("out/siso/good.txt").assert(predicate::path::missing());
    Ok(())
}

#[test]
fn directory_input_leaves_previous_output_intact() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    temp.child("out/siso/gen").write_str("previous output")?;
    let gen = temp.child("gen");
    gen.create_dir_all()?;

    cargo_bin_cmd!("echo-inputs")
        .arg("--out-dir")
        .arg(temp.path())
        .arg(gen.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("is a directory"));
    temp.child("out/siso/gen").assert("previous output");
    Ok(())
}

#[test]
fn zero_inputs_is_a_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;

    cargo_bin_cmd!("echo-inputs")
        .arg("--out-dir")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    assert_eq!(std::fs::read_dir(temp.path())?.count(), 0);
    Ok(())
}
