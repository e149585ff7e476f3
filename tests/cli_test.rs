use anyhow::Result;
use std::process::{Command, Output};
use tempfile::TempDir;

fn brdoc(args: &[&str]) -> Result<Output> {
    Ok(Command::new(env!("CARGO_BIN_EXE_brdoc")).args(args).output()?)
}

#[test]
fn test_all_valid_exits_zero() -> Result<()> {
    let output = brdoc(&["529.982.247-25", "11.222.333/0001-81"])?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("529.982.247-25\tCPF\tvalid"));
    assert!(stdout.contains("11.222.333/0001-81\tCNPJ\tvalid"));
    Ok(())
}

#[test]
fn test_any_invalid_exits_one() -> Result<()> {
    let output = brdoc(&["52998224725", "52998224726"])?;
    let stdout = String::from_utf8(output.stdout)?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("52998224725\tCPF\tvalid"));
    assert!(stdout.contains("52998224726\tCPF\tinvalid"));
    Ok(())
}

#[test]
fn test_json_output_from_flag() -> Result<()> {
    let output = brdoc(&["--format", "json", "--kind", "cnpj", "11222333000181"])?;
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(json[0]["kind"], "cnpj");
    assert_eq!(json[0]["valid"], true);
    Ok(())
}

#[test]
fn test_bad_config_value_exits_two() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("brdoc.toml");
    std::fs::write(&config_path, "[output]\nformat = \"xml\"\n")?;

    let config_arg = config_path.to_string_lossy().to_string();
    let output = brdoc(&["--config", &config_arg, "52998224725"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn test_missing_config_file_exits_two() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("nope.toml");

    let config_arg = missing.to_string_lossy().to_string();
    let output = brdoc(&["--config", &config_arg, "52998224725"])?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    Ok(())
}
