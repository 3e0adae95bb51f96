use std::process::Command;

use anyhow::{Context, Result};

fn run_pickdong(args: &[&str]) -> Result<String> {
    let out = Command::new(env!("CARGO_BIN_EXE_pickdong"))
        .args(args)
        .env_remove("PICKDONG_API_BASE_URL")
        .env_remove("PICKDONG_HOME")
        .output()
        .with_context(|| format!("run pickdong {:?}", args))?;

    if !out.status.success() {
        anyhow::bail!(
            "pickdong {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
            args,
            out.status,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
    }

    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}

#[test]
fn cli_help_surface_is_stable() -> Result<()> {
    let help = run_pickdong(&["--help"])?;
    assert!(help.contains("Usage: pickdong"));
    assert!(help.contains("[COMMAND]"));
    for cmd in [
        "login",
        "callback",
        "logout",
        "whoami",
        "delete-account",
        "subscriptions",
        "subscribe",
        "unsubscribe",
        "feed",
        "event",
        "notify",
        "config",
    ] {
        assert!(help.contains(cmd), "missing {} in help", cmd);
    }
    assert!(help.contains("--api-url"));
    assert!(help.contains("--data-dir"));

    let config_help = run_pickdong(&["config", "--help"])?;
    assert!(config_help.contains("Usage: pickdong config"));
    assert!(config_help.contains("show"));
    assert!(config_help.contains("set-url"));

    Ok(())
}

#[test]
fn login_prints_authorization_url() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let data_dir = dir.path().to_string_lossy().to_string();
    let out = run_pickdong(&["--data-dir", &data_dir, "login"])?;
    assert!(out.contains("https://accounts.google.com/o/oauth2/auth?"));
    assert!(out.contains("response_type=code"));
    Ok(())
}

#[test]
fn config_set_url_persists() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let data_dir = dir.path().to_string_lossy().to_string();

    run_pickdong(&["--data-dir", &data_dir, "config", "set-url", "http://localhost:9999/"])?;
    let shown = run_pickdong(&["--data-dir", &data_dir, "config", "show", "--json"])?;
    let v: serde_json::Value = serde_json::from_str(&shown)?;
    assert_eq!(v["api_base_url"], "http://localhost:9999");

    let flagged = run_pickdong(&[
        "--data-dir",
        &data_dir,
        "--api-url",
        "http://other.test",
        "config",
        "show",
        "--json",
    ])?;
    let v: serde_json::Value = serde_json::from_str(&flagged)?;
    assert_eq!(v["api_base_url"], "http://other.test");
    Ok(())
}
