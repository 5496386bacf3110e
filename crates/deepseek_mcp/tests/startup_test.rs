//! Tests for process startup and shutdown behavior.

use std::process::{Command, Stdio};

#[test]
fn test_missing_api_key_aborts_startup() {
    let output = Command::new(env!("CARGO_BIN_EXE_deepseek-mcp"))
        .env_remove("DEEPSEEK_API_KEY")
        .current_dir(std::env::temp_dir())
        .stdin(Stdio::null())
        .output()
        .expect("failed to spawn server binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "no protocol output before config");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DEEPSEEK_API_KEY"), "stderr: {}", stderr);
}

#[cfg(unix)]
#[test]
fn test_interrupt_exits_cleanly() {
    use std::io::{BufRead, BufReader, Write};

    let mut child = Command::new(env!("CARGO_BIN_EXE_deepseek-mcp"))
        .env("DEEPSEEK_API_KEY", "sk-test")
        .env("DEEPSEEK_BASE_URL", "http://127.0.0.1:9")
        .current_dir(std::env::temp_dir())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to spawn server binary");

    // Round trip one request so the server is known to be up.
    let mut stdin = child.stdin.take().unwrap();
    writeln!(
        stdin,
        r#"{{"jsonrpc":"2.0","id":1,"method":"tools/list","params":{{}}}}"#
    )
    .unwrap();
    stdin.flush().unwrap();

    let mut stdout = BufReader::new(child.stdout.take().unwrap());
    let mut line = String::new();
    stdout.read_line(&mut line).unwrap();
    assert!(line.contains("deepseek_r1"), "response: {}", line);

    let kill = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("failed to run kill");
    assert!(kill.success());

    // stdin stays open, so only the signal can end the process.
    let status = child.wait().unwrap();
    drop(stdin);
    assert!(status.success(), "exit status: {:?}", status);
}
