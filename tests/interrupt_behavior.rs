//! Interrupt handling for the running game binary: SIGINT during a blocking
//! input wait must print the goodbye and terminate cleanly.

#![cfg(unix)]

use std::io::Read;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

#[test]
fn sigint_during_name_prompt_prints_goodbye_and_exits() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_scratchcard"))
        .arg("play")
        // stdin stays open so the session blocks on the name prompt
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn game binary");

    // Let the session reach the blocking name read.
    std::thread::sleep(Duration::from_millis(500));

    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("send SIGINT");
    assert!(status.success(), "kill -INT failed");

    let deadline = Instant::now() + Duration::from_secs(5);
    let exit = loop {
        if let Some(exit) = child.try_wait().expect("poll child") {
            break exit;
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            panic!("game still running 5s after SIGINT");
        }
        std::thread::sleep(Duration::from_millis(50));
    };
    assert!(exit.success(), "expected clean exit, got {:?}", exit);

    let mut out = String::new();
    child
        .stdout
        .take()
        .expect("stdout piped")
        .read_to_string(&mut out)
        .expect("read stdout");
    assert!(
        out.contains("Game interrupted! Thanks for playing!"),
        "goodbye missing from output: {:?}",
        out
    );
}
