use std::time::Duration;

use netdiag::exec;

#[tokio::test]
async fn captures_stdout_and_exit_code() {
    let capture = exec::run("echo", &["hello"], Duration::from_secs(5))
        .await
        .unwrap();
    assert_eq!(capture.exit_code, 0);
    assert!(capture.output.contains("hello"));
}

#[tokio::test]
async fn merges_stderr_into_the_capture() {
    let capture = exec::run(
        "sh",
        &["-c", "echo out; echo err 1>&2; exit 3"],
        Duration::from_secs(5),
    )
    .await
    .unwrap();
    assert_eq!(capture.exit_code, 3);
    assert!(capture.output.contains("out"));
    assert!(capture.output.contains("err"));
}

#[tokio::test]
async fn deadline_kills_the_child() {
    let err = exec::run("sleep", &["5"], Duration::from_millis(100))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Exception: timeout");
}

#[tokio::test]
async fn missing_binary_is_a_probe_failure() {
    let err = exec::run("netdiag-no-such-tool", &[], Duration::from_secs(1))
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("Exception: "));
}
