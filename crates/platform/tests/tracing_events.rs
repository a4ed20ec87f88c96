//! Events emitted when the `tracing` feature is enabled.

#![cfg(feature = "tracing")]

use platform::{FileHandle, PlatformSyscalls, TRACE_TARGET, UnsupportedSyscalls};
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        let bytes = self.0.lock().expect("capture lock").clone();
        String::from_utf8(bytes).expect("utf-8 log output")
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(body: F) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, body);
    captured.text()
}

#[test]
fn unsupported_calls_are_traced() {
    let output = capture(|| {
        let _ = UnsupportedSyscalls.set_effective_user(5);
    });
    assert!(output.contains(TRACE_TARGET), "output: {output}");
    assert!(output.contains("setuid not supported by"), "output: {output}");
}

#[test]
fn unsupported_stat_is_traced_as_well() {
    let file = tempfile::NamedTempFile::new().expect("temp file");
    let handle = FileHandle::open(file.path()).expect("open");
    let output = capture(|| {
        let _ = UnsupportedSyscalls.stat_file(&handle);
    });
    assert!(output.contains("stat not supported by"), "output: {output}");
}

#[cfg(unix)]
#[test]
fn native_stat_is_traced_with_path() {
    use platform::NativeSyscalls;

    let file = tempfile::NamedTempFile::new().expect("temp file");
    let handle = FileHandle::open(file.path()).expect("open");
    let output = capture(|| {
        NativeSyscalls.stat_file(&handle).expect("stat");
    });
    assert!(
        output.contains(&file.path().display().to_string()),
        "output: {output}"
    );
}
