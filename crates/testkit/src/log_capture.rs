use std::{
    io,
    sync::{Arc, Mutex, PoisonError},
};

use tracing::Level;

/// Runs `f` with a thread-local subscriber that records every event as plain
/// text, returning `f`'s result and the captured output.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let writer = Arc::clone(&buffer);
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(Level::TRACE)
        .with_writer(move || CaptureWriter(Arc::clone(&writer)))
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let captured = buffer.lock().unwrap_or_else(PoisonError::into_inner);
    (result, String::from_utf8_lossy(&captured).into_owned())
}

struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
