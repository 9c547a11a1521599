//! NDJSON output for `--json` mode.
//!
//! One JSON object per line on stdout. Subprocess output is silenced in
//! this mode so the stream stays parseable.

pub mod events;

use std::cell::RefCell;
use std::io::{self, Write};

use serde::Serialize;

use crate::domain::ports::{AssetEvent, EventSink};

use events::AssetEventJson;

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}

/// Write a typed event to a custom writer.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Event sink that streams every [`AssetEvent`] as a JSON line
pub struct JsonEventSink<W: Write> {
    out: RefCell<W>,
}

impl JsonEventSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonEventSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> EventSink for JsonEventSink<W> {
    fn on_event(&self, event: AssetEvent) {
        let mut out = self.out.borrow_mut();
        // A closed stdout must not abort the build.
        let _ = write_typed_event(&mut *out, &AssetEventJson::from(&event));
        let _ = out.flush();
    }
}
