//! Output sinks for the password.

use std::io::{self, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::Password;
use crate::error::{AegurError, Result};

/// Buffered writer that zeroizes its buffer after every flush and on drop.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(256),
        }
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > self.buf.capacity() {
            self.flush()?;
        }
        if data.len() > self.buf.capacity() {
            return self.inner.write(data);
        }
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Write the password followed by a newline.
pub fn to_writer<W: Write>(out: &mut W, password: &Password) -> Result<()> {
    let mut out = SecureBufWriter::new(out);
    out.write_all(password.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Copy the password to the system clipboard, zeroizing every owned copy.
pub fn to_clipboard(password: &Password) -> Result<()> {
    let mut ctx = ClipboardContext::new().map_err(|e| AegurError::Clipboard {
        message: e.to_string(),
    })?;

    let mut copy = password.as_str().to_owned();
    let result = ctx.set_contents(copy.clone());
    copy.zeroize();
    result.map_err(|e| AegurError::Clipboard {
        message: e.to_string(),
    })?;

    // Some providers hand back an owned copy; wipe it.
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}
