use std::io::Write;

use async_trait::async_trait;

use super::{PublishSink, SinkError};

/// Prints every payload to stdout, newline terminated.
#[derive(Debug, Default)]
pub struct StdoutSink;

#[async_trait]
impl PublishSink for StdoutSink {
    async fn write(&self, payload: &[u8]) -> Result<usize, SinkError> {
        let mut stdout = std::io::stdout().lock();
        write_terminated(&mut stdout, payload)?;
        Ok(payload.len())
    }
}

fn write_terminated<W: Write>(out: &mut W, payload: &[u8]) -> std::io::Result<()> {
    out.write_all(payload)?;
    if !payload.ends_with(b"\n") {
        out.write_all(b"\n")?;
    }
    out.flush()
}
