//! Line-oriented input for customer names.
//!
//! Whatever the user types is returned as-is apart from the line terminator.
//! No trimming, escaping or filtering happens here; the name is opaque data
//! from this point on.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

/// Reads one line and strips its `\n` or `\r\n` terminator.
///
/// Returns `Ok(None)` at end of input.
pub async fn read_customer_name<R>(reader: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    debug!(len = line.len(), "Customer name read");
    Ok(Some(line))
}
