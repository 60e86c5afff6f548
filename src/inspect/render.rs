use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

const INDENT: &[u8] = b"    ";

/// Pretty-prints `value` with a four space indent. Non-ASCII text is written as-is.
pub fn pretty<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
) -> io::Result<()> {
    let mut serializer = Serializer::with_formatter(out, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer).map_err(io::Error::from)
}
