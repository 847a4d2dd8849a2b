use std::io::{self, Write};

use crate::constants::INDENT;

/// Names and layout for one generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    pub guard_tag: String,
    pub array_name: String,
    pub bytes_per_line: usize,
}

impl HeaderLayout {
    /// Number of byte lines `len` input bytes occupy.
    pub fn line_count(&self, len: usize) -> usize {
        len.div_ceil(self.bytes_per_line.max(1))
    }
}

/// Writes `data` as a guarded `static const unsigned char` array.
///
/// Every line except the one holding the last byte ends with a comma.
/// An empty slice produces the braces with nothing between them.
pub fn write_header<W: Write>(out: &mut W, layout: &HeaderLayout, data: &[u8]) -> io::Result<()> {
    let tag = &layout.guard_tag;
    writeln!(out, "#ifndef {}_H", tag)?;
    writeln!(out, "#define {}_H", tag)?;
    writeln!(out)?;
    writeln!(out, "static const unsigned char {}[] = {{", layout.array_name)?;

    let last = layout.line_count(data.len()).saturating_sub(1);
    for (line, chunk) in data.chunks(layout.bytes_per_line.max(1)).enumerate() {
        write!(out, "{}", INDENT)?;
        for (i, byte) in chunk.iter().enumerate() {
            if i > 0 {
                write!(out, ", ")?;
            }
            write!(out, "0x{:02x}", byte)?;
        }
        if line < last {
            write!(out, ",")?;
        }
        writeln!(out)?;
    }

    writeln!(out, "}};")?;
    writeln!(out)?;
    writeln!(out, "#endif // {}", tag)?;
    Ok(())
}

/// In-memory variant of [`write_header`].
pub fn render_header(layout: &HeaderLayout, data: &[u8]) -> io::Result<String> {
    let mut buf = Vec::with_capacity(data.len() * 6 + 128);
    write_header(&mut buf, layout, data)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
