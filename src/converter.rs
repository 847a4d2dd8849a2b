use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::constants::{ARRAY_NAME, BYTES_PER_LINE, GUARD_TAG, HEADER_EXTENSION, INPUT_PATH};
use crate::header::{write_header, HeaderLayout};
use crate::identifier::resolve_array_name;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("cannot read input file {}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write header file {}", path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One font-to-header conversion.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub input_path: PathBuf,
    pub header_path: PathBuf,
    pub guard_tag: String,
    /// Explicit identifier; derived from `input_path` when `None`.
    pub array_name: Option<String>,
    pub bytes_per_line: usize,
}

impl ConversionJob {
    /// Job writing `<guard_tag>.h` into the working directory.
    pub fn new<P: AsRef<Path>>(input_path: P, guard_tag: &str) -> Self {
        Self {
            input_path: input_path.as_ref().to_path_buf(),
            header_path: PathBuf::from(format!("{}.{}", guard_tag, HEADER_EXTENSION)),
            guard_tag: guard_tag.to_string(),
            array_name: None,
            bytes_per_line: BYTES_PER_LINE,
        }
    }

    pub fn from_constants() -> Self {
        Self {
            array_name: ARRAY_NAME.map(str::to_string),
            ..Self::new(INPUT_PATH, GUARD_TAG)
        }
    }
}

/// What a finished conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub array_name: String,
    pub header_path: PathBuf,
    pub bytes: usize,
    pub lines: usize,
}

/// Reads the input font and writes it out as a header.
///
/// The output is created (or truncated) before anything is written, so a
/// failure midway leaves a partial file behind.
pub fn convert(job: &ConversionJob) -> Result<ConversionReport, ConvertError> {
    let data = fs::read(&job.input_path).map_err(|source| ConvertError::InputUnreadable {
        path: job.input_path.clone(),
        source,
    })?;
    info!("Read {} bytes from {}", data.len(), job.input_path.display());

    let array_name = resolve_array_name(job.array_name.as_deref(), &job.input_path);
    if job.array_name.is_some() {
        debug!("Using configured array name {}", array_name);
    } else {
        debug!("Derived array name {} from input file name", array_name);
    }

    let layout = HeaderLayout {
        guard_tag: job.guard_tag.clone(),
        array_name,
        bytes_per_line: job.bytes_per_line,
    };

    let output_err = |source: io::Error| ConvertError::OutputUnwritable {
        path: job.header_path.clone(),
        source,
    };
    let file = File::create(&job.header_path).map_err(output_err)?;
    let mut writer = BufWriter::new(file);
    write_header(&mut writer, &layout, &data).map_err(output_err)?;
    writer.flush().map_err(output_err)?;

    let lines = layout.line_count(data.len());
    info!("Wrote {} ({} lines)", job.header_path.display(), lines);

    Ok(ConversionReport {
        array_name: layout.array_name,
        header_path: job.header_path.clone(),
        bytes: data.len(),
        lines,
    })
}
