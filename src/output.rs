use formatx::formatx;
use std::fmt::Debug;
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

pub trait Output: Debug {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write>;
    /// Whether this output can be considered a no-op and therefore that any code that only writes to the output can be skipped.
    fn is_noop(&self) -> bool {
        false
    }
}

#[derive(Debug)]
pub struct FileOutput {
    directory_path: PathBuf,
    file_template: String,
}

impl FileOutput {
    pub fn new(directory_path: PathBuf, file_template: String) -> Self {
        Self {
            directory_path,
            file_template,
        }
    }
}

impl Output for FileOutput {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write> {
        Ok(BufWriter::new(File::create(self.directory_path.join(
            formatx!(&self.file_template, location_key)?,
        ))?))
    }
}

impl Output for &FileOutput {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write> {
        <FileOutput as Output>::writer_for_location_key(self, location_key)
    }
}

/// An output that writes every location to standard output, with a header
/// line separating locations.
#[derive(Debug, Default)]
pub struct StdoutOutput;

impl Output for StdoutOutput {
    fn writer_for_location_key(&self, location_key: &str) -> anyhow::Result<impl Write> {
        let mut stdout = io::stdout();
        writeln!(stdout, "==> {location_key} <==")?;
        Ok(stdout)
    }
}

/// An output that goes to nowhere/ a "sink"/ /dev/null.
#[derive(Debug, Default)]
pub struct SinkOutput;

impl Output for SinkOutput {
    fn writer_for_location_key(&self, _location_key: &str) -> anyhow::Result<impl Write> {
        Ok(io::sink())
    }

    fn is_noop(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use std::fs;

    #[rstest]
    fn file_output_writes_to_templated_path() {
        let dir = std::env::temp_dir().join("heatnet_output_test");
        fs::create_dir_all(&dir).unwrap();
        let output = FileOutput::new(dir.clone(), "heatnet_{}".to_string());
        {
            let mut writer = output.writer_for_location_key("summary.txt").unwrap();
            writer.write_all(b"totals").unwrap();
        }
        let written = fs::read_to_string(dir.join("heatnet_summary.txt")).unwrap();
        assert_eq!(written, "totals");
        fs::remove_dir_all(&dir).unwrap();
    }

    #[rstest]
    fn sink_output_is_noop() {
        assert!(SinkOutput.is_noop());
        assert!(!StdoutOutput.is_noop());
        let mut writer = SinkOutput.writer_for_location_key("anywhere").unwrap();
        writer.write_all(b"dropped").unwrap();
    }
}
