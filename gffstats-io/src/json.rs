use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;
use log::info;

use gffstats_summary::FeatureStatistics;

use crate::error::{Result, StatsWriteError};

pub trait StatsWrite {
    ///
    /// Render as two-space indented JSON, without a trailing newline
    ///
    fn to_json_string(&self) -> Result<String>;

    ///
    /// Write the JSON rendering, followed by a newline, to any writer
    ///
    /// # Arguments
    /// - writer: where to write
    fn write_json_to<W: Write>(&self, writer: W) -> Result<()>;

    ///
    /// Write data to disk as a json file, creating missing parent directories
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_json<T: AsRef<Path>>(&self, path: T) -> Result<()>;

    ///
    /// Write data to disk as a json.gz file, creating missing parent directories
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_json_gz<T: AsRef<Path>>(&self, path: T) -> Result<()>;
}

fn create_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| {
            StatsWriteError::ParentDirectoryCreation {
                path: path.display().to_string(),
                source,
            }
        })?;
    }
    Ok(())
}

impl StatsWrite for FeatureStatistics {
    fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn write_json_to<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    fn write_json<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        create_parent_dirs(path)?;

        let file = File::create(path)?;
        self.write_json_to(BufWriter::new(file))?;

        info!("Statistics written to {}", path.display());
        Ok(())
    }

    fn write_json_gz<T: AsRef<Path>>(&self, path: T) -> Result<()> {
        let path = path.as_ref();
        create_parent_dirs(path)?;

        let file = File::create(path)?;
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::best());

        self.write_json_to(&mut encoder)?;
        encoder.finish()?.flush()?;

        info!("Statistics written to {}", path.display());
        Ok(())
    }
}
