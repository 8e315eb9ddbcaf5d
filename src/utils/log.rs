use crate::processing::Verdict;
use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

const LOG_DIR: &str = "logs";

fn ensure_log_dir() -> io::Result<()> {
    if !Path::new(LOG_DIR).exists() {
        fs::create_dir_all(LOG_DIR)?;
    }
    Ok(())
}

/// Appends a timestamped message to a log file under `logs/`.
///
/// # Arguments
///
/// * `filename` - The name of the log file
/// * `message` - The message to log
pub fn log_to_file(filename: &str, message: &str) -> io::Result<()> {
    ensure_log_dir()?;

    let path = format!("{}/{}", LOG_DIR, filename);
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    writeln!(file, "[{}] {}", timestamp, message)?;
    file.flush()?;

    Ok(())
}

/// CSV record of every verdict in a run, written under `logs/`.
pub struct VerdictLog {
    writer: csv::Writer<File>,
}

impl VerdictLog {
    /// Opens the verdict file in append mode, writing the header row only
    /// when the file is new.
    pub fn open(filename: &str) -> io::Result<Self> {
        ensure_log_dir()?;

        let path = format!("{}/{}", LOG_DIR, filename);
        let is_new = !Path::new(&path).exists();
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if is_new {
            writer
                .write_record(["index", "value", "anomalous"])
                .map_err(csv_to_io)?;
        }

        Ok(Self { writer })
    }

    pub fn record(&mut self, verdict: &Verdict) -> io::Result<()> {
        self.writer
            .write_record([
                verdict.index.to_string(),
                verdict.value.to_string(),
                verdict.anomalous.to_string(),
            ])
            .map_err(csv_to_io)?;
        self.writer.flush()
    }
}

fn csv_to_io(err: csv::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, err)
}
