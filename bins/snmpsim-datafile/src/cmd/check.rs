use std::path::PathBuf;

use super::Options;
use super::error::DatafileError;

pub fn run(opts: &Options, files: Vec<PathBuf>) -> Result<(), DatafileError> {
    let total = files.len();
    let mut failed = 0;

    for path in &files {
        match opts.load_blocking(path) {
            Ok((_, report)) => {
                println!(
                    "{}: {} records, {} skipped",
                    path.display(),
                    report.records.len(),
                    report.skipped
                );
            }
            Err(e) => {
                failed += 1;
                println!("{}: FAILED: {e}", path.display());
            }
        }
    }

    if failed > 0 {
        return Err(DatafileError::Check { failed, total });
    }
    Ok(())
}
