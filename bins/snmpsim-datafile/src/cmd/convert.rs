use std::path::PathBuf;

use snmpsim_api::Grammar;
use snmpsim_engine::run_in_new_runtime_with_return;

use super::Options;
use super::error::DatafileError;

/// Load `input` and write it back to `output` with the output's grammar.
///
/// Records are re-encoded through the typed layer, so escaping and tags are
/// normalised (e.g. a printable payload stored as hex is written as text).
pub fn run(opts: &Options, input: PathBuf, output: PathBuf) -> Result<(), DatafileError> {
    let (source, report) = opts.load_blocking(&input)?;
    let target = opts.store_for(&output)?;

    let mut records = Vec::with_capacity(report.records.len());
    for record in &report.records {
        let value = source.grammar().decode(record).map_err(snmpsim_engine::EngineError::from)?;
        let encoded = target
            .grammar()
            .encode(&record.oid, &value)
            .map_err(snmpsim_engine::EngineError::from)?;
        records.push(encoded);
    }

    let written =
        run_in_new_runtime_with_return(async move { target.write(output, &records).await })??;
    tracing::info!(input = %input.display(), records = written, skipped = report.skipped, "converted");
    Ok(())
}
