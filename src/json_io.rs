use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::TallyError;
use crate::model::{Fragment, ResultSet};

pub(crate) fn read_captured_pages(path: &Path) -> Result<Vec<Vec<Fragment>>, TallyError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

pub(crate) fn write_result_set(path: &Path, results: &ResultSet) -> Result<(), TallyError> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, results)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
