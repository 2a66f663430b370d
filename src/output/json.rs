use serde::Serialize;
use std::path::PathBuf;

pub fn output_json<T: Serialize>(report: &T, output_file: Option<PathBuf>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    match output_file {
        Some(path) => crate::io::write_file(&path, &json)?,
        None => println!("{json}"),
    }
    Ok(())
}
