use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use surveylens_analysis::{
    response::Response,
    source::{FallbackSource, JsonFileSource, ResponseSource},
    tags::TagRules,
};

/// Write `value` as pretty-printed JSON to `output`, or to stdout without one.
pub fn write_json<T>(value: &T, output: Option<&Path>) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let (mut writer, target): (Box<dyn Write>, _) = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            (Box::new(BufWriter::new(file)), path.display().to_string())
        }
        None => (Box::new(io::stdout().lock()), "stdout".to_owned()),
    };
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write JSON to {target}"))?;
    writeln!(writer)
        .and_then(|()| writer.flush())
        .with_context(|| format!("Failed to flush output to {target}"))?;
    Ok(())
}

/// Read survey responses
///
/// Reads `path` when given, otherwise the first existing file among the
/// default response locations.
pub fn read_responses(path: Option<&Path>) -> anyhow::Result<Vec<Response>> {
    let responses = match path {
        Some(path) => JsonFileSource::new(path)
            .fetch()
            .with_context(|| format!("Failed to load responses: {}", path.display()))?,
        None => FallbackSource::default()
            .fetch()
            .context("Failed to load responses")?,
    };
    eprintln!("Loaded {} responses", responses.len());
    Ok(responses)
}

/// Read tag rules from a JSON file, or the built-in rules without one.
pub fn read_tag_rules(path: Option<&Path>) -> anyhow::Result<TagRules> {
    match path {
        Some(path) => TagRules::load(path)
            .with_context(|| format!("Failed to load tag rules: {}", path.display())),
        None => Ok(TagRules::standard()),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_write_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("features.json");
        write_json(&json!([{ "id": "r-1" }]), Some(&path)).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.ends_with("]\n"));
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&written).unwrap(),
            json!([{ "id": "r-1" }])
        );
    }

    #[test]
    fn test_write_json_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("features.json");
        let err = write_json(&json!({}), Some(&path)).unwrap_err();
        assert!(err.to_string().starts_with("Failed to create output file"));
    }
}
