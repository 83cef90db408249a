use eyre::Result;
use serde::Serialize;
use std::io::{self, IsTerminal, Write};

/// Determines report format based on flags and TTY detection
pub fn should_use_json(json_flag: bool) -> bool {
    json_flag || !io::stdout().is_terminal()
}

/// Prints a serializable report as YAML or JSON
pub fn output<T: Serialize>(data: &T, use_json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    output_to_writer(data, use_json, &mut handle)
}

fn output_to_writer<T: Serialize, W: Write>(data: &T, use_json: bool, writer: &mut W) -> Result<()> {
    if use_json {
        serde_json::to_writer_pretty(&mut *writer, data)?;
        writeln!(writer)?;
    } else {
        serde_yaml::to_writer(&mut *writer, data)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::{CopyStats, VersionReport};

    fn report(matches: bool) -> VersionReport {
        VersionReport {
            properties: "1.2.0".to_string(),
            manifest: "1.2.0".to_string(),
            header: if matches { "1.2.0" } else { "1.2.1" }.to_string(),
            matches,
        }
    }

    fn render<T: Serialize>(data: &T, use_json: bool) -> String {
        let mut buffer = Vec::new();
        output_to_writer(data, use_json, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_should_use_json_when_flag_true() {
        assert!(should_use_json(true));
    }

    #[test]
    fn test_version_report_json() {
        let output = render(&report(false), true);
        assert!(output.contains("\"properties\": \"1.2.0\""));
        assert!(output.contains("\"header\": \"1.2.1\""));
        assert!(output.contains("\"matches\": false"));
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_version_report_yaml() {
        let output = render(&report(true), false);
        assert!(output.contains("manifest:"));
        assert!(output.contains("1.2.0"));
        assert!(output.contains("matches: true"));
    }

    #[test]
    fn test_copy_stats_yaml() {
        let stats = CopyStats {
            directories: 2,
            files: 5,
        };
        let output = render(&stats, false);
        assert!(output.contains("directories: 2"));
        assert!(output.contains("files: 5"));
    }
}
