//! Input file loading.

use std::fs;
use std::path::Path;

use anyhow::Context;

/// Read the wallet list: one key or address per line, blank lines
/// skipped. A missing or unreadable file is fatal to the run.
pub fn load_wallet_inputs(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read input file {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_input(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn blank_lines_are_skipped() {
        let file = write_input("key-one\n\n   \nkey-two\n");
        let inputs = load_wallet_inputs(file.path()).unwrap();
        assert_eq!(inputs, vec!["key-one", "key-two"]);
    }

    #[test]
    fn lines_are_trimmed() {
        let file = write_input("  key-one  \r\n");
        let inputs = load_wallet_inputs(file.path()).unwrap();
        assert_eq!(inputs, vec!["key-one"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_wallet_inputs(Path::new("/nonexistent/wallets.txt"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("wallets.txt"));
    }

    #[test]
    fn empty_file_yields_empty_list() {
        let file = write_input("");
        assert!(load_wallet_inputs(file.path()).unwrap().is_empty());
    }
}
