/*!
Catalog listings for diagnostic output.

The prefix written before every line is configuration handed to the
`Reporter`, not a process-wide value.
*/

use std::io::{self, Write};

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

use crate::core::constants::{DEFAULT_MARKER, DEFAULT_PREFIX};
use crate::core::crypto::registry::{AlgorithmRegistry, get_registry};
use crate::core::error::Result;

/// Reporting configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct ReportConfig {
    /// Text written at the start of every line
    pub prefix: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl ReportConfig {
    /// Create a new configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

/// Writes registry listings with a configured prefix
pub struct Reporter {
    config: ReportConfig,
    registry: &'static AlgorithmRegistry,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            registry: get_registry(),
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Prefix a diagnostic line
    pub fn format_line(&self, line: &str) -> String {
        format!("{}{}", self.config.prefix, line)
    }

    /// Write the supported cipher names, one per line
    pub fn write_cipher_names<W: Write>(&self, out: &mut W) -> Result<()> {
        self.write_listing(out, &self.registry.list_cipher_names())
    }

    /// Write the supported digest names, one per line
    pub fn write_digest_names<W: Write>(&self, out: &mut W) -> Result<()> {
        self.write_listing(out, &self.registry.list_digest_names())
    }

    /// Print the supported cipher names to stderr
    pub fn print_cipher_names(&self) -> Result<()> {
        self.write_cipher_names(&mut io::stderr().lock())
    }

    /// Print the supported digest names to stderr
    pub fn print_digest_names(&self) -> Result<()> {
        self.write_digest_names(&mut io::stderr().lock())
    }

    fn write_listing<W: Write>(&self, out: &mut W, names: &[(&'static str, bool)]) -> Result<()> {
        for (name, is_default) in names {
            let marker = if *is_default { DEFAULT_MARKER } else { "" };
            writeln!(out, "{}{}{}", self.config.prefix, name, marker)?;
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(ReportConfig::default().prefix, "opmsg: ");
        assert_eq!(ReportConfig::with_prefix("x: ").prefix, "x: ");
    }

    #[test]
    fn test_write_digest_names() {
        let reporter = Reporter::new(ReportConfig::with_prefix("x: "));
        let mut out = Vec::new();
        reporter.write_digest_names(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "x: ripemd160\nx: sha256\nx: sha384\nx: sha512 (default)\n");
    }

    #[test]
    fn test_write_cipher_names() {
        let reporter = Reporter::default();
        let mut out = Vec::new();
        reporter.write_cipher_names(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "opmsg: aes128cbc");
        assert!(lines.contains(&"opmsg: aes256cbc (default)"));
        assert!(lines.contains(&"opmsg: null"));
        assert!(lines.iter().all(|line| line.starts_with("opmsg: ")));
    }

    #[test]
    fn test_write_error_propagates() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let result = Reporter::default().write_digest_names(&mut Broken);
        assert!(matches!(result, Err(crate::core::error::Error::Io(_))));
    }

    #[test]
    fn test_format_line() {
        let reporter = Reporter::new(ReportConfig::with_prefix("tool: "));
        assert_eq!(reporter.format_line("bad key"), "tool: bad key");
    }
}
