use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;

use crate::error::RenderError;
use crate::options::PdfOptions;

/// The HTML→PDF conversion seam.
///
/// Layout, pagination, CSS, and font handling all live behind this trait;
/// platen never inspects the produced bytes beyond passing them along.
pub trait PdfEngine: Send + Sync {
    fn html_to_pdf(&self, html: &str, options: &PdfOptions) -> Result<Vec<u8>, RenderError>;
}

/// Engine that pipes HTML through an external converter process.
///
/// The converter reads HTML on stdin and writes PDF bytes to stdout, the
/// calling convention of `weasyprint - -` and friends. Each [`PdfOptions`]
/// entry becomes a flag: boolean `true` → `--key`, boolean `false` is
/// omitted, anything else → `--key value`.
pub struct CommandEngine {
    program: String,
    args: Vec<String>,
}

impl CommandEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Parse a full command line, e.g. `"weasyprint - -"`.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn option_args(options: &PdfOptions) -> Vec<String> {
        let mut args = Vec::new();
        for (key, value) in options.iter() {
            match value {
                Value::Bool(true) => args.push(format!("--{key}")),
                Value::Bool(false) | Value::Null => {}
                Value::String(s) => {
                    args.push(format!("--{key}"));
                    args.push(s.clone());
                }
                other => {
                    args.push(format!("--{key}"));
                    args.push(other.to_string());
                }
            }
        }
        args
    }
}

impl PdfEngine for CommandEngine {
    fn html_to_pdf(&self, html: &str, options: &PdfOptions) -> Result<Vec<u8>, RenderError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .args(Self::option_args(options))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Scoped so stdin closes before we wait, or the converter never sees EOF.
        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| RenderError::Engine("converter stdin unavailable".to_string()))?;
            stdin.write_all(html.as_bytes())?;
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(
                program = %self.program,
                status = %output.status,
                "PDF converter failed"
            );
            return Err(RenderError::Engine(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }
}
