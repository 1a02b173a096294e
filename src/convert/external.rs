//! PDF conversion through an external program.

use super::{ConversionInput, ConvertOptions, SecondaryConverter};
use crate::error::{Error, Result};
use crate::render::{self, PrimaryFormat};
use command_group::CommandGroup;
use std::fs;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs a conversion command inside a per-attempt temporary directory.
///
/// Arguments may contain the placeholders `{input}`, `{output}` and
/// `{outdir}`. The command runs in its own process group; on timeout the
/// whole group is killed, so helpers it started do not outlive the attempt.
/// The directory and everything written to it is removed when the attempt
/// returns, whatever the outcome.
#[derive(Debug, Clone)]
pub struct ExternalCommandConverter {
    name: String,
    program: String,
    args: Vec<String>,
    input_format: PrimaryFormat,
}

impl ExternalCommandConverter {
    /// Converter with an explicit command line.
    pub fn new<I, S>(
        name: impl Into<String>,
        program: impl Into<String>,
        args: I,
        input_format: PrimaryFormat,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            input_format,
        }
    }

    /// `pandoc` converting the Markdown rendering.
    pub fn pandoc(program: impl Into<String>) -> Self {
        Self::new(
            "pandoc",
            program,
            ["{input}", "-o", "{output}"],
            PrimaryFormat::Markdown,
        )
    }

    /// Headless office suite converting the plain-text rendering.
    pub fn office(program: impl Into<String>) -> Self {
        Self::new(
            "office",
            program,
            ["--headless", "--convert-to", "pdf", "--outdir", "{outdir}", "{input}"],
            PrimaryFormat::Text,
        )
    }

    /// Program invoked.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Format written as the command's input.
    pub fn input_format(&self) -> PrimaryFormat {
        self.input_format
    }

    fn input_bytes(&self, input: &ConversionInput<'_>, options: &ConvertOptions) -> Result<Vec<u8>> {
        if input.format == self.input_format {
            return Ok(input.primary.bytes.clone());
        }
        let content = render::render(input.document, self.input_format, &options.render)?;
        Ok(content.into_bytes())
    }

    fn command(&self, dir: &Path, input: &Path, output: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        for arg in &self.args {
            let arg = arg
                .replace("{input}", &input.to_string_lossy())
                .replace("{output}", &output.to_string_lossy())
                .replace("{outdir}", &dir.to_string_lossy());
            cmd.arg(arg);
        }
        cmd.current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }

    fn run(&self, mut cmd: Command, timeout: Duration) -> Result<ExitStatus> {
        let mut child = cmd.group_spawn().map_err(|e| {
            Error::conversion(&self.name, format!("failed to start '{}': {}", self.program, e))
        })?;

        let started = Instant::now();
        loop {
            match child.try_wait()? {
                Some(status) => return Ok(status),
                None if started.elapsed() >= timeout => {
                    log::warn!(
                        "Converter '{}' exceeded {:?}, killing '{}'",
                        self.name,
                        timeout,
                        self.program
                    );
                    if let Err(e) = child.kill() {
                        log::warn!("Failed to kill process group of '{}': {}", self.program, e);
                    }
                    let _ = child.wait();
                    return Err(Error::ConverterTimeout {
                        converter: self.name.clone(),
                        timeout,
                    });
                }
                None => std::thread::sleep(POLL_INTERVAL),
            }
        }
    }
}

impl SecondaryConverter for ExternalCommandConverter {
    fn name(&self) -> &str {
        &self.name
    }

    fn convert(&self, input: &ConversionInput<'_>, options: &ConvertOptions) -> Result<Vec<u8>> {
        let dir = tempfile::Builder::new().prefix("reportgen-").tempdir()?;
        let input_path = dir
            .path()
            .join(format!("report.{}", self.input_format.extension()));
        let output_path = dir.path().join("report.pdf");

        fs::write(&input_path, self.input_bytes(input, options)?)?;

        let cmd = self.command(dir.path(), &input_path, &output_path);
        log::debug!("Running {:?}", cmd);
        let status = self.run(cmd, options.timeout)?;
        if !status.success() {
            return Err(Error::conversion(
                &self.name,
                format!("'{}' exited with {}", self.program, status),
            ));
        }

        match fs::read(&output_path) {
            Ok(bytes) if !bytes.is_empty() => Ok(bytes),
            Ok(_) => Err(Error::conversion(&self.name, "produced an empty file")),
            Err(e) => Err(Error::conversion(
                &self.name,
                format!("no output at {}: {}", output_path.display(), e),
            )),
        }
    }
}
