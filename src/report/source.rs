//! Where the raw report comes from
//!
//! Normally the discovery tool is run with the query appended to its arguments.
//! A saved report can also be read from a file or from stdin.

use crate::config::DiscoveryConfig;
use crate::DiscoveryError;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncReadExt;
use tokio::process::Command;

/// Origin of the raw text report
#[derive(Debug, Clone)]
pub enum ReportSource {
    /// Run the discovery tool with the query words appended
    Command {
        program: String,
        args: Vec<String>,
        query: String,
    },

    /// Read a saved report
    File(PathBuf),

    /// Read the report from standard input
    Stdin,
}

impl ReportSource {
    /// Builds the command source from the discovery configuration
    pub fn command(config: &DiscoveryConfig, query: impl Into<String>) -> Self {
        Self::Command {
            program: config.program.clone(),
            args: config.args.clone(),
            query: query.into(),
        }
    }

    /// Interprets an `--input` value, `-` meaning stdin
    pub fn from_input(input: PathBuf) -> Self {
        if input.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(input)
        }
    }

    /// Obtains the raw report text
    ///
    /// Command output is decoded lossily; a non-zero exit status is an error
    /// carrying the tool's stderr.
    pub async fn load(&self) -> Result<String, DiscoveryError> {
        match self {
            Self::Command {
                program,
                args,
                query,
            } => run_discovery(program, args, query).await,
            Self::File(path) => tokio::fs::read_to_string(path).await.map_err(|source| {
                DiscoveryError::Read {
                    origin: path.display().to_string(),
                    source,
                }
            }),
            Self::Stdin => {
                let mut raw = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut raw)
                    .await
                    .map_err(|source| DiscoveryError::Read {
                        origin: "stdin".to_string(),
                        source,
                    })?;
                Ok(raw)
            }
        }
    }
}

async fn run_discovery(
    program: &str,
    args: &[String],
    query: &str,
) -> Result<String, DiscoveryError> {
    tracing::info!("Running {} {} {}", program, args.join(" "), query);

    let output = Command::new(program)
        .args(args)
        .args(query.split_whitespace())
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|source| DiscoveryError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(DiscoveryError::CommandFailed {
            program: program.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
