//! Command-line invocation.

use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;

/// Markdown viewer.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "mdug", version)]
struct Args {
    /// Markdown file to open.
    file: Option<String>,

    /// Anything after the first file is ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
}

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Open the given file, or the placeholder when `None`.
    View { file: Option<String> },
    /// Print help or version text and exit.
    Print { text: String },
}

impl Invocation {
    pub fn from_env() -> Self {
        Self::parse_from(std::env::args_os())
    }

    /// Parses a full argument list, program name first.
    ///
    /// Only the first positional argument is used. Arguments the parser
    /// rejects are not an error: the first one after the program name is
    /// taken as the file.
    pub fn parse_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        match Args::try_parse_from(&args) {
            Ok(parsed) => {
                if !parsed.ignored.is_empty() {
                    tracing::debug!(count = parsed.ignored.len(), "extra arguments ignored");
                }
                Invocation::View { file: parsed.file }
            }
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                Invocation::Print {
                    text: err.to_string(),
                }
            }
            Err(err) => {
                tracing::debug!(error = %err, "argument parsing failed, using first argument");
                Invocation::View {
                    file: args
                        .get(1)
                        .map(|arg| arg.to_string_lossy().into_owned()),
                }
            }
        }
    }

    /// The file to open, if any.
    pub fn file(&self) -> Option<&str> {
        match self {
            Invocation::View { file } => file.as_deref(),
            Invocation::Print { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_placeholder() {
        assert_eq!(
            Invocation::parse_from(["mdug"]),
            Invocation::View { file: None }
        );
    }

    #[test]
    fn single_file() {
        let invocation = Invocation::parse_from(["mdug", "~/notes.md"]);
        assert_eq!(invocation.file(), Some("~/notes.md"));
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let invocation = Invocation::parse_from(["mdug", "a.md", "b.md", "--flag"]);
        assert_eq!(invocation.file(), Some("a.md"));
    }

    #[test]
    fn unknown_flag_is_taken_as_file() {
        let invocation = Invocation::parse_from(["mdug", "-odd-name.md"]);
        assert_eq!(invocation.file(), Some("-odd-name.md"));
    }

    #[test]
    fn help_is_printed() {
        let invocation = Invocation::parse_from(["mdug", "--help"]);
        match invocation {
            Invocation::Print { text } => assert!(text.contains("Markdown file to open")),
            other => panic!("expected help, got {other:?}"),
        }
    }
}
