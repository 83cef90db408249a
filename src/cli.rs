use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_LIBRARY: &str = "ChronosESP32";
pub const DEFAULT_OUTPUT: &str = "keywords.txt";
pub const DEFAULT_PIOENV: &str = "devkit";

#[derive(Parser)]
#[command(
    name = "hdrkw",
    about = "Arduino keywords.txt generation and release helpers for C/C++ library headers",
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Force JSON output for reports (default: YAML, or JSON when not a TTY)
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Log pass-level diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Extract a keywords listing from a public header
    Keywords {
        /// Header file to scan
        #[arg(value_name = "HEADER")]
        header: PathBuf,

        /// Library name written as the KEYWORD1 entry
        #[arg(short, long, default_value = DEFAULT_LIBRARY)]
        library: String,

        /// Destination of the listing (overwritten)
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Print the listing instead of writing it
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Copy a source tree over a destination tree
    Copy {
        /// Source directory
        #[arg(value_name = "SRC", default_value = "src")]
        src: PathBuf,

        /// Destination directory (default: .pio/libdeps/<ENV>/src)
        #[arg(value_name = "DST")]
        dst: Option<PathBuf>,

        /// PlatformIO environment used to build the default destination
        #[arg(short, long, env = "PIOENV", default_value = DEFAULT_PIOENV)]
        env: String,
    },

    /// Check that library.properties, library.json and the header agree on the version
    VersionCheck {
        /// key=value properties file
        #[arg(long, default_value = "library.properties")]
        properties: PathBuf,

        /// JSON library manifest
        #[arg(long, default_value = "library.json")]
        manifest: PathBuf,

        /// Header carrying the version macros
        #[arg(long, default_value = "src/ChronosESP32.h")]
        header: PathBuf,

        /// Macro prefix, expanded to <PREFIX>_MAJOR, <PREFIX>_MINOR, <PREFIX>_PATCH
        #[arg(long, default_value = "CHRONOSESP_VERSION")]
        macro_prefix: String,
    },
}

/// Default copy destination for a PlatformIO environment
pub fn pio_libdeps_dir(env: &str) -> PathBuf {
    PathBuf::from(".pio").join("libdeps").join(env).join("src")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_keywords_defaults() {
        let cli = Cli::try_parse_from(["hdrkw", "keywords", "src/Lib.h"]).unwrap();
        match cli.command {
            Command::Keywords {
                header,
                library,
                output,
                stdout,
            } => {
                assert_eq!(header, PathBuf::from("src/Lib.h"));
                assert_eq!(library, DEFAULT_LIBRARY);
                assert_eq!(output, PathBuf::from(DEFAULT_OUTPUT));
                assert!(!stdout);
            }
            _ => panic!("expected keywords command"),
        }
    }

    #[test]
    fn test_keywords_overrides() {
        let cli = Cli::try_parse_from(["hdrkw", "keywords", "a.h", "-l", "Demo", "-o", "out/kw.txt"]).unwrap();
        match cli.command {
            Command::Keywords { library, output, .. } => {
                assert_eq!(library, "Demo");
                assert_eq!(output, PathBuf::from("out/kw.txt"));
            }
            _ => panic!("expected keywords command"),
        }
    }

    #[test]
    fn test_keywords_requires_header() {
        assert!(Cli::try_parse_from(["hdrkw", "keywords"]).is_err());
    }

    #[test]
    fn test_version_check_defaults() {
        let cli = Cli::try_parse_from(["hdrkw", "version-check"]).unwrap();
        match cli.command {
            Command::VersionCheck {
                properties,
                manifest,
                header,
                macro_prefix,
            } => {
                assert_eq!(properties, PathBuf::from("library.properties"));
                assert_eq!(manifest, PathBuf::from("library.json"));
                assert_eq!(header, PathBuf::from("src/ChronosESP32.h"));
                assert_eq!(macro_prefix, "CHRONOSESP_VERSION");
            }
            _ => panic!("expected version-check command"),
        }
    }

    #[test]
    fn test_copy_explicit_env() {
        let cli = Cli::try_parse_from(["hdrkw", "copy", "--env", "s3"]).unwrap();
        match cli.command {
            Command::Copy { src, dst, env } => {
                assert_eq!(src, PathBuf::from("src"));
                assert!(dst.is_none());
                assert_eq!(env, "s3");
            }
            _ => panic!("expected copy command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["hdrkw", "version-check", "--json", "-v"]).unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn test_pio_libdeps_dir() {
        assert_eq!(pio_libdeps_dir("devkit"), PathBuf::from(".pio/libdeps/devkit/src"));
    }
}
