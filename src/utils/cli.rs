//! Command-line argument parsing and help for lsr.
//!
//! This module handles the flag surface (`-l`, `-a`, `-h`, combinable) and
//! turns the argument list into listing options plus the paths to list.
//! Option parsing stops at the first non-option argument; everything after
//! it is a path.

use crate::core::Options;

use std::path::PathBuf;

pub enum CliAction {
    List(Options, Vec<PathBuf>),
    Exit(i32),
}

pub fn handle_args() -> CliAction {
    parse_args(std::env::args().skip(1))
}

pub fn parse_args<I>(args: I) -> CliAction
where
    I: IntoIterator<Item = String>,
{
    let mut human = false;
    let mut long = false;
    let mut all = false;
    let mut paths = Vec::new();

    let mut args = args.into_iter();
    for arg in args.by_ref() {
        match arg.as_str() {
            "--help" => {
                print_help();
                return CliAction::Exit(0);
            }
            "--version" => {
                print_version();
                return CliAction::Exit(0);
            }
            "--" => break,
            flags if flags.starts_with('-') && flags.len() > 1 => {
                for flag in flags.chars().skip(1) {
                    match flag {
                        'l' => long = true,
                        'a' => all = true,
                        'h' => human = true,
                        unknown => {
                            eprintln!("error: unknown option {unknown}");
                            eprintln!("usage: lsr [-lah] [path ...]");
                            return CliAction::Exit(2);
                        }
                    }
                }
            }
            path => {
                paths.push(PathBuf::from(path));
                break;
            }
        }
    }
    paths.extend(args.map(PathBuf::from));

    CliAction::List(Options::new(human, long, all), paths)
}

fn print_version() {
    println!("lsr {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"lsr - A small directory-listing utility

USAGE:
  lsr [-lah] [path ...]

PATH:
  Zero paths lists the current directory. With more than one path, each
  listing is preceded by a "<path>:" header and followed by a blank line.

OPTIONS:
  -l          Long format: link count, owner, group, size, and time columns
  -a          Include hidden entries (names starting with '.')
  -h          Human-readable sizes (1024-based, one fractional digit)
      --help      Print help information
      --version   Display the installed version
"#
    );
}
