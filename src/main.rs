//! main.rs
//! Entry point for lsr

pub(crate) mod core;
pub(crate) mod utils;

use crate::core::{Renderer, Result, list_path};
use crate::utils::cli::{CliAction, handle_args};

use std::io::Write;
use std::path::PathBuf;

fn main() {
    let (options, mut paths) = match handle_args() {
        CliAction::List(options, paths) => (options, paths),
        CliAction::Exit(code) => std::process::exit(code),
    };

    if paths.is_empty() {
        paths.push(PathBuf::from("."));
    }

    let renderer = Renderer::new(&options);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(&paths, &renderer, &mut out) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Lists every argument in order. With more than one argument, each listing
/// gets a `<path>:` header and a trailing blank line.
fn run(paths: &[PathBuf], renderer: &Renderer, out: &mut impl Write) -> Result<()> {
    let with_headers = paths.len() > 1;

    for path in paths {
        if with_headers {
            writeln!(out, "{}:", path.display())?;
        }
        list_path(path, renderer, out)?;
        if with_headers {
            writeln!(out)?;
        }
    }
    Ok(())
}
