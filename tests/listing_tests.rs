use lsr::core::{Options, Renderer, browse_dir, list_path, sort_entries};

use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

fn listing(path: &std::path::Path, options: &Options) -> Result<String, Box<dyn std::error::Error>> {
    let renderer = Renderer::new(options);
    let mut out = Vec::new();
    list_path(path, &renderer, &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_default_listing_hides_dotfiles() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("visible.txt"))?;
    File::create(dir.path().join(".hidden"))?;
    fs::create_dir(dir.path().join(".git"))?;

    let out = listing(dir.path(), &Options::default())?;
    assert_eq!(out, "visible.txt\n");
    Ok(())
}

#[test]
fn test_all_flag_shows_the_full_enumeration() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("visible.txt"))?;
    File::create(dir.path().join(".hidden"))?;

    let out = listing(dir.path(), &Options::new(false, false, true))?;
    let names: Vec<&str> = out.lines().collect();
    assert_eq!(names, vec![".hidden", "visible.txt"]);
    Ok(())
}

#[test]
fn test_order_is_bytewise_regardless_of_filtering() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    // Uppercase sorts before lowercase byte-wise; the dotfile sorts first
    // but only shows with -a.
    for name in ["delta", "Alpha", ".cache", "beta"] {
        File::create(dir.path().join(name))?;
    }

    let plain = listing(dir.path(), &Options::default())?;
    assert_eq!(plain, "Alpha\nbeta\ndelta\n");

    let all = listing(dir.path(), &Options::new(false, false, true))?;
    assert_eq!(all, ".cache\nAlpha\nbeta\ndelta\n");
    Ok(())
}

#[test]
fn test_single_file_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("single.txt");
    let mut file = File::create(&path)?;
    file.write_all(b"payload")?;

    let out = listing(&path, &Options::default())?;
    assert_eq!(out, format!("{}\n", path.display()));
    Ok(())
}

#[test]
fn test_long_listing_ends_lines_with_names() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let mut file = File::create(dir.path().join("data.bin"))?;
    file.write_all(&[0u8; 2048])?;
    File::create(dir.path().join("empty"))?;

    let out = listing(dir.path(), &Options::new(true, true, false))?;
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(" data.bin"), "got {:?}", lines[0]);
    assert!(lines[1].ends_with(" empty"), "got {:?}", lines[1]);

    // Width-5 right-aligned link count, then a space.
    for line in &lines {
        let links = &line[..5];
        assert!(
            links.trim_start().chars().all(|c| c.is_ascii_digit()),
            "bad link field in {line:?}"
        );
        assert_eq!(line.as_bytes()[5], b' ');
    }

    // 2048 bytes in human mode.
    assert!(lines[0].contains("  2.0kB"), "got {:?}", lines[0]);
    // Zero bytes stay below the scaling threshold.
    assert!(lines[1].contains("0B"), "got {:?}", lines[1]);
    Ok(())
}

#[test]
fn test_missing_path_reports_not_found() {
    let renderer = Renderer::new(&Options::default());
    let mut out = Vec::new();
    let err = list_path(
        std::path::Path::new("/path/does/not/exist"),
        &renderer,
        &mut out,
    )
    .expect_err("listing a missing path must fail");
    assert!(
        err.to_string().starts_with("unable to open /path/does/not/exist:"),
        "got {err}"
    );
}

#[test]
fn test_browse_and_sort_cover_every_entry() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    for name in ["one", "two", ".three"] {
        File::create(dir.path().join(name))?;
    }

    let mut entries = browse_dir(dir.path())?;
    assert_eq!(entries.len(), 3);

    sort_entries(&mut entries);
    let names: Vec<String> = entries.iter().map(|e| e.name_str().into_owned()).collect();
    assert_eq!(names, vec![".three", "one", "two"]);
    Ok(())
}
