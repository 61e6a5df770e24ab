//! Capability-based file access for payloads and result documents.
//!
//! Paths arrive as UTF-8 strings from the command line; every operation
//! resolves them against an ambient directory handle from `cap-std` before
//! touching the file.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use std::io::{self, Read};
use std::path::Component;

/// Read a UTF-8 text file in full.
pub fn read_to_string(path: &Utf8Path) -> io::Result<String> {
    let mut file = fs_utf8::File::open_ambient(path, ambient_authority())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Whether `path` is a regular file.
///
/// A missing path is reported as an [`io::ErrorKind::NotFound`] error so
/// callers can tell it apart from a directory.
pub fn is_regular_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = parent_and_name(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Write `contents` to `path`, creating missing parent directories.
///
/// An existing file is replaced.
pub fn write_creating_parents(path: &Utf8Path, contents: &[u8]) -> io::Result<()> {
    create_parent_dirs(path)?;
    let (dir, name) = parent_and_name(path)?;
    dir.write(name.as_str(), contents)
}

/// Open the directory containing `path` and return it with the file name.
fn parent_and_name(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

fn create_parent_dirs(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() {
        return Ok(());
    }
    let (anchor, relative) = split_anchor(parent)?;
    if relative.as_str().is_empty() {
        return Ok(());
    }
    anchor.create_dir_all(&relative)
}

/// Split `dir` into an opened root or working directory and the remainder.
///
/// cap-std refuses absolute paths relative to a directory handle, so the
/// root (or Windows prefix) is opened separately.
fn split_anchor(dir: &Utf8Path) -> io::Result<(fs_utf8::Dir, Utf8PathBuf)> {
    let std_dir = dir.as_std_path();
    let (base, rest) = match std_dir.components().next() {
        Some(Component::Prefix(prefix)) => {
            let drive = prefix
                .as_os_str()
                .to_str()
                .ok_or_else(|| io::Error::other("non-UTF-8 path prefix"))?;
            let base = Utf8PathBuf::from(drive).join(std::path::MAIN_SEPARATOR_STR);
            let rest = dir
                .strip_prefix(&base)
                .or_else(|_| dir.strip_prefix(drive))
                .map_err(|_| io::Error::other(format!("cannot strip {drive} from {dir}")))?;
            (base, rest.to_owned())
        }
        Some(Component::RootDir) => {
            let base = Utf8PathBuf::from(std::path::MAIN_SEPARATOR_STR);
            let rest = dir
                .strip_prefix(&base)
                .map_err(|_| io::Error::other(format!("cannot strip root from {dir}")))?;
            (base, rest.to_owned())
        }
        _ => (Utf8PathBuf::from("."), dir.to_owned()),
    };
    let anchor = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    Ok((anchor, rest))
}
