use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use crate::error::{ExobrainError, Result};
use crate::render::Prettifier;

/// Executable notes are run instead of displayed.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    false
}

/// Read a note and write its prettified lines to `out`.
pub fn show_note(
    path: &Path,
    prettifier: &Prettifier,
    verbose: bool,
    out: &mut impl Write,
) -> Result<()> {
    let content = fs::read_to_string(path)?;
    let text = content.trim_end_matches(['\r', '\n']);
    for line in prettifier.render(text, verbose) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

/// Run an executable note, blocking until it exits.
pub fn run_executable(path: &Path) -> Result<()> {
    let program = path.display().to_string();
    let status = spawn(Command::new(path), &program)?;
    warn_on_failure(&program, status);
    Ok(())
}

/// Open `path` in the editor. The command may carry arguments, e.g. `code -w`.
pub fn edit_file(editor: &str, path: &Path) -> Result<()> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().ok_or(ExobrainError::EmptyEditor)?;

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    let mut cmd = Command::new(program);
    cmd.args(parts).arg(path);
    let status = spawn(cmd, program)?;
    warn_on_failure(program, status);
    Ok(())
}

fn spawn(mut cmd: Command, program: &str) -> Result<ExitStatus> {
    log::debug!("launching {cmd:?}");
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| ExobrainError::Spawn {
            program: program.to_string(),
            source,
        })
}

fn warn_on_failure(program: &str, status: ExitStatus) {
    if !status.success() {
        log::warn!("{program} exited with {status}");
    }
}

fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::ColorScheme;
    use tempfile::tempdir;

    #[test]
    fn test_show_note_writes_rendered_lines() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("todo.txt");
        fs::write(&path, "* buy milk\nx done already\n\n\n").unwrap();

        let prettifier =
            Prettifier::new(ColorScheme::default().with_color(false), 4);
        let mut out = Vec::new();
        show_note(&path, &prettifier, false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "● buy milk\n");
    }

    #[test]
    fn test_show_note_with_crlf_endings() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("windows.txt");
        fs::write(&path, "* a\r\nb 1\r\n\r\n").unwrap();

        let prettifier =
            Prettifier::new(ColorScheme::default().with_color(false), 4);
        let mut out = Vec::new();
        show_note(&path, &prettifier, false, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "● a\nb 1\n");
    }

    #[test]
    fn test_show_missing_note_is_io_error() {
        let tmp = tempdir().unwrap();
        let prettifier = Prettifier::new(ColorScheme::default(), 4);
        let mut out = Vec::new();
        let err =
            show_note(&tmp.path().join("gone"), &prettifier, false, &mut out)
                .unwrap_err();
        assert!(matches!(err, ExobrainError::Io(_)));
    }

    #[test]
    fn test_empty_editor_rejected() {
        let tmp = tempdir().unwrap();
        let err = edit_file("   ", &tmp.path().join("note")).unwrap_err();
        assert!(matches!(err, ExobrainError::EmptyEditor));
    }

    #[test]
    fn test_missing_editor_binary_is_spawn_error() {
        let tmp = tempdir().unwrap();
        let err = edit_file(
            "definitely-not-an-editor-binary",
            &tmp.path().join("note"),
        )
        .unwrap_err();
        assert!(matches!(err, ExobrainError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_executable_checks_mode_bits() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempdir().unwrap();
        let plain = tmp.path().join("plain");
        let script = tmp.path().join("script");
        fs::write(&plain, "text").unwrap();
        fs::write(&script, "#!/bin/sh\necho hi\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755))
            .unwrap();

        assert!(!is_executable(&plain));
        assert!(is_executable(&script));
        assert!(!is_executable(tmp.path()));
    }
}
