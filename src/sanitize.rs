//! Safe-filename normalization for uploaded files.
//!
//! Uploaded filenames are attacker-controlled and end up as paths under the
//! upload directory, so they are reduced to a flat ASCII name before staging:
//! no path separators survive, whitespace collapses to `_`, and anything
//! outside `[A-Za-z0-9._-]` is dropped. The recognized extension is
//! preserved. A fully-unsafe input can normalize to the empty string; the
//! caller treats that like any other name (the extension check then drops it).

/// Normalizes an uploaded filename to a safe flat name.
pub fn secure_filename(filename: &str) -> String {
    // Only the final path component matters; both separator styles appear
    // in browser-supplied names.
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let mut out = String::with_capacity(base.len());
    let mut last_was_space = false;
    for c in base.chars() {
        if c.is_whitespace() {
            if !last_was_space && !out.is_empty() {
                out.push('_');
            }
            last_was_space = true;
        } else {
            last_was_space = false;
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                out.push(c);
            }
        }
    }

    out.trim_matches(|c| c == '.' || c == '_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_passes_through() {
        assert_eq!(secure_filename("resume.pdf"), "resume.pdf");
    }

    #[test]
    fn path_traversal_is_stripped() {
        assert_eq!(secure_filename("../../etc/passwd"), "passwd");
        assert_eq!(secure_filename("..\\..\\cv.docx"), "cv.docx");
        assert_eq!(secure_filename("/tmp/cv.pdf"), "cv.pdf");
    }

    #[test]
    fn whitespace_collapses_to_underscore() {
        assert_eq!(secure_filename("my  resume 2024.pdf"), "my_resume_2024.pdf");
    }

    #[test]
    fn unsafe_characters_are_dropped() {
        assert_eq!(secure_filename("r$é#sumé!.pdf"), "rsum.pdf");
    }

    #[test]
    fn fully_unsafe_input_yields_empty() {
        assert_eq!(secure_filename("..."), "");
        assert_eq!(secure_filename("$$$"), "");
    }

    #[test]
    fn extension_is_preserved() {
        assert_eq!(secure_filename("a b.DOCX"), "a_b.DOCX");
    }
}
