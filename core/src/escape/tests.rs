use super::*;

#[test]
fn plain_text_is_unchanged() {
    assert_eq!(escape_template_literal("# Title\n\nbody"), "# Title\n\nbody");
}

#[test]
fn escapes_backslash_backtick_and_dollar() {
    assert_eq!(escape_template_literal(r"a\b"), r"a\\b");
    assert_eq!(escape_template_literal("`code`"), r"\`code\`");
    assert_eq!(escape_template_literal("${x}"), r"\${x}");
}

#[test]
fn escaped_backslash_before_backtick_is_not_collapsed() {
    // A literal backslash followed by a backtick must stay two characters
    // once the literal is evaluated.
    assert_eq!(escape_template_literal(r"\`"), r"\\\`");
}

#[test]
fn no_unescaped_backtick_or_dollar_survives() {
    let escaped = escape_template_literal(r"x`y$z\`$\\$");
    let bytes = escaped.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\\' {
            i += 2;
            continue;
        }
        assert_ne!(bytes[i], b'`', "bare backtick in {escaped}");
        assert_ne!(bytes[i], b'$', "bare dollar in {escaped}");
        i += 1;
    }
}

#[test]
fn multibyte_text_is_preserved() {
    assert_eq!(escape_template_literal("héllo `wörld` 🦀"), r"héllo \`wörld\` 🦀");
}

#[test]
fn closing_script_tag_cannot_escape_the_element() {
    let escaped = escape_template_literal("before </script><script>alert(1)</script>");
    assert!(!escaped.contains("</script"));
    assert_eq!(
        escaped,
        r"before \x3C/script>\x3Cscript>alert(1)\x3C/script>"
    );
}

#[test]
fn carriage_returns_are_escaped() {
    assert_eq!(escape_template_literal("a\r\nb\rc\n"), "a\\r\nb\\rc\n");
    assert!(!escape_template_literal("# Title\r\n\r\nbody\r\n").contains('\r'));
}
