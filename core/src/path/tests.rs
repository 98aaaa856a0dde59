use super::*;

#[test]
fn tilde_alone_is_home() {
    let home = Path::new("/home/ada");
    assert_eq!(expand_tilde("~", Some(home)), PathBuf::from("/home/ada"));
}

#[test]
fn tilde_slash_joins_home() {
    let home = Path::new("/home/ada");
    assert_eq!(
        expand_tilde("~/notes/todo.md", Some(home)),
        PathBuf::from("/home/ada/notes/todo.md")
    );
}

#[test]
fn tilde_user_and_inner_tilde_are_untouched() {
    let home = Path::new("/home/ada");
    assert_eq!(expand_tilde("~bob/x.md", Some(home)), PathBuf::from("~bob/x.md"));
    assert_eq!(expand_tilde("a/~/b.md", Some(home)), PathBuf::from("a/~/b.md"));
}

#[test]
fn missing_home_leaves_path_as_is() {
    assert_eq!(expand_tilde("~/x.md", None), PathBuf::from("~/x.md"));
}

#[test]
fn expand_path_is_absolute() {
    assert!(expand_path("relative/readme.md").is_absolute());
    assert!(expand_path("~/readme.md").is_absolute());
}

#[test]
fn display_name_is_base_name() {
    assert_eq!(display_name(Path::new("/tmp/docs/notes.md")), "notes.md");
}

#[cfg(unix)]
#[test]
fn directory_url_points_at_parent_with_trailing_slash() {
    assert_eq!(
        directory_url(Path::new("/tmp/docs/notes.md")),
        "file:///tmp/docs/"
    );
}

#[cfg(unix)]
#[test]
fn directory_url_percent_encodes_unsafe_characters() {
    assert_eq!(
        directory_url(Path::new("/tmp/my docs/#1/notes.md")),
        "file:///tmp/my%20docs/%231/"
    );
}

#[cfg(unix)]
#[test]
fn file_url_has_no_trailing_slash() {
    assert_eq!(file_url(Path::new("/tmp/a b.html")), "file:///tmp/a%20b.html");
}

#[cfg(unix)]
#[test]
fn directory_url_of_root_file() {
    assert_eq!(directory_url(Path::new("/notes.md")), "file:///");
}

#[cfg(windows)]
#[test]
fn directory_url_uses_forward_slashes_on_windows() {
    assert_eq!(
        directory_url(Path::new(r"C:\Users\ada\notes.md")),
        "file:///C:/Users/ada/"
    );
}

#[cfg(unix)]
#[test]
fn directory_url_escapes_ampersand() {
    assert_eq!(
        directory_url(Path::new("/tmp/x&amp;y/notes.md")),
        "file:///tmp/x%26amp;y/"
    );
}
