use mdug_core::path::{directory_url, expand_path};
use mdug_core::renderer::RendererScript;
use mdug_core::surface::{DisplaySurface, EDITOR_PATH, Launcher, Window};
use mdug_core::{DisplayState, Shell};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Default)]
struct RecordingSurface {
    pages: Vec<(String, Option<String>)>,
}

impl RecordingSurface {
    fn last(&self) -> &(String, Option<String>) {
        self.pages.last().expect("nothing rendered")
    }
}

impl DisplaySurface for RecordingSurface {
    fn render(&mut self, html: &str, base_url: Option<&str>) {
        self.pages
            .push((html.to_string(), base_url.map(str::to_string)));
    }
}

#[derive(Default)]
struct RecordingWindow {
    title: Option<String>,
}

impl Window for RecordingWindow {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }
}

#[derive(Default)]
struct RecordingLauncher {
    spawned: Vec<(PathBuf, PathBuf)>,
    fail: bool,
}

impl Launcher for RecordingLauncher {
    fn spawn(&mut self, program: &Path, arg: &Path) -> io::Result<()> {
        self.spawned.push((program.to_path_buf(), arg.to_path_buf()));
        if self.fail {
            Err(io::Error::from(io::ErrorKind::NotFound))
        } else {
            Ok(())
        }
    }
}

type TestShell = Shell<RecordingSurface, RecordingWindow, RecordingLauncher>;

fn shell() -> TestShell {
    Shell::new(
        RecordingSurface::default(),
        RecordingWindow::default(),
        RecordingLauncher::default(),
        RendererScript::fallback(),
    )
}

fn write(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn initialize_without_file_shows_placeholder() {
    let mut shell = shell();
    shell.initialize(None);

    assert_eq!(shell.state(), &DisplayState::Placeholder);
    assert!(shell.surface().last().0.contains("mdug yourfile.md"));
    assert_eq!(shell.surface().last().1, None);
    assert_eq!(shell.current_path(), None);
    assert_eq!(shell.window().title, None);
}

#[test]
fn initialize_with_file_loads_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "readme.md", b"# Readme\n");

    let mut shell = shell();
    shell.initialize(path.to_str());

    assert_eq!(shell.state(), &DisplayState::Loaded(path.clone()));
    assert_eq!(shell.current_path(), Some(path.as_path()));
}

#[test]
fn load_sets_path_title_and_base() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "notes.md", b"Hello $world `code`");

    let mut shell = shell();
    shell.load_document(path.to_str().unwrap());

    assert_eq!(shell.current_path(), Some(path.as_path()));
    assert_eq!(shell.window().title.as_deref(), Some("notes.md"));

    let (html, base) = shell.surface().last();
    assert!(html.contains(r"marked.parse(`Hello \$world \`code\``)"));
    assert_eq!(base.as_deref(), Some(directory_url(&path).as_str()));
}

#[test]
fn missing_file_shows_error_and_keeps_state() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.md");

    let mut shell = shell();
    shell.load_document(missing.to_str().unwrap());

    let (html, base) = shell.surface().last();
    assert!(html.contains(&format!("File not found: {}", missing.display())));
    assert_eq!(base, &None);
    assert_eq!(shell.current_path(), None);
    assert_eq!(shell.window().title, None);
    assert!(matches!(shell.state(), DisplayState::Error(_)));
}

#[test]
fn missing_tilde_path_reports_expanded_path() {
    let raw = "~/mdug-definitely-missing-6b1f0c.md";
    let expanded = expand_path(raw);
    assert!(!expanded.exists());

    let mut shell = shell();
    shell.load_document(raw);

    let (html, _) = shell.surface().last();
    assert!(html.contains(&expanded.display().to_string()));
    assert_eq!(shell.current_path(), None);
}

#[test]
fn failed_load_after_success_keeps_previous_path() {
    let dir = tempfile::tempdir().unwrap();
    let good = write(dir.path(), "good.md", b"ok");
    let bad = write(dir.path(), "bad.md", &[0xff, 0xfe, 0x00]);

    let mut shell = shell();
    shell.load_document(good.to_str().unwrap());
    shell.load_document(bad.to_str().unwrap());

    assert_eq!(shell.current_path(), Some(good.as_path()));
    assert_eq!(shell.window().title.as_deref(), Some("good.md"));
    assert_eq!(
        shell.state(),
        &DisplayState::Error(format!("Could not read: {}", bad.display()))
    );
}

#[test]
fn second_load_replaces_path() {
    let dir = tempfile::tempdir().unwrap();
    let first = write(dir.path(), "first.md", b"1");
    let second = write(dir.path(), "second.md", b"2");

    let mut shell = shell();
    shell.load_document(first.to_str().unwrap());
    shell.load_document(second.to_str().unwrap());

    assert_eq!(shell.current_path(), Some(second.as_path()));
    assert_eq!(shell.window().title.as_deref(), Some("second.md"));
    assert_eq!(shell.surface().pages.len(), 2);
}

#[test]
fn editor_is_not_launched_without_document() {
    let mut shell = shell();
    shell.initialize(None);
    shell.open_in_external_editor();

    assert!(shell.launcher().spawned.is_empty());
}

#[test]
fn editor_is_not_launched_after_failed_load() {
    let mut shell = shell();
    shell.load_document("/definitely/not/here.md");
    shell.open_in_external_editor();

    assert!(shell.launcher().spawned.is_empty());
}

#[test]
fn editor_gets_current_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "notes.md", b"x");

    let mut shell = shell();
    shell.load_document(path.to_str().unwrap());
    shell.open_in_external_editor();

    assert_eq!(
        shell.launcher().spawned,
        vec![(PathBuf::from(EDITOR_PATH), path.clone())]
    );
}

#[test]
fn editor_launch_failure_is_silent() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "notes.md", b"x");

    let mut shell = Shell::new(
        RecordingSurface::default(),
        RecordingWindow::default(),
        RecordingLauncher {
            fail: true,
            ..Default::default()
        },
        RendererScript::fallback(),
    );
    shell.load_document(path.to_str().unwrap());
    let rendered = shell.surface().pages.len();

    shell.open_in_external_editor();

    assert_eq!(shell.launcher().spawned.len(), 1);
    assert_eq!(shell.surface().pages.len(), rendered);
    assert_eq!(shell.state(), &DisplayState::Loaded(path));
}

#[test]
fn show_error_is_verbatim() {
    let mut shell = shell();
    shell.show_error("<b>boom</b>");

    assert!(shell.surface().last().0.contains("<p><b>boom</b></p>"));
    assert_eq!(shell.state(), &DisplayState::Error("<b>boom</b>".to_string()));
}
