//! The bundled Markdown renderer script.

use std::path::Path;

/// File name of the renderer inside the resource directory.
pub const RENDERER_FILE: &str = "marked.min.js";

/// Used when the bundled renderer is missing: shows the text unformatted.
pub const FALLBACK_RENDERER: &str = "window.marked={parse:s=>'<pre>'+s+'</pre>'};";

/// Script source defining `marked.parse`.
#[derive(Debug, Clone)]
pub struct RendererScript {
    source: String,
    bundled: bool,
}

impl RendererScript {
    /// Reads the renderer from `resource_dir`, falling back to
    /// [`FALLBACK_RENDERER`] when it is absent or unreadable.
    pub fn load(resource_dir: &Path) -> Self {
        let path = resource_dir.join(RENDERER_FILE);
        match std::fs::read_to_string(&path) {
            Ok(source) => {
                tracing::debug!(path = %path.display(), bytes = source.len(), "renderer loaded");
                Self {
                    source,
                    bundled: true,
                }
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "renderer missing, using fallback");
                Self::fallback()
            }
        }
    }

    pub fn fallback() -> Self {
        Self {
            source: FALLBACK_RENDERER.to_string(),
            bundled: false,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the script came from the resource directory.
    pub fn is_bundled(&self) -> bool {
        self.bundled
    }
}

impl Default for RendererScript {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_resource_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let script = RendererScript::load(dir.path());
        assert!(!script.is_bundled());
        assert_eq!(script.source(), FALLBACK_RENDERER);
    }

    #[test]
    fn bundled_resource_is_used_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let src = "/* marked */ window.marked={parse:function(s){return s}};";
        std::fs::write(dir.path().join(RENDERER_FILE), src).unwrap();

        let script = RendererScript::load(dir.path());
        assert!(script.is_bundled());
        assert_eq!(script.source(), src);
    }
}
