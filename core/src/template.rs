//! HTML documents handed to the display surface.

/// Id of the element the rendered markup is injected into.
pub const CONTAINER_ID: &str = "c";

/// Stylesheet for rendered documents. Light by default, dark under
/// `prefers-color-scheme: dark`.
pub const STYLE: &str = r#"
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",sans-serif;font-size:16px;line-height:1.6;max-width:820px;margin:0 auto;padding:40px 32px 80px;color:#24292f;background:#ffffff}
h1,h2,h3,h4{font-weight:600;line-height:1.25;margin:24px 0 16px}
h1,h2{border-bottom:1px solid #d0d7de;padding-bottom:.3em}
h1{font-size:2em}
h2{font-size:1.5em}
p{margin-bottom:16px}
a{color:#0969da}
code{font-family:"SF Mono",Menlo,Consolas,monospace;font-size:85%;background:#f6f8fa;padding:.2em .4em;border-radius:4px}
pre{background:#f6f8fa;border:1px solid #d0d7de;border-radius:6px;padding:16px;overflow:auto}
pre code{background:none;padding:0}
blockquote{margin:0 0 16px;padding:0 1em;color:#656d76;border-left:4px solid #d0d7de}
ul,ol{padding-left:2em;margin-bottom:16px}
table{border-collapse:collapse;width:100%;margin-bottom:16px}
table td,table th{padding:6px 13px;border:1px solid #d0d7de}
table th{font-weight:600;background:#f6f8fa}
table tr:nth-child(2n){background:#f6f8fa}
img{max-width:100%}
hr{height:4px;border:0;border-radius:2px;background:#d0d7de;margin:24px 0}
@media (prefers-color-scheme:dark){
body{background:#0d1117;color:#e6edf3}
a{color:#58a6ff}
code,pre,table th,table tr:nth-child(2n){background:#161b22}
pre,table td,table th{border-color:#30363d}
h1,h2{border-color:#30363d}
blockquote{color:#8b949e;border-color:#3d444d}
hr{background:#30363d}
}
"#;

/// Page shown when no file was given.
pub const PLACEHOLDER_HTML: &str = r#"<!DOCTYPE html><html><head><meta charset="UTF-8"></head>
<body style="font-family:system-ui,sans-serif;padding:60px;color:#999;text-align:center;">
<h2 style="margin-top:120px;">Markdug</h2>
<p>Run <code>mdug yourfile.md</code> to open a file.</p>
</body></html>"#;

/// Error page. `message` is inserted as-is.
pub fn error_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"></head>\
         <body style=\"font-family:system-ui,sans-serif;padding:40px;color:#c00\">\
         <h2>Error</h2><p>{message}</p></body></html>"
    )
}

/// Full document for a Markdown file.
///
/// `escaped` must already be template-literal safe (see
/// [`crate::escape::escape_template_literal`]); `renderer` is inlined as-is
/// and must define `marked.parse`.
pub fn document(escaped: &str, renderer: &str, base_url: &str) -> String {
    let mut html = String::with_capacity(STYLE.len() + renderer.len() + escaped.len() + 512);
    html.push_str("<!DOCTYPE html><html><head><meta charset=\"UTF-8\">");
    html.push_str("<base href=\"");
    html.push_str(&base_url.replace('"', "%22"));
    html.push_str("\"><style>");
    html.push_str(STYLE);
    html.push_str("</style></head><body>\n<script>");
    html.push_str(renderer);
    html.push_str("</script>\n<div id=\"");
    html.push_str(CONTAINER_ID);
    html.push_str("\"></div>\n<script>document.getElementById('");
    html.push_str(CONTAINER_ID);
    html.push_str("').innerHTML=marked.parse(`");
    html.push_str(escaped);
    html.push_str("`);</script>\n</body></html>");
    html
}
