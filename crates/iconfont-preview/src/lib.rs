//! Preview page for a generated icon font
//!
//! Produces a single static `index.html` listing every icon as
//! `<i class="<prefix> <prefix>-<name>">`, with a search box that filters by
//! name and click-to-copy of the class, plus its stylesheet `preview.css`.
//! The page links the stylesheet the font compiler emitted, so it works
//! straight from the directory it is written to.

use iconfont_core::escape_attr;
use iconfont_core::font_config::DEFAULT_FONT_NAME;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};

/// Stylesheet written next to the page
pub const PREVIEW_CSS: &str = include_str!("../templates/preview.css");

pub const INDEX_FILE_NAME: &str = "index.html";
pub const CSS_FILE_NAME: &str = "preview.css";

const WORDPRESS_HEADING: &str = "WordPress Icons";
const REPOSITORY_URL: &str = "https://github.com/krstivoja/wordpress-icons-font";
const PACKAGE_URL: &str = "https://www.npmjs.com/package/wordpress-icons-font";

/// A button in the page header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewLink {
    pub label: String,
    pub href: String,
    /// Extra class, e.g. `btn-github`
    #[serde(default)]
    pub class: Option<String>,
}

impl PreviewLink {
    pub fn new(label: &str, href: &str, class: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            class: Some(class.to_string()),
        }
    }

    /// Inline glyph for the classes the stylesheet knows about
    fn icon(&self) -> Option<&'static str> {
        match self.class.as_deref()? {
            "btn-github" => Some(GITHUB_ICON),
            "btn-npm" => Some(NPM_ICON),
            _ => None,
        }
    }
}

/// What the page shows besides the icons themselves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreviewConfig {
    /// Document `<title>`
    pub title: String,
    /// Visible page heading
    pub heading: String,
    /// Class prefix the font stylesheet uses
    pub prefix: String,
    /// Font stylesheet, relative to the page
    pub stylesheet_href: String,
    /// Where the "Download Fonts" button points; hidden when `None`
    pub download_href: Option<String>,
    pub links: Vec<PreviewLink>,
    /// Footer lines, written as-is
    pub footer: Vec<String>,
}

impl PreviewConfig {
    /// Page for a font called `font_name` whose assets live in `dist_href`
    ///
    /// The stock `wordpress-icons` font also gets the project's header
    /// buttons and attribution footer.
    pub fn for_font(font_name: &str, prefix: &str, dist_href: &str) -> Self {
        let dist = dist_href.trim_end_matches('/');
        let stock = font_name == DEFAULT_FONT_NAME;
        let heading = if stock {
            WORDPRESS_HEADING.to_string()
        } else {
            title_case(font_name)
        };
        let (links, footer) = if stock {
            (wordpress_links(), wordpress_footer())
        } else {
            (Vec::new(), Vec::new())
        };
        Self {
            title: format!("{} Font Preview", heading),
            heading: format!("{} Font", heading),
            prefix: prefix.to_string(),
            stylesheet_href: if dist.is_empty() {
                format!("{}.css", font_name)
            } else {
                format!("{}/{}.css", dist, font_name)
            },
            download_href: Some(format!("{}/", dist)),
            links,
            footer,
        }
    }
}

fn wordpress_links() -> Vec<PreviewLink> {
    vec![
        PreviewLink::new("View on GitHub", REPOSITORY_URL, "btn-github"),
        PreviewLink::new("View on npm", PACKAGE_URL, "btn-npm"),
    ]
}

fn wordpress_footer() -> Vec<String> {
    vec![
        r#"Icons created by <a href="https://github.com/WordPress/gutenberg/tree/trunk/packages/icons" target="_blank">WordPress Design Team</a>"#.to_string(),
        r#"Font conversion tool by <a href="https://dplugins.com" target="_blank">DPlugins</a>"#.to_string(),
    ]
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self::for_font(
            iconfont_core::font_config::DEFAULT_FONT_NAME,
            iconfont_core::font_config::DEFAULT_PREFIX,
            "dist",
        )
    }
}

/// Paths of the written preview files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFiles {
    pub index: PathBuf,
    pub stylesheet: PathBuf,
}

/// `wordpress-icons` -> `Wordpress Icons`
fn title_case(name: &str) -> String {
    name.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape `value` for a single-quoted JS string inside a double-quoted attribute
fn escape_js_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['\\', '\'']) {
        return escape_attr(value);
    }
    let js = value.replace('\\', "\\\\").replace('\'', "\\'");
    Cow::Owned(escape_attr(&js).into_owned())
}

const GITHUB_ICON: &str = r#"<svg viewBox="0 0 16 16" xmlns="http://www.w3.org/2000/svg">
                        <path d="M8 0C3.58 0 0 3.58 0 8c0 3.54 2.29 6.53 5.47 7.59.4.07.55-.17.55-.38 0-.19-.01-.82-.01-1.49-2.01.37-2.53-.49-2.69-.94-.09-.23-.48-.94-.82-1.13-.28-.15-.68-.52-.01-.53.63-.01 1.08.58 1.23.82.72 1.21 1.87.87 2.33.66.07-.52.28-.87.51-1.07-1.78-.2-3.64-.89-3.64-3.95 0-.87.31-1.59.82-2.15-.08-.2-.36-1.02.08-2.12 0 0 .67-.21 2.2.82.64-.18 1.32-.27 2-.27.68 0 1.36.09 2 .27 1.53-1.04 2.2-.82 2.2-.82.44 1.1.16 1.92.08 2.12.51.56.82 1.27.82 2.15 0 3.07-1.87 3.75-3.65 3.95.29.25.54.73.54 1.48 0 1.07-.01 1.93-.01 2.2 0 .21.15.46.55.38A8.013 8.013 0 0016 8c0-4.42-3.58-8-8-8z"/>
                    </svg>"#;

const NPM_ICON: &str = r#"<svg viewBox="0 0 16 16" xmlns="http://www.w3.org/2000/svg">
                        <path d="M0 0v16h16V0H0zm13 13H8v-2H5v2H3V3h10v10z"/>
                    </svg>"#;

const DOWNLOAD_ICON: &str = r#"<svg viewBox="0 0 16 16" xmlns="http://www.w3.org/2000/svg">
                        <path d="M8.5 1.5A.5.5 0 0 1 9 2v5.793l2.146-2.147a.5.5 0 0 1 .708.708l-3 3a.5.5 0 0 1-.708 0l-3-3a.5.5 0 1 1 .708-.708L7.5 7.793V2a.5.5 0 0 1 .5-.5z"/>
                        <path d="M3 9.5a.5.5 0 0 1 .5.5v2.5a1 1 0 0 0 1 1h7a1 1 0 0 0 1-1V10a.5.5 0 0 1 1 0v2.5a2 2 0 0 1-2 2h-7a2 2 0 0 1-2-2V10a.5.5 0 0 1 .5-.5z"/>
                    </svg>"#;

const SCRIPT: &str = r#"    <script>
        const searchInput = document.getElementById('searchInput');
        const iconGrid = document.getElementById('iconGrid');
        const iconItems = iconGrid.querySelectorAll('.icon-item');

        searchInput.addEventListener('input', (e) => {
            const searchTerm = e.target.value.toLowerCase();
            iconItems.forEach(item => {
                const name = item.dataset.name.toLowerCase();
                item.style.display = name.includes(searchTerm) ? 'flex' : 'none';
            });
        });

        function copyIconClass(className) {
            navigator.clipboard.writeText(className).then(() => {
                showCopiedNotification(className);
            });
        }

        function showCopiedNotification(className) {
            const notification = document.createElement('div');
            notification.className = 'copied';
            notification.textContent = `Copied: ${className}`;
            document.body.appendChild(notification);
            setTimeout(() => notification.remove(), 3000);
        }
    </script>
"#;

/// Render the page for `names`, which are listed in sorted order
pub fn render_html<S: AsRef<str>>(names: &[S], config: &PreviewConfig) -> String {
    let mut names: Vec<&str> = names.iter().map(AsRef::as_ref).collect();
    names.sort_unstable();
    names.dedup();

    let prefix = escape_attr(&config.prefix);
    let mut html = String::with_capacity(2048 + names.len() * 200);

    // Writing to a String cannot fail
    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html lang=\"en\">");
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "    <meta charset=\"UTF-8\">");
    let _ = writeln!(
        html,
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
    );
    let _ = writeln!(html, "    <title>{}</title>", escape_attr(&config.title));
    let _ = writeln!(
        html,
        "    <link rel=\"stylesheet\" href=\"{}\">",
        escape_attr(&config.stylesheet_href)
    );
    let _ = writeln!(html, "    <link rel=\"stylesheet\" href=\"{}\">", CSS_FILE_NAME);
    let _ = writeln!(html, "</head>");
    let _ = writeln!(html, "<body>");
    let _ = writeln!(html, "    <div class=\"container\">");
    let _ = writeln!(html, "        <div class=\"header\">");
    let _ = writeln!(html, "            <div class=\"header-left\">");
    let _ = writeln!(html, "                <h1>{}</h1>", escape_attr(&config.heading));
    let _ = writeln!(
        html,
        "                <div class=\"stats\">{} icons available</div>",
        names.len()
    );
    let _ = writeln!(html, "            </div>");
    let _ = writeln!(html, "            <div class=\"header-buttons\">");
    for link in &config.links {
        let class = link
            .class
            .as_deref()
            .map(|c| format!("btn {}", c))
            .unwrap_or_else(|| "btn".to_string());
        match link.icon() {
            Some(icon) => {
                let _ = writeln!(
                    html,
                    "                <a href=\"{}\" target=\"_blank\" class=\"{}\">",
                    escape_attr(&link.href),
                    escape_attr(&class)
                );
                let _ = writeln!(html, "                    {}", icon);
                let _ = writeln!(html, "                    {}", escape_attr(&link.label));
                let _ = writeln!(html, "                </a>");
            },
            None => {
                let _ = writeln!(
                    html,
                    "                <a href=\"{}\" target=\"_blank\" class=\"{}\">{}</a>",
                    escape_attr(&link.href),
                    escape_attr(&class),
                    escape_attr(&link.label)
                );
            },
        }
    }
    if let Some(href) = &config.download_href {
        let _ = writeln!(
            html,
            "                <a href=\"{}\" class=\"btn btn-download\">",
            escape_attr(href)
        );
        let _ = writeln!(html, "                    {}", DOWNLOAD_ICON);
        let _ = writeln!(html, "                    Download Fonts");
        let _ = writeln!(html, "                </a>");
    }
    let _ = writeln!(html, "            </div>");
    let _ = writeln!(html, "        </div>");
    let _ = writeln!(
        html,
        "        <input type=\"text\" class=\"search\" placeholder=\"Search icons...\" id=\"searchInput\">"
    );
    let _ = writeln!(html, "        <div class=\"grid\" id=\"iconGrid\">");
    let js_prefix = escape_js_attr(&config.prefix);
    for raw in &names {
        let js_name = escape_js_attr(raw);
        let name = escape_attr(raw);
        let _ = writeln!(
            html,
            "            <div class=\"icon-item\" data-name=\"{name}\" onclick=\"copyIconClass('{js_prefix}-{js_name}')\">"
        );
        let _ = writeln!(html, "                <i class=\"{prefix} {prefix}-{name}\"></i>");
        let _ = writeln!(html, "                <div class=\"icon-name\">{prefix}-{name}</div>");
        let _ = writeln!(html, "            </div>");
    }
    let _ = writeln!(html, "        </div>");
    if !config.footer.is_empty() {
        let _ = writeln!(html, "        <div class=\"footer\">");
        for line in &config.footer {
            let _ = writeln!(html, "            <div class=\"footer-line\">{}</div>", line);
        }
        let _ = writeln!(html, "        </div>");
    }
    let _ = writeln!(html, "    </div>");
    html.push('\n');
    html.push_str(SCRIPT);
    let _ = writeln!(html, "</body>");
    html.push_str("</html>");
    html
}

/// Write `index.html` and `preview.css` into `dir`, creating it if needed
pub fn write_preview<S: AsRef<str>>(
    dir: &Path,
    names: &[S],
    config: &PreviewConfig,
) -> std::io::Result<PreviewFiles> {
    std::fs::create_dir_all(dir)?;

    let files = PreviewFiles {
        index: dir.join(INDEX_FILE_NAME),
        stylesheet: dir.join(CSS_FILE_NAME),
    };
    std::fs::write(&files.stylesheet, PREVIEW_CSS)?;
    std::fs::write(&files.index, render_html(names, config))?;

    log::info!(
        "Wrote preview for {} icon(s) to {}",
        names.len(),
        files.index.display()
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("my-icons"), "My Icons");
        assert_eq!(title_case("my_font"), "My Font");
        assert_eq!(title_case("x"), "X");
    }

    #[test]
    fn test_default_config() {
        let config = PreviewConfig::default();
        assert_eq!(config.prefix, "wpi");
        assert_eq!(config.stylesheet_href, "dist/wordpress-icons.css");
        assert_eq!(config.download_href.as_deref(), Some("dist/"));
        assert_eq!(config.title, "WordPress Icons Font Preview");
        assert_eq!(config.heading, "WordPress Icons Font");
    }

    #[test]
    fn test_stock_font_has_project_links_and_footer() {
        let html = render_html(&["add"], &PreviewConfig::default());
        assert!(html.contains("<h1>WordPress Icons Font</h1>"));
        assert!(html.contains(
            r#"<a href="https://github.com/krstivoja/wordpress-icons-font" target="_blank" class="btn btn-github">"#
        ));
        assert!(html.contains(r#"class="btn btn-npm">"#));
        assert!(html.contains("View on npm"));
        assert!(html.contains(r#"<div class="footer">"#));
        assert!(html.contains("Font conversion tool by"));
    }

    #[test]
    fn test_custom_font_is_unbranded() {
        let config = PreviewConfig::for_font("my-glyphs", "mg", "dist");
        assert_eq!(config.heading, "My Glyphs Font");
        assert!(config.links.is_empty());
        let html = render_html(&["add"], &config);
        assert!(!html.contains("btn-github"));
        assert!(!html.contains(r#"class="footer""#));
    }

    #[test]
    fn test_items_sorted_with_prefix() {
        let html = render_html(&["zoom", "add-card"], &PreviewConfig::default());
        let add = html.find("wpi-add-card").unwrap();
        let zoom = html.find("wpi-zoom").unwrap();
        assert!(add < zoom);
        assert!(html.contains(r#"<i class="wpi wpi-add-card"></i>"#));
        assert!(html.contains("copyIconClass('wpi-zoom')"));
        assert!(html.contains(r#"data-name="zoom""#));
        assert!(html.contains("2 icons available"));
    }

    #[test]
    fn test_links_stylesheets_and_script() {
        let html = render_html::<&str>(&[], &PreviewConfig::default());
        assert!(html.contains(r#"<link rel="stylesheet" href="dist/wordpress-icons.css">"#));
        assert!(html.contains(r#"<link rel="stylesheet" href="preview.css">"#));
        assert!(html.contains("searchInput"));
        assert!(html.contains("navigator.clipboard.writeText"));
        assert!(html.contains("0 icons available"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn test_duplicates_listed_once() {
        let html = render_html(&["a", "a", "b"], &PreviewConfig::default());
        assert_eq!(html.matches("class=\"icon-item\"").count(), 2);
    }

    #[test]
    fn test_names_escaped() {
        let html = render_html(&["a&b"], &PreviewConfig::default());
        assert!(html.contains("wpi-a&amp;b"));
        assert!(!html.contains("wpi-a&b"));
    }

    #[test]
    fn test_apostrophe_in_name_stays_inside_js_string() {
        let html = render_html(&["it's"], &PreviewConfig::default());
        assert!(html.contains(r#"onclick="copyIconClass('wpi-it\'s')""#));
        assert!(html.contains(r#"data-name="it's""#));
        assert!(html.contains(r#"<i class="wpi wpi-it's"></i>"#));
    }

    #[test]
    fn test_escape_js_attr() {
        assert_eq!(escape_js_attr("plain"), "plain");
        assert_eq!(escape_js_attr(r"a\b"), r"a\\b");
        assert_eq!(escape_js_attr(r#"a"'b"#), r#"a&quot;\'b"#);
    }

    #[test]
    fn test_header_links_and_no_download() {
        let config = PreviewConfig {
            download_href: None,
            links: vec![PreviewLink {
                label: "Docs".into(),
                href: "https://example.com/docs".into(),
                class: None,
            }],
            ..PreviewConfig::default()
        };
        let html = render_html(&["a"], &config);
        assert!(html.contains(r#"class="btn">Docs</a>"#));
        assert!(!html.contains("btn-github"));
        assert!(!html.contains("Download Fonts"));
    }

    #[test]
    fn test_write_preview() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("site");
        let files = write_preview(&out, &["add"], &PreviewConfig::default()).unwrap();

        assert_eq!(files.index, out.join("index.html"));
        let css = std::fs::read_to_string(&files.stylesheet).unwrap();
        assert!(css.contains("--color-primary"));
        let html = std::fs::read_to_string(&files.index).unwrap();
        assert!(html.contains("wpi-add"));
    }
}
