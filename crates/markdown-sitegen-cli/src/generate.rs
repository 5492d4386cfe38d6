use log::{debug, info, warn};
use markdown_sitegen_engine::{extract_title, render_document};
use regex::{NoExpand, Regex};
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to render {path}: {source}")]
    Render {
        path: PathBuf,
        source: markdown_sitegen_engine::Error,
    },
    #[error("Invalid output path for generated page: {0}")]
    InvalidPagePath(PathBuf),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(PathBuf),
}

/// Removes the output directory and recreates it empty.
pub fn prepare_public_dir(path: &Path) -> Result<(), GenerateError> {
    info!("Cleaning '{}' folder...", path.display());
    match fs::remove_dir_all(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }
    fs::create_dir_all(path)?;
    Ok(())
}

/// Copies the contents of `src` into `dst`, creating sub-directories.
///
/// A missing source directory is skipped with a warning.
pub fn copy_recursive(src: &Path, dst: &Path) -> Result<(), GenerateError> {
    if !src.is_dir() {
        warn!("Nothing to copy, '{}' is not a directory", src.display());
        return Ok(());
    }

    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let path = entry?.path();
        let Some(name) = path.file_name() else {
            continue;
        };
        let target = dst.join(name);

        if path.is_dir() {
            debug!("Copying content of '{}' to '{}'", path.display(), target.display());
            copy_recursive(&path, &target)?;
        } else {
            debug!("Copying '{}' into '{}'", path.display(), dst.display());
            fs::copy(&path, &target)?;
        }
    }
    Ok(())
}

fn title_placeholder() -> &'static Regex {
    static TITLE_REGEX: OnceLock<Regex> = OnceLock::new();
    TITLE_REGEX.get_or_init(|| Regex::new(r"\{\{ *Title *\}\}").expect("Invalid title placeholder regex"))
}

fn content_placeholder() -> &'static Regex {
    static CONTENT_REGEX: OnceLock<Regex> = OnceLock::new();
    CONTENT_REGEX
        .get_or_init(|| Regex::new(r"\{\{ *Content *\}\}").expect("Invalid content placeholder regex"))
}

/// Substitutes every `{{ Title }}` and `{{ Content }}` placeholder.
///
/// Inner spaces are optional. Replacement text is inserted literally.
pub fn apply_template(template: &str, title: &str, content: &str) -> String {
    let with_title = title_placeholder().replace_all(template, NoExpand(title));
    content_placeholder()
        .replace_all(&with_title, NoExpand(content))
        .into_owned()
}

/// Renders one Markdown file through the template into `dst`.
pub fn generate_page(src: &Path, template: &str, dst: &Path) -> Result<(), GenerateError> {
    info!("Generating page from '{}' to '{}'", src.display(), dst.display());

    if dst.extension().is_none_or(|ext| ext != "html") {
        return Err(GenerateError::InvalidPagePath(dst.to_path_buf()));
    }

    let markdown = fs::read_to_string(src)?;
    let render_err = |source| GenerateError::Render {
        path: src.to_path_buf(),
        source,
    };
    let title = extract_title(&markdown).map_err(render_err)?;
    let body = render_document(&markdown).map_err(render_err)?;

    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dst, apply_template(template, &title, &body))?;
    Ok(())
}

/// Generates one `.html` page per Markdown file under `content_dir`,
/// mirroring the directory layout into `public_dir`.
///
/// Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    public_dir: &Path,
) -> Result<usize, GenerateError> {
    if !content_dir.is_dir() {
        return Err(GenerateError::InvalidContentDir(content_dir.to_path_buf()));
    }
    let template = fs::read_to_string(template_path)?;

    let mut sources = Vec::new();
    scan_directory_recursive(content_dir, &mut sources)?;
    sources.sort();

    for src in &sources {
        let dst = page_destination(content_dir, src, public_dir)?;
        generate_page(src, &template, &dst)?;
    }
    Ok(sources.len())
}

/// Maps `content_dir/a/b.md` to `public_dir/a/b.html`.
fn page_destination(content_dir: &Path, src: &Path, public_dir: &Path) -> Result<PathBuf, GenerateError> {
    let relative = src
        .strip_prefix(content_dir)
        .ok()
        .and_then(|p| RelativePathBuf::from_path(p).ok())
        .ok_or_else(|| GenerateError::InvalidPagePath(src.to_path_buf()))?;
    Ok(relative.with_extension("html").to_path(public_dir))
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), GenerateError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        } else {
            debug!("Skipping non-markdown file '{}'", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const TEMPLATE: &str = "<title>{{ Title }}</title><body>{{Content}}</body>";

    fn write(root: &Path, relative: &str, content: &str) -> PathBuf {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn template_placeholders_allow_spacing() {
        let html = apply_template("{{Title}}|{{  Title }}|{{ Content }}", "T", "C");
        assert_eq!(html, "T|T|C");
    }

    #[test]
    fn template_inserts_content_literally() {
        let html = apply_template("{{ Content }}", "T", "<p>costs $1</p>");
        assert_eq!(html, "<p>costs $1</p>");
    }

    #[test]
    fn generate_single_page() {
        let dir = TempDir::new().unwrap();
        let src = write(dir.path(), "index.md", "# Home\n\nHello **world**");
        let dst = dir.path().join("out/index.html");

        generate_page(&src, TEMPLATE, &dst).unwrap();

        assert_eq!(
            fs::read_to_string(&dst).unwrap(),
            "<title>Home</title><body><h1>Home</h1><p>Hello <b>world</b></p></body>"
        );
    }

    #[test]
    fn page_destination_must_be_html() {
        let dir = TempDir::new().unwrap();
        let src = write(dir.path(), "index.md", "# Home");

        let err = generate_page(&src, TEMPLATE, &dir.path().join("index.txt")).unwrap_err();

        assert!(matches!(err, GenerateError::InvalidPagePath(_)));
    }

    #[test]
    fn page_without_title_fails() {
        let dir = TempDir::new().unwrap();
        let src = write(dir.path(), "index.md", "no heading");

        let err = generate_page(&src, TEMPLATE, &dir.path().join("index.html")).unwrap_err();

        assert!(matches!(
            err,
            GenerateError::Render {
                source: markdown_sitegen_engine::Error::TitleNotFound,
                ..
            }
        ));
    }

    #[test]
    fn generate_mirrors_content_tree() {
        let dir = TempDir::new().unwrap();
        let content = dir.path().join("content");
        write(&content, "index.md", "# Home");
        write(&content, "blog/post.md", "# Post\n\n- a\n- b");
        write(&content, "blog/notes.txt", "ignored");
        let template = write(dir.path(), "template.html", TEMPLATE);
        let public = dir.path().join("public");

        let count = generate_pages_recursive(&content, &template, &public).unwrap();

        assert_eq!(count, 2);
        assert!(public.join("index.html").exists());
        assert_eq!(
            fs::read_to_string(public.join("blog/post.html")).unwrap(),
            "<title>Post</title><body><h1>Post</h1><ul><li>a</li><li>b</li></ul></body>"
        );
        assert!(!public.join("blog/notes.html").exists());
    }

    #[test]
    fn generate_requires_content_dir() {
        let dir = TempDir::new().unwrap();
        let err = generate_pages_recursive(
            &dir.path().join("missing"),
            &dir.path().join("template.html"),
            &dir.path().join("public"),
        )
        .unwrap_err();

        assert!(err.to_string().contains("Invalid content directory"));
    }

    #[test]
    fn copy_static_tree() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("static");
        write(&src, "index.css", "body {}");
        write(&src, "images/logo.png", "png");
        let dst = dir.path().join("public");

        copy_recursive(&src, &dst).unwrap();

        assert_eq!(fs::read_to_string(dst.join("index.css")).unwrap(), "body {}");
        assert_eq!(fs::read_to_string(dst.join("images/logo.png")).unwrap(), "png");
    }

    #[test]
    fn copy_missing_source_is_noop() {
        let dir = TempDir::new().unwrap();
        copy_recursive(&dir.path().join("nope"), &dir.path().join("public")).unwrap();
        assert!(!dir.path().join("public").exists());
    }

    #[test]
    fn prepare_clears_previous_output() {
        let dir = TempDir::new().unwrap();
        let public = dir.path().join("public");
        write(&public, "stale.html", "old");

        prepare_public_dir(&public).unwrap();

        assert!(public.is_dir());
        assert!(!public.join("stale.html").exists());
    }

    #[test]
    fn prepare_creates_missing_dir() {
        let dir = TempDir::new().unwrap();
        let public = dir.path().join("a/b/public");

        prepare_public_dir(&public).unwrap();

        assert!(public.is_dir());
    }
}
