//! The two extraction operations.

use crate::output::DocumentWriter;
use crate::parser::{comment, help};
use crate::render::{fence_language, DocKind, RenderOptions};
use crate::scan;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Settings for one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    pub input: String,
    pub markdown: PathBuf,
    pub html: PathBuf,
    pub extension: String,
    pub title: String,
}

impl ExtractConfig {
    fn render_options(&self, kind: DocKind) -> RenderOptions {
        RenderOptions {
            title: self.title.clone(),
            kind,
            fence_lang: fence_language(&self.extension),
        }
    }
}

/// Write one section per script in the folder, holding its leading comments.
/// Returns the number of sections written.
pub fn extract_comments(cfg: &ExtractConfig) -> Result<usize> {
    let paths = scan::list_scripts(Path::new(&cfg.input), &cfg.extension)?;
    tracing::debug!("found {} script(s) in {}", paths.len(), cfg.input);

    let mut doc = DocumentWriter::create(
        &cfg.markdown,
        &cfg.html,
        cfg.render_options(DocKind::Comments),
    )?;
    for file in scan::read_all(&paths) {
        let block = comment::extract(&file);
        tracing::debug!("{}: {} comment line(s)", block.file_name, block.lines.len());
        doc.append_comments(&block)?;
    }
    doc.finish()
}

/// Write one section per function found in the input, holding its help block.
/// Returns the number of sections written.
pub fn extract_help(cfg: &ExtractConfig) -> Result<usize> {
    let paths = scan::resolve_input(&cfg.input, &cfg.extension)?;
    tracing::debug!("resolved {} input file(s) from {}", paths.len(), cfg.input);

    let mut doc = DocumentWriter::create(
        &cfg.markdown,
        &cfg.html,
        cfg.render_options(DocKind::Functions),
    )?;
    for file in scan::read_all(&paths) {
        let records = help::extract(&file);
        tracing::debug!(
            "{}: {} function(s), {} without help",
            file.display_name(),
            records.len(),
            records.iter().filter(|r| !r.has_help()).count()
        );
        for record in &records {
            doc.append_function(record)?;
        }
    }
    doc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config(dir: &TempDir, input: &Path) -> ExtractConfig {
        ExtractConfig {
            input: input.to_string_lossy().to_string(),
            markdown: dir.path().join("out/docs.md"),
            html: dir.path().join("out/docs.html"),
            extension: "ps1".to_string(),
            title: "Docs".to_string(),
        }
    }

    #[test]
    fn comments_in_filename_order() {
        let dir = TempDir::new().unwrap();
        let scripts = dir.path().join("scripts");
        fs::create_dir(&scripts).unwrap();
        fs::write(scripts.join("b.ps1"), "Write-Host b\n").unwrap();
        fs::write(scripts.join("a.ps1"), "# 1\n# 2\n# 3\nWrite-Host a\n").unwrap();

        let cfg = config(&dir, &scripts);
        assert_eq!(extract_comments(&cfg).unwrap(), 2);

        let md = fs::read_to_string(&cfg.markdown).unwrap();
        assert_eq!(
            md,
            "# Docs\n\n## a.ps1\n\n```powershell\n# 1\n# 2\n# 3\n```\n\n## b.ps1\n\n```powershell\n```\n\n"
        );
    }

    #[test]
    fn comments_missing_folder_leaves_outputs_alone() {
        let dir = TempDir::new().unwrap();
        let cfg = config(&dir, &dir.path().join("missing"));
        fs::create_dir_all(dir.path().join("out")).unwrap();
        fs::write(&cfg.markdown, "previous").unwrap();

        assert!(extract_comments(&cfg).is_err());
        assert_eq!(fs::read_to_string(&cfg.markdown).unwrap(), "previous");
        assert!(!cfg.html.exists());
    }

    #[test]
    fn help_across_files() {
        let dir = TempDir::new().unwrap();
        let scripts = dir.path().join("scripts");
        fs::create_dir(&scripts).unwrap();
        fs::write(scripts.join("a.ps1"), "function Get-A {\n<# A help #>\n}\n").unwrap();
        fs::write(
            scripts.join("b.ps1"),
            "function Get-A {\n}\nfunction Get-B {\n<# B help #>\n}\n",
        )
        .unwrap();

        let cfg = config(&dir, &scripts);
        assert_eq!(extract_help(&cfg).unwrap(), 3);

        let md = fs::read_to_string(&cfg.markdown).unwrap();
        let a = md.find("*From: a.ps1*").unwrap();
        let dup = md.find("## Get-A\n\n*From: b.ps1*").unwrap();
        let b = md.find("## Get-B").unwrap();
        assert!(a < dup && dup < b);
        assert!(md.contains("No help block found."));

        let html = fs::read_to_string(&cfg.html).unwrap();
        assert!(html.contains("id=\"help-0\""));
        assert!(html.contains("id=\"help-2\""));
    }

    #[test]
    fn help_with_no_functions_is_header_and_footer() {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("plain.ps1");
        fs::write(&script, "Write-Host 'nothing here'\n").unwrap();

        let cfg = config(&dir, &script);
        assert_eq!(extract_help(&cfg).unwrap(), 0);

        assert_eq!(fs::read_to_string(&cfg.markdown).unwrap(), "# Docs\n\n");
        let html = fs::read_to_string(&cfg.html).unwrap();
        assert!(!html.contains("<h2>"));
        assert!(html.ends_with("</body>\n</html>\n"));
    }

    #[test]
    fn help_missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let cfg = config(&dir, &dir.path().join("nope.ps1"));
        let err = extract_help(&cfg).unwrap_err();
        assert!(err.to_string().contains("path not found"));
        assert!(!cfg.markdown.exists());
        assert!(!cfg.html.exists());
    }
}
