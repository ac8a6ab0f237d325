//! Paired Markdown/HTML output files, written incrementally.

use crate::model::{CommentBlock, FunctionRecord};
use crate::render::html::HtmlRenderer;
use crate::render::markdown::MarkdownRenderer;
use crate::render::{RenderOptions, Renderer};
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

struct Target {
    renderer: Box<dyn Renderer>,
    path: PathBuf,
    writer: BufWriter<File>,
}

impl Target {
    fn create(renderer: Box<dyn Renderer>, path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        Ok(Self {
            renderer,
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}

/// Owns both output documents of one run.
///
/// Creating it truncates both files and writes their headers; sections are
/// appended as they are produced; [`DocumentWriter::finish`] adds the footers.
pub struct DocumentWriter {
    opts: RenderOptions,
    targets: Vec<Target>,
    sections: usize,
}

impl DocumentWriter {
    pub fn create(markdown: &Path, html: &Path, opts: RenderOptions) -> Result<Self> {
        let targets = vec![
            Target::create(Box::new(MarkdownRenderer), markdown)?,
            Target::create(Box::new(HtmlRenderer), html)?,
        ];
        let mut writer = Self {
            opts,
            targets,
            sections: 0,
        };
        writer.each(|r, o| r.header(o))?;
        Ok(writer)
    }

    pub fn append_comments(&mut self, block: &CommentBlock) -> Result<()> {
        self.each(|r, o| r.comment_section(block, o))?;
        self.sections += 1;
        Ok(())
    }

    pub fn append_function(&mut self, record: &FunctionRecord) -> Result<()> {
        let index = self.sections;
        self.each(|r, o| r.function_section(index, record, o))?;
        self.sections += 1;
        Ok(())
    }

    /// Write the footers and flush. Returns the number of sections written.
    pub fn finish(mut self) -> Result<usize> {
        self.each(|r, o| r.footer(o))?;
        for target in &mut self.targets {
            target
                .writer
                .flush()
                .with_context(|| format!("failed to write {}", target.path.display()))?;
        }
        Ok(self.sections)
    }

    fn each(&mut self, render: impl Fn(&dyn Renderer, &RenderOptions) -> String) -> Result<()> {
        for target in &mut self.targets {
            let text = render(target.renderer.as_ref(), &self.opts);
            target.write(&text)?;
        }
        Ok(())
    }
}
