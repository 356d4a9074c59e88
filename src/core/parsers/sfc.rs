//! Single-file-component section splitting.
//!
//! Decomposes a `.svelte`/`.vue` file into its module-level script, instance
//! script, template markup and style block using boundary-tag detection.

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script\b([^>]*)>(.*?)</script\s*>").unwrap());

static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style\b[^>]*>(.*?)</style\s*>").unwrap());

/// `context="module"` (Svelte 3/4) or a bare `module` attribute (Svelte 5).
static MODULE_CONTEXT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bcontext\s*=\s*["']module["']|(?:^|\s)module(?:\s|/|$)"#).unwrap()
});

static TS_LANG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\blang\s*=\s*["']ts["']"#).unwrap());

/// Whether a script tag's attribute text declares `lang="ts"`.
pub fn declares_typescript(attrs: &str) -> bool {
    TS_LANG.is_match(attrs)
}

/// Whether a script tag's attribute text marks module context.
pub fn declares_module_context(attrs: &str) -> bool {
    MODULE_CONTEXT.is_match(attrs)
}

/// One logical section of a component file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub content: String,
    /// Byte offset of `content` in the original file.
    pub start_offset: usize,
    pub end_offset: usize,
    /// `Some("ts")` when the script tag declares `lang="ts"`.
    pub lang: Option<String>,
}

impl Section {
    pub fn is_typescript(&self) -> bool {
        self.lang.as_deref() == Some("ts")
    }
}

/// All sections of a component file. Absent sections are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SfcSections {
    /// First `<script context="module">` block.
    pub module_script: Option<Section>,
    /// First script block without a module marker (plain or `setup`).
    pub script: Option<Section>,
    /// Everything outside script and style blocks, if non-blank.
    pub template: Option<Section>,
    /// First style block (never scanned for calls).
    pub style: Option<Section>,
}

impl SfcSections {
    /// Script sections in source order.
    pub fn scripts(&self) -> Vec<&Section> {
        let mut scripts: Vec<&Section> = [&self.module_script, &self.script]
            .into_iter()
            .flatten()
            .collect();
        scripts.sort_by_key(|s| s.start_offset);
        scripts
    }
}

/// Split component source into its sections.
///
/// The template keeps the original byte layout: removed script and style
/// blocks are blanked out (newlines preserved) so offsets inside the
/// template still point into the original file.
pub fn split_sections(source: &str) -> SfcSections {
    let mut sections = SfcSections::default();
    let mut removed: Vec<(usize, usize)> = Vec::new();

    for caps in SCRIPT_BLOCK.captures_iter(source) {
        let (Some(whole), Some(attrs), Some(body)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        removed.push((whole.start(), whole.end()));

        let section = Section {
            content: body.as_str().to_string(),
            start_offset: body.start(),
            end_offset: body.end(),
            lang: declares_typescript(attrs.as_str()).then(|| "ts".to_string()),
        };

        let slot = if declares_module_context(attrs.as_str()) {
            &mut sections.module_script
        } else {
            &mut sections.script
        };
        if slot.is_none() {
            *slot = Some(section);
        }
    }

    for caps in STYLE_BLOCK.captures_iter(source) {
        let (Some(whole), Some(body)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        removed.push((whole.start(), whole.end()));

        if sections.style.is_none() {
            sections.style = Some(Section {
                content: body.as_str().to_string(),
                start_offset: body.start(),
                end_offset: body.end(),
                lang: None,
            });
        }
    }

    let template = blank_ranges(source, &removed);
    if !template.trim().is_empty() {
        let end_offset = template.len();
        sections.template = Some(Section {
            content: template,
            start_offset: 0,
            end_offset,
            lang: None,
        });
    }

    sections
}

/// Replace every character inside `ranges` with same-width spaces, keeping newlines.
fn blank_ranges(source: &str, ranges: &[(usize, usize)]) -> String {
    let mut out = String::with_capacity(source.len());
    for (offset, c) in source.char_indices() {
        let hidden = ranges
            .iter()
            .any(|&(start, end)| offset >= start && offset < end);
        if !hidden || c == '\n' {
            out.push(c);
        } else {
            out.extend(std::iter::repeat_n(' ', c.len_utf8()));
        }
    }
    out
}
