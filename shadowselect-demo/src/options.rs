//! Option file loading and the demo document.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use shadowdom::{Document, Element, NodeId};

/// One entry of the options file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OptionSpec {
    pub value: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub selected: bool,
}

impl OptionSpec {
    fn new(value: &str, label: &str, selected: bool) -> Self {
        Self {
            value: value.into(),
            label: Some(label.into()),
            selected,
        }
    }
}

/// Options used when no file is given.
pub fn builtin() -> Vec<OptionSpec> {
    vec![
        OptionSpec::new("apple", "Apple", true),
        OptionSpec::new("apricot", "Apricot", false),
        OptionSpec::new("banana", "Banana", false),
        OptionSpec::new("blueberry", "Blueberry", false),
        OptionSpec::new("cherry", "Cherry", false),
        OptionSpec::new("date", "Date", false),
        OptionSpec::new("elderberry", "Elderberry", false),
        OptionSpec::new("fig", "Fig", false),
        OptionSpec::new("grape", "Grape", false),
        OptionSpec::new("kiwi", "Kiwi", false),
        OptionSpec::new("lemon", "Lemon", false),
        OptionSpec::new("mango", "Mango", false),
    ]
}

/// Read a JSON array of options.
pub fn load(path: &Path) -> Result<Vec<OptionSpec>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read options file {}", path.display()))?;
    parse(&raw).with_context(|| format!("invalid options file {}", path.display()))
}

pub fn parse(raw: &str) -> Result<Vec<OptionSpec>> {
    let options: Vec<OptionSpec> = serde_json::from_str(raw)?;
    if options.is_empty() {
        bail!("options file contains no options");
    }
    Ok(options)
}

/// The demo form's elements.
#[derive(Debug, Clone, Copy)]
pub struct Form {
    pub select: NodeId,
    pub submit: NodeId,
}

/// body > form > [prompt, select, submit]
pub fn build_document(options: &[OptionSpec]) -> Result<(Document, Form)> {
    let mut doc = Document::new();
    let root = doc.root();
    let form = doc.append(root, Element::new("form"))?;
    doc.append(form, Element::span("Pick one (Space opens, Tab moves, q quits):"))?;

    let select = doc.append(form, Element::select().id("choice"))?;
    for spec in options {
        let mut option = Element::new("option")
            .attr("value", spec.value.as_str())
            .text(spec.label.as_deref().unwrap_or(&spec.value))
            .selected(spec.selected);
        if let Some(label) = &spec.label {
            option = option.attr("label", label.as_str());
        }
        doc.append(select, option)?;
    }

    let submit = doc.append(
        form,
        Element::span("[ submit ]")
            .id("submit")
            .tab_index(0)
            .clickable(true),
    )?;
    Ok((doc, Form { select, submit }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_and_selected_are_optional() {
        let options = parse(r#"[{"value": "x"}, {"value": "y", "label": "Why", "selected": true}]"#)
            .unwrap();
        assert_eq!(options[0].label, None);
        assert!(!options[0].selected);
        assert_eq!(options[1], OptionSpec::new("y", "Why", true));
    }

    #[test]
    fn empty_file_is_rejected() {
        assert!(parse("[]").is_err());
        assert!(parse("{}").is_err());
    }

    #[test]
    fn document_places_select_before_submit() {
        let (doc, form) = build_document(&builtin()).unwrap();
        let parent = doc.parent(form.select).unwrap();
        let children = doc.children(parent);
        assert_eq!(children[1], form.select);
        assert_eq!(children[2], form.submit);
        assert_eq!(doc.options(form.select).len(), builtin().len());
        assert_eq!(doc.select_value(form.select).as_deref(), Some("apple"));
    }

    #[test]
    fn missing_label_falls_back_to_value() {
        let (doc, form) = build_document(&[OptionSpec {
            value: "plain".into(),
            label: None,
            selected: true,
        }])
        .unwrap();
        let option = doc.options(form.select)[0];
        assert_eq!(doc.option_label(option).unwrap(), "plain");
    }
}
