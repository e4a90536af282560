//! README rendering.
//!
//! A document is an ordered list of [`Block`]s separated by blank lines.
//! Each block is an ordered list of optional slots separated by single
//! newlines. Whether an absent slot leaves an empty line behind or
//! disappears is decided by the [`Layout`]:
//!
//! - [`Layout::Legacy`] renders absent slots as empty strings in place. The
//!   output is byte-for-byte what plain template substitution produces,
//!   blank regions included.
//! - [`Layout::Compact`] drops absent slots and any block left empty.
//!
//! Rendering is pure: the same answers and layout always give the same bytes.

pub mod sections;

pub use sections::{
    github_profile_link, license_badge, license_url, render_license_section,
    render_questions_section, render_section, toc_entry,
};

use crate::answers::AnswerSet;
use sections::questions_slots;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Keep empty slots as blank lines (template-compatible output)
    #[default]
    Legacy,
    /// Skip empty slots entirely
    Compact,
}

impl Layout {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "legacy" => Some(Self::Legacy),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }

    /// Join a block's slots, or `None` when the layout drops the whole block.
    pub(crate) fn join_block(&self, block: &Block) -> Option<String> {
        match self {
            Self::Legacy => Some(
                block
                    .slots
                    .iter()
                    .map(|slot| slot.as_deref().unwrap_or(""))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            Self::Compact => {
                let present: Vec<&str> = block.slots.iter().flatten().map(String::as_str).collect();
                (!present.is_empty()).then(|| present.join("\n"))
            }
        }
    }
}

/// Ordered optional lines making up one paragraph of the document.
#[derive(Debug, Clone, Default)]
pub(crate) struct Block {
    slots: Vec<Option<String>>,
}

impl Block {
    pub(crate) fn new(slots: Vec<Option<String>>) -> Self {
        Self { slots }
    }

    fn single(slot: Option<String>) -> Self {
        Self::new(vec![slot])
    }
}

/// Optional sections with their bodies, in table of contents order.
fn optional_sections(answers: &AnswerSet) -> [(&'static str, &str); 4] {
    [
        ("Installation", &answers.installation),
        ("Usage", &answers.usage),
        ("Contributing", &answers.contributing),
        ("Tests", &answers.test),
    ]
}

fn present(condition: bool, fragment: impl FnOnce() -> String) -> Option<String> {
    condition.then(fragment)
}

fn header_block(answers: &AnswerSet) -> Vec<Block> {
    vec![Block::new(vec![
        Some(format!("# {}", answers.title)),
        Some(license_badge(answers.license)),
    ])]
}

fn description_block(answers: &AnswerSet) -> Vec<Block> {
    vec![Block::single(Some(render_section(
        "Description",
        &answers.description,
    )))]
}

fn table_of_contents_block(answers: &AnswerSet) -> Vec<Block> {
    let mut slots = vec![Some("## Table of Contents".to_string())];
    slots.extend(
        optional_sections(answers)
            .iter()
            .map(|(name, body)| present(!body.is_empty(), || toc_entry(name))),
    );
    slots.push(present(answers.has_questions(), || toc_entry("Questions")));
    slots.push(Some(toc_entry("License")));
    vec![Block::new(slots)]
}

fn optional_section_blocks(answers: &AnswerSet) -> Vec<Block> {
    optional_sections(answers)
        .iter()
        .map(|(name, body)| Block::single(present(!body.is_empty(), || render_section(name, body))))
        .collect()
}

fn questions_block(answers: &AnswerSet) -> Vec<Block> {
    if answers.has_questions() {
        vec![questions_slots(&answers.username, &answers.email)]
    } else {
        vec![Block::single(None)]
    }
}

fn license_block(answers: &AnswerSet) -> Vec<Block> {
    vec![Block::single(Some(render_license_section(answers.license)))]
}

/// Render the README in the default (legacy) layout.
pub fn render_readme(answers: &AnswerSet) -> String {
    render_readme_with_layout(answers, Layout::default())
}

pub fn render_readme_with_layout(answers: &AnswerSet, layout: Layout) -> String {
    let steps: [fn(&AnswerSet) -> Vec<Block>; 6] = [
        header_block,
        description_block,
        table_of_contents_block,
        optional_section_blocks,
        questions_block,
        license_block,
    ];

    let mut document = steps
        .iter()
        .flat_map(|step| step(answers))
        .filter_map(|block| layout.join_block(&block))
        .collect::<Vec<_>>()
        .join("\n\n");
    document.push('\n');
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::License;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn demo_answers() -> AnswerSet {
        AnswerSet {
            installation: "npm i".into(),
            username: "octocat".into(),
            ..AnswerSet::new("Demo", "A demo app", License::Isc)
        }
    }

    #[test]
    fn test_layout_parse() {
        assert_eq!(Layout::parse("Compact"), Some(Layout::Compact));
        assert_eq!(Layout::parse("legacy"), Some(Layout::Legacy));
        assert_eq!(Layout::parse("fancy"), None);
    }

    #[test]
    fn test_legacy_matches_template_output() {
        let expected = indoc! {"
            # Demo
            ![license](https://img.shields.io/static/v1?label=license&message=ISC&color=blue&style=for-the-badge)

            ## Description
            A demo app

            ## Table of Contents
            - [Installation](#installation)



            - [Questions](#questions)
            - [License](#license)

            ## Installation
            npm i







            ## Questions

            [GitHub Profile](https://github.com/octocat)

            ## License
            [ISC](https://choosealicense.com/licenses/isc)
        "};
        assert_eq!(render_readme(&demo_answers()), expected);
    }

    #[test]
    fn test_compact_skips_blank_slots() {
        let expected = indoc! {"
            # Demo
            ![license](https://img.shields.io/static/v1?label=license&message=ISC&color=blue&style=for-the-badge)

            ## Description
            A demo app

            ## Table of Contents
            - [Installation](#installation)
            - [Questions](#questions)
            - [License](#license)

            ## Installation
            npm i

            ## Questions
            [GitHub Profile](https://github.com/octocat)

            ## License
            [ISC](https://choosealicense.com/licenses/isc)
        "};
        assert_eq!(
            render_readme_with_layout(&demo_answers(), Layout::Compact),
            expected
        );
    }

    #[test]
    fn test_questions_omitted_without_contact() {
        let answers = AnswerSet::new("Bare", "Nothing else", License::Mit);
        let readme = render_readme(&answers);
        assert!(!readme.contains("## Questions"));
        assert!(!readme.contains("- [Questions]"));
        assert!(readme.ends_with("[MIT](https://choosealicense.com/licenses/mit)\n"));
    }

    #[test]
    fn test_questions_block_follows_layout() {
        let answers = AnswerSet {
            email: "a@b.com".into(),
            ..AnswerSet::new("Demo", "A demo app", License::Mit)
        };

        for layout in [Layout::Legacy, Layout::Compact] {
            let readme = render_readme_with_layout(&answers, layout);
            let section = render_questions_section("", "a@b.com", layout);
            assert!(readme.contains(&format!("{}\n\n## License", section)));
        }

        let legacy = render_readme_with_layout(&answers, Layout::Legacy);
        assert!(legacy.contains("Email: a@b.com  \n\n\n## License"));
        let compact = render_readme_with_layout(&answers, Layout::Compact);
        assert!(compact.contains("Email: a@b.com  \n\n## License"));
    }
}
