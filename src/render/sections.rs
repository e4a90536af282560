//! Fragment builders for individual README sections.

use super::{Block, Layout};
use crate::answers::License;

const BADGE_BASE_URL: &str = "https://img.shields.io/static/v1";
const LICENSE_BASE_URL: &str = "https://choosealicense.com/licenses/";
const GITHUB_BASE_URL: &str = "https://github.com/";

const CONTACT_SENTENCE: &str =
    "Please feel free to contact via email if you have any questions pertaining to this project.";

/// `## {header}` followed by the body on the next line.
///
/// Callers skip sections whose body is empty.
pub fn render_section(header: &str, body: &str) -> String {
    format!("## {}\n{}", header, body)
}

/// Contact section built from the optional GitHub handle and email.
///
/// The document renderer only calls this when at least one of the two is
/// set. With both empty, the legacy layout still yields the bare header
/// followed by two blank lines.
pub fn render_questions_section(username: &str, email: &str, layout: Layout) -> String {
    layout
        .join_block(&questions_slots(username, email))
        .unwrap_or_default()
}

/// Header, email line and profile link; absent contact details stay as empty slots.
pub(crate) fn questions_slots(username: &str, email: &str) -> Block {
    let email_line = (!email.is_empty())
        .then(|| format!("{}  \nEmail: {}  ", CONTACT_SENTENCE, email));
    let username_line = (!username.is_empty()).then(|| github_profile_link(username));

    Block::new(vec![
        Some("## Questions".to_string()),
        email_line,
        username_line,
    ])
}

pub fn github_profile_link(username: &str) -> String {
    format!("[GitHub Profile]({}{})", GITHUB_BASE_URL, username)
}

/// Image markdown for the shields.io static license badge.
pub fn license_badge(license: License) -> String {
    format!(
        "![license]({}?label=license&message={}&color={}&style=for-the-badge)",
        BADGE_BASE_URL,
        urlencoding::encode(license.as_str()),
        license.info().badge_color
    )
}

pub fn license_url(license: License) -> String {
    format!("{}{}", LICENSE_BASE_URL, license.info().reference_path)
}

/// Final section linking the license name to its reference page.
pub fn render_license_section(license: License) -> String {
    render_section(
        "License",
        &format!("[{}]({})", license.as_str(), license_url(license)),
    )
}

/// Table of contents line pointing at the section's anchor.
pub fn toc_entry(name: &str) -> String {
    format!("- [{}](#{})", name, name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_section() {
        assert_eq!(render_section("Usage", "cargo run"), "## Usage\ncargo run");
    }

    #[test]
    fn test_badge_encodes_license_name() {
        assert_eq!(
            license_badge(License::Apache2),
            "![license](https://img.shields.io/static/v1?label=license&message=Apache%20License%202.0&color=blueviolet&style=for-the-badge)"
        );
        assert!(license_badge(License::GplV3).contains("message=GNU%20GPLv3&color=red"));
        assert!(license_badge(License::Mit).contains("message=MIT&color=green"));
    }

    #[test]
    fn test_license_section() {
        assert_eq!(
            render_license_section(License::GplV3),
            "## License\n[GNU GPLv3](https://choosealicense.com/licenses/gpl-3.0)"
        );
    }

    #[test]
    fn test_toc_entry_anchor_is_lowercase() {
        assert_eq!(toc_entry("Contributing"), "- [Contributing](#contributing)");
    }

    #[test]
    fn test_questions_email_only() {
        let section = render_questions_section("", "a@b.com", Layout::Legacy);
        assert_eq!(
            section,
            "## Questions\nPlease feel free to contact via email if you have any questions pertaining to this project.  \nEmail: a@b.com  \n"
        );
        assert!(!section.contains("GitHub Profile"));
    }

    #[test]
    fn test_questions_username_only() {
        assert_eq!(
            render_questions_section("octocat", "", Layout::Legacy),
            "## Questions\n\n[GitHub Profile](https://github.com/octocat)"
        );
        assert_eq!(
            render_questions_section("octocat", "", Layout::Compact),
            "## Questions\n[GitHub Profile](https://github.com/octocat)"
        );
    }

    #[test]
    fn test_questions_both_absent_legacy_edge_case() {
        assert_eq!(render_questions_section("", "", Layout::Legacy), "## Questions\n\n");
        assert_eq!(render_questions_section("", "", Layout::Compact), "## Questions");
    }
}
