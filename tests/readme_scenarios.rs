//! End-to-end rendering scenarios through the public library API.

use indoc::indoc;
use pretty_assertions::assert_eq;
use readmegen::{render_readme, render_readme_with_layout, AnswerSet, Layout, License};

fn toc_entries(readme: &str) -> Vec<&str> {
    readme
        .lines()
        .skip_while(|line| *line != "## Table of Contents")
        .skip(1)
        .take_while(|line| !line.starts_with("## "))
        .filter(|line| line.starts_with("- ["))
        .collect()
}

fn full_answers() -> AnswerSet {
    AnswerSet {
        installation: "cargo install readmegen".into(),
        usage: "readmegen".into(),
        contributing: "Open a pull request".into(),
        test: "cargo test".into(),
        username: "octocat".into(),
        email: "octo@example.com".into(),
        ..AnswerSet::new("Full", "Every field answered", License::Apache2)
    }
}

#[test]
fn demo_scenario() {
    let answers = AnswerSet {
        installation: "npm i".into(),
        username: "octocat".into(),
        ..AnswerSet::new("Demo", "A demo app", License::Isc)
    };
    let readme = render_readme(&answers);

    assert!(readme.starts_with("# Demo\n"));
    assert!(readme.contains("message=ISC&color=blue"));
    assert!(readme.contains("## Description\nA demo app"));
    assert_eq!(
        toc_entries(&readme),
        vec![
            "- [Installation](#installation)",
            "- [Questions](#questions)",
            "- [License](#license)",
        ]
    );
    assert!(readme.contains("## Installation\nnpm i"));
    for absent in ["## Usage", "## Contributing", "## Tests", "Email:"] {
        assert!(!readme.contains(absent), "unexpected {absent}");
    }
    assert!(readme.contains("[GitHub Profile](https://github.com/octocat)"));
    assert!(readme.ends_with("## License\n[ISC](https://choosealicense.com/licenses/isc)\n"));
}

#[test]
fn all_sections_in_canonical_order() {
    let readme = render_readme(&full_answers());
    assert_eq!(
        toc_entries(&readme),
        vec![
            "- [Installation](#installation)",
            "- [Usage](#usage)",
            "- [Contributing](#contributing)",
            "- [Tests](#tests)",
            "- [Questions](#questions)",
            "- [License](#license)",
        ]
    );

    let positions: Vec<usize> = [
        "## Description",
        "## Table of Contents",
        "## Installation",
        "## Usage",
        "## Contributing",
        "## Tests",
        "## Questions",
        "## License",
    ]
    .iter()
    .map(|header| readme.find(header).expect(header))
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn full_answers_legacy_has_no_blank_regions() {
    let expected = indoc! {"
        # Full
        ![license](https://img.shields.io/static/v1?label=license&message=Apache%20License%202.0&color=blueviolet&style=for-the-badge)

        ## Description
        Every field answered

        ## Table of Contents
        - [Installation](#installation)
        - [Usage](#usage)
        - [Contributing](#contributing)
        - [Tests](#tests)
        - [Questions](#questions)
        - [License](#license)

        ## Installation
        cargo install readmegen

        ## Usage
        readmegen

        ## Contributing
        Open a pull request

        ## Tests
        cargo test

        ## Questions
        Please feel free to contact via email if you have any questions pertaining to this project.
        Email: octo@example.com
        [GitHub Profile](https://github.com/octocat)

        ## License
        [Apache License 2.0](https://choosealicense.com/licenses/apache-2.0)
    "}
    // contact lines end in markdown hard breaks
    .replace("project.\n", "project.  \n")
    .replace("octo@example.com\n", "octo@example.com  \n");

    let readme = render_readme(&full_answers());
    assert_eq!(readme, expected);
    // with nothing missing both layouts agree
    assert_eq!(render_readme_with_layout(&full_answers(), Layout::Compact), expected);
}

#[test]
fn only_required_answers() {
    let answers = AnswerSet::new("Bare", "Just the basics", License::GplV3);
    for layout in [Layout::Legacy, Layout::Compact] {
        let readme = render_readme_with_layout(&answers, layout);
        assert_eq!(toc_entries(&readme), vec!["- [License](#license)"]);
        for absent in [
            "## Installation",
            "## Usage",
            "## Contributing",
            "## Tests",
            "## Questions",
        ] {
            assert!(!readme.contains(absent), "unexpected {absent}");
        }
        assert!(readme.contains("## Description\nJust the basics"));
        assert!(readme.contains("[GNU GPLv3](https://choosealicense.com/licenses/gpl-3.0)"));
    }
}

#[test]
fn email_only_questions_section() {
    let answers = AnswerSet {
        email: "a@b.com".into(),
        ..AnswerSet::new("Mail", "Contact by email", License::Mit)
    };
    let readme = render_readme(&answers);
    assert!(readme.contains(
        "Please feel free to contact via email if you have any questions pertaining to this project."
    ));
    assert!(readme.contains("Email: a@b.com"));
    assert!(!readme.contains("GitHub Profile"));
}
