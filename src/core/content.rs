//! # Content Store
//!
//! The read-only portfolio dataset behind every tab. It is built once at
//! start-up (either the built-in sample or a TOML file) and then shared by
//! reference; nothing mutates it afterwards.
//!
//! ```toml
//! [profile]
//! name = "Ada Example"
//! role = "Staff Systems Engineer"
//! location = "Portland, OR"
//! bio = "..."
//!
//! [[experiences]]
//! title = "Staff Systems Engineer"
//! company = "Lattice Freight"
//! period = "Mar 2021 — Present"
//! description = "..."
//! highlights = ["...", "..."]
//!
//! [[contacts]]
//! label = "Email"
//! value = "ada@example.dev"
//! ```

use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Top-level bio information.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub location: String,
    pub bio: String,
    /// Pre-drawn ASCII art shown above the bio. Falls back to `name` when empty.
    #[serde(default)]
    pub banner: Vec<String>,
}

/// A single work history entry.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    /// Host and path without scheme, e.g. `github.com/user/repo`.
    pub url: String,
}

/// A named category of skills.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

/// A degree or certification.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    #[serde(default)]
    pub details: String,
}

/// A single contact method.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ContactInfo {
    pub label: String,
    pub value: String,
}

impl ContactInfo {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }

    /// Link target for this contact, if its label has one.
    ///
    /// - `Email` → `mailto:value`
    /// - `Phone`, `Office` → `tel:` plus only the digits and `+` of the value
    /// - `GitHub`, `LinkedIn`, `Portfolio` → `https://value`
    pub fn url(&self) -> Option<String> {
        match self.label.as_str() {
            "Email" => Some(format!("mailto:{}", self.value)),
            "Phone" | "Office" => {
                let dialable: String = self
                    .value
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '+')
                    .collect();
                Some(format!("tel:{dialable}"))
            }
            "GitHub" | "LinkedIn" | "Portfolio" => Some(format!("https://{}", self.value)),
            _ => None,
        }
    }

    /// Second link offered next to the portfolio address.
    pub fn ssh_url(&self) -> Option<String> {
        (self.label == "Portfolio").then(|| format!("ssh://{}", self.value))
    }
}

/// Everything the tabs display, one table per tab.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ContentStore {
    pub profile: Profile,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skill_groups: Vec<SkillGroup>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub contacts: Vec<ContactInfo>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ContentError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io(e) => write!(f, "content I/O error: {e}"),
            ContentError::Parse(e) => write!(f, "content parse error: {e}"),
        }
    }
}

impl std::error::Error for ContentError {}

// ============================================================================
// Loading
// ============================================================================

impl ContentStore {
    /// Parse a portfolio from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ContentError> {
        toml::from_str(contents).map_err(ContentError::Parse)
    }

    /// Load a portfolio from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let contents = fs::read_to_string(path).map_err(ContentError::Io)?;
        let store = Self::from_toml_str(&contents)?;
        info!(
            "Loaded portfolio for {} from {}",
            store.profile.name,
            path.display()
        );
        Ok(store)
    }

    /// The sample portfolio compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            profile: Profile {
                name: "Ada Example".to_string(),
                role: "Staff Systems Engineer".to_string(),
                location: "Portland, OR".to_string(),
                bio: "Systems engineer working on storage engines, network services, and \
                      the tooling around them. I like small binaries, boring deployments, \
                      and protocols that are easy to debug at three in the morning. Most of \
                      my recent work is in Rust: async services on Tokio, custom wire \
                      codecs, and terminal tools for the people who operate them."
                    .to_string(),
                banner: vec![
                    r"    _       _".to_string(),
                    r"   / \   __| | __ _".to_string(),
                    r"  / _ \ / _` |/ _` |".to_string(),
                    r" / ___ \ (_| | (_| |".to_string(),
                    r"/_/   \_\__,_|\__,_|".to_string(),
                ],
            },
            experiences: vec![
                Experience {
                    title: "Staff Systems Engineer".to_string(),
                    company: "Lattice Freight".to_string(),
                    period: "Mar 2021 — Present".to_string(),
                    description: "Storage and messaging infrastructure for a logistics platform."
                        .to_string(),
                    highlights: vec![
                        "Designed a log-structured shipment event store that replaced a sharded \
                         relational cluster and cut p99 write latency by an order of magnitude"
                            .to_string(),
                        "Built the internal RPC framework used by forty services, including \
                         deadline propagation and structured retries"
                            .to_string(),
                        "Led the migration of batch pipelines onto Kubernetes with per-tenant \
                         resource isolation"
                            .to_string(),
                        "Mentors four engineers and runs the weekly systems design review"
                            .to_string(),
                    ],
                },
                Experience {
                    title: "Software Engineer".to_string(),
                    company: "Northwind Telemetry".to_string(),
                    period: "Jun 2017 — Feb 2021".to_string(),
                    description: "Ingestion pipeline for industrial sensor data.".to_string(),
                    highlights: vec![
                        "Wrote the binary protocol decoder that handled two million messages \
                         per second per node"
                            .to_string(),
                        "Added end-to-end tracing across the ingestion path".to_string(),
                    ],
                },
                Experience {
                    title: "Research Assistant".to_string(),
                    company: "State University Systems Lab".to_string(),
                    period: "Sep 2015 — May 2017".to_string(),
                    description: "Crash-consistency testing for embedded file systems."
                        .to_string(),
                    highlights: vec![
                        "Built a fault-injection harness that found eleven recovery bugs in \
                         open-source flash file systems"
                            .to_string(),
                    ],
                },
            ],
            projects: vec![
                Project {
                    name: "termfolio".to_string(),
                    description: "This very page! A tab-paged portfolio served over SSH and \
                                  rendered straight into your terminal."
                        .to_string(),
                    tech: vec![
                        "Rust".to_string(),
                        "ratatui".to_string(),
                        "crossterm".to_string(),
                        "Tokio".to_string(),
                    ],
                    url: "github.com/ada-example/termfolio".to_string(),
                },
                Project {
                    name: "tinylog".to_string(),
                    description: "An append-only segment log with checksummed records and \
                                  crash recovery, small enough to read in an afternoon."
                        .to_string(),
                    tech: vec!["Rust".to_string(), "io_uring".to_string()],
                    url: "github.com/ada-example/tinylog".to_string(),
                },
            ],
            skill_groups: vec![
                SkillGroup {
                    category: "Languages".to_string(),
                    skills: vec![
                        "Rust".to_string(),
                        "C".to_string(),
                        "Go".to_string(),
                        "SQL".to_string(),
                        "Bash".to_string(),
                    ],
                },
                SkillGroup {
                    category: "Systems".to_string(),
                    skills: vec![
                        "Linux".to_string(),
                        "io_uring".to_string(),
                        "eBPF".to_string(),
                        "TCP/IP".to_string(),
                    ],
                },
                SkillGroup {
                    category: "Infrastructure".to_string(),
                    skills: vec![
                        "Kubernetes".to_string(),
                        "Terraform".to_string(),
                        "AWS (EC2, S3, EKS)".to_string(),
                        "Prometheus".to_string(),
                    ],
                },
                SkillGroup {
                    category: "Data".to_string(),
                    skills: vec![
                        "PostgreSQL".to_string(),
                        "RocksDB".to_string(),
                        "Kafka".to_string(),
                    ],
                },
                SkillGroup {
                    category: "Soft Skills".to_string(),
                    skills: vec![
                        "Technical Writing".to_string(),
                        "Design Reviews".to_string(),
                        "Mentoring".to_string(),
                    ],
                },
            ],
            education: vec![Education {
                degree: "M.S. Computer Science".to_string(),
                institution: "State University".to_string(),
                period: "May 2017".to_string(),
                details: "Thesis on crash consistency in log-structured file systems."
                    .to_string(),
            }],
            contacts: vec![
                ContactInfo::new("Email", "ada@example.dev"),
                ContactInfo::new("Phone", "(555) 010-4477"),
                ContactInfo::new("Office", "+1 (555) 010-9000"),
                ContactInfo::new("Portfolio", "example.dev"),
                ContactInfo::new("GitHub", "github.com/ada-example"),
                ContactInfo::new("LinkedIn", "linkedin.com/in/ada-example"),
                ContactInfo::new("Location", "Portland, OR"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_contact_urls {
        ( $($name:ident: ($label:expr, $value:expr) => $expected:expr,)+ ) => {
            $(
                #[test]
                fn $name() {
                    let contact = ContactInfo::new($label, $value);
                    assert_eq!(contact.url().as_deref(), $expected);
                }
            )+
        };
    }

    test_contact_urls! {
        test_url_email_is_mailto: ("Email", "ada@example.dev") => Some("mailto:ada@example.dev"),
        test_url_phone_strips_punctuation: ("Phone", "(555) 010-4477") => Some("tel:5550104477"),
        test_url_office_keeps_plus: ("Office", "+1 (555) 010-9000") => Some("tel:+15550109000"),
        test_url_github_is_https: ("GitHub", "github.com/ada") => Some("https://github.com/ada"),
        test_url_linkedin_is_https: ("LinkedIn", "linkedin.com/in/ada") => Some("https://linkedin.com/in/ada"),
        test_url_portfolio_is_https: ("Portfolio", "example.dev") => Some("https://example.dev"),
        test_url_location_has_none: ("Location", "Portland, OR") => None,
        test_url_unknown_label_has_none: ("Mastodon", "@ada@example.social") => None,
    }

    #[test]
    fn test_ssh_url_only_for_portfolio() {
        assert_eq!(
            ContactInfo::new("Portfolio", "example.dev").ssh_url().as_deref(),
            Some("ssh://example.dev")
        );
        assert_eq!(ContactInfo::new("GitHub", "github.com/ada").ssh_url(), None);
    }

    #[test]
    fn test_builtin_has_every_table() {
        let store = ContentStore::builtin();
        assert!(!store.profile.name.is_empty());
        assert!(!store.experiences.is_empty());
        assert!(!store.projects.is_empty());
        assert!(!store.skill_groups.is_empty());
        assert!(!store.education.is_empty());
        assert!(!store.contacts.is_empty());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[profile]
name = "Grace"
role = "Engineer"
location = "Arlington, VA"
bio = "Compilers."

[[contacts]]
label = "Email"
value = "grace@example.org"
"#;
        let store = ContentStore::from_toml_str(toml_str).unwrap();
        assert_eq!(store.profile.name, "Grace");
        assert!(store.profile.banner.is_empty());
        assert!(store.experiences.is_empty());
        assert_eq!(store.contacts.len(), 1);
    }

    #[test]
    fn test_example_asset_parses() {
        let store =
            ContentStore::from_toml_str(include_str!("../../assets/portfolio.example.toml"))
                .unwrap();
        assert_eq!(store.experiences[0].highlights.len(), 2);
        assert_eq!(store.projects[0].tech, vec!["Rust", "ratatui"]);
        assert_eq!(store.contacts.last().unwrap().label, "Location");
    }

    #[test]
    fn test_missing_required_field_is_parse_error() {
        let toml_str = r#"
[profile]
name = "No Role"
"#;
        let err = ContentStore::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().starts_with("content parse error"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = ContentStore::load(Path::new("/nonexistent/termfolio/portfolio.toml"))
            .unwrap_err();
        assert!(matches!(err, ContentError::Io(_)));
    }
}
