use crate::model::{ContactChannel, Hero, Project, SiteContent, Skill, SocialLink};

/// Default content set. External content JSON replaces this wholesale.
pub(crate) fn builtin_content() -> SiteContent {
    SiteContent {
        hero: Hero {
            name: "Iris Navarro".to_owned(),
            monogram: "IN".to_owned(),
            headline: "Systems & Web Engineer".to_owned(),
            summary: "I build fast, reliable software end to end — from \
                      storage engines and network services to the interfaces \
                      people use to drive them."
                .to_owned(),
            booking_url: "https://cal.com/iris-navarro/30min".to_owned(),
            resume_url: "https://irisnavarro.dev/resume.pdf".to_owned(),
        },
        about: "I'm an engineer who likes the whole stack, with a bias for the \
                parts where performance matters. Over the past few years I've \
                shipped a columnar query engine, a real-time collaboration \
                backend, and the dashboards that sit on top of them. I care \
                about measured performance rather than guessed performance, \
                about error messages a stranger can act on, and about tests \
                that fail for exactly one reason. Most of my recent work is in \
                Rust and TypeScript, compiled for servers, browsers, and the \
                occasional embedded target."
            .to_owned(),
        skills: vec![
            skill("Rust", 90, "gear"),
            skill("TypeScript", 85, "code"),
            skill("React", 80, "code"),
            skill("WebAssembly", 75, "chip"),
            skill("PostgreSQL", 70, "database"),
            skill("Kubernetes", 65, "cloud"),
        ],
        projects: vec![
            Project {
                title: "Tidegauge".to_owned(),
                description: "Streaming metrics store with a columnar disk \
                              format and a live dashboard. Ingests ~400k \
                              points/s on one node; the query layer serves \
                              p99 reads under 5ms."
                    .to_owned(),
                image: "tidegauge.png".to_owned(),
                tech: vec![
                    "Rust".to_owned(),
                    "Tokio".to_owned(),
                    "Arrow".to_owned(),
                    "React".to_owned(),
                ],
                repo_url: "https://github.com/irisnavarro/tidegauge".to_owned(),
                live_url: "https://tidegauge.irisnavarro.dev".to_owned(),
            },
            Project {
                title: "Quorum Pad".to_owned(),
                description: "Collaborative editor with CRDT-based merging, \
                              offline-first sync, and presence indicators. \
                              The sync core is shared between the server and \
                              a WASM build in the browser."
                    .to_owned(),
                image: "quorum-pad.png".to_owned(),
                tech: vec![
                    "Rust".to_owned(),
                    "WebAssembly".to_owned(),
                    "TypeScript".to_owned(),
                    "PostgreSQL".to_owned(),
                ],
                repo_url: "https://github.com/irisnavarro/quorum-pad".to_owned(),
                live_url: "https://pad.irisnavarro.dev".to_owned(),
            },
            Project {
                title: "Fieldnotes".to_owned(),
                description: "Weather and soil dashboard for smallholder \
                              farms: location-based forecasts, sensor \
                              ingestion over MQTT, and season-over-season \
                              charts."
                    .to_owned(),
                image: "fieldnotes.png".to_owned(),
                tech: vec![
                    "React".to_owned(),
                    "MQTT".to_owned(),
                    "TimescaleDB".to_owned(),
                    "Grafana".to_owned(),
                ],
                repo_url: "https://github.com/irisnavarro/fieldnotes".to_owned(),
                live_url: "https://fieldnotes.irisnavarro.dev".to_owned(),
            },
        ],
        social: vec![
            SocialLink {
                label: "GitHub".to_owned(),
                url: "https://github.com/irisnavarro".to_owned(),
                icon: "github".to_owned(),
            },
            SocialLink {
                label: "LinkedIn".to_owned(),
                url: "https://www.linkedin.com/in/iris-navarro".to_owned(),
                icon: "linkedin".to_owned(),
            },
            SocialLink {
                label: "Email".to_owned(),
                url: "mailto:iris@irisnavarro.dev".to_owned(),
                icon: "mail".to_owned(),
            },
        ],
        contact: vec![
            ContactChannel {
                label: "Email".to_owned(),
                value: "iris@irisnavarro.dev".to_owned(),
                icon: "mail".to_owned(),
            },
            ContactChannel {
                label: "GitHub".to_owned(),
                value: "@irisnavarro".to_owned(),
                icon: "github".to_owned(),
            },
            ContactChannel {
                label: "LinkedIn".to_owned(),
                value: "Iris Navarro".to_owned(),
                icon: "linkedin".to_owned(),
            },
        ],
        contact_blurb: "I'm always happy to hear about interesting problems, \
                        especially ones with a performance angle. Let's build \
                        something together."
            .to_owned(),
        footer: "© 2026 Iris Navarro. Built with Rust and egui.".to_owned(),
    }
}

fn skill(name: &str, level: u8, icon: &str) -> Skill {
    Skill {
        name: name.to_owned(),
        level,
        icon: icon.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_passes_validation() {
        let content = builtin_content();
        assert!(content.validate().is_ok());
    }

    #[test]
    fn builtin_has_all_sections_populated() {
        let content = builtin_content();
        assert!(!content.skills.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.social.is_empty());
        assert!(!content.contact.is_empty());
        assert!(!content.about.is_empty());
    }

    #[test]
    fn builtin_levels_in_range() {
        for skill in builtin_content().skills {
            assert!(skill.level <= 100, "{} out of range", skill.name);
        }
    }
}
