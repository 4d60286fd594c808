use egui::{Align2, CornerRadius, FontId, Margin, RichText, Stroke};
use folio_content::{ContactChannel, Hero, Project, SiteContent, Skill, SocialLink};
use folio_core::ThemeToken;

use crate::theme::{self, ThemeMode};

/// Vertical breathing room above and below each section.
const SECTION_PAD: f32 = 56.0;
const SKILL_COLS: usize = 3;
const PROJECT_COLS: usize = 2;
const MAX_TEXT_WIDTH: f32 = 720.0;

/// Map a content icon reference to a glyph the default fonts can draw.
/// Unknown references fall back to a generic link glyph.
fn icon_glyph(name: &str) -> &'static str {
    match name {
        "github" => "🐙",
        "linkedin" => "💼",
        "mail" => "✉",
        "code" => "💻",
        "gear" => "⚙",
        "chip" => "🔩",
        "database" => "🗄",
        "cloud" => "☁",
        "calendar" => "📅",
        "doc" => "📄",
        _ => "🔗",
    }
}

fn section_heading(ui: &mut egui::Ui, title: &str, mode: ThemeMode) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(title)
                .size(theme::FONT_DISPLAY)
                .strong()
                .color(theme::resolve(ThemeToken::Accent, mode)),
        );
    });
    ui.add_space(24.0);
}

fn card_frame(mode: ThemeMode) -> egui::Frame {
    egui::Frame::new()
        .fill(theme::resolve(ThemeToken::CardBackground, mode))
        .stroke(Stroke::new(1.0, theme::resolve(ThemeToken::CardBorder, mode)))
        .corner_radius(CornerRadius::same(10))
        .inner_margin(Margin::same(14))
}

fn link(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>, url: &str) {
    ui.add(egui::Hyperlink::from_label_and_url(text, url).open_in_new_tab(true));
}

// ── Hero ───────────────────────────────────────────────────────────────────

pub fn hero(ui: &mut egui::Ui, hero: &Hero, social: &[SocialLink], mode: ThemeMode) {
    ui.add_space(SECTION_PAD);
    ui.vertical_centered(|ui| {
        // Avatar disc: accent ring around a surface-colored disc with the
        // monogram in the middle.
        let (rect, _) = ui.allocate_exact_size(egui::vec2(96.0, 96.0), egui::Sense::hover());
        let painter = ui.painter();
        painter.circle_filled(rect.center(), 48.0, theme::resolve(ThemeToken::Accent, mode));
        painter.circle_filled(rect.center(), 44.0, theme::resolve(ThemeToken::Surface, mode));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            &hero.monogram,
            FontId::proportional(theme::FONT_DISPLAY),
            theme::resolve(ThemeToken::Accent, mode),
        );

        ui.add_space(18.0);
        ui.label(
            RichText::new(&hero.name)
                .size(theme::FONT_HERO)
                .strong()
                .color(theme::resolve(ThemeToken::TextPrimary, mode)),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new(&hero.headline)
                .size(theme::FONT_TITLE)
                .color(theme::resolve(ThemeToken::AccentAlt, mode)),
        );
        ui.add_space(10.0);
        ui.set_max_width(MAX_TEXT_WIDTH);
        ui.label(
            RichText::new(&hero.summary)
                .size(theme::FONT_EMPHASIS)
                .color(theme::resolve(ThemeToken::TextSecondary, mode)),
        );

        ui.add_space(20.0);
        ui.horizontal(|ui| {
            // Rough centering; button widths are not known up front.
            ui.add_space((ui.available_width() / 2.0 - 130.0).max(0.0));
            if !hero.booking_url.is_empty() && ui.button("📅 Book a call").clicked() {
                ui.ctx().open_url(egui::OpenUrl::new_tab(&hero.booking_url));
            }
            if !hero.resume_url.is_empty() && ui.button("📄 Resume").clicked() {
                ui.ctx().open_url(egui::OpenUrl::new_tab(&hero.resume_url));
            }
        });

        ui.add_space(14.0);
        ui.horizontal(|ui| {
            ui.add_space((ui.available_width() / 2.0 - 45.0 * social.len() as f32).max(0.0));
            for entry in social {
                link(
                    ui,
                    format!("{} {}", icon_glyph(&entry.icon), entry.label),
                    &entry.url,
                );
            }
        });
    });
    ui.add_space(SECTION_PAD);
}

// ── About ──────────────────────────────────────────────────────────────────

pub fn about(ui: &mut egui::Ui, text: &str, mode: ThemeMode) {
    ui.add_space(SECTION_PAD);
    section_heading(ui, "About Me", mode);
    ui.vertical_centered(|ui| {
        ui.set_max_width(MAX_TEXT_WIDTH);
        ui.label(
            RichText::new(text)
                .size(theme::FONT_EMPHASIS)
                .color(theme::resolve(ThemeToken::TextSecondary, mode)),
        );
    });
    ui.add_space(SECTION_PAD);
}

// ── Skills ─────────────────────────────────────────────────────────────────

/// `reveal_t` is the section's entrance-transition progress [0, 1]; the
/// proficiency bars fill from zero as it runs.
pub fn skills(ui: &mut egui::Ui, skills: &[Skill], reveal_t: f32, mode: ThemeMode) {
    ui.add_space(SECTION_PAD);
    section_heading(ui, "Skills & Expertise", mode);

    let spacing = ui.spacing().item_spacing.x;
    let cell_w =
        ((ui.available_width() - spacing * (SKILL_COLS - 1) as f32) / SKILL_COLS as f32).max(160.0);
    for row in skills.chunks(SKILL_COLS) {
        ui.horizontal(|ui| {
            for skill in row {
                card_frame(mode).show(ui, |ui| {
                    ui.set_width(cell_w - 30.0);
                    skill_card(ui, skill, reveal_t, mode);
                });
            }
        });
    }
    ui.add_space(SECTION_PAD);
}

fn skill_card(ui: &mut egui::Ui, skill: &Skill, reveal_t: f32, mode: ThemeMode) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(icon_glyph(&skill.icon))
                .size(theme::FONT_TITLE)
                .color(theme::resolve(ThemeToken::Accent, mode)),
        );
        ui.label(
            RichText::new(&skill.name)
                .size(theme::FONT_EMPHASIS)
                .strong()
                .color(theme::resolve(ThemeToken::TextPrimary, mode)),
        );
    });
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Proficiency")
                .size(theme::FONT_CAPTION)
                .color(theme::resolve(ThemeToken::TextMuted, mode)),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("{}%", skill.level))
                    .size(theme::FONT_CAPTION)
                    .color(theme::resolve(ThemeToken::TextMuted, mode)),
            );
        });
    });

    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), 6.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(
        rect,
        CornerRadius::same(3),
        theme::resolve(ThemeToken::BarTrack, mode),
    );
    let frac = reveal_t * (f32::from(skill.level) / 100.0);
    let mut fill = rect;
    fill.set_width(rect.width() * frac);
    painter.rect_filled(
        fill,
        CornerRadius::same(3),
        theme::resolve(ThemeToken::BarFill, mode),
    );
}

// ── Projects ───────────────────────────────────────────────────────────────

pub fn projects(ui: &mut egui::Ui, projects: &[Project], mode: ThemeMode) {
    ui.add_space(SECTION_PAD);
    section_heading(ui, "Featured Projects", mode);

    let spacing = ui.spacing().item_spacing.x;
    let cell_w = ((ui.available_width() - spacing * (PROJECT_COLS - 1) as f32)
        / PROJECT_COLS as f32)
        .max(240.0);
    for row in projects.chunks(PROJECT_COLS) {
        ui.horizontal(|ui| {
            for project in row {
                card_frame(mode).show(ui, |ui| {
                    ui.set_width(cell_w - 30.0);
                    project_card(ui, project, mode);
                });
            }
        });
    }
    ui.add_space(SECTION_PAD);
}

fn project_card(ui: &mut egui::Ui, project: &Project, mode: ThemeMode) {
    // Banner placeholder: asset hosting lives outside the app, so the
    // card draws a tinted band with the project's initial instead.
    let (banner, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), 84.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.rect_filled(
        banner,
        CornerRadius::same(6),
        theme::resolve(ThemeToken::TagBackground, mode),
    );
    let initial = project.title.chars().next().unwrap_or('•');
    painter.text(
        banner.center(),
        Align2::CENTER_CENTER,
        initial,
        FontId::proportional(theme::FONT_HERO),
        theme::resolve(ThemeToken::Accent, mode),
    );

    ui.add_space(8.0);
    ui.label(
        RichText::new(&project.title)
            .size(theme::FONT_TITLE)
            .strong()
            .color(theme::resolve(ThemeToken::TextPrimary, mode)),
    );
    ui.label(
        RichText::new(&project.description)
            .size(theme::FONT_BODY)
            .color(theme::resolve(ThemeToken::TextSecondary, mode)),
    );

    ui.add_space(6.0);
    ui.horizontal_wrapped(|ui| {
        for tag in &project.tech {
            egui::Frame::new()
                .fill(theme::resolve(ThemeToken::TagBackground, mode))
                .corner_radius(CornerRadius::same(8))
                .inner_margin(Margin::symmetric(8, 3))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(tag)
                            .size(theme::FONT_CAPTION)
                            .color(theme::resolve(ThemeToken::TagText, mode)),
                    );
                });
        }
    });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if !project.repo_url.is_empty() {
            link(ui, "💻 Code", &project.repo_url);
        }
        if !project.live_url.is_empty() {
            link(ui, "🔗 Live Demo", &project.live_url);
        }
    });
}

// ── Contact ────────────────────────────────────────────────────────────────

pub fn contact(ui: &mut egui::Ui, content: &SiteContent, mode: ThemeMode) {
    ui.add_space(SECTION_PAD);
    section_heading(ui, "Get In Touch", mode);

    if !content.contact_blurb.is_empty() {
        ui.vertical_centered(|ui| {
            ui.set_max_width(MAX_TEXT_WIDTH);
            ui.label(
                RichText::new(&content.contact_blurb)
                    .size(theme::FONT_EMPHASIS)
                    .color(theme::resolve(ThemeToken::TextSecondary, mode)),
            );
        });
        ui.add_space(20.0);
    }

    let spacing = ui.spacing().item_spacing.x;
    let cols = content.contact.len().max(1);
    let cell_w = ((ui.available_width() - spacing * (cols - 1) as f32) / cols as f32).max(150.0);
    ui.horizontal(|ui| {
        for channel in &content.contact {
            card_frame(mode).show(ui, |ui| {
                ui.set_width(cell_w - 30.0);
                contact_card(ui, channel, mode);
            });
        }
    });

    // "Let's talk" opens a mail composer for the first mail channel.
    if let Some(mail) = content.contact.iter().find(|c| c.icon == "mail") {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            if ui.button("✉ Let's Talk").clicked() {
                ui.ctx()
                    .open_url(egui::OpenUrl::new_tab(format!("mailto:{}", mail.value)));
            }
        });
    }
    ui.add_space(SECTION_PAD);
}

fn contact_card(ui: &mut egui::Ui, channel: &ContactChannel, mode: ThemeMode) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(icon_glyph(&channel.icon))
                .size(theme::FONT_DISPLAY)
                .color(theme::resolve(ThemeToken::Accent, mode)),
        );
        ui.label(
            RichText::new(&channel.label)
                .size(theme::FONT_EMPHASIS)
                .strong()
                .color(theme::resolve(ThemeToken::TextPrimary, mode)),
        );
        ui.label(
            RichText::new(&channel.value)
                .size(theme::FONT_BODY)
                .color(theme::resolve(ThemeToken::TextMuted, mode)),
        );
    });
}

// ── Footer ─────────────────────────────────────────────────────────────────

pub fn footer(ui: &mut egui::Ui, text: &str, mode: ThemeMode) {
    ui.add_space(12.0);
    ui.separator();
    ui.add_space(10.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(text)
                .size(theme::FONT_CAPTION)
                .color(theme::resolve(ThemeToken::TextMuted, mode)),
        );
    });
    ui.add_space(18.0);
}
