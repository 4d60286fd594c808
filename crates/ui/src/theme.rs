use folio_core::ThemeToken;

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Dark,
    Light,
}

pub fn resolve(token: ThemeToken, mode: ThemeMode) -> egui::Color32 {
    match mode {
        ThemeMode::Dark => resolve_dark(token),
        ThemeMode::Light => resolve_light(token),
    }
    .to_color32()
}

fn resolve_dark(token: ThemeToken) -> ResolvedColor {
    // Catppuccin Mocha base with a mauve/pink accent pair.
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(0x11, 0x11, 0x1b), // Crust
        Surface => ResolvedColor::rgb(0x18, 0x18, 0x25),    // Mantle
        Border => ResolvedColor::rgb(0x31, 0x32, 0x44),     // Surface0

        TextPrimary => ResolvedColor::rgb(0xcd, 0xd6, 0xf4), // Text
        TextSecondary => ResolvedColor::rgb(0xba, 0xc2, 0xde), // Subtext1
        TextMuted => ResolvedColor::rgb(0xa6, 0xad, 0xc8),   // Subtext0

        Accent => ResolvedColor::rgb(0xcb, 0xa6, 0xf7),    // Mauve
        AccentAlt => ResolvedColor::rgb(0xf5, 0xc2, 0xe7), // Pink

        NavBackground => ResolvedColor::rgb(0x18, 0x18, 0x25), // Mantle
        NavText => ResolvedColor::rgb(0xba, 0xc2, 0xde),       // Subtext1
        NavActive => ResolvedColor::rgb(0xcb, 0xa6, 0xf7),     // Mauve

        CardBackground => ResolvedColor::rgb(0x1e, 0x1e, 0x2e), // Base
        CardBorder => ResolvedColor::rgb(0x31, 0x32, 0x44),     // Surface0

        BarTrack => ResolvedColor::rgb(0x45, 0x47, 0x5a), // Surface1
        BarFill => ResolvedColor::rgb(0xcb, 0xa6, 0xf7),  // Mauve

        TagBackground => ResolvedColor::rgba(0xcb, 0xa6, 0xf7, 40),
        TagText => ResolvedColor::rgb(0xb4, 0xbe, 0xfe), // Lavender
    }
}

fn resolve_light(token: ThemeToken) -> ResolvedColor {
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(252, 252, 254),
        Surface => ResolvedColor::rgb(245, 245, 248),
        Border => ResolvedColor::rgb(214, 214, 224),

        TextPrimary => ResolvedColor::rgb(28, 28, 40),
        TextSecondary => ResolvedColor::rgb(82, 82, 102),
        TextMuted => ResolvedColor::rgb(116, 116, 130),

        Accent => ResolvedColor::rgb(124, 58, 205),
        AccentAlt => ResolvedColor::rgb(190, 50, 140),

        NavBackground => ResolvedColor::rgb(248, 248, 251),
        NavText => ResolvedColor::rgb(82, 82, 102),
        NavActive => ResolvedColor::rgb(124, 58, 205),

        CardBackground => ResolvedColor::rgb(255, 255, 255),
        CardBorder => ResolvedColor::rgb(222, 222, 232),

        BarTrack => ResolvedColor::rgb(228, 228, 236),
        BarFill => ResolvedColor::rgb(124, 58, 205),

        TagBackground => ResolvedColor::rgba(124, 58, 205, 28),
        TagText => ResolvedColor::rgb(96, 44, 165),
    }
}

// ── Typography scale ───────────────────────────────────────────────────────

pub const FONT_HERO: f32 = 38.0;
pub const FONT_DISPLAY: f32 = 28.0;
pub const FONT_TITLE: f32 = 19.0;
pub const FONT_EMPHASIS: f32 = 14.5;
pub const FONT_BODY: f32 = 13.0;
pub const FONT_CAPTION: f32 = 11.0;

// ── egui visual presets ────────────────────────────────────────────────────

/// Dark widget visuals matching the Mocha palette.
pub fn folio_dark_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::dark();
    v.panel_fill = egui::Color32::from_rgb(0x11, 0x11, 0x1b);
    v.window_fill = egui::Color32::from_rgb(0x1e, 0x1e, 0x2e);
    v.extreme_bg_color = egui::Color32::from_rgb(0x11, 0x11, 0x1b);
    v.faint_bg_color = egui::Color32::from_rgb(0x1e, 0x1e, 0x2e);
    v.widgets.noninteractive.bg_fill = egui::Color32::from_rgb(0x31, 0x32, 0x44);
    v.widgets.noninteractive.fg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(0xba, 0xc2, 0xde));
    v.widgets.noninteractive.bg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(0x31, 0x32, 0x44));
    v.widgets.inactive.bg_fill = egui::Color32::from_rgb(0x31, 0x32, 0x44);
    v.widgets.inactive.fg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(0xba, 0xc2, 0xde));
    v.widgets.hovered.bg_fill = egui::Color32::from_rgb(0x45, 0x47, 0x5a);
    v.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0xcd, 0xd6, 0xf4));
    v.widgets.active.bg_fill = egui::Color32::from_rgb(0xcb, 0xa6, 0xf7);
    v.widgets.active.fg_stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0x1e, 0x1e, 0x2e));
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(0xcb, 0xa6, 0xf7, 50);
    v.selection.stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(0xcb, 0xa6, 0xf7));
    v.hyperlink_color = egui::Color32::from_rgb(0xf5, 0xc2, 0xe7);
    v.warn_fg_color = egui::Color32::from_rgb(0xf9, 0xe2, 0xaf);
    v.error_fg_color = egui::Color32::from_rgb(0xf3, 0x8b, 0xa8);
    round_widgets(&mut v);
    v
}

/// Light widget visuals.
pub fn folio_light_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::light();
    v.panel_fill = egui::Color32::from_rgb(252, 252, 254);
    v.window_fill = egui::Color32::WHITE;
    v.faint_bg_color = egui::Color32::from_rgb(245, 245, 248);
    v.widgets.noninteractive.bg_fill = egui::Color32::from_rgb(240, 240, 245);
    v.widgets.noninteractive.fg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(82, 82, 102));
    v.widgets.noninteractive.bg_stroke =
        egui::Stroke::new(1.0, egui::Color32::from_rgb(214, 214, 224));
    v.widgets.inactive.bg_fill = egui::Color32::from_rgb(234, 234, 240);
    v.widgets.hovered.bg_fill = egui::Color32::from_rgb(224, 224, 233);
    v.widgets.active.bg_fill = egui::Color32::from_rgb(124, 58, 205);
    v.widgets.active.fg_stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);
    v.selection.bg_fill = egui::Color32::from_rgba_unmultiplied(124, 58, 205, 40);
    v.selection.stroke = egui::Stroke::new(1.0, egui::Color32::from_rgb(124, 58, 205));
    v.hyperlink_color = egui::Color32::from_rgb(190, 50, 140);
    v.warn_fg_color = egui::Color32::from_rgb(180, 130, 0);
    v.error_fg_color = egui::Color32::from_rgb(211, 47, 47);
    round_widgets(&mut v);
    v
}

fn round_widgets(v: &mut egui::Visuals) {
    let radius = egui::CornerRadius::same(6);
    v.window_corner_radius = radius;
    v.menu_corner_radius = radius;
    v.widgets.noninteractive.corner_radius = radius;
    v.widgets.inactive.corner_radius = radius;
    v.widgets.hovered.corner_radius = radius;
    v.widgets.active.corner_radius = radius;
    v.widgets.open.corner_radius = radius;
}

/// Apply the page's typography scale to egui styles.
pub fn apply_typography(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(FONT_TITLE),
    );
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(FONT_BODY));
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(FONT_BODY),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::proportional(FONT_CAPTION),
    );
    style.spacing.item_spacing = egui::vec2(10.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.interact_size.y = 26.0;
    ctx.set_style(style);
}
