use std::sync::{Arc, Mutex};

use eframe::egui;
use folio_content::{SectionId, SiteContent};
use folio_core::{Observation, Rect, SectionTracker, ThemeToken, visible_fraction};

use crate::sections;
use crate::theme::{self, ThemeMode};

/// Fraction of a section that must be on screen before it reveals and
/// takes over as the active nav entry.
const REVEAL_THRESHOLD: f32 = 0.3;
/// Entrance transition length in seconds.
const REVEAL_ANIM_SECS: f32 = 0.9;
/// Vertical slide distance of the entrance transition, in points.
const REVEAL_SLIDE: f32 = 28.0;

/// Main application state.
pub struct FolioApp {
    content: SiteContent,
    /// Per-section reveal flags and the active section. Mutated only by
    /// the per-frame observation batch at the end of `update`.
    tracker: SectionTracker,
    theme_mode: ThemeMode,
    /// Section the nav asked to scroll to; consumed on the next layout
    /// pass once that section's rect is known.
    scroll_target: Option<SectionId>,
    /// Content-load failure shown in the status strip.
    error: Option<String>,
    /// Pending content bytes from an async load (wasm fetch).
    pending_content: Arc<Mutex<Option<Vec<u8>>>>,
}

impl FolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_content(cc, SiteContent::builtin())
    }

    pub fn with_content(cc: &eframe::CreationContext<'_>, content: SiteContent) -> Self {
        cc.egui_ctx.set_visuals(theme::folio_dark_visuals());
        theme::apply_typography(&cc.egui_ctx);

        let pending_content: Arc<Mutex<Option<Vec<u8>>>> = Arc::new(Mutex::new(None));

        // On WASM, a #remote URL hash loads the hosted content file
        // instead of the compiled-in default.
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let hash = window.location().hash().unwrap_or_default();
                if hash == "#remote" {
                    let pending = pending_content.clone();
                    let ctx = cc.egui_ctx.clone();
                    web_sys::console::log_1(&"folio: fetching remote content...".into());
                    wasm_bindgen_futures::spawn_local(async move {
                        match fetch_bytes("/assets/content.json").await {
                            Ok(data) => {
                                web_sys::console::log_1(
                                    &format!("folio: fetched {} bytes", data.len()).into(),
                                );
                                if let Ok(mut lock) = pending.lock() {
                                    *lock = Some(data);
                                }
                                ctx.request_repaint();
                            }
                            Err(e) => {
                                web_sys::console::error_1(
                                    &format!("folio: content fetch error: {e}").into(),
                                );
                            }
                        }
                    });
                }
            }
        }

        Self {
            content,
            tracker: SectionTracker::new(REVEAL_THRESHOLD),
            theme_mode: ThemeMode::Dark,
            scroll_target: None,
            error: None,
            pending_content,
        }
    }

    fn load_content(&mut self, data: &[u8]) {
        match SiteContent::from_json(data) {
            Ok(content) => {
                self.content = content;
                self.error = None;
            }
            Err(e) => {
                // Keep rendering the previous content.
                self.error = Some(format!("Failed to load content: {e}"));
            }
        }
    }

    fn show_nav(&mut self, ctx: &egui::Context) {
        let mode = self.theme_mode;
        let frame = egui::Frame::new()
            .fill(theme::resolve(ThemeToken::NavBackground, mode))
            .inner_margin(egui::Margin::symmetric(14, 8));
        egui::TopBottomPanel::top("nav").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&self.content.hero.monogram)
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::resolve(ThemeToken::Accent, mode)),
                );
                ui.separator();

                let active = self.tracker.active();
                for section in SectionId::ALL {
                    let selected = active == section;
                    let text = egui::RichText::new(section.label());
                    let text = if selected {
                        text.strong().color(theme::resolve(ThemeToken::NavActive, mode))
                    } else {
                        text.color(theme::resolve(ThemeToken::NavText, mode))
                    };
                    if ui.selectable_label(selected, text).clicked() {
                        self.scroll_target = Some(section);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_label = match self.theme_mode {
                        ThemeMode::Dark => "🌙",
                        ThemeMode::Light => "☀",
                    };
                    if ui.button(theme_label).on_hover_text("Toggle theme").clicked() {
                        self.theme_mode = match self.theme_mode {
                            ThemeMode::Dark => {
                                ctx.set_visuals(theme::folio_light_visuals());
                                ThemeMode::Light
                            }
                            ThemeMode::Light => {
                                ctx.set_visuals(theme::folio_dark_visuals());
                                ThemeMode::Dark
                            }
                        };
                    }

                    #[cfg(not(target_arch = "wasm32"))]
                    {
                        if ui
                            .button("📂")
                            .on_hover_text("Load content JSON")
                            .clicked()
                        {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("Content", &["json"])
                                .pick_file()
                            {
                                match std::fs::read(&path) {
                                    Ok(data) => self.load_content(&data),
                                    Err(e) => {
                                        self.error = Some(format!("Failed to read file: {e}"));
                                    }
                                }
                            }
                        }
                    }
                });
            });
        });
    }

    /// Render one section, wire up the nav scroll request, and return the
    /// rect it occupied this frame (for the observation batch).
    fn show_section(&mut self, ui: &mut egui::Ui, section: SectionId) -> egui::Rect {
        let mode = self.theme_mode;
        let revealed = self.tracker.is_revealed(section);
        let t = ui.ctx().animate_bool_with_time(
            egui::Id::new(("section-reveal", section.as_str())),
            revealed,
            REVEAL_ANIM_SECS,
        );

        let inner = ui.scope(|ui| {
            // Fade + slide entrance, driven by the reveal flag.
            ui.set_opacity(t);
            ui.add_space((1.0 - t) * REVEAL_SLIDE);
            match section {
                SectionId::Home => {
                    sections::hero(ui, &self.content.hero, &self.content.social, mode);
                }
                SectionId::About => sections::about(ui, &self.content.about, mode),
                SectionId::Skills => sections::skills(ui, &self.content.skills, t, mode),
                SectionId::Projects => sections::projects(ui, &self.content.projects, mode),
                SectionId::Contact => sections::contact(ui, &self.content, mode),
            }
        });

        let rect = inner.response.rect;
        if self.scroll_target == Some(section) {
            self.scroll_target = None;
            ui.scroll_to_rect(rect, Some(egui::Align::TOP));
        }
        rect
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Async-loaded content ready?
        let pending = {
            let mut lock = self.pending_content.lock().unwrap_or_else(|e| e.into_inner());
            lock.take()
        };
        if let Some(data) = pending {
            self.load_content(&data);
        }

        // Dropped content file (bytes on web, a path natively).
        let dropped: Option<Vec<u8>> = ctx.input(|i| {
            i.raw.dropped_files.first().and_then(|file| {
                if let Some(bytes) = &file.bytes {
                    Some(bytes.to_vec())
                } else {
                    file.path.as_ref().and_then(|p| std::fs::read(p).ok())
                }
            })
        });
        if let Some(data) = dropped {
            self.load_content(&data);
        }

        self.show_nav(ctx);

        if let Some(err) = self.error.clone() {
            egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(ui.visuals().error_fg_color, err);
                    if ui.small_button("Dismiss").clicked() {
                        self.error = None;
                    }
                });
            });
        }

        let mode = self.theme_mode;
        let frame = egui::Frame::new().fill(theme::resolve(ThemeToken::Background, mode));
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let mut rects: Vec<(SectionId, egui::Rect)> = Vec::with_capacity(SectionId::COUNT);
            let output = egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    for section in SectionId::ALL {
                        let rect = self.show_section(ui, section);
                        rects.push((section, rect));
                    }
                    sections::footer(ui, &self.content.footer, mode);
                });

            // The single mutation entry point for tracker state: one
            // observation batch per frame, in page order.
            let viewport = core_rect(output.inner_rect);
            self.tracker.observe(rects.into_iter().map(|(section, rect)| Observation {
                section,
                fraction: visible_fraction(core_rect(rect), viewport),
            }));
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // No state mutation may happen after teardown.
        self.tracker.detach();
    }
}

fn core_rect(rect: egui::Rect) -> Rect {
    Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

#[cfg(target_arch = "wasm32")]
async fn fetch_bytes(url: &str) -> Result<Vec<u8>, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or("no window")?;
    let resp_value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: web_sys::Response = resp_value.dyn_into().map_err(|_| "not a Response")?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let uint8 = js_sys::Uint8Array::new(&buf);
    Ok(uint8.to_vec())
}
