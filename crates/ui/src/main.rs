#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;

    // Optional argument: path to a content JSON file.
    let args: Vec<String> = std::env::args().collect();
    let content = match args.get(1) {
        Some(path) => {
            let data =
                std::fs::read(path).with_context(|| format!("reading content file {path}"))?;
            folio_content::SiteContent::from_json(&data)
                .with_context(|| format!("loading content from {path}"))?
        }
        None => folio_content::SiteContent::builtin(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_title("folio"),
        ..Default::default()
    };
    eframe::run_native(
        "folio",
        options,
        Box::new(move |cc| Ok(Box::new(folio_ui::FolioApp::with_content(cc, content)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build starts through the wasm-bindgen entry in lib.rs.
}
