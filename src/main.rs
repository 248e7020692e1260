// src/main.rs
//
// Calculatrice scientifique — point d’entrée NATIF
// ------------------------------------------------
// - env_logger : filtre via RUST_LOG (ex: RUST_LOG=calculatrice_sci=debug)
// - eframe::run_native + NativeOptions
//
// Le noyau vit dans la bibliothèque (`calculatrice_sci::noyau`) ;
// ici : point d’entrée + coque egui seulement.

use eframe::egui;

mod app;

use app::AppCalc;

/// Titre de la fenêtre.
const TITRE_APP: &str = "Calculatrice scientifique";

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([360.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}
