// src/app.rs
//
// Calculatrice scientifique — module App (racine)
// -----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App + raccourcis clavier globaux
//
// Clavier (pas de champ texte : tout passe par la session) :
// - Escape = C, Enter = "=", Backspace = Del
// - caractères tapés : classés en touches (Touche::depuis_caractere)

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use calculatrice_sci::noyau::touche::{Controle, Touche};
use eframe::egui;

/// Touches clavier lues pendant une frame, dans l’ordre de frappe.
fn touches_clavier(ctx: &egui::Context) -> Vec<Touche> {
    ctx.input(|i| {
        i.events
            .iter()
            .flat_map(|ev| match ev {
                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Escape => vec![Touche::Controle(Controle::Effacer)],
                    egui::Key::Enter => vec![Touche::Controle(Controle::Egal)],
                    egui::Key::Backspace => vec![Touche::Controle(Controle::Supprimer)],
                    _ => Vec::new(),
                },
                egui::Event::Text(t) => t.chars().filter_map(Touche::depuis_caractere).collect(),
                _ => Vec::new(),
            })
            .collect()
    })
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for touche in touches_clavier(ctx) {
            self.press(touche);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
