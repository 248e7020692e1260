// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// Objectifs :
// - Affichage : tampon en cours + résultat (ou "Error")
// - Pavé scientifique (dépend du jeu direct/inverse et de l’unité)
// - Pavé standard 4 colonnes
// - Historique repliable + bouton d’effacement
// - Démarche de la dernière évaluation (réécriture, jetons, RPN, arbre)

use calculatrice_sci::TOUCHES_STANDARD;
use eframe::egui;

use super::etat::AppCalc;

/// Colonnes du pavé scientifique (15 touches -> 3 rangées).
const COLONNES_SCI: usize = 5;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_barre(ui);
                ui.add_space(6.0);

                self.ui_affichage(ui);

                if self.afficher_historique {
                    ui.add_space(8.0);
                    self.ui_historique(ui);
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                if self.afficher_scientifique {
                    self.ui_pave_scientifique(ui);
                    ui.add_space(8.0);
                }
                self.ui_pave_standard(ui);

                ui.add_space(8.0);
                ui.separator();
                self.ui_demarche(ui);
            });
    }

    fn ui_barre(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let sci = if self.afficher_scientifique {
                "Standard"
            } else {
                "Scientifique"
            };
            if ui.button(sci).clicked() {
                self.bascule_scientifique();
            }
            if ui.button("Historique").clicked() {
                self.bascule_historique();
            }

            ui.separator();
            let modes = self.session.modes();
            ui.monospace(format!("{} · {:?}", modes.angle.libelle(), modes.jeu));
        });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    let tampon = self.session.buffer();
                    ui.label(egui::RichText::new(tampon).monospace().size(taille_police(tampon)));

                    let resultat = self.session.resultat();
                    if resultat == "Error" {
                        ui.colored_label(ui.visuals().error_fg_color, resultat);
                    } else {
                        ui.label(egui::RichText::new(resultat).monospace().size(22.0).weak());
                    }
                });
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label("Historique");
                if ui.button("Effacer").clicked() {
                    self.effacer_historique();
                }
            });

            egui::ScrollArea::vertical()
                .id_salt("historique")
                .max_height(160.0)
                .show(ui, |ui| {
                    if self.session.historique().is_empty() {
                        ui.weak("(vide)");
                    }
                    for e in self.session.historique().iter() {
                        ui.monospace(format!("{} = {}", e.expression, e.resultat));
                    }
                });
        });
    }

    fn ui_pave_scientifique(&mut self, ui: &mut egui::Ui) {
        let touches = self.session.touches_scientifiques();
        egui::Grid::new("pave_scientifique")
            .num_columns(COLONNES_SCI)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in touches.chunks(COLONNES_SCI) {
                    for libelle in rangee {
                        self.bouton(ui, libelle, [64.0, 32.0]);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_pave_standard(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_standard")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in TOUCHES_STANDARD.chunks(4) {
                    for libelle in rangee {
                        self.bouton(ui, libelle, [82.0, 48.0]);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| match self.session.demarche() {
                Some(d) => {
                    champ_demarche(ui, "Réécrite", "demarche_reecrite", &d.reecrite);
                    champ_demarche(ui, "Jetons", "demarche_jetons", &d.jetons);
                    champ_demarche(ui, "RPN", "demarche_rpn", &d.rpn);
                    champ_demarche(ui, "Arbre", "demarche_arbre", &d.arbre);
                }
                None => {
                    ui.weak("aucune évaluation");
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, taille: [f32; 2]) {
        let mut texte = egui::RichText::new(libelle).size(18.0);
        if matches!(libelle, "+" | "-" | "×" | "÷" | "=") {
            texte = texte.strong();
        }
        if ui.add_sized(taille, egui::Button::new(texte)).clicked() {
            self.appuyer(libelle);
        }
    }
}

/// Police plus petite quand la saisie s’allonge.
fn taille_police(texte: &str) -> f32 {
    match texte.chars().count() {
        0..=12 => 36.0,
        13..=20 => 28.0,
        _ => 20.0,
    }
}

fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
    ui.add_space(4.0);
    ui.label(format!("{titre} :"));
    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .show(ui, |ui| {
            ui.push_id(id, |ui| {
                ui.set_min_width(ui.available_width());
                ui.monospace(contenu);
            });
        });
}
