//! Session : l’unique état d’une calculatrice (tampon, modes, historique,
//! résultat affiché). Chaque méthode est une étape atomique déclenchée par
//! un événement de l’interface.
//!
//! Contrats :
//! - les touches de contrôle (= C Del RAD DEG INV) n’atteignent jamais le tampon
//! - `evaluate` ne modifie pas le tampon, réussite comme échec
//! - seule une évaluation réussie du moteur est inscrite à l’historique

use log::debug;

use super::eval::{evaluate_detaille, DemarcheNoyau, Issue};
use super::historique::{EntreeHistorique, Historique};
use super::mode::{JeuFonctions, ModeAngle, Modes};
use super::reglages::Reglages;
use super::tampon::Tampon;
use super::touche::{Controle, Touche};

#[derive(Clone, Debug, Default)]
pub struct Session {
    tampon: Tampon,
    modes: Modes,
    historique: Historique,

    // "" au départ, sinon la dernière issue affichée
    resultat: String,
    demarche: Option<DemarcheNoyau>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            modes: reglages.modes(),
            ..Self::default()
        }
    }

    /* ------------------------ Entrées ------------------------ */

    /// Touche désignée par son libellé. Libellé inconnu : ignoré.
    pub fn append(&mut self, libelle: &str) {
        match Touche::depuis_libelle(libelle) {
            Some(t) => self.press(t),
            None => debug!("libellé inconnu ignoré: {libelle:?}"),
        }
    }

    pub fn press(&mut self, touche: Touche) {
        match touche {
            Touche::Controle(Controle::Egal) => {
                self.evaluate();
            }
            Touche::Controle(Controle::Effacer) => self.clear(),
            Touche::Controle(Controle::Supprimer) => self.delete_last(),
            // la touche affiche l’unité courante : l’appuyer passe à l’autre
            Touche::Controle(Controle::Rad) => self.set_angle_mode(ModeAngle::Degres),
            Touche::Controle(Controle::Deg) => self.set_angle_mode(ModeAngle::Radians),
            Touche::Controle(Controle::Inv) => self.set_function_set(self.modes.jeu.bascule()),
            _ => {
                self.tampon.append(touche);
            }
        }
    }

    pub fn delete_last(&mut self) {
        self.tampon.delete_last();
    }

    /// Vide le tampon et le résultat en attente. L’historique reste.
    pub fn clear(&mut self) {
        self.tampon.clear();
        self.resultat.clear();
        self.demarche = None;
    }

    pub fn set_angle_mode(&mut self, angle: ModeAngle) {
        self.modes.angle = angle;
    }

    pub fn set_function_set(&mut self, jeu: JeuFonctions) {
        self.modes.jeu = jeu;
    }

    /* ------------------------ Évaluation ------------------------ */

    pub fn evaluate(&mut self) -> Issue {
        let (issue, demarche) = evaluate_detaille(self.tampon.as_str(), self.modes.angle);

        // court-circuit "0" : pas de démarche, pas d’historique
        if let (Issue::Succes(v), Some(_)) = (&issue, &demarche) {
            self.historique.record(self.tampon.as_str(), v.as_str());
        }

        self.resultat = issue.affichage();
        self.demarche = demarche;
        issue
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn buffer(&self) -> &str {
        self.tampon.as_str()
    }

    pub fn resultat(&self) -> &str {
        &self.resultat
    }

    pub fn modes(&self) -> Modes {
        self.modes
    }

    pub fn touches_scientifiques(&self) -> [&'static str; 15] {
        self.modes.touches_scientifiques()
    }

    pub fn demarche(&self) -> Option<&DemarcheNoyau> {
        self.demarche.as_ref()
    }

    pub fn historique(&self) -> &Historique {
        &self.historique
    }

    /// Entrées, la plus récente en tête.
    pub fn history(&self) -> Vec<EntreeHistorique> {
        self.historique.iter().cloned().collect()
    }

    pub fn clear_history(&mut self) {
        self.historique.clear();
    }
}
