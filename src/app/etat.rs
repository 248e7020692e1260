//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la `Session` du noyau + les préférences d’affichage.
//! Aucune règle de calcul ici : tout passe par la façade `Session`.

use calculatrice_sci::noyau::touche::Touche;
use calculatrice_sci::{JeuFonctions, ModeAngle, Reglages, Session};

/// Unité d’angle au lancement.
const UNITE_DEFAUT: ModeAngle = ModeAngle::Degres;

/// Jeu de fonctions au lancement.
const JEU_DEFAUT: JeuFonctions = JeuFonctions::Direct;

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub session: Session,

    // --- UX ---
    pub afficher_scientifique: bool,
    pub afficher_historique: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            session: Session::avec_reglages(
                Reglages::default()
                    .avec_angle(UNITE_DEFAUT)
                    .avec_jeu(JEU_DEFAUT),
            ),
            afficher_scientifique: true,
            afficher_historique: false,
        }
    }
}

impl AppCalc {
    /// Une touche (bouton ou clavier) : déléguée telle quelle à la session.
    pub fn press(&mut self, touche: Touche) {
        self.session.press(touche);
    }

    /// Bouton du pavé, par libellé.
    pub fn appuyer(&mut self, libelle: &str) {
        self.session.append(libelle);
    }

    pub fn bascule_scientifique(&mut self) {
        self.afficher_scientifique = !self.afficher_scientifique;
    }

    pub fn bascule_historique(&mut self) {
        self.afficher_historique = !self.afficher_historique;
    }

    pub fn effacer_historique(&mut self) {
        self.session.clear_history();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boutons_relayes_a_la_session() {
        let mut app = AppCalc::default();
        for l in ["1", "2", "+", "3", "="] {
            app.appuyer(l);
        }
        assert_eq!(app.session.resultat(), "15");
        assert_eq!(app.session.history().len(), 1);

        app.effacer_historique();
        assert!(app.session.history().is_empty());
    }

    #[test]
    fn clavier_ascii() {
        let mut app = AppCalc::default();
        for c in "6*7=".chars() {
            if let Some(t) = Touche::depuis_caractere(c) {
                app.press(t);
            }
        }
        assert_eq!(app.session.buffer(), "6×7");
        assert_eq!(app.session.resultat(), "42");
    }

    #[test]
    fn modes_de_lancement() {
        let app = AppCalc::default();
        assert_eq!(app.session.modes().angle, UNITE_DEFAUT);
        assert_eq!(app.session.modes().jeu, JEU_DEFAUT);
        assert_eq!(app.session.touches_scientifiques()[14], "DEG");
    }

    #[test]
    fn bascules_d_affichage() {
        let mut app = AppCalc::default();
        assert!(app.afficher_scientifique);
        app.bascule_scientifique();
        app.bascule_historique();
        assert!(!app.afficher_scientifique);
        assert!(app.afficher_historique);
    }
}
