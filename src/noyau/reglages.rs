//! Réglages de démarrage d’une session.

use super::mode::{JeuFonctions, ModeAngle, Modes};

/// Valeurs initiales des modes. Par défaut : degrés, fonctions directes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reglages {
    pub angle: ModeAngle,
    pub jeu: JeuFonctions,
}

impl Reglages {
    pub fn avec_angle(mut self, angle: ModeAngle) -> Self {
        self.angle = angle;
        self
    }

    pub fn avec_jeu(mut self, jeu: JeuFonctions) -> Self {
        self.jeu = jeu;
        self
    }

    pub(crate) fn modes(&self) -> Modes {
        Modes {
            angle: self.angle,
            jeu: self.jeu,
        }
    }
}
