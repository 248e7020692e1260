//! État des modes : unité d’angle + jeu de fonctions (direct / inverse).
//!
//! Lu par la réécriture au moment de l’évaluation, modifié uniquement
//! par les touches de bascule (RAD/DEG/INV) ou les setters explicites.

/// Unité des arguments (trig directe) et des résultats (trig inverse).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    /// Libellé de la touche de bascule : elle affiche l’unité COURANTE.
    pub fn libelle(self) -> &'static str {
        match self {
            ModeAngle::Degres => "DEG",
            ModeAngle::Radians => "RAD",
        }
    }

    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }
}

/// Jeu de fonctions proposé sur le pavé scientifique.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum JeuFonctions {
    #[default]
    Direct,
    Inverse,
}

impl JeuFonctions {
    pub fn bascule(self) -> Self {
        match self {
            JeuFonctions::Direct => JeuFonctions::Inverse,
            JeuFonctions::Inverse => JeuFonctions::Direct,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modes {
    pub angle: ModeAngle,
    pub jeu: JeuFonctions,
}

impl Modes {
    /// Touches du pavé scientifique, selon le jeu courant.
    /// La dernière touche est la bascule d’unité (libellé = unité courante).
    pub fn touches_scientifiques(&self) -> [&'static str; 15] {
        let unite = self.angle.libelle();
        match self.jeu {
            JeuFonctions::Direct => [
                "sin", "cos", "tan", "cot", "log", "ln", "(", ")", "^", "√", "!", "π", "e", "INV",
                unite,
            ],
            JeuFonctions::Inverse => [
                "sin⁻¹", "cos⁻¹", "tan⁻¹", "cot⁻¹", "10^", "e^", "(", ")", "^", "x²", "!", "π",
                "e", "INV", unite,
            ],
        }
    }
}

/// Pavé standard (ordre d’affichage, 4 colonnes).
pub const TOUCHES_STANDARD: [&str; 20] = [
    "C", "%", "Del", "÷", "7", "8", "9", "×", "4", "5", "6", "-", "1", "2", "3", "+", "00", "0",
    ",", "=",
];
