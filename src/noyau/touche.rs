//! Classification des touches (entrée UI -> catégorie fermée).
//!
//! Chaque libellé est résolu UNE fois à la frontière (`Touche::depuis_libelle`),
//! ensuite tout le noyau travaille par `match` sur la catégorie.

/// Opérateurs binaires affichés.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub const TOUS: [Operateur; 4] = [
        Operateur::Plus,
        Operateur::Moins,
        Operateur::Fois,
        Operateur::Divise,
    ];

    /// Glyphe tel qu’il apparaît dans le tampon.
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '×' => Some(Operateur::Fois),
            '÷' => Some(Operateur::Divise),
            _ => None,
        }
    }
}

/// sin / cos / tan / cot (directes ou inverses selon la catégorie).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FonctionTrig {
    Sin,
    Cos,
    Tan,
    Cot,
}

impl FonctionTrig {
    pub const TOUTES: [FonctionTrig; 4] = [
        FonctionTrig::Sin,
        FonctionTrig::Cos,
        FonctionTrig::Tan,
        FonctionTrig::Cot,
    ];

    pub fn nom(self) -> &'static str {
        match self {
            FonctionTrig::Sin => "sin",
            FonctionTrig::Cos => "cos",
            FonctionTrig::Tan => "tan",
            FonctionTrig::Cot => "cot",
        }
    }

    /// Symbole affiché pour la réciproque (ex: "sin⁻¹").
    pub fn nom_inverse(self) -> &'static str {
        match self {
            FonctionTrig::Sin => "sin⁻¹",
            FonctionTrig::Cos => "cos⁻¹",
            FonctionTrig::Tan => "tan⁻¹",
            FonctionTrig::Cot => "cot⁻¹",
        }
    }

    /// Identifiant moteur de la réciproque (ex: "asin").
    pub fn nom_arc(self) -> &'static str {
        match self {
            FonctionTrig::Sin => "asin",
            FonctionTrig::Cos => "acos",
            FonctionTrig::Tan => "atan",
            FonctionTrig::Cot => "acot",
        }
    }
}

/// Fonctions unaires directes (insérées avec une parenthèse ouvrante).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fonction {
    Trig(FonctionTrig),
    Log,
    Ln,
    Racine,
}

impl Fonction {
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Trig(t) => t.nom(),
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Racine => "√",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Constante {
    Pi,
    E,
}

/// Suffixes insérés tels quels (sauf x² -> "^2").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Suffixe {
    Puissance,
    Factorielle,
    DixPuissance,
    ExpPuissance,
    Carre,
}

/// Touches qui agissent sur la série numérique finale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Groupement {
    Zero,
    DoubleZero,
    Virgule,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parenthese {
    Ouvrante,
    Fermante,
}

/// Touches qui ne modifient jamais le tampon directement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Controle {
    Egal,
    Effacer,
    Supprimer,
    /// Libellé "RAD" : on est en radians, appuyer passe en degrés.
    Rad,
    /// Libellé "DEG" : on est en degrés, appuyer passe en radians.
    Deg,
    Inv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Touche {
    /// '1'..='9' ('0' est une touche de groupement).
    Chiffre(char),
    Groupement(Groupement),
    Operateur(Operateur),
    Fonction(Fonction),
    FonctionInverse(FonctionTrig),
    Constante(Constante),
    Suffixe(Suffixe),
    Parenthese(Parenthese),
    Pourcentage,
    Controle(Controle),
}

const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Touche {
    /// Résout un libellé de bouton. `None` si inconnu.
    pub fn depuis_libelle(libelle: &str) -> Option<Touche> {
        let t = match libelle {
            "0" => Touche::Groupement(Groupement::Zero),
            "00" => Touche::Groupement(Groupement::DoubleZero),
            "," => Touche::Groupement(Groupement::Virgule),

            "+" => Touche::Operateur(Operateur::Plus),
            "-" => Touche::Operateur(Operateur::Moins),
            "×" => Touche::Operateur(Operateur::Fois),
            "÷" => Touche::Operateur(Operateur::Divise),

            "sin" => Touche::Fonction(Fonction::Trig(FonctionTrig::Sin)),
            "cos" => Touche::Fonction(Fonction::Trig(FonctionTrig::Cos)),
            "tan" => Touche::Fonction(Fonction::Trig(FonctionTrig::Tan)),
            "cot" => Touche::Fonction(Fonction::Trig(FonctionTrig::Cot)),
            "log" => Touche::Fonction(Fonction::Log),
            "ln" => Touche::Fonction(Fonction::Ln),
            "√" => Touche::Fonction(Fonction::Racine),

            "sin⁻¹" => Touche::FonctionInverse(FonctionTrig::Sin),
            "cos⁻¹" => Touche::FonctionInverse(FonctionTrig::Cos),
            "tan⁻¹" => Touche::FonctionInverse(FonctionTrig::Tan),
            "cot⁻¹" => Touche::FonctionInverse(FonctionTrig::Cot),

            "π" => Touche::Constante(Constante::Pi),
            "e" => Touche::Constante(Constante::E),

            "^" => Touche::Suffixe(Suffixe::Puissance),
            "!" => Touche::Suffixe(Suffixe::Factorielle),
            "10^" => Touche::Suffixe(Suffixe::DixPuissance),
            "e^" => Touche::Suffixe(Suffixe::ExpPuissance),
            "x²" => Touche::Suffixe(Suffixe::Carre),

            "(" => Touche::Parenthese(Parenthese::Ouvrante),
            ")" => Touche::Parenthese(Parenthese::Fermante),

            "%" => Touche::Pourcentage,

            "=" => Touche::Controle(Controle::Egal),
            "C" => Touche::Controle(Controle::Effacer),
            "Del" => Touche::Controle(Controle::Supprimer),
            "RAD" => Touche::Controle(Controle::Rad),
            "DEG" => Touche::Controle(Controle::Deg),
            "INV" => Touche::Controle(Controle::Inv),

            _ => {
                let mut it = libelle.chars();
                match (it.next(), it.next()) {
                    (Some(c @ '1'..='9'), None) => Touche::Chiffre(c),
                    _ => return None,
                }
            }
        };
        Some(t)
    }

    /// Touche correspondant à un caractère tapé au clavier physique.
    /// Accepte les équivalents ASCII ('*', '/', '.').
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        match c {
            '*' => Some(Touche::Operateur(Operateur::Fois)),
            '/' => Some(Touche::Operateur(Operateur::Divise)),
            '.' => Some(Touche::Groupement(Groupement::Virgule)),
            '=' => Some(Touche::Controle(Controle::Egal)),
            _ => {
                let mut buf = [0u8; 4];
                Touche::depuis_libelle(c.encode_utf8(&mut buf))
            }
        }
    }

    /// Libellé affiché sur le bouton.
    pub fn libelle(&self) -> &'static str {
        match *self {
            Touche::Chiffre(c) => c
                .to_digit(10)
                .map(|d| CHIFFRES[d as usize])
                .unwrap_or(""),
            Touche::Groupement(Groupement::Zero) => "0",
            Touche::Groupement(Groupement::DoubleZero) => "00",
            Touche::Groupement(Groupement::Virgule) => ",",
            Touche::Operateur(Operateur::Plus) => "+",
            Touche::Operateur(Operateur::Moins) => "-",
            Touche::Operateur(Operateur::Fois) => "×",
            Touche::Operateur(Operateur::Divise) => "÷",
            Touche::Fonction(f) => f.nom(),
            Touche::FonctionInverse(t) => t.nom_inverse(),
            Touche::Constante(Constante::Pi) => "π",
            Touche::Constante(Constante::E) => "e",
            Touche::Suffixe(Suffixe::Puissance) => "^",
            Touche::Suffixe(Suffixe::Factorielle) => "!",
            Touche::Suffixe(Suffixe::DixPuissance) => "10^",
            Touche::Suffixe(Suffixe::ExpPuissance) => "e^",
            Touche::Suffixe(Suffixe::Carre) => "x²",
            Touche::Parenthese(Parenthese::Ouvrante) => "(",
            Touche::Parenthese(Parenthese::Fermante) => ")",
            Touche::Pourcentage => "%",
            Touche::Controle(Controle::Egal) => "=",
            Touche::Controle(Controle::Effacer) => "C",
            Touche::Controle(Controle::Supprimer) => "Del",
            Touche::Controle(Controle::Rad) => "RAD",
            Touche::Controle(Controle::Deg) => "DEG",
            Touche::Controle(Controle::Inv) => "INV",
        }
    }
}
