//! Tampon de saisie : le texte en cours, construit touche par touche.
//!
//! Règles d’ajout (appliquées sur la fin du tampon) :
//! - opérateur binaire refusé si tampon vide, si la fin est `+ × ÷`,
//!   ou si la fin est `-` et que l’on ajoute `-`
//! - fonctions insérées avec leur `(`
//! - `0`, `00`, `,` : contrôlés sur la série numérique finale
//!   (ce qui suit le dernier opérateur)
//! - `%` : seulement si tout le tampon est un nombre simple ; le résultat
//!   est réécrit en décimal exact avec `,` (jamais de notation exposant)
//!
//! Une touche refusée ne change rien (pas d’erreur remontée).

use log::debug;
use num_bigint::{BigInt, Sign};

use super::touche::{Constante, Groupement, Operateur, Parenthese, Suffixe, Touche};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tampon {
    texte: String,
}

impl Tampon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.texte
    }

    pub fn is_empty(&self) -> bool {
        self.texte.is_empty()
    }

    /// Vrai si le dernier caractère est un opérateur binaire affiché.
    pub fn finit_par_operateur(&self) -> bool {
        self.texte
            .chars()
            .last()
            .and_then(Operateur::depuis_symbole)
            .is_some()
    }

    /// Série numérique finale : tout ce qui suit le dernier opérateur
    /// (ou le tampon entier s’il n’y en a pas).
    pub fn serie_finale(&self) -> &str {
        match self
            .texte
            .char_indices()
            .rev()
            .find(|(_, c)| Operateur::depuis_symbole(*c).is_some())
        {
            Some((i, c)) => &self.texte[i + c.len_utf8()..],
            None => &self.texte,
        }
    }

    /// Ajoute une touche. Retourne `true` si le tampon a changé.
    /// Les touches de contrôle ne concernent pas le tampon : toujours `false`.
    pub fn append(&mut self, touche: Touche) -> bool {
        let avant = self.texte.len();

        match touche {
            Touche::Operateur(op) => self.ajoute_operateur(op),
            Touche::Groupement(g) => self.ajoute_groupement(g),
            Touche::Chiffre(c) => self.texte.push(c),

            Touche::Fonction(f) => {
                self.texte.push_str(f.nom());
                self.texte.push('(');
            }
            Touche::FonctionInverse(t) => {
                self.texte.push_str(t.nom_inverse());
                self.texte.push('(');
            }

            Touche::Constante(Constante::Pi) => self.texte.push('π'),
            Touche::Constante(Constante::E) => self.texte.push('e'),

            Touche::Suffixe(s) => self.texte.push_str(match s {
                Suffixe::Puissance => "^",
                Suffixe::Factorielle => "!",
                Suffixe::DixPuissance => "10^",
                Suffixe::ExpPuissance => "e^",
                // x² n’est pas un appel de fonction
                Suffixe::Carre => "^2",
            }),

            Touche::Parenthese(Parenthese::Ouvrante) => self.texte.push('('),
            Touche::Parenthese(Parenthese::Fermante) => self.texte.push(')'),

            Touche::Pourcentage => return self.pourcentage(),

            Touche::Controle(_) => {}
        }

        let change = self.texte.len() != avant;
        if !change {
            debug!("touche sans effet: {} (tampon {:?})", touche.libelle(), self.texte);
        }
        change
    }

    fn ajoute_operateur(&mut self, op: Operateur) {
        let Some(fin) = self.texte.chars().last() else {
            return;
        };
        if matches!(fin, '+' | '×' | '÷') {
            return;
        }
        if op == Operateur::Moins && fin == '-' {
            return;
        }
        self.texte.push(op.symbole());
    }

    fn ajoute_groupement(&mut self, g: Groupement) {
        let serie = self.serie_finale();
        let accepte = match g {
            Groupement::Virgule => !serie.contains(','),
            Groupement::DoubleZero => !serie.is_empty() && serie != "0",
            // "0" seul refusé (pas de zéros de tête), mais "0," -> "0,0" accepté
            Groupement::Zero => serie != "0" || serie.contains(','),
        };
        if accepte {
            self.texte.push_str(match g {
                Groupement::Virgule => ",",
                Groupement::DoubleZero => "00",
                Groupement::Zero => "0",
            });
        }
    }

    /// Remplace un tampon « nombre simple » par sa valeur / 100.
    /// Sans effet sur une expression (ex: "5+10").
    fn pourcentage(&mut self) -> bool {
        let Some((mantisse, echelle)) = nombre_simple(&self.texte) else {
            debug!("% ignoré: {:?} n’est pas un nombre simple", self.texte);
            return false;
        };
        self.texte = ecrit_decimal(&mantisse, echelle + 2);
        true
    }

    /// Retire le dernier caractère ; sans effet si vide.
    pub fn delete_last(&mut self) {
        self.texte.pop();
    }

    pub fn clear(&mut self) {
        self.texte.clear();
    }
}

/// "12", "-3", "0,05", "7," -> (mantisse, échelle) avec valeur = mantisse / 10^échelle.
/// Tout le reste -> None.
fn nombre_simple(s: &str) -> Option<(BigInt, usize)> {
    let (negatif, corps) = match s.strip_prefix('-') {
        Some(reste) => (true, reste),
        None => (false, s),
    };
    let (ent, frac) = corps.split_once(',').unwrap_or((corps, ""));
    if ent.is_empty() && frac.is_empty() {
        return None;
    }
    if !ent.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let chiffres = format!("{ent}{frac}");
    let m = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    Some((if negatif { -m } else { m }, frac.len()))
}

/// mantisse / 10^échelle en décimal « tampon » : virgule, sans zéros
/// superflus, jamais d’exposant. (5, 8) -> "0,00000005".
fn ecrit_decimal(mantisse: &BigInt, echelle: usize) -> String {
    let chiffres = mantisse.magnitude().to_string();
    let chiffres = format!("{:0>largeur$}", chiffres, largeur = echelle + 1);
    let (ent, frac) = chiffres.split_at(chiffres.len() - echelle);
    let frac = frac.trim_end_matches('0');

    let mut out = String::new();
    if mantisse.sign() == Sign::Minus {
        out.push('-');
    }
    out.push_str(ent);
    if !frac.is_empty() {
        out.push(',');
        out.push_str(frac);
    }
    out
}
