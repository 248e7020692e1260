//! Noyau — évaluation (pipeline réel)
//!
//! tampon -> [court-circuit "0"] -> réécriture -> jetons -> RPN -> Expr -> f64 -> texte canonique
//!
//! Toute erreur du moteur devient `ErreurEvaluation::Generique` à la sortie ;
//! le détail part dans le journal.

use log::{debug, info};

use super::erreur::{ErreurEvaluation, ErreurMoteur};
use super::format::format_nombre;
use super::jetons::{format_tokens, tokenize};
use super::mode::ModeAngle;
use super::reecriture::reecrire;
use super::rpn::{from_rpn, to_rpn};
use super::touche::Operateur;

/// Résultat d’une évaluation : jamais partiellement rempli.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Issue {
    Succes(String),
    Echec(ErreurEvaluation),
}

impl Issue {
    /// Texte affiché sous la saisie ("Error" en cas d’échec).
    pub fn affichage(&self) -> String {
        match self {
            Issue::Succes(v) => v.clone(),
            Issue::Echec(e) => e.to_string(),
        }
    }

    pub fn is_succes(&self) -> bool {
        matches!(self, Issue::Succes(_))
    }
}

/// Trace d’une évaluation réussie (panneau « Démarche »).
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub reecrite: String,
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
}

/// Moteur : expression DÉJÀ réécrite -> valeur finie + démarche.
pub fn evaluer(expr: &str) -> Result<(f64, DemarcheNoyau), ErreurMoteur> {
    let s = expr.trim();
    if s.is_empty() {
        return Err(ErreurMoteur::Vide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) AST
    let arbre = from_rpn(&rpn)?;

    // 4) Valeur
    let v = arbre.evalue()?;

    let d = DemarcheNoyau {
        reecrite: s.to_string(),
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
        arbre: arbre.to_string(),
    };
    Ok((v, d))
}

/// Évalue une expression réécrite et la met sous forme canonique.
#[cfg(test)]
pub(crate) fn evaluate_reecrite(expr: &str) -> Issue {
    match evaluer(expr) {
        Ok((v, _)) => Issue::Succes(format_nombre(v)),
        Err(e) => {
            info!("évaluation échouée pour {expr:?}: {e}");
            Issue::Echec(e.into())
        }
    }
}

/// Vrai si la touche "=" doit répondre "0" sans évaluer :
/// tampon vide ou terminé par un opérateur binaire.
pub fn court_circuit(tampon: &str) -> bool {
    match tampon.chars().last() {
        None => true,
        Some(c) => Operateur::depuis_symbole(c).is_some(),
    }
}

/// Point d’entrée unique : tampon affiché + unité d’angle -> issue.
pub fn evaluate(tampon: &str, angle: ModeAngle) -> Issue {
    evaluate_detaille(tampon, angle).0
}

/// Comme `evaluate`, avec la démarche si le moteur a réussi.
/// `None` pour le court-circuit et pour les échecs.
pub fn evaluate_detaille(tampon: &str, angle: ModeAngle) -> (Issue, Option<DemarcheNoyau>) {
    if court_circuit(tampon) {
        return (Issue::Succes("0".to_string()), None);
    }

    let expr = reecrire(tampon, angle);
    debug!("expression réécrite: {expr} ({angle:?})");

    match evaluer(&expr) {
        Ok((v, d)) => (Issue::Succes(format_nombre(v)), Some(d)),
        Err(e) => {
            info!("évaluation échouée pour {tampon:?} -> {expr:?}: {e}");
            (Issue::Echec(e.into()), None)
        }
    }
}
