//! Erreurs du noyau.
//!
//! Deux niveaux :
//! - `ErreurMoteur` : détaillée, interne (journal + démarche).
//! - `ErreurEvaluation` : la seule erreur visible côté UI.

use thiserror::Error;

/// Erreur visible par l’utilisateur : un seul marqueur générique.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErreurEvaluation {
    #[error("Error")]
    Generique,
}

/// Échecs du moteur numérique (lexing, parsing, évaluation).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ErreurMoteur {
    #[error("expression vide")]
    Vide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("identifiant inconnu: {0}")]
    IdentifiantInconnu(String),

    #[error("parenthèses non équilibrées")]
    Parentheses,

    #[error("expression invalide")]
    Syntaxe,

    #[error("fonction sans appel: {0}")]
    FonctionSansAppel(String),

    #[error("division par zéro")]
    DivisionParZero,

    #[error("{fonction} : argument hors domaine ({argument})")]
    Domaine {
        fonction: &'static str,
        argument: f64,
    },

    #[error("résultat non fini")]
    NonFini,
}

impl From<ErreurMoteur> for ErreurEvaluation {
    fn from(_: ErreurMoteur) -> Self {
        ErreurEvaluation::Generique
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generique_affiche_error() {
        assert_eq!(ErreurEvaluation::Generique.to_string(), "Error");
    }

    #[test]
    fn toute_erreur_moteur_devient_generique() {
        let e: ErreurEvaluation = ErreurMoteur::DivisionParZero.into();
        assert_eq!(e, ErreurEvaluation::Generique);

        let e: ErreurEvaluation = ErreurMoteur::IdentifiantInconnu("x".into()).into();
        assert_eq!(e, ErreurEvaluation::Generique);
    }

    #[test]
    fn message_domaine() {
        let e = ErreurMoteur::Domaine {
            fonction: "sqrt",
            argument: -4.0,
        };
        assert_eq!(e.to_string(), "sqrt : argument hors domaine (-4)");
    }
}
