//! Noyau de la calculatrice scientifique
//!
//! Organisation interne :
//! - touche.rs      : classification fermée des touches (libellé -> Touche)
//! - mode.rs        : unité d’angle + jeu de fonctions, pavés de touches
//! - reglages.rs    : valeurs de démarrage d’une session
//! - tampon.rs      : tampon de saisie + règles d’ajout
//! - reecriture.rs  : tampon affiché -> expression évaluable (étapes ordonnées)
//! - jetons.rs      : tokenisation (littéraux décimaux exacts)
//! - rpn.rs         : shunting-yard + construction Expr
//! - expr.rs        : AST + évaluation f64 (domaines, factorielle exacte)
//! - format.rs      : forme canonique d’un résultat
//! - eval.rs        : pipeline complet
//! - historique.rs  : paires (expression, résultat), la plus récente en tête
//! - session.rs     : façade unique consommée par l’interface
//! - erreur.rs      : erreurs (publique générique / interne détaillée)

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod mode;
pub mod reecriture;
pub mod reglages;
pub mod rpn;
pub mod session;
pub mod tampon;
pub mod touche;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEvaluation;
pub use eval::{evaluate, DemarcheNoyau, Issue};
pub use historique::EntreeHistorique;
pub use mode::{JeuFonctions, ModeAngle, Modes, TOUCHES_STANDARD};
pub use reglages::Reglages;
pub use session::Session;
pub use touche::Touche;
