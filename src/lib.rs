//! Calculatrice scientifique : noyau sans interface.
//!
//! L’interface (binaire `calculatrice_sci`, feature `gui`) ne consomme que
//! [`Session`].

pub mod noyau;

pub use noyau::{
    evaluate, DemarcheNoyau, EntreeHistorique, ErreurEvaluation, Issue, JeuFonctions, ModeAngle,
    Modes, Reglages, Session, Touche, TOUCHES_STANDARD,
};
