// src/noyau/expr.rs
//
// AST numérique (f64) + évaluation.
// - Nombre : littéral (déjà arrondi une seule fois depuis son rationnel exact)
// - Pi, E  : constantes
// - Appel  : fonction unaire du moteur
//
// IMPORTANT :
// - toute valeur intermédiaire non finie est une erreur (pas d’Infinity silencieux)
// - les domaines (log, sqrt, asin, acos, factorial, cot) sont vérifiés avant calcul

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};

use super::erreur::ErreurMoteur;

/// Identifiant moteur de π.
pub const IDENT_PI: &str = "PI";
/// Identifiant moteur de la constante d’Euler.
pub const IDENT_E: &str = "E";

/// Au-delà, n! dépasse f64::MAX.
const FACTORIELLE_MAX: u32 = 170;

/// Fonctions unaires reconnues par le moteur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FnMoteur {
    Sin,
    Cos,
    Tan,
    Cot,
    Asin,
    Acos,
    Atan,
    Acot,
    Log10,
    Ln,
    Sqrt,
    Factorielle,
}

impl FnMoteur {
    pub const TOUTES: [FnMoteur; 12] = [
        FnMoteur::Sin,
        FnMoteur::Cos,
        FnMoteur::Tan,
        FnMoteur::Cot,
        FnMoteur::Asin,
        FnMoteur::Acos,
        FnMoteur::Atan,
        FnMoteur::Acot,
        FnMoteur::Log10,
        FnMoteur::Ln,
        FnMoteur::Sqrt,
        FnMoteur::Factorielle,
    ];

    /// Nom dans l’espace d’identifiants du moteur.
    pub fn nom(self) -> &'static str {
        match self {
            FnMoteur::Sin => "sin",
            FnMoteur::Cos => "cos",
            FnMoteur::Tan => "tan",
            FnMoteur::Cot => "cot",
            FnMoteur::Asin => "asin",
            FnMoteur::Acos => "acos",
            FnMoteur::Atan => "atan",
            FnMoteur::Acot => "acot",
            FnMoteur::Log10 => "log10",
            FnMoteur::Ln => "log",
            FnMoteur::Sqrt => "sqrt",
            FnMoteur::Factorielle => "factorial",
        }
    }

    pub fn depuis_nom(nom: &str) -> Option<FnMoteur> {
        FnMoteur::TOUTES.into_iter().find(|f| f.nom() == nom)
    }

    fn applique(self, x: f64) -> Result<f64, ErreurMoteur> {
        let hors_domaine = |f: FnMoteur| ErreurMoteur::Domaine {
            fonction: f.nom(),
            argument: x,
        };

        let v = match self {
            FnMoteur::Sin => x.sin(),
            FnMoteur::Cos => x.cos(),
            FnMoteur::Tan => x.tan(),
            FnMoteur::Cot => {
                let t = x.tan();
                if t == 0.0 {
                    return Err(hors_domaine(self));
                }
                1.0 / t
            }
            FnMoteur::Asin | FnMoteur::Acos if !(-1.0..=1.0).contains(&x) => {
                return Err(hors_domaine(self));
            }
            FnMoteur::Asin => x.asin(),
            FnMoteur::Acos => x.acos(),
            FnMoteur::Atan => x.atan(),
            // acot(0) = π/2 (limite de atan(1/x))
            FnMoteur::Acot if x == 0.0 => FRAC_PI_2,
            FnMoteur::Acot => (1.0 / x).atan(),
            FnMoteur::Log10 | FnMoteur::Ln if x <= 0.0 => return Err(hors_domaine(self)),
            FnMoteur::Log10 => x.log10(),
            FnMoteur::Ln => x.ln(),
            FnMoteur::Sqrt if x < 0.0 => return Err(hors_domaine(self)),
            FnMoteur::Sqrt => x.sqrt(),
            FnMoteur::Factorielle => factorielle(x)?,
        };
        fini(v)
    }
}

impl fmt::Display for FnMoteur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

/// n! exact (BigInt) puis un seul arrondi vers f64.
fn factorielle(x: f64) -> Result<f64, ErreurMoteur> {
    if x < 0.0 || x.fract() != 0.0 {
        return Err(ErreurMoteur::Domaine {
            fonction: FnMoteur::Factorielle.nom(),
            argument: x,
        });
    }
    if x > f64::from(FACTORIELLE_MAX) {
        return Err(ErreurMoteur::NonFini);
    }

    let n = x as u32;
    let mut acc = BigInt::one();
    for k in 2..=n {
        acc *= k;
    }
    acc.to_f64().ok_or(ErreurMoteur::NonFini)
}

fn fini(v: f64) -> Result<f64, ErreurMoteur> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurMoteur::NonFini)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),
    Pi,
    E,

    Neg(Box<Expr>),
    Appel(FnMoteur, Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évalue l’arbre. Échoue sur division par zéro, hors-domaine, non-fini.
    pub fn evalue(&self) -> Result<f64, ErreurMoteur> {
        use Expr::*;

        match self {
            Nombre(v) => fini(*v),
            Pi => Ok(PI),
            E => Ok(std::f64::consts::E),

            Neg(x) => Ok(-x.evalue()?),
            Appel(f, x) => f.applique(x.evalue()?),

            Add(a, b) => fini(a.evalue()? + b.evalue()?),
            Sub(a, b) => fini(a.evalue()? - b.evalue()?),
            Mul(a, b) => fini(a.evalue()? * b.evalue()?),
            Div(a, b) => {
                let num = a.evalue()?;
                let den = b.evalue()?;
                if den == 0.0 {
                    return Err(ErreurMoteur::DivisionParZero);
                }
                fini(num / den)
            }
            Pow(a, b) => fini(a.evalue()?.powf(b.evalue()?)),
        }
    }
}

impl fmt::Display for Expr {
    /// Forme entièrement parenthésée (démarche).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        match self {
            Nombre(v) => write!(f, "{v}"),
            Pi => f.write_str("π"),
            E => f.write_str("e"),
            Neg(x) => write!(f, "-({x})"),
            Appel(func, x) => write!(f, "{func}({x})"),
            Add(a, b) => write!(f, "({a} + {b})"),
            Sub(a, b) => write!(f, "({a} - {b})"),
            Mul(a, b) => write!(f, "({a} * {b})"),
            Div(a, b) => write!(f, "({a} / {b})"),
            Pow(a, b) => write!(f, "({a} ^ {b})"),
        }
    }
}
