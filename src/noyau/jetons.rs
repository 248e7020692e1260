// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;

use super::erreur::ErreurMoteur;
use super::expr::{FnMoteur, IDENT_E, IDENT_PI};
use super::format::format_nombre;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),
    Pi,
    E,

    Fonction(FnMoteur),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    /// Moins unaire : produit seulement par `to_rpn`.
    Neg,

    LPar,
    RPar,
}

impl Tok {
    /// Peut terminer une valeur (nombre, constante, parenthèse fermante).
    fn finit_valeur(&self) -> bool {
        matches!(self, Tok::Num(_) | Tok::Pi | Tok::E | Tok::RPar)
    }

    /// Peut commencer une valeur (nombre, constante, fonction, parenthèse ouvrante).
    fn commence_valeur(&self) -> bool {
        matches!(
            self,
            Tok::Num(_) | Tok::Pi | Tok::E | Tok::Fonction(_) | Tok::LPar
        )
    }
}

/// Littéral décimal exact : "12", "12.5", "12.", ".5".
/// `None` si ce n’est pas un nombre simple.
pub fn parse_decimal(s: &str) -> Option<BigRational> {
    let (ent, frac) = s.split_once('.').unwrap_or((s, ""));
    if ent.is_empty() && frac.is_empty() {
        return None;
    }
    if !ent.chars().chain(frac.chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)?;
    let d = BigInt::from(10).pow(frac.len() as u32);
    Some(BigRational::new(n, d))
}

/// Tokenize une expression réécrite.
/// Supporte:
/// - nombres décimaux (ex: 12, 0.5, .5) -> Num exact
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - PI / pi / π, E / e
/// - fonctions du moteur (sin, log10, factorial, ...)
///
/// Les multiplications implicites ("2PI", ")(") sont rendues explicites.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurMoteur> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '^' => Some(Tok::Caret),
            'π' => Some(Tok::Pi),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]* (sensibles à la casse)
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();

            let t = if word == IDENT_PI || word == "pi" {
                Tok::Pi
            } else if word == IDENT_E || word == "e" {
                Tok::E
            } else {
                let f = FnMoteur::depuis_nom(&word).ok_or(ErreurMoteur::IdentifiantInconnu(word))?;
                Tok::Fonction(f)
            };
            out.push(t);
            continue;
        }

        // Nombre décimal
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            // "1.2.3" : un second séparateur colle au nombre
            if i < chars.len() && chars[i] == '.' {
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            let r = parse_decimal(&txt).ok_or(ErreurMoteur::NombreInvalide(txt))?;
            out.push(Tok::Num(r));
            continue;
        }

        return Err(ErreurMoteur::CaractereInattendu(c));
    }

    Ok(multiplications_implicites(out))
}

/// Insère '*' entre une valeur terminée et une valeur qui commence.
fn multiplications_implicites(tokens: Vec<Tok>) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    for t in tokens {
        if out.last().is_some_and(Tok::finit_valeur) && t.commence_valeur() {
            out.push(Tok::Star);
        }
        out.push(t);
    }
    out
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => r
                .to_f64()
                .map(format_nombre)
                .unwrap_or_else(|| format!("{}/{}", r.numer(), r.denom())),
            Tok::Pi => "π".to_string(),
            Tok::E => "e".to_string(),
            Tok::Fonction(f) => f.nom().to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
