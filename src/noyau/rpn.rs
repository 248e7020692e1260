// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Fonction(f) : toujours suivie de '(' ; sortie après la parenthèse fermante.
// - Moins unaire : opérateur préfixe Neg, plus fort que * et / mais plus faible que ^
//   (-2^2 = -4, 2*-3 = -6, 2^-1 = 0.5).
// - Plus unaire : ignoré.
// - ^ associatif à droite.

use num_traits::ToPrimitive;

use super::erreur::ErreurMoteur;
use super::expr::Expr;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg => 3,
        Tok::Caret => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Fonction(sin), LPar, Pi, Slash, Num(2), RPar]
///   rpn:    [Pi, Num(2), Slash, Fonction(sin)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurMoteur> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter les signes unaires.
    let mut prev_was_value = false;

    let mut it = tokens.iter().cloned().peekable();
    while let Some(tok) = it.next() {
        match tok {
            Tok::Num(_) | Tok::Pi | Tok::E => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Fonction(f) => {
                if it.peek() != Some(&Tok::LPar) {
                    return Err(ErreurMoteur::FonctionSansAppel(f.nom().to_string()));
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurMoteur::Parentheses),
                    }
                }

                // si une fonction est au sommet, elle sort avec son argument
                if matches!(ops.last(), Some(Tok::Fonction(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }

                prev_was_value = true;
            }

            Tok::Minus if !prev_was_value => {
                // préfixe : empilé sans rien dépiler
                ops.push(Tok::Neg);
            }

            Tok::Plus if !prev_was_value => {}

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                // dépile tant que:
                // - on n'est pas bloqué par '(' ou une fonction
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar | Tok::Fonction(_)) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(top) = ops.pop() {
                        out.push(top);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => return Err(ErreurMoteur::Syntaxe),
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurMoteur::Parentheses);
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurMoteur> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(r) => {
                let v = r
                    .to_f64()
                    .ok_or_else(|| ErreurMoteur::NombreInvalide(r.to_string()))?;
                st.push(Expr::Nombre(v));
            }
            Tok::Pi => st.push(Expr::Pi),
            Tok::E => st.push(Expr::E),

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurMoteur::Syntaxe)?;
                st.push(Expr::Neg(Box::new(x)));
            }

            Tok::Fonction(f) => {
                let x = st.pop().ok_or(ErreurMoteur::Syntaxe)?;
                st.push(Expr::Appel(f, Box::new(x)));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = Box::new(st.pop().ok_or(ErreurMoteur::Syntaxe)?);
                let a = Box::new(st.pop().ok_or(ErreurMoteur::Syntaxe)?);

                let e = match tok {
                    Tok::Plus => Expr::Add(a, b),
                    Tok::Minus => Expr::Sub(a, b),
                    Tok::Star => Expr::Mul(a, b),
                    Tok::Slash => Expr::Div(a, b),
                    _ => Expr::Pow(a, b),
                };
                st.push(e);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurMoteur::Parentheses),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(e), true) => Ok(e),
        _ => Err(ErreurMoteur::Syntaxe),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::jetons::{format_tokens, tokenize};

    fn rpn(s: &str) -> String {
        let t = tokenize(s).unwrap_or_else(|e| panic!("tokenize({s:?}): {e}"));
        let r = to_rpn(&t).unwrap_or_else(|e| panic!("to_rpn({s:?}): {e}"));
        format_tokens(&r)
    }

    fn valeur(s: &str) -> Result<f64, ErreurMoteur> {
        let t = tokenize(s)?;
        let r = to_rpn(&t)?;
        from_rpn(&r)?.evalue()
    }

    #[test]
    fn precedence_classique() {
        assert_eq!(rpn("1+2*3"), "1 2 3 * +");
        assert_eq!(rpn("(1+2)*3"), "1 2 + 3 *");
        assert_eq!(rpn("2^3^2"), "2 3 2 ^ ^");
        assert_eq!(rpn("sin(PI/2)"), "π 2 / sin");
    }

    #[test]
    fn moins_unaire() {
        assert_eq!(rpn("-2^2"), "2 2 ^ neg");
        assert_eq!(valeur("-2^2"), Ok(-4.0));
        assert_eq!(valeur("2*-3"), Ok(-6.0));
        assert_eq!(valeur("2^-1"), Ok(0.5));
        assert_eq!(valeur("5--3"), Ok(8.0));
        assert_eq!(valeur("(+3)"), Ok(3.0));
        assert_eq!(valeur("-(1+2)*2"), Ok(-6.0));
    }

    #[test]
    fn associativite_droite() {
        assert_eq!(valeur("2^3^2"), Ok(512.0));
        assert_eq!(valeur("8/2/2"), Ok(2.0));
        assert_eq!(valeur("8-2-2"), Ok(4.0));
    }

    #[test]
    fn parentheses_fautives() {
        let t = tokenize("(1+2").unwrap();
        assert_eq!(to_rpn(&t), Err(ErreurMoteur::Parentheses));
        let t = tokenize("1+2)").unwrap();
        assert_eq!(to_rpn(&t), Err(ErreurMoteur::Parentheses));
    }

    #[test]
    fn fonction_sans_appel() {
        let t = tokenize("sqrt+1").unwrap();
        assert_eq!(
            to_rpn(&t),
            Err(ErreurMoteur::FonctionSansAppel("sqrt".into()))
        );
    }

    #[test]
    fn expressions_incompletes() {
        assert_eq!(valeur("1+"), Err(ErreurMoteur::Syntaxe));
        assert_eq!(valeur("sin()"), Err(ErreurMoteur::Syntaxe));
        assert_eq!(valeur("()"), Err(ErreurMoteur::Syntaxe));
        assert_eq!(valeur("*2"), Err(ErreurMoteur::Syntaxe));
    }
}
