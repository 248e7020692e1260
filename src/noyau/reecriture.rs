// src/noyau/reecriture.rs
//
// Réécriture : tampon affiché -> expression évaluable par le moteur.
// -----------------------------------------------------------------
// Pipeline ordonné d’étapes pures (texte -> texte). L’ordre est fixé par
// le tableau ETAPES :
//   1. glyphes (× ÷ ,)
//   2. trig directe (conversion degrés -> radians dans l’argument)
//   3. trig inverse (sin⁻¹ -> asin, conversion radians -> degrés devant l’appel)
//   4. logarithmes (log -> log10, PUIS ln -> log)
//   5. factorielle (<chiffres>! -> factorial(<chiffres>))
//   6. constantes (π -> PI, e -> E, '*' derrière une constante collée) :
//      après tous les noms de fonctions
//   7. racine (√( -> sqrt(, '*' devant si une constante précède)
//   8. parenthèses (ajout des ')' manquantes en fin)
//
// Aucune étape n’échoue : une expression mal formée est détectée par le moteur.

use log::trace;

use super::expr::{FnMoteur, IDENT_E, IDENT_PI};
use super::mode::ModeAngle;
use super::touche::{Fonction, FonctionTrig};

/// Une étape du pipeline.
#[derive(Clone, Copy)]
pub struct Etape {
    pub nom: &'static str,
    pub appliquer: fn(&str, ModeAngle) -> String,
}

pub const ETAPES: [Etape; 8] = [
    Etape {
        nom: "glyphes",
        appliquer: glyphes,
    },
    Etape {
        nom: "trig directe",
        appliquer: trig_directe,
    },
    Etape {
        nom: "trig inverse",
        appliquer: trig_inverse,
    },
    Etape {
        nom: "logarithmes",
        appliquer: logarithmes,
    },
    Etape {
        nom: "factorielle",
        appliquer: factorielle,
    },
    Etape {
        nom: "constantes",
        appliquer: constantes,
    },
    Etape {
        nom: "racine",
        appliquer: racine,
    },
    Etape {
        nom: "parenthèses",
        appliquer: equilibre_parentheses,
    },
];

/// Applique toutes les étapes, dans l’ordre.
pub fn reecrire(tampon: &str, angle: ModeAngle) -> String {
    ETAPES.iter().fold(tampon.to_string(), |acc, etape| {
        let s = (etape.appliquer)(&acc, angle);
        trace!("réécriture [{}] {:?} -> {:?}", etape.nom, acc, s);
        s
    })
}

/* ------------------------ Étapes ------------------------ */

pub fn glyphes(s: &str, _angle: ModeAngle) -> String {
    s.chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            ',' => '.',
            _ => c,
        })
        .collect()
}

pub fn trig_directe(s: &str, angle: ModeAngle) -> String {
    if angle == ModeAngle::Radians {
        return s.to_string();
    }
    let mut out = s.to_string();
    for t in FonctionTrig::TOUTES {
        let motif = format!("{}(", t.nom());
        let remplacement = format!("{}(({IDENT_PI}/180)*", t.nom());
        out = out.replace(&motif, &remplacement);
    }
    out
}

pub fn trig_inverse(s: &str, angle: ModeAngle) -> String {
    let mut out = s.to_string();
    for t in FonctionTrig::TOUTES {
        let motif = format!("{}(", t.nom_inverse());
        let remplacement = match angle {
            ModeAngle::Degres => format!("(180/{IDENT_PI})*{}(", t.nom_arc()),
            ModeAngle::Radians => format!("{}(", t.nom_arc()),
        };
        out = out.replace(&motif, &remplacement);
    }
    out
}

pub fn logarithmes(s: &str, _angle: ModeAngle) -> String {
    // log10 d’abord : le "log(" produit ensuite par ln ne doit pas être repris
    let log = format!("{}(", Fonction::Log.nom());
    let ln = format!("{}(", Fonction::Ln.nom());
    s.replace(&log, &format!("{}(", FnMoteur::Log10.nom()))
        .replace(&ln, &format!("{}(", FnMoteur::Ln.nom()))
}

/// `<chiffres>!` -> `factorial(<chiffres>)`. Un '!' sans chiffres juste avant
/// (ex: après ')') reste tel quel.
pub fn factorielle(s: &str, _angle: ModeAngle) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c != '!' {
            out.push(c);
            continue;
        }

        let debut = out
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(i, _)| i);

        match debut {
            Some(i) => {
                let chiffres = out.split_off(i);
                out.push_str(FnMoteur::Factorielle.nom());
                out.push('(');
                out.push_str(&chiffres);
                out.push(')');
            }
            None => out.push(c),
        }
    }
    out
}

/// Morceau d’un mot collé : "esin" -> [e, sin], "2π" -> [2, π], "log10" -> [log10].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Morceau<'a> {
    Nombre(&'a str),
    Nom(&'static str),
    Constante(&'static str),
}

fn dans_mot(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == 'π'
}

/// Découpe un mot en nombres, noms du moteur (le plus long d’abord) et
/// constantes. `None` si un reste n’est rien de tout cela (ex: "sec").
fn decoupe(mot: &str) -> Option<Vec<Morceau<'_>>> {
    let mut out = Vec::new();
    let mut reste = mot;

    while let Some(c) = reste.chars().next() {
        let (m, n) = if c == 'π' {
            (Morceau::Constante(IDENT_PI), c.len_utf8())
        } else if c.is_ascii_digit() || c == '.' {
            let n = reste
                .find(|c: char| !(c.is_ascii_digit() || c == '.'))
                .unwrap_or(reste.len());
            (Morceau::Nombre(&reste[..n]), n)
        } else if let Some(f) = FnMoteur::TOUTES
            .into_iter()
            .filter(|f| reste.starts_with(f.nom()))
            .max_by_key(|f| f.nom().len())
        {
            (Morceau::Nom(f.nom()), f.nom().len())
        } else if c == 'e' {
            (Morceau::Constante(IDENT_E), 1)
        } else {
            return None;
        };

        out.push(m);
        reste = &reste[n..];
    }
    Some(out)
}

/// π -> PI ; e -> E. Une constante collée à ce qui suit reçoit un '*'
/// ("πe" -> "PI*E", "esin(" -> "E*sin("). Les noms du moteur restent intacts ;
/// un mot indécoupable est recopié tel quel.
pub fn constantes(s: &str, _angle: ModeAngle) -> String {
    let mut out = String::with_capacity(s.len());
    let mut reste = s;

    while let Some(c) = reste.chars().next() {
        if !dans_mot(c) {
            out.push(c);
            reste = &reste[c.len_utf8()..];
            continue;
        }

        let n = reste.find(|c: char| !dans_mot(c)).unwrap_or(reste.len());
        let mot = &reste[..n];
        match decoupe(mot) {
            Some(morceaux) => {
                let mut apres_constante = false;
                for m in morceaux {
                    if apres_constante {
                        out.push('*');
                    }
                    match m {
                        Morceau::Nombre(t) => out.push_str(t),
                        Morceau::Nom(t) | Morceau::Constante(t) => out.push_str(t),
                    }
                    apres_constante = matches!(m, Morceau::Constante(_));
                }
            }
            None => out.push_str(mot),
        }
        reste = &reste[n..];
    }
    out
}

pub fn racine(s: &str, _angle: ModeAngle) -> String {
    let motif = format!("{}(", Fonction::Racine.nom());
    let appel = format!("{}(", FnMoteur::Sqrt.nom());

    let mut out = String::with_capacity(s.len());
    for (i, morceau) in s.split(motif.as_str()).enumerate() {
        if i > 0 {
            // "E√(" : sans '*', "Esqrt" serait un seul identifiant
            if out.chars().last().is_some_and(|c| c.is_ascii_alphabetic()) {
                out.push('*');
            }
            out.push_str(&appel);
        }
        out.push_str(morceau);
    }
    out
}

/// Ajoute en fin les ')' manquantes. N’insère jamais de '('.
pub fn equilibre_parentheses(s: &str, _angle: ModeAngle) -> String {
    let ouvertes = s.chars().filter(|&c| c == '(').count();
    let fermees = s.chars().filter(|&c| c == ')').count();

    let mut out = s.to_string();
    for _ in fermees..ouvertes {
        out.push(')');
    }
    out
}
