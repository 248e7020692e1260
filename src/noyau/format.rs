// src/noyau/format.rs
//
// Forme canonique d’un résultat numérique (f64 -> texte).
// ------------------------------------------------------
// Même convention que Number.prototype.toString (ECMAScript) :
// - chiffres : la plus courte écriture qui relit le même f64
// - notation simple si l’exposant décimal n vérifie -6 < n <= 21
// - sinon notation exposant : 1.5e+21, 1e-7
// - -0 s’affiche "0"
//
// Non-finis rendus comme en JS ; l’évaluation les refuse avant.

/// Décompose |x| (fini, non nul) en (chiffres significatifs, n)
/// tels que |x| = 0.chiffres × 10^n.
fn chiffres_et_exposant(x: f64) -> (String, i32) {
    // `{:e}` donne déjà la plus courte écriture aller-retour : "1.2345e3"
    let sci = format!("{:e}", x.abs());
    let (mantisse, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    let chiffres: String = mantisse.chars().filter(|c| *c != '.').collect();
    (chiffres, exp + 1)
}

/// Texte canonique d’un nombre fini.
pub fn format_nombre(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let (chiffres, n) = chiffres_et_exposant(x);
    let k = chiffres.len() as i32;

    let corps = if k <= n && n <= 21 {
        // entier : on complète par des zéros
        let zeros = "0".repeat((n - k) as usize);
        format!("{chiffres}{zeros}")
    } else if 0 < n && n <= 21 {
        let (a, b) = chiffres.split_at(n as usize);
        format!("{a}.{b}")
    } else if -6 < n && n <= 0 {
        let zeros = "0".repeat((-n) as usize);
        format!("0.{zeros}{chiffres}")
    } else {
        let e = n - 1;
        let signe = if e < 0 { '-' } else { '+' };
        let (tete, reste) = chiffres.split_at(1);
        if reste.is_empty() {
            format!("{tete}e{signe}{}", e.abs())
        } else {
            format!("{tete}.{reste}e{signe}{}", e.abs())
        }
    };

    if x < 0.0 {
        format!("-{corps}")
    } else {
        corps
    }
}
