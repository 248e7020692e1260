//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler la session et le moteur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants du tampon vérifiés après CHAQUE touche
//! - toute issue est soit un nombre fini canonique, soit "Error"

use std::time::{Duration, Instant};

use super::erreur::ErreurEvaluation;
use super::eval::{evaluate_reecrite, Issue};
use super::mode::TOUCHES_STANDARD;
use super::session::Session;
use super::touche::Operateur;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn choisir<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.pick(items.len() as u32) as usize]
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Invariants ------------------------ */

fn est_operateur(c: char) -> bool {
    Operateur::depuis_symbole(c).is_some()
}

/// Jamais d’opérateur après `+ × ÷`, jamais `--`, jamais d’opérateur en tête.
fn check_operateurs(tampon: &str) {
    let chars: Vec<char> = tampon.chars().collect();
    if let Some(&c) = chars.first() {
        assert!(!est_operateur(c), "opérateur en tête: {tampon:?}");
    }
    for w in chars.windows(2) {
        let (a, b) = (w[0], w[1]);
        if est_operateur(b) {
            assert!(!matches!(a, '+' | '×' | '÷'), "opérateurs consécutifs: {tampon:?}");
            assert!(!(a == '-' && b == '-'), "'--' dans {tampon:?}");
        }
    }
}

/// Au plus un séparateur décimal par série numérique, et toujours `,`.
fn check_virgules(tampon: &str) {
    for serie in tampon.split(est_operateur) {
        let separateurs = serie.chars().filter(|&c| c == ',' || c == '.').count();
        assert!(
            separateurs <= 1,
            "deux séparateurs dans la série {serie:?} de {tampon:?}"
        );
        assert!(!serie.contains('.'), "'.' dans le tampon {tampon:?}");
    }
}

/// Une issue réussie est un nombre fini que Rust sait relire.
fn check_issue(issue: &Issue, contexte: &str) {
    match issue {
        Issue::Succes(v) => {
            let x: f64 = v
                .parse()
                .unwrap_or_else(|_| panic!("succès non numérique {v:?} ({contexte})"));
            assert!(x.is_finite(), "succès non fini {v:?} ({contexte})");
        }
        Issue::Echec(e) => assert_eq!(*e, ErreurEvaluation::Generique),
    }
}

/* ------------------------ Frappe aléatoire ------------------------ */

/// Frappe `n` touches au hasard ; retourne la session et le nombre d’évaluations.
fn frappe(seed: u64, n: usize, t0: Instant, max: Duration) -> (Session, usize) {
    let mut rng = Rng::new(seed);
    let mut s = Session::new();
    let mut evaluations = 0usize;

    for _ in 0..n {
        budget(t0, max);

        let sci = s.touches_scientifiques();
        let libelle = if rng.pick(3) == 0 {
            rng.choisir(&sci)
        } else {
            rng.choisir(&TOUCHES_STANDARD)
        };

        // "C" trop fréquent viderait tout : on le raréfie
        if libelle == "C" && rng.pick(4) != 0 {
            continue;
        }

        if libelle == "=" {
            let avant = s.buffer().to_string();
            let n_hist = s.history().len();

            let issue = s.evaluate();
            check_issue(&issue, &avant);

            assert_eq!(s.buffer(), avant, "= ne touche pas au tampon");
            assert_eq!(s.resultat(), issue.affichage());
            assert!(s.history().len() <= n_hist + 1);
            evaluations += 1;
        } else {
            s.append(libelle);
        }

        check_operateurs(s.buffer());
        check_virgules(s.buffer());
    }

    (s, evaluations)
}

/* ------------------------ Génération d’expressions réécrites (bornée) ------------------------ */

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "PI".to_string(),
        1 => "E".to_string(),
        2 => format!("{}.{}", rng.pick(100), rng.pick(10)),
        _ => format!("{}", rng.pick(20)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    const FONCTIONS: [&str; 11] = [
        "sin", "cos", "tan", "cot", "asin", "acos", "atan", "acot", "log10", "log", "sqrt",
    ];

    match rng.pick(9) {
        0 => gen_atom(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("{}^{}", gen_atom(rng), gen_atom(rng)),
        6 => format!("factorial({})", rng.pick(200)),
        7 => format!("-{}", gen_expr(rng, depth - 1)),
        _ => format!("{}({})", rng.choisir(&FONCTIONS), gen_expr(rng, depth - 1)),
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_frappe_aleatoire_invariants_du_tampon() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1500);

    let mut total = 0usize;
    for seed in [0xC0FFEE_u64, 0xBADC0DE, 0x5EED, 42] {
        let (_s, evaluations) = frappe(seed, 600, t0, max);
        total += evaluations;
    }

    // sinon le fuzz ne “balaye” pas l’évaluateur
    assert!(total > 20, "trop peu d’évaluations: {total}");
}

#[test]
fn fuzz_safe_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let (a, _) = frappe(0xFACADE, 400, t0, max);
    let (b, _) = frappe(0xFACADE, 400, t0, max);

    assert_eq!(a.buffer(), b.buffer());
    assert_eq!(a.resultat(), b.resultat());
    assert_eq!(a.history(), b.history());
}

#[test]
fn fuzz_safe_moteur_sorties_finies() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let issue = evaluate_reecrite(&expr);
        check_issue(&issue, &expr);

        if issue.is_succes() {
            seen_ok += 1;
        } else {
            seen_err += 1;
        }
    }

    // On veut voir un mix des deux.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("1/2", 800);
    let issue = evaluate_reecrite(&expr);
    budget(t0, max);

    // 800*(1/2) = 400
    assert_eq!(issue, Issue::Succes("400".into()));
}
