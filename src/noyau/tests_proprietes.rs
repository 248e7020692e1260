//! Propriétés quantifiées de la session (proptest).
//!
//! Chaque propriété part d’une session neuve et ne passe que par la façade.

use proptest::prelude::*;

use super::eval::Issue;
use super::session::Session;

fn operateur() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["+", "-", "×", "÷"])
}

fn session(libelles: &[&str]) -> Session {
    let mut s = Session::new();
    for l in libelles {
        s.append(l);
    }
    s
}

proptest! {
    #[test]
    fn chiffres_recopies_tels_quels(d in "[1-9][0-9]{0,15}") {
        let mut s = Session::new();
        for c in d.chars() {
            s.append(c.encode_utf8(&mut [0u8; 4]));
        }
        prop_assert_eq!(s.buffer(), d.as_str());
    }

    #[test]
    fn operateur_apres_operateur(n in 1u32..1000, a in operateur(), b in operateur()) {
        let mut s = session(&[]);
        for c in n.to_string().chars() {
            s.append(c.encode_utf8(&mut [0u8; 4]));
        }
        s.append(a);
        let avant = s.buffer().to_string();
        s.append(b);

        // seul '-' après un opérateur autre que '-' est accepté
        if a == "-" && b != "-" {
            prop_assert_eq!(s.buffer(), format!("{avant}{b}"));
        } else {
            prop_assert_eq!(s.buffer(), avant);
        }
    }

    #[test]
    fn seconde_virgule_refusee(ent in "[1-9]{1,4}", frac in "[1-9]{0,4}") {
        let mut s = Session::new();
        for c in ent.chars() {
            s.append(c.encode_utf8(&mut [0u8; 4]));
        }
        s.append(",");
        for c in frac.chars() {
            s.append(c.encode_utf8(&mut [0u8; 4]));
        }
        let avant = s.buffer().to_string();
        s.append(",");
        prop_assert_eq!(s.buffer(), avant);
    }

    #[test]
    fn operateur_final_donne_zero(n in 1u32..100_000, op in operateur()) {
        let mut s = Session::new();
        for c in n.to_string().chars() {
            s.append(c.encode_utf8(&mut [0u8; 4]));
        }
        s.append(op);
        prop_assert_eq!(s.evaluate(), Issue::Succes("0".to_string()));
        prop_assert!(s.history().is_empty());
    }

    #[test]
    fn somme_entiere_exacte(a in 1u32..100_000, b in 1u32..100_000) {
        let mut s = Session::new();
        for c in format!("{a}+{b}").chars() {
            s.append(c.encode_utf8(&mut [0u8; 4]));
        }
        let attendu = (a + b).to_string();
        prop_assert_eq!(s.evaluate(), Issue::Succes(attendu.clone()));

        let h = s.history();
        prop_assert_eq!(h.len(), 1);
        prop_assert_eq!(&h[0].expression, &format!("{a}+{b}"));
        prop_assert_eq!(&h[0].resultat, &attendu);
    }

    #[test]
    fn historique_suit_les_succes(valeurs in prop::collection::vec(1u32..1000, 1..8)) {
        let mut s = Session::new();
        for v in &valeurs {
            s.clear();
            for c in v.to_string().chars() {
                s.append(c.encode_utf8(&mut [0u8; 4]));
            }
            s.evaluate();
        }

        let attendu: Vec<String> = valeurs.iter().rev().map(u32::to_string).collect();
        let vus: Vec<String> = s.history().into_iter().map(|e| e.resultat).collect();
        prop_assert_eq!(vus, attendu);

        s.clear_history();
        prop_assert!(s.history().is_empty());
    }

    #[test]
    fn clear_idempotent(d in "[1-9][0-9]{0,6}") {
        let mut s = Session::new();
        for c in d.chars() {
            s.append(c.encode_utf8(&mut [0u8; 4]));
        }
        s.evaluate();

        s.clear();
        let une_fois = (s.buffer().to_string(), s.resultat().to_string(), s.history());
        s.clear();
        prop_assert_eq!((s.buffer().to_string(), s.resultat().to_string(), s.history()), une_fois);
    }
}
