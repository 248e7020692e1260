//! Historique de session : paires (expression saisie, résultat), la plus
//! récente en tête. Ajout en tête ou effacement total, rien d’autre.

use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    /// Tampon tel que saisi (avant réécriture).
    pub expression: String,
    pub resultat: String,
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
}

impl Historique {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, expression: impl Into<String>, resultat: impl Into<String>) {
        self.entrees.push_front(EntreeHistorique {
            expression: expression.into(),
            resultat: resultat.into(),
        });
    }

    pub fn clear(&mut self) {
        self.entrees.clear();
    }

    /// Du plus récent au plus ancien.
    pub fn iter(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plus_recente_en_tete() {
        let mut h = Historique::new();
        h.record("1+1", "2");
        h.record("2×3", "6");

        let v: Vec<_> = h.iter().map(|e| e.expression.as_str()).collect();
        assert_eq!(v, ["2×3", "1+1"]);
        assert_eq!(h.iter().next().map(|e| e.resultat.as_str()), Some("6"));
    }

    #[test]
    fn pas_de_deduplication() {
        let mut h = Historique::new();
        h.record("1+1", "2");
        h.record("1+1", "2");
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn effacement_puis_reprise() {
        let mut h = Historique::new();
        h.record("1+1", "2");
        h.clear();
        assert!(h.is_empty());
        h.record("3!", "6");
        assert_eq!(h.len(), 1);
    }
}
