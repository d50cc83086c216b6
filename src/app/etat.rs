//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la calculatrice du noyau et lui transmettre les commandes.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Calculatrice::executer`.
//! - L’affichage se relit à chaque frame (egui immédiat) : pas de rafraîchissement à déclencher.

use crate::noyau::{Calculatrice, Commande};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub calc: Calculatrice,
}

impl AppCalc {
    /// Jeton de bouton ("7", "sin", "x²", "equals"…). Jeton inconnu : ignoré.
    pub fn bouton(&mut self, jeton: &str) {
        match Commande::depuis_jeton(jeton) {
            Some(cmd) => self.calc.executer(cmd),
            None => tracing::warn!(jeton, "jeton de bouton inconnu"),
        }
    }

    /// Nom de touche clavier (style DOM). Touche non mappée : ignorée.
    pub fn touche(&mut self, touche: &str) {
        if let Some(cmd) = Commande::depuis_touche(touche) {
            self.calc.executer(cmd);
        }
    }
}
