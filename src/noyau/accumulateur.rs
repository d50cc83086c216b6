//! Accumulateur d’entrée : l’état complet de la calculatrice.
//!
//! Contrats :
//! - L’expression n’est jamais vide (défaut "0").
//! - Aucun état global : expression, historique et mode d’angle vivent ici,
//!   l’interface ne fait que lire `affichage()` / `historique()`.
//! - Une évaluation ne panique jamais : échec => "Error" à l’écran.

use tracing::{debug, trace};

use super::commande::{Commande, Saisie};
use super::eval::{evaluer, Resultat};
use super::format::AFFICHAGE_ERREUR;
use super::trig::ModeAngle;

/// Expression au démarrage et après effacement.
pub const EXPRESSION_DEFAUT: &str = "0";

#[derive(Clone, Debug)]
pub struct Calculatrice {
    expression: String,
    historique: String,
    mode: ModeAngle,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self {
            expression: EXPRESSION_DEFAUT.to_string(),
            historique: String::new(),
            mode: ModeAngle::default(),
        }
    }
}

impl Calculatrice {
    /* ------------------------ Lecture (affichage) ------------------------ */

    /// Expression en cours, ou résultat / "Error" après évaluation.
    pub fn affichage(&self) -> &str {
        &self.expression
    }

    /// Expression qui vient d’être évaluée ("" avant la première).
    pub fn historique(&self) -> &str {
        &self.historique
    }

    pub fn mode_angle(&self) -> ModeAngle {
        self.mode
    }

    /* ------------------------ Opérations ------------------------ */

    /// Ajoute une saisie.
    /// Sur "0" (ou "Error"), tout sauf le point décimal remplace l’affichage ;
    /// sinon on concatène.
    pub fn ajouter(&mut self, saisie: Saisie) {
        if self.expression == AFFICHAGE_ERREUR {
            self.expression = EXPRESSION_DEFAUT.to_string();
        }

        let texte = saisie.texte();
        if self.expression == EXPRESSION_DEFAUT && texte != "." {
            self.expression.clear();
        }
        self.expression.push_str(&texte);
    }

    /// Retire le dernier caractère ; jamais d’expression vide.
    pub fn supprimer(&mut self) {
        if self.expression == AFFICHAGE_ERREUR || self.expression.chars().count() <= 1 {
            self.expression = EXPRESSION_DEFAUT.to_string();
        } else {
            self.expression.pop();
        }
    }

    /// Remise à zéro : expression + historique.
    pub fn effacer(&mut self) {
        self.expression = EXPRESSION_DEFAUT.to_string();
        self.historique.clear();
    }

    /// DEG <-> RAD ; n’agit que sur les évaluations suivantes.
    pub fn basculer_mode_angle(&mut self) {
        self.mode = self.mode.bascule();
        debug!(mode = %self.mode, "mode d’angle");
    }

    /// Remplace l’expression par le résultat formaté (ou "Error").
    pub fn set_resultat(&mut self, resultat: Resultat) {
        self.expression = resultat.affichage();
    }

    /// "=" : historise l’expression, l’évalue, affiche le résultat.
    pub fn calculer(&mut self) -> Resultat {
        self.historique = self.expression.clone();
        let r = evaluer(&self.expression, self.mode);
        self.set_resultat(r);
        r
    }

    /// Point d’entrée unique de l’interface.
    pub fn executer(&mut self, commande: Commande) {
        trace!(?commande, "commande");
        match commande {
            Commande::Saisie(s) => self.ajouter(s),
            Commande::Effacer => self.effacer(),
            Commande::Supprimer => self.supprimer(),
            Commande::Egal => {
                let r = self.calculer();
                if r.est_erreur() {
                    debug!(expression = %self.historique, "= Error");
                } else {
                    debug!(expression = %self.historique, valeur = ?r.valeur(), "=");
                }
            }
            Commande::BasculerAngle => self.basculer_mode_angle(),
        }
    }
}
