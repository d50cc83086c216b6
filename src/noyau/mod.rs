//! Noyau calculatrice scientifique
//!
//! Organisation interne :
//! - jetons.rs       : tokenisation (nombres, opérateurs, π/e, fonctions)
//! - analyse.rs      : descente récursive -> Expr
//! - expr.rs         : AST typé (Lit / Unaire / Binaire / Appel)
//! - trig.rs         : mode d’angle + trig directe/réciproque
//! - eval.rs         : pipeline complet + classement + arrondi
//! - format.rs       : résultat -> texte affiché
//! - erreur.rs       : causes d’échec (toutes affichées "Error")
//! - commande.rs     : jetons bruts (boutons / clavier) -> commandes
//! - accumulateur.rs : état (expression, historique, mode) + opérations

pub mod accumulateur;
pub mod analyse;
pub mod commande;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use accumulateur::Calculatrice;
pub use commande::Commande;
