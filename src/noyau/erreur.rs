// src/noyau/erreur.rs
//
// Erreurs typées du noyau.
// Toutes se replient sur l’unique affichage "Error" (voir eval::evaluer) ;
// la cause n’existe que pour la journalisation et les tests.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ErreurCalc {
    #[error("Entrée vide")]
    ExpressionVide,

    #[error("caractère inattendu: '{c}' (position {pos})")]
    CaractereInattendu { c: char, pos: usize },

    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("identifiant inconnu: {0:?}")]
    IdentifiantInconnu(String),

    #[error("jeton inattendu: {0}")]
    JetonInattendu(String),

    #[error("fin d’expression inattendue")]
    FinInattendue,

    #[error("parenthèses non fermées")]
    ParentheseNonFermee,

    #[error("parenthèse fermante sans ouvrante")]
    ParentheseInattendue,

    #[error("imbrication trop profonde (max {0})")]
    TropProfond(usize),

    #[error("factorielle d’un non-entier: {0}")]
    FactorielleNonEntiere(f64),

    #[error("résultat non fini: {0}")]
    NonFini(f64),
}
