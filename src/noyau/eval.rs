//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> analyse (descente récursive) -> Expr -> évaluation (mode d’angle explicite)
//!        -> classement (NaN / ±∞ => Error) -> arrondi à 10 décimales
//!
//! Aucune exécution de texte : seule la grammaire arithmétique d’analyse.rs est acceptée.

use tracing::debug;

use super::analyse::analyser;
use super::erreur::ErreurCalc;
use super::expr::{Expr, Fonction, OpBinaire, OpUnaire};
use super::format::{format_resultat, AFFICHAGE_ERREUR};
use super::jetons::{format_tokens, tokenize};
use super::trig::{trig, ModeAngle};

/// Décimales conservées (efface le bruit binaire : 0.1+0.2 => 0.3).
pub const DECIMALES: i32 = 10;

/// Au-delà, n! dépasse f64 : on renvoie +∞ sans boucler.
pub const FACTORIELLE_MAX: f64 = 170.0;

/// Résultat d’évaluation : une valeur finie arrondie, ou l’unique marqueur d’erreur.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resultat {
    Valeur(f64),
    Erreur,
}

impl Resultat {
    pub fn valeur(self) -> Option<f64> {
        match self {
            Resultat::Valeur(v) => Some(v),
            Resultat::Erreur => None,
        }
    }

    pub fn est_erreur(self) -> bool {
        matches!(self, Resultat::Erreur)
    }

    /// Texte pour l’écran : nombre décimal ou "Error".
    pub fn affichage(self) -> String {
        match self {
            Resultat::Valeur(v) => format_resultat(v),
            Resultat::Erreur => AFFICHAGE_ERREUR.to_string(),
        }
    }
}

/// API publique : évalue une expression, sans jamais paniquer ni propager d’erreur.
pub fn evaluer(expr_str: &str, mode: ModeAngle) -> Resultat {
    match evaluer_detail(expr_str, mode) {
        Ok(v) => Resultat::Valeur(v),
        Err(e) => {
            debug!(expression = expr_str, cause = %e, "évaluation refusée");
            Resultat::Erreur
        }
    }
}

/// Comme `evaluer`, mais conserve la cause de l’échec.
pub fn evaluer_detail(expr_str: &str, mode: ModeAngle) -> Result<f64, ErreurCalc> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurCalc::ExpressionVide);
    }

    // 1) Jetons
    let jetons = tokenize(s)?;
    debug!(jetons = %format_tokens(&jetons), "jetons");

    // 2) Arbre
    let arbre = analyser(&jetons)?;
    debug!(arbre = %arbre, %mode, "arbre");

    // 3) Valeur brute
    let v = evaluer_expr(&arbre, mode)?;

    // 4) Classement
    if !v.is_finite() {
        return Err(ErreurCalc::NonFini(v));
    }

    // 5) Arrondi
    Ok(arrondir(v))
}

/// Parcours de l’arbre. NaN et ±∞ se propagent (classés par l’appelant) ;
/// seule la factorielle d’un non-entier échoue ici.
pub fn evaluer_expr(expr: &Expr, mode: ModeAngle) -> Result<f64, ErreurCalc> {
    let v = match expr {
        Expr::Lit(n) => *n,

        Expr::Unaire(OpUnaire::Neg, x) => -evaluer_expr(x, mode)?,
        Expr::Unaire(OpUnaire::Factorielle, x) => factorielle(evaluer_expr(x, mode)?)?,

        Expr::Binaire(op, a, b) => {
            let a = evaluer_expr(a, mode)?;
            let b = evaluer_expr(b, mode)?;
            match op {
                OpBinaire::Add => a + b,
                OpBinaire::Sub => a - b,
                OpBinaire::Mul => a * b,
                OpBinaire::Div => a / b,
                OpBinaire::Pow => a.powf(b),
            }
        }

        Expr::Appel(f, x) => appliquer(*f, evaluer_expr(x, mode)?, mode),
    };
    Ok(v)
}

fn appliquer(f: Fonction, x: f64, mode: ModeAngle) -> f64 {
    if let Some(y) = trig(f, x, mode) {
        return y;
    }
    match f {
        Fonction::Sqrt => x.sqrt(), // NaN si x < 0
        Fonction::Log => x.log10(),
        Fonction::Ln => x.ln(),
        // déjà traitées par trig()
        Fonction::Sin
        | Fonction::Cos
        | Fonction::Tan
        | Fonction::Asin
        | Fonction::Acos
        | Fonction::Atan => f64::NAN,
    }
}

/// n! pour n entier >= 0.
/// - n < 0        : NaN (=> Error)
/// - n non entier : erreur explicite (pas de troncature implicite)
/// - n > 170      : +∞ (=> Error), sans boucle
pub fn factorielle(n: f64) -> Result<f64, ErreurCalc> {
    if n.is_nan() || n < 0.0 {
        return Ok(f64::NAN);
    }
    if n.fract() != 0.0 {
        return Err(ErreurCalc::FactorielleNonEntiere(n));
    }
    if n > FACTORIELLE_MAX {
        return Ok(f64::INFINITY);
    }

    let mut acc = 1.0;
    let mut i = 2.0;
    while i <= n {
        acc *= i;
        i += 1.0;
    }
    Ok(acc)
}

/// Arrondi à DECIMALES. Si x·10^DECIMALES n’est plus fini (|x| énorme),
/// x n’a de toute façon plus de partie décimale : on le rend tel quel.
fn arrondir(x: f64) -> f64 {
    let echelle = 10f64.powi(DECIMALES);
    let s = x * echelle;
    if !s.is_finite() {
        return x;
    }
    let r = s.round() / echelle;
    if r == 0.0 {
        0.0 // pas de "-0"
    } else {
        r
    }
}
