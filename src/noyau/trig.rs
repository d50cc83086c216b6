// src/noyau/trig.rs
//
// Trigonométrie selon le mode d’angle
// -----------------------------------
// - sin/cos/tan : l’argument est converti en radians si mode = Degrés
// - asin/acos/atan : calcul en radians, résultat converti en degrés si mode = Degrés
// - Hors domaine (asin(2)…) : NaN, classé "Error" plus haut

use std::f64::consts::PI;
use std::fmt;

use super::expr::Fonction;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModeAngle {
    #[default]
    Degres,
    Radians,
}

impl ModeAngle {
    pub fn bascule(self) -> ModeAngle {
        match self {
            ModeAngle::Degres => ModeAngle::Radians,
            ModeAngle::Radians => ModeAngle::Degres,
        }
    }

    /// Étiquette du bouton de bascule.
    pub fn etiquette(self) -> &'static str {
        match self {
            ModeAngle::Degres => "DEG",
            ModeAngle::Radians => "RAD",
        }
    }
}

impl fmt::Display for ModeAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.etiquette())
    }
}

pub fn vers_radians(degres: f64) -> f64 {
    degres * (PI / 180.0)
}

pub fn vers_degres(radians: f64) -> f64 {
    radians * (180.0 / PI)
}

/// Applique une fonction trigonométrique (directe ou réciproque) en tenant compte du mode.
/// Retourne None si `f` n’est pas trigonométrique (sqrt, log, ln).
pub fn trig(f: Fonction, x: f64, mode: ModeAngle) -> Option<f64> {
    let entree = |v: f64| match mode {
        ModeAngle::Degres => vers_radians(v),
        ModeAngle::Radians => v,
    };
    let sortie = |v: f64| match mode {
        ModeAngle::Degres => vers_degres(v),
        ModeAngle::Radians => v,
    };

    let y = match f {
        Fonction::Sin => entree(x).sin(),
        Fonction::Cos => entree(x).cos(),
        Fonction::Tan => entree(x).tan(),
        Fonction::Asin => sortie(x.asin()),
        Fonction::Acos => sortie(x.acos()),
        Fonction::Atan => sortie(x.atan()),
        Fonction::Sqrt | Fonction::Log | Fonction::Ln => return None,
    };
    Some(y)
}
