// src/noyau/commande.rs
//
// Jetons d’entrée (boutons + clavier) -> commandes typées.
// L’interface ne transmet que des jetons bruts ; le sens est décidé ici.

use super::expr::Fonction;

/// Ce qui s’ajoute à l’expression en cours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Saisie {
    /// 0-9 . + - * / ( ) ^ ! : ajoutés tels quels
    Caractere(char),
    /// "sin(" , "sqrt(" …
    Fonction(Fonction),
    /// x² : "^2"
    Carre,
    /// exp : "e" (exposant décimal collé au nombre)
    Exp,
    /// π : valeur décimale complète
    Pi,
    /// e : valeur décimale complète
    E,
}

impl Saisie {
    /// Texte réellement ajouté à l’expression.
    /// Les constantes sont figées en décimal au moment de l’ajout.
    pub fn texte(self) -> String {
        match self {
            Saisie::Caractere(c) => c.to_string(),
            Saisie::Fonction(f) => format!("{}(", f.nom()),
            Saisie::Carre => "^2".to_string(),
            Saisie::Exp => "e".to_string(),
            Saisie::Pi => std::f64::consts::PI.to_string(),
            Saisie::E => std::f64::consts::E.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    Saisie(Saisie),
    Effacer,
    Supprimer,
    Egal,
    BasculerAngle,
}

/// Caractères acceptés tels quels depuis un bouton.
const CARACTERES_BOUTON: &str = "0123456789.+-*/()^!";

/// Caractères acceptés tels quels depuis le clavier.
const CARACTERES_CLAVIER: &str = "0123456789.+-*/()";

impl Commande {
    /// Jeton de bouton -> commande.
    ///
    /// Jetons reconnus : `0-9 . + - * / ( ) ^ !`, `sin cos tan asin acos atan sqrt log ln`,
    /// `x² exp π e`, `clear delete equals toggle-angle-mode`.
    pub fn depuis_jeton(jeton: &str) -> Option<Commande> {
        if let Some(c) = caractere_seul(jeton, CARACTERES_BOUTON) {
            return Some(Commande::Saisie(Saisie::Caractere(c)));
        }
        if let Some(f) = Fonction::depuis_nom(jeton) {
            return Some(Commande::Saisie(Saisie::Fonction(f)));
        }

        let cmd = match jeton {
            "x²" => Commande::Saisie(Saisie::Carre),
            "exp" => Commande::Saisie(Saisie::Exp),
            "π" => Commande::Saisie(Saisie::Pi),
            "e" => Commande::Saisie(Saisie::E),
            "clear" => Commande::Effacer,
            "delete" => Commande::Supprimer,
            "equals" => Commande::Egal,
            "toggle-angle-mode" => Commande::BasculerAngle,
            _ => return None,
        };
        Some(cmd)
    }

    /// Nom de touche clavier (style DOM : "7", "+", "Enter", "Escape", "Backspace") -> commande.
    /// Toute autre touche est ignorée.
    pub fn depuis_touche(touche: &str) -> Option<Commande> {
        if let Some(c) = caractere_seul(touche, CARACTERES_CLAVIER) {
            return Some(Commande::Saisie(Saisie::Caractere(c)));
        }
        match touche {
            "Enter" | "=" => Some(Commande::Egal),
            "Escape" => Some(Commande::Effacer),
            "Backspace" => Some(Commande::Supprimer),
            _ => None,
        }
    }
}

/// Some(c) si `s` est exactement un caractère appartenant à `permis`.
fn caractere_seul(s: &str, permis: &str) -> Option<char> {
    let mut it = s.chars();
    match (it.next(), it.next()) {
        (Some(c), None) if permis.contains(c) => Some(c),
        _ => None,
    }
}
