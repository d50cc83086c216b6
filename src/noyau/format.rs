// src/noyau/format.rs

/// Texte affiché pour tout échec d’évaluation.
pub const AFFICHAGE_ERREUR: &str = "Error";

/// Résultat -> texte décimal simple (jamais de notation scientifique, pas de ".0" final).
///
/// Le `Display` de f64 donne la plus courte écriture qui se relit à l’identique :
/// le texte produit, ré-évalué, redonne la même valeur.
pub fn format_resultat(v: f64) -> String {
    // -0 s’affiche "0"
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}
