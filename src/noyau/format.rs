// src/noyau/format.rs

/* ------------------------ Politique d'arrondi (affichage) ------------------------ */

/// Nombre max de décimales affichées avant arrondi.
const DECIMALES_MAX: usize = 8;

/// Arrondit pour l'affichage: si l'écriture décimale de `v` dépasse
/// 8 chiffres après le point, arrondit à exactement 8 décimales.
/// Sinon, renvoie la valeur telle quelle (on ne tronque pas une précision
/// légitime). Le but est d'absorber les artefacts flottants (0.1+0.2).
pub fn arrondi_affichage(v: f64) -> f64 {
    let texte = format!("{v}");
    match texte.split_once('.') {
        Some((_, frac)) if frac.len() > DECIMALES_MAX => {
            format!("{v:.prec$}", prec = DECIMALES_MAX).parse().unwrap_or(v)
        }
        _ => v,
    }
}

/// Rend un résultat en texte pour le visor.
/// f64 Display suffit: écriture décimale la plus courte qui re-parse
/// exactement ("14", "0.3", "-2.5").
pub fn format_resultat(v: f64) -> String {
    format!("{v}")
}
