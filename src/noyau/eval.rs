//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> réduction -> arrondi d'affichage
//!
//! Deux portes d'entrée:
//! - `eval_expression` : erreur détaillée (ErreurCalc), pour diagnostics/tests
//! - `calculer`        : contrat public pauvre, un nombre ou l'étiquette
//!   unique `Erreur`. La cause précise est journalisée AVANT le repli.

use super::erreur::{Erreur, ErreurCalc};
use super::format::arrondi_affichage;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// Pipeline complet, erreur détaillée.
/// L'arrondi d'affichage (8 décimales max) est déjà appliqué au résultat.
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurCalc> {
    let s = expr_str.trim();

    // 1) Jetons
    let jetons = tokenize(s)?;
    log::debug!("jetons: {}", format_tokens(&jetons));

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    log::debug!("rpn: {}", format_tokens(&rpn));

    // 3) Réduction
    let brut = eval_rpn(&rpn)?;

    // 4) Arrondi d'affichage
    Ok(arrondi_affichage(brut))
}

/// API publique : évalue une expression.
/// Toute défaillance, quelle que soit l'étape, se replie en `Erreur`.
pub fn calculer(expr_str: &str) -> Result<f64, Erreur> {
    eval_expression(expr_str).map_err(|e| {
        log::warn!("calcul échoué ({e}) pour l'entrée {expr_str:?}");
        Erreur::from(e)
    })
}
